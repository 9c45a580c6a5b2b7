mod money;

pub use money::Money;
