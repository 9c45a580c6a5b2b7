//! Engine events.
//!
//! There is exactly one event in this system: an order was placed. The generic pub-sub plumbing
//! lives in `channel`; `order_placed` wires it up for that event.

mod channel;
mod order_placed;

pub use order_placed::{OrderPlacedEvent, OrderPlacedProducer, OrderPlacedSubscription};
