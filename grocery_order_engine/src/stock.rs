use std::sync::Arc;

use log::*;

use crate::{
    catalog::Catalog,
    order_objects::{ItemTally, StockVerdict},
};

/// Answers whether the grocer can fulfil every line of a tallied basket.
pub struct StockChecker {
    catalog: Arc<Catalog>,
}

impl StockChecker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// One aggregate verdict for the whole basket, short-circuiting on the first shortfall. Names
    /// the catalog does not know are not counted against stock; pricing skips them for the same
    /// reason.
    pub fn has_sufficient_stock(&self, tally: &ItemTally) -> StockVerdict {
        for (name, quantity) in tally.iter() {
            if let Some(product) = self.catalog.product(name) {
                if quantity > product.in_stock {
                    debug!("🧺️ {quantity} x {name} requested, but only {} in stock", product.in_stock);
                    return StockVerdict::Insufficient;
                }
            }
        }
        StockVerdict::Sufficient
    }
}

#[cfg(test)]
mod test {
    use gos_common::Money;

    use super::*;
    use crate::{catalog::Product, order_objects::Basket};

    fn checker() -> StockChecker {
        StockChecker::new(Arc::new(Catalog::default()))
    }

    fn tally_of(names: &[&str]) -> ItemTally {
        Basket::new(names.iter().map(|n| n.to_string()).collect()).tally()
    }

    #[test]
    fn a_fulfillable_basket_is_sufficient() {
        let verdict = checker().has_sufficient_stock(&tally_of(&["orange", "apple", "apple", "orange", "orange"]));
        assert!(verdict.is_sufficient());
    }

    #[test]
    fn one_oversized_line_fails_the_whole_basket() {
        let mut names = vec!["orange"];
        names.extend(["apple"; 10]);
        let verdict = checker().has_sufficient_stock(&tally_of(&names));
        assert_eq!(verdict, StockVerdict::Insufficient);
    }

    #[test]
    fn unknown_items_are_not_counted_against_stock() {
        assert!(checker().has_sufficient_stock(&tally_of(&["cucumber", "cucumber"])).is_sufficient());
    }

    #[test]
    fn empty_tally_is_sufficient() {
        assert!(checker().has_sufficient_stock(&tally_of(&[])).is_sufficient());
    }

    #[test]
    fn quantity_equal_to_stock_is_sufficient() {
        let catalog = Catalog::new(vec![Product::new("pear", Money::from_cents(30), 2)]);
        let checker = StockChecker::new(Arc::new(catalog));
        assert!(checker.has_sufficient_stock(&tally_of(&["pear", "pear"])).is_sufficient());
    }
}
