use std::sync::Arc;

use log::*;

use crate::{
    catalog::Catalog,
    offers::OfferBook,
    order_objects::{ItemTally, PricedItem, PricingResult},
};

/// Prices a tallied basket against the catalog and the promotions in effect.
pub struct PricingEngine {
    catalog: Arc<Catalog>,
    offers: Arc<OfferBook>,
}

impl PricingEngine {
    pub fn new(catalog: Arc<Catalog>, offers: Arc<OfferBook>) -> Self {
        Self { catalog, offers }
    }

    /// Price every catalog item in the tally. Names the catalog does not know are skipped: they
    /// cost nothing and produce no line.
    ///
    /// The total depends only on the tally's contents, never on the order items were submitted in.
    pub fn price(&self, tally: &ItemTally) -> PricingResult {
        let mut items = Vec::new();
        for (name, quantity) in tally.iter() {
            let Some(product) = self.catalog.product(name) else {
                debug!("🧺️ {name} is not in the catalog and will not be charged for");
                continue;
            };
            let charged_units = match self.offers.rule_for(name) {
                Some(rule) => rule.chargeable_units(quantity),
                None => quantity,
            };
            let cost = product.unit_price * i64::from(charged_units);
            trace!("🧺️ {quantity} x {name}: charging for {charged_units} unit(s), {cost}");
            items.push(PricedItem { name: name.to_string(), quantity, charged_units, cost });
        }
        let total = items.iter().map(|i| i.cost).sum();
        PricingResult { items, total }
    }
}

#[cfg(test)]
mod test {
    use gos_common::Money;

    use super::*;
    use crate::order_objects::Basket;

    fn pricer() -> PricingEngine {
        PricingEngine::new(Arc::new(Catalog::default()), Arc::new(OfferBook::default()))
    }

    fn tally_of(names: &[&str]) -> ItemTally {
        Basket::new(names.iter().map(|n| n.to_string()).collect()).tally()
    }

    #[test]
    fn prices_a_basket_with_one_offer() {
        // 1 orange + 3 apples: the third apple pairs with nothing, so two apples are charged.
        let result = pricer().price(&tally_of(&["orange", "apple", "apple", "apple"]));
        assert_eq!(result.total, Money::from_cents(145));
        assert_eq!(result.total.to_string(), "$1.45");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].charged_units, 1);
        assert_eq!(result.items[1].charged_units, 2);
    }

    #[test]
    fn prices_a_basket_with_both_offers() {
        // 3 oranges at three-for-two plus 2 apples at buy-one-get-one.
        let result = pricer().price(&tally_of(&["orange", "apple", "apple", "orange", "orange"]));
        assert_eq!(result.total, Money::from_cents(110));
        assert_eq!(result.total.to_string(), "$1.1");
    }

    #[test]
    fn total_is_independent_of_basket_order() {
        let forwards = pricer().price(&tally_of(&["orange", "apple", "apple", "orange", "orange"]));
        let backwards = pricer().price(&tally_of(&["apple", "orange", "orange", "apple", "orange"]));
        assert_eq!(forwards.total, backwards.total);
    }

    #[test]
    fn unknown_items_cost_nothing() {
        let without = pricer().price(&tally_of(&["orange", "apple", "apple", "orange", "orange"]));
        let with = pricer().price(&tally_of(&["orange", "apple", "apple", "orange", "orange", "cucumber"]));
        assert_eq!(with.total, without.total);
        assert_eq!(with.items.len(), 2);
    }

    #[test]
    fn empty_tally_prices_to_zero() {
        let result = pricer().price(&tally_of(&[]));
        assert!(result.items.is_empty());
        assert_eq!(result.total, Money::from_cents(0));
        assert_eq!(result.total.to_string(), "$0.0");
    }

    #[test]
    fn exact_groups_earn_exactly_the_free_units() {
        // 4 apples form two full pairs; 6 oranges form two full triples.
        let result = pricer().price(&tally_of(&["apple"; 4]));
        assert_eq!(result.items[0].charged_units, 2);
        let result = pricer().price(&tally_of(&["orange"; 6]));
        assert_eq!(result.items[0].charged_units, 4);
    }
}
