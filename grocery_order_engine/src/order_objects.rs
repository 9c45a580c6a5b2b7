//! Request-scoped domain objects. Everything here is constructed fresh per request from the
//! incoming basket; nothing persists once the response has been composed.

use chrono::{DateTime, Utc};
use gos_common::Money;
use serde::{Deserialize, Serialize};

/// The list of item names submitted in one request, in submission order. A basket may be empty and
/// may contain names the catalog does not know.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Basket(Vec<String>);

impl Basket {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reduce the basket to per-item quantities. The tally is computed once per request and feeds
    /// both the stock check and the pricing engine, so the two can never disagree.
    pub fn tally(&self) -> ItemTally {
        let mut tally = ItemTally::default();
        for name in &self.0 {
            tally.add(name);
        }
        tally
    }
}

impl From<Vec<String>> for Basket {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

/// A basket reduced to per-item quantities. Items keep their first-occurrence order, which is also
/// the order the confirmation message lists them in. Quantities are at least 1 by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTally {
    counts: Vec<(String, u32)>,
}

impl ItemTally {
    fn add(&mut self, name: &str) {
        // Baskets are a handful of items; a linear scan beats a map here and keeps the order.
        match self.counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((name.to_string(), 1)),
        }
    }

    pub fn count(&self, name: &str) -> u32 {
        self.counts.iter().find(|(n, _)| n == name).map(|(_, c)| *c).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One catalog item's share of a priced basket: the requested quantity, the units actually charged
/// for after promotions, and the resulting line cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedItem {
    pub name: String,
    pub quantity: u32,
    pub charged_units: u32,
    pub cost: Money,
}

/// The outcome of pricing a tally: the chargeable lines (catalog items only, in tally order) and
/// their sum. Names the catalog does not know contribute nothing and have no line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    pub items: Vec<PricedItem>,
    pub total: Money,
}

/// Everything the notification channels need to know about a placed order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub customer_id: String,
    pub mail_address: String,
    pub items: Vec<PricedItem>,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

impl OrderSummary {
    pub fn new(customer_id: &str, mail_address: &str, priced: PricingResult) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            mail_address: mail_address.to_string(),
            items: priced.items,
            total: priced.total,
            created_at: Utc::now(),
        }
    }

    /// The order contents as the storefront prints them, e.g. `[{orange=3, apple=2}]`. Quantities
    /// are the requested ones, not the charged units.
    pub fn contents(&self) -> String {
        let entries = self.items.iter().map(|i| format!("{}={}", i.name, i.quantity)).collect::<Vec<_>>().join(", ");
        format!("[{{{entries}}}]")
    }
}

/// Aggregate stock verdict for a whole basket. No per-item detail; callers only branch on yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockVerdict {
    Sufficient,
    Insufficient,
}

impl StockVerdict {
    pub fn is_sufficient(self) -> bool {
        matches!(self, StockVerdict::Sufficient)
    }
}

/// Which notification channels accepted an order notification. `primary_status` is the mail relay's
/// status text, recorded verbatim; the customer-facing message does not depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationOutcome {
    pub primary_accepted: bool,
    pub primary_status: String,
    pub secondary_dispatched: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    fn basket(names: &[&str]) -> Basket {
        Basket::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn tally_counts_and_keeps_first_occurrence_order() {
        let tally = basket(&["orange", "apple", "apple", "orange", "orange", "cucumber"]).tally();
        assert_eq!(tally.count("orange"), 3);
        assert_eq!(tally.count("apple"), 2);
        assert_eq!(tally.count("cucumber"), 1);
        assert_eq!(tally.count("pear"), 0);
        let names = tally.iter().map(|(n, _)| n.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["orange", "apple", "cucumber"]);
    }

    #[test]
    fn empty_basket_tallies_to_nothing() {
        assert!(basket(&[]).tally().is_empty());
    }

    #[test]
    fn contents_render_as_a_bracketed_map() {
        let priced = PricingResult {
            items: vec![
                PricedItem { name: "orange".into(), quantity: 3, charged_units: 2, cost: Money::from_cents(50) },
                PricedItem { name: "apple".into(), quantity: 2, charged_units: 1, cost: Money::from_cents(60) },
            ],
            total: Money::from_cents(110),
        };
        let summary = OrderSummary::new("USER_ID", "my.address@gmail.com", priced);
        assert_eq!(summary.contents(), "[{orange=3, apple=2}]");
    }

    #[test]
    fn summary_serializes_for_the_stream() {
        let summary = OrderSummary::new("USER_ID", "my.address@gmail.com", PricingResult::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["customer_id"], "USER_ID");
        assert_eq!(json["mail_address"], "my.address@gmail.com");
        assert_eq!(json["total"], 0);
    }
}
