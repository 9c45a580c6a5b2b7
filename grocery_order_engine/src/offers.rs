use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A "buy N, get F free" promotion on a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRule {
    pub group_size: u32,
    pub free_count: u32,
}

impl OfferRule {
    pub fn new(group_size: u32, free_count: u32) -> Self {
        Self { group_size, free_count }
    }

    /// The number of units the customer pays for once the promotion is applied. Only whole groups
    /// earn free units; a partial group is charged in full.
    pub fn chargeable_units(&self, quantity: u32) -> u32 {
        if self.group_size == 0 {
            return quantity;
        }
        quantity.saturating_sub(self.free_count.saturating_mul(quantity / self.group_size))
    }
}

/// The promotions in effect, keyed by product name. At most one rule applies per product.
///
/// Like the catalog, the offer book is built once at process start and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct OfferBook {
    rules: HashMap<String, OfferRule>,
}

impl OfferBook {
    pub fn new() -> Self {
        Self { rules: HashMap::new() }
    }

    pub fn add_rule<S: Into<String>>(&mut self, name: S, rule: OfferRule) -> &mut Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn rule_for(&self, name: &str) -> Option<&OfferRule> {
        self.rules.get(name)
    }
}

impl Default for OfferBook {
    /// The promotions the storefront launched with: apples are buy-one-get-one-free, oranges are
    /// three-for-the-price-of-two.
    fn default() -> Self {
        let mut book = Self::new();
        book.add_rule("apple", OfferRule::new(2, 1)).add_rule("orange", OfferRule::new(3, 1));
        book
    }
}
