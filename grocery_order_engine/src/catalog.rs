use std::collections::HashMap;

use gos_common::Money;
use serde::{Deserialize, Serialize};

/// A single line in the grocer's product list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub unit_price: Money,
    pub in_stock: u32,
}

impl Product {
    pub fn new<S: Into<String>>(name: S, unit_price: Money, in_stock: u32) -> Self {
        Self { name: name.into(), unit_price, in_stock }
    }
}

/// The grocer's product list, keyed by product name.
///
/// A catalog is built once at process start and shared read-only across requests. Stock counts are
/// a snapshot; replenishment is handled outside this service.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let products = products.into_iter().map(|p| (p.name.clone(), p)).collect();
        Self { products }
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    /// The product list the storefront launched with.
    fn default() -> Self {
        Self::new(vec![
            Product::new("orange", Money::from_cents(25), 12),
            Product::new("apple", Money::from_cents(60), 9),
        ])
    }
}
