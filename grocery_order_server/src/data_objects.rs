use gos_common::Money;
use serde::{Deserialize, Serialize};

/// Response body for the basket-pricing endpoint. The amount is pre-rendered with the storefront's
/// minimal-digit `$` formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostResponse {
    #[serde(rename = "totalCost")]
    pub total_cost: String,
}

impl CostResponse {
    pub fn new(total: Money) -> Self {
        Self { total_cost: total.to_string() }
    }
}

/// Query parameters for the order placement endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderParams {
    #[serde(rename = "mailAddress")]
    pub mail_address: String,
}
