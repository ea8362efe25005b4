use serde::{Deserialize, Serialize};

use crate::routers::{NetworkDescriptor, TokenDescriptor};

/// Executable quote lookup for selling a fixed amount of `sell_token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub network: NetworkDescriptor,
    pub sell_token: TokenDescriptor,
    pub buy_token: TokenDescriptor,
    /// Decimal amount of `sell_token` to sell
    pub amount: String,
}
