pub mod constants;
pub mod estimate;
pub mod swap;
pub mod zero_x;

use serde::{Deserialize, Serialize};

/// Network selected by the caller. `id` is the EVM chain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub address: String,
    /// Token precision, e.g. 6 for USDC and 18 for WETH
    pub decimals: u8,
    pub symbol: String,
}
