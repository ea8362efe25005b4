use serde::{Deserialize, Serialize};

use crate::routers::{NetworkDescriptor, TokenDescriptor};

/// Indicative price lookup for buying a fixed amount of `buy_token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    pub network: NetworkDescriptor,
    pub sell_token: TokenDescriptor,
    pub buy_token: TokenDescriptor,
    /// Decimal amount of `buy_token` to buy
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPrice {
    /// Decimal amount of sell token needed for the requested buy amount
    pub price: f64,
    /// Buy token to native currency rate, verbatim from the aggregator
    pub rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_request_from_camel_case_config() {
        let request: PriceRequest = serde_json::from_value(serde_json::json!({
            "network": { "id": 8453, "name": "Base" },
            "sellToken": {
                "address": "0x4200000000000000000000000000000000000006",
                "decimals": 18,
                "symbol": "WETH"
            },
            "buyToken": {
                "address": "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
                "decimals": 6,
                "symbol": "USDC"
            },
            "amount": "25.5"
        }))
        .unwrap();

        assert_eq!(request.network.id, 8453);
        assert_eq!(request.sell_token.decimals, 18);
        assert_eq!(request.buy_token.symbol, "USDC");
        assert_eq!(request.amount, "25.5");
    }

    #[test]
    fn test_negative_decimals_rejected_at_deserialization() {
        let token = serde_json::from_value::<TokenDescriptor>(serde_json::json!({
            "address": "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
            "decimals": -6,
            "symbol": "USDC"
        }));
        assert!(token.is_err());
    }
}
