use error_stack::{ResultExt as _, report};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    error::{Error, EstimatorResult},
    routers::{TokenDescriptor, estimate::NormalizedPrice},
    utils::number_conversion::{decimal_string_to_f64, from_base_units},
};

// https://0x.org/docs/0x-swap-api/api-references/get-swap-v1-price#response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroXGetPriceResponse {
    pub sell_amount: String,
    pub buy_token_to_eth_rate: String,
    pub buy_amount: Option<String>,
    pub price: Option<String>,
    pub estimated_gas: Option<String>,
}

// https://0x.org/docs/0x-swap-api/api-references/get-swap-v1-quote#response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroXGetQuoteResponse {
    pub to: String,
    pub data: String,
    pub value: String,
    pub gas: String,
    pub gas_price: String,
    pub sell_amount: String,
    pub buy_amount: String,
    pub price: Option<String>,
    pub guaranteed_price: Option<String>,
    pub estimated_gas: Option<String>,
    pub protocol_fee: Option<String>,
    pub minimum_protocol_fee: Option<String>,
    pub allowance_target: Option<String>,
    pub buy_token_to_eth_rate: Option<String>,
    pub sell_token_to_eth_rate: Option<String>,
    #[serde(default)]
    pub sources: Vec<ZeroXSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroXSource {
    pub name: String,
    pub proportion: String,
}

/// Body 0x returns alongside 4xx statuses, and occasionally with a 200.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroXErrorResponse {
    pub code: Option<u64>,
    pub reason: String,
    #[serde(default)]
    pub validation_errors: Vec<Value>,
}

/// Executable quote as returned by 0x.
///
/// `quote` is a typed view over the fields this crate reads. `payload` is the body
/// exactly as received, and is what gets serialized, so settlement code downstream sees
/// every field 0x sent.
#[derive(Debug, Clone)]
pub struct RawQuote {
    pub quote: ZeroXGetQuoteResponse,
    pub payload: Value,
}

impl Serialize for RawQuote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

fn parse_response<T: DeserializeOwned>(body: &str) -> EstimatorResult<(T, Value)> {
    let payload: Value = serde_json::from_str(body)
        .change_context(Error::MalformedResponse("Body is not valid JSON".to_string()))?;

    match serde_json::from_value::<T>(payload.clone()) {
        Ok(response) => Ok((response, payload)),
        Err(e) => {
            let reason = match serde_json::from_value::<ZeroXErrorResponse>(payload.clone()) {
                Ok(error_response) => format!(
                    "0x error {}: {}",
                    error_response
                        .code
                        .map(|code| code.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    error_response.reason
                ),
                Err(_) => e.to_string(),
            };
            Err(report!(Error::MalformedResponse(reason)))
        }
    }
}

/// Normalizes a `/swap/v1/price` body.
///
/// `price` is the sell amount in decimal units of `sell_token`; `rate` is copied verbatim.
pub fn normalize_price(
    body: &str,
    sell_token: &TokenDescriptor,
) -> EstimatorResult<NormalizedPrice> {
    let (response, _) = parse_response::<ZeroXGetPriceResponse>(body)?;

    // A bad precision is the caller's fault and keeps its own error
    let sell_amount =
        from_base_units(&response.sell_amount, sell_token.decimals).map_err(|report| {
            if matches!(report.current_context(), Error::InvalidAmount(_)) {
                report.change_context(Error::MalformedResponse(format!(
                    "sellAmount is not a base unit integer: {}",
                    response.sell_amount
                )))
            } else {
                report
            }
        })?;

    let price = decimal_string_to_f64(&sell_amount)
        .change_context(Error::MalformedResponse("sellAmount out of range".to_string()))?;

    decimal_string_to_f64(&response.buy_token_to_eth_rate).change_context(
        Error::MalformedResponse(format!(
            "buyTokenToEthRate is not numeric: {}",
            response.buy_token_to_eth_rate
        )),
    )?;

    Ok(NormalizedPrice {
        price,
        rate: response.buy_token_to_eth_rate,
    })
}

/// Checks that a `/swap/v1/quote` body carries the fields settlement needs and passes it
/// through otherwise untouched.
pub fn normalize_quote(body: &str) -> EstimatorResult<RawQuote> {
    let (quote, payload) = parse_response::<ZeroXGetQuoteResponse>(body)?;
    Ok(RawQuote { quote, payload })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weth() -> TokenDescriptor {
        TokenDescriptor {
            address: "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".to_string(),
            decimals: 18,
            symbol: "WETH".to_string(),
        }
    }

    fn quote_body() -> Value {
        serde_json::json!({
            "chainId": 1,
            "price": "2500.1",
            "guaranteedPrice": "2475.099",
            "estimatedPriceImpact": "0.01",
            "to": "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
            "from": "0x0000000000000000000000000000000000000000",
            "data": "0x415565b0",
            "value": "0",
            "gas": "180000",
            "estimatedGas": "150000",
            "gasPrice": "25000000000",
            "protocolFee": "0",
            "minimumProtocolFee": "0",
            "buyTokenAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "sellTokenAddress": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "buyAmount": "2500100000",
            "sellAmount": "1000000000000000000",
            "sources": [
                { "name": "Uniswap_V3", "proportion": "0.8" },
                { "name": "Curve", "proportion": "0.2" }
            ],
            "orders": [],
            "allowanceTarget": "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
            "sellTokenToEthRate": "1",
            "buyTokenToEthRate": "2500.1",
            "fees": { "zeroExFee": null },
            "auxiliaryChainData": { "l1GasEstimate": 0 }
        })
    }

    #[test]
    fn test_normalize_price() {
        let body = r#"{"sellAmount":"50000000000000000000","buyTokenToEthRate":"0.0005"}"#;
        let price = normalize_price(body, &weth()).unwrap();
        assert_eq!(
            price,
            NormalizedPrice {
                price: 50.0,
                rate: "0.0005".to_string()
            }
        );
    }

    #[test]
    fn test_normalize_price_fractional() {
        let body = r#"{"sellAmount":"1500000000000000000","buyTokenToEthRate":"1234.56789","buyAmount":"1"}"#;
        let price = normalize_price(body, &weth()).unwrap();
        assert_eq!(price.price, 1.5);
        assert_eq!(price.rate, "1234.56789");
    }

    #[test]
    fn test_normalize_price_not_json() {
        let err = normalize_price("{not json", &weth()).unwrap_err();
        assert!(matches!(err.current_context(), Error::MalformedResponse(_)));
    }

    #[test]
    fn test_normalize_price_missing_fields() {
        for body in [
            r#"{}"#,
            r#"{"sellAmount":"1"}"#,
            r#"{"buyTokenToEthRate":"1"}"#,
            r#"[]"#,
            r#"null"#,
        ] {
            let err = normalize_price(body, &weth()).unwrap_err();
            assert!(
                matches!(err.current_context(), Error::MalformedResponse(_)),
                "{body}"
            );
        }
    }

    #[test]
    fn test_normalize_price_bad_numbers() {
        for body in [
            r#"{"sellAmount":"1.5","buyTokenToEthRate":"1"}"#,
            r#"{"sellAmount":"-1","buyTokenToEthRate":"1"}"#,
            r#"{"sellAmount":1000,"buyTokenToEthRate":"1"}"#,
            r#"{"sellAmount":"1000","buyTokenToEthRate":"abc"}"#,
        ] {
            let err = normalize_price(body, &weth()).unwrap_err();
            assert!(
                matches!(err.current_context(), Error::MalformedResponse(_)),
                "{body}"
            );
        }
    }

    #[test]
    fn test_normalize_price_error_payload() {
        let body = r#"{"code":100,"reason":"Validation Failed","validationErrors":[{"field":"buyAmount","code":1004,"reason":"INSUFFICIENT_ASSET_LIQUIDITY"}]}"#;
        let err = normalize_price(body, &weth()).unwrap_err();
        assert_eq!(
            err.current_context(),
            &Error::MalformedResponse("0x error 100: Validation Failed".to_string())
        );
    }

    #[test]
    fn test_normalize_price_invalid_decimals_is_caller_error() {
        let token = TokenDescriptor {
            decimals: 90,
            ..weth()
        };
        let body = r#"{"sellAmount":"1","buyTokenToEthRate":"1"}"#;
        let err = normalize_price(body, &token).unwrap_err();
        assert_eq!(err.current_context(), &Error::InvalidDecimals(90));
    }

    #[test]
    fn test_normalize_quote_passes_payload_through() {
        let body = quote_body();
        let quote = normalize_quote(&body.to_string()).unwrap();

        assert_eq!(quote.quote.to, "0xdef1c0ded9bec7f1a1670819833240f027b25eff");
        assert_eq!(quote.quote.data, "0x415565b0");
        assert_eq!(quote.quote.gas, "180000");
        assert_eq!(quote.quote.protocol_fee.as_deref(), Some("0"));
        assert_eq!(quote.quote.sources.len(), 2);
        assert_eq!(quote.payload, body);
        assert_eq!(serde_json::to_value(&quote).unwrap(), body);
    }

    #[test]
    fn test_normalize_quote_requires_settlement_fields() {
        for field in ["to", "data", "value", "gas", "gasPrice", "sellAmount", "buyAmount"] {
            let mut body = quote_body();
            body.as_object_mut().unwrap().remove(field);
            let err = normalize_quote(&body.to_string()).unwrap_err();
            assert!(
                matches!(err.current_context(), Error::MalformedResponse(_)),
                "missing {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_quote_not_json() {
        let err = normalize_quote("{not json").unwrap_err();
        assert!(matches!(err.current_context(), Error::MalformedResponse(_)));
    }
}
