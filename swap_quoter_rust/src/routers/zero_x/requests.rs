use error_stack::ResultExt as _;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::{Error, EstimatorResult},
    routers::{
        constants::{AffiliateFeeConfig, ZERO_X_PRICE_PATH, ZERO_X_QUOTE_PATH},
        estimate::PriceRequest,
        swap::QuoteRequest,
        zero_x::endpoints::resolve_endpoint,
    },
    utils::number_conversion::{to_base_units, validate_decimals},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Price,
    Quote,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestKind::Price => write!(f, "price"),
            RequestKind::Quote => write!(f, "quote"),
        }
    }
}

/// Fully qualified GET request against a 0x endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorRequest {
    pub kind: RequestKind,
    pub url: Url,
}

impl AggregatorRequest {
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// Query of `/swap/v1/price`. The amount is the buy side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroXGetPriceRequest {
    pub sell_token: String,
    pub buy_token: String,
    pub buy_amount: String,
    pub fee_recipient: String,
    pub buy_token_percentage_fee: String,
    pub fee_recipient_trade_surplus: String,
}

/// Query of `/swap/v1/quote`. The amount is the sell side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroXGetQuoteRequest {
    pub sell_token: String,
    pub buy_token: String,
    pub sell_amount: String,
    pub fee_recipient: String,
    pub buy_token_percentage_fee: String,
    pub fee_recipient_trade_surplus: String,
}

impl ZeroXGetPriceRequest {
    fn query_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("sellToken", self.sell_token.as_str()),
            ("buyToken", self.buy_token.as_str()),
            ("buyAmount", self.buy_amount.as_str()),
            ("feeRecipient", self.fee_recipient.as_str()),
            ("buyTokenPercentageFee", self.buy_token_percentage_fee.as_str()),
            ("feeRecipientTradeSurplus", self.fee_recipient_trade_surplus.as_str()),
        ]
    }
}

impl ZeroXGetQuoteRequest {
    fn query_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("sellToken", self.sell_token.as_str()),
            ("buyToken", self.buy_token.as_str()),
            ("sellAmount", self.sell_amount.as_str()),
            ("feeRecipient", self.fee_recipient.as_str()),
            ("buyTokenPercentageFee", self.buy_token_percentage_fee.as_str()),
            ("feeRecipientTradeSurplus", self.fee_recipient_trade_surplus.as_str()),
        ]
    }
}

/// Builds the price lookup for `request`. `Ok(None)` when the network has no 0x endpoint.
pub fn build_price_request(
    request: &PriceRequest,
    fee: &AffiliateFeeConfig,
) -> EstimatorResult<Option<AggregatorRequest>> {
    let Some(host) = resolve_endpoint(request.network.id) else {
        return Ok(None);
    };
    validate_decimals(request.sell_token.decimals)?;
    validate_decimals(request.buy_token.decimals)?;

    let query = ZeroXGetPriceRequest {
        sell_token: request.sell_token.address.clone(),
        buy_token: request.buy_token.address.clone(),
        buy_amount: to_base_units(&request.amount, request.buy_token.decimals)?,
        fee_recipient: fee.fee_recipient.clone(),
        buy_token_percentage_fee: fee.buy_token_percentage_fee.to_string(),
        fee_recipient_trade_surplus: fee.fee_recipient.clone(),
    };

    let url = build_url(host, ZERO_X_PRICE_PATH, &query.query_pairs())?;
    Ok(Some(AggregatorRequest {
        kind: RequestKind::Price,
        url,
    }))
}

/// Builds the executable quote lookup for `request`. `Ok(None)` when the network has
/// no 0x endpoint.
pub fn build_quote_request(
    request: &QuoteRequest,
    fee: &AffiliateFeeConfig,
) -> EstimatorResult<Option<AggregatorRequest>> {
    let Some(host) = resolve_endpoint(request.network.id) else {
        return Ok(None);
    };
    validate_decimals(request.sell_token.decimals)?;
    validate_decimals(request.buy_token.decimals)?;

    let query = ZeroXGetQuoteRequest {
        sell_token: request.sell_token.address.clone(),
        buy_token: request.buy_token.address.clone(),
        sell_amount: to_base_units(&request.amount, request.sell_token.decimals)?,
        fee_recipient: fee.fee_recipient.clone(),
        buy_token_percentage_fee: fee.buy_token_percentage_fee.to_string(),
        fee_recipient_trade_surplus: fee.fee_recipient.clone(),
    };

    let url = build_url(host, ZERO_X_QUOTE_PATH, &query.query_pairs())?;
    Ok(Some(AggregatorRequest {
        kind: RequestKind::Quote,
        url,
    }))
}

fn build_url(host: &str, path: &str, pairs: &[(&str, &str)]) -> EstimatorResult<Url> {
    let mut url = Url::parse(&format!("https://{host}{path}"))
        .change_context(Error::ParseError)
        .attach_printable_lazy(|| format!("Invalid 0x URL for host {host}"))?;
    url.query_pairs_mut().extend_pairs(pairs.iter().copied());
    Ok(url)
}
