use tracing::{error, info, warn};

use crate::{
    error::{EstimatorResult, ReportDisplayExt as _},
    routers::{
        constants::{AFFILIATE_FEE, AffiliateFeeConfig},
        estimate::{NormalizedPrice, PriceRequest},
        swap::QuoteRequest,
        zero_x::{
            requests::{build_price_request, build_quote_request},
            responses::{RawQuote, normalize_price, normalize_quote},
            transport::Transport,
        },
    },
    utils::number_conversion::from_base_units,
};

/// Why a lookup did or did not produce a value. Kept for diagnostics; the public
/// `fetch_*` calls collapse everything but `Available` to `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome<T> {
    Available(T),
    /// No 0x endpoint for the requested network
    Unsupported { chain_id: u32 },
    /// Transport returned no body
    Unavailable,
    /// Body present but unusable
    Invalid(String),
}

impl<T> QuoteOutcome<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            QuoteOutcome::Available(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, QuoteOutcome::Available(_))
    }
}

/// Price and quote lookups against 0x.
///
/// Unsupported networks, transport failures and malformed bodies come back as
/// `Ok(None)` with a log entry. Only a bad amount or token precision in the request is
/// returned as `Err`, since that is a bug in whoever built the request.
#[derive(Debug, Clone)]
pub struct QuoteService<T: Transport> {
    transport: T,
    fee: AffiliateFeeConfig,
}

impl<T: Transport> QuoteService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_fee_config(transport, AFFILIATE_FEE.clone())
    }

    pub fn with_fee_config(transport: T, fee: AffiliateFeeConfig) -> Self {
        Self { transport, fee }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_price(
        &self,
        request: &PriceRequest,
    ) -> EstimatorResult<Option<NormalizedPrice>> {
        Ok(self.lookup_price(request).await?.into_option())
    }

    pub async fn fetch_quote(&self, request: &QuoteRequest) -> EstimatorResult<Option<RawQuote>> {
        Ok(self.lookup_quote(request).await?.into_option())
    }

    pub async fn lookup_price(
        &self,
        request: &PriceRequest,
    ) -> EstimatorResult<QuoteOutcome<NormalizedPrice>> {
        let chain_id = request.network.id;
        let Some(aggregator_request) = build_price_request(request, &self.fee)? else {
            error!(chain_id, "Swaps are not supported on {}", request.network.name);
            return Ok(QuoteOutcome::Unsupported { chain_id });
        };

        let Some(body) = self.transport.send(&aggregator_request).await else {
            warn!(
                chain_id,
                sell_token = %request.sell_token.symbol,
                buy_token = %request.buy_token.symbol,
                "No 0x price available"
            );
            return Ok(QuoteOutcome::Unavailable);
        };

        match normalize_price(&body, &request.sell_token) {
            Ok(price) => {
                info!(
                    chain_id,
                    rate = %price.rate,
                    "Price for buying {} {} with {} is {} {}",
                    request.amount,
                    request.buy_token.symbol,
                    request.sell_token.symbol,
                    price.price,
                    request.sell_token.symbol
                );
                Ok(QuoteOutcome::Available(price))
            }
            Err(report) if report.current_context().is_invalid_input() => Err(report),
            Err(report) => {
                error!(
                    chain_id,
                    error = %report.current_context(),
                    details = %report.format(),
                    body = %body,
                    "Invalid 0x price response"
                );
                Ok(QuoteOutcome::Invalid(report.current_context().to_string()))
            }
        }
    }

    pub async fn lookup_quote(
        &self,
        request: &QuoteRequest,
    ) -> EstimatorResult<QuoteOutcome<RawQuote>> {
        let chain_id = request.network.id;
        let Some(aggregator_request) = build_quote_request(request, &self.fee)? else {
            error!(chain_id, "Swaps are not supported on {}", request.network.name);
            return Ok(QuoteOutcome::Unsupported { chain_id });
        };

        let Some(body) = self.transport.send(&aggregator_request).await else {
            warn!(
                chain_id,
                sell_token = %request.sell_token.symbol,
                buy_token = %request.buy_token.symbol,
                "No 0x quote available"
            );
            return Ok(QuoteOutcome::Unavailable);
        };

        match normalize_quote(&body) {
            Ok(quote) => {
                let buy_amount =
                    from_base_units(&quote.quote.buy_amount, request.buy_token.decimals)
                        .unwrap_or_else(|_| quote.quote.buy_amount.clone());
                info!(
                    chain_id,
                    to = %quote.quote.to,
                    gas = %quote.quote.gas,
                    "Quote for selling {} {} for {} is {} {}",
                    request.amount,
                    request.sell_token.symbol,
                    request.buy_token.symbol,
                    buy_amount,
                    request.buy_token.symbol
                );
                Ok(QuoteOutcome::Available(quote))
            }
            Err(report) => {
                error!(
                    chain_id,
                    error = %report.current_context(),
                    details = %report.format(),
                    body = %body,
                    "Invalid 0x quote response"
                );
                Ok(QuoteOutcome::Invalid(report.current_context().to_string()))
            }
        }
    }
}
