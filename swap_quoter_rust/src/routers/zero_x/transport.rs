use error_stack::ResultExt as _;
use std::fmt;
use swap_models::network::client_rate_limit::{Client, RateLimitedClient};
use swap_models::network::http::read_response_body;
use tracing::{debug, warn};

use crate::{
    config::ZeroXConfig,
    error::{Error, EstimatorResult, ReportDisplayExt as _},
    routers::{constants::ZERO_X_API_KEY_HEADER, zero_x::requests::AggregatorRequest},
};

/// Performs the outbound call for a built request.
///
/// `None` stands for every transport level failure: network errors, timeouts,
/// non-2xx statuses and empty bodies. Implementations never panic on those.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &AggregatorRequest) -> Option<String>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    api_key: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &self.client)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl HttpTransport {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    pub fn from_config(config: &ZeroXConfig) -> EstimatorResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .change_context(Error::ReqwestError)
            .attach_printable("Error building 0x HTTP client")?;

        let client = match config.rate_limit {
            Some(window) => Client::RateLimited(
                RateLimitedClient::new(inner, window, config.rate_limit_burst)
                    .change_context(Error::ConfigError("Invalid 0x rate limit".to_string()))?,
            ),
            None => Client::Unrestricted(inner),
        };

        Ok(Self::new(client, config.api_key.clone()))
    }

    async fn try_send(&self, request: &AggregatorRequest) -> EstimatorResult<String> {
        let http_request = self
            .client
            .inner_client()
            .get(request.url.clone())
            .header(ZERO_X_API_KEY_HEADER, &self.api_key)
            .build()
            .change_context(Error::ReqwestError)
            .attach_printable("Error building 0x request")?;

        let response = self
            .client
            .execute(http_request)
            .await
            .change_context(Error::TransportFailure)
            .attach_printable("Error in 0x request")?;

        read_response_body(response)
            .await
            .change_context(Error::TransportFailure)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &AggregatorRequest) -> Option<String> {
        debug!(kind = %request.kind, url = %request.url, "Sending 0x request");
        match self.try_send(request).await {
            Ok(body) => Some(body),
            Err(report) => {
                warn!(
                    kind = %request.kind,
                    host = request.url.host_str().unwrap_or_default(),
                    error = ?report.current_context(),
                    details = %report.format(),
                    "0x request failed"
                );
                None
            }
        }
    }
}
