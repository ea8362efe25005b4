use error_stack::report;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter, clock::DefaultClock};
use reqwest::{Client as ReqwestClient, Error as ReqwestError, Request, Response};
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::{Error, ModelResult};
use crate::network::RateLimitWindow;

#[derive(Debug, Clone)]
pub enum Client {
    RateLimited(RateLimitedClient),
    Unrestricted(ReqwestClient),
}

impl Client {
    pub async fn execute(&self, req: Request) -> Result<Response, ReqwestError> {
        match self {
            Client::RateLimited(rate_limited_client) => rate_limited_client.execute(req).await,
            Client::Unrestricted(unrestricted_client) => unrestricted_client.execute(req).await,
        }
    }

    pub fn inner_client(&self) -> &ReqwestClient {
        match self {
            Client::RateLimited(rate_limited_client) => rate_limited_client.inner_client(),
            Client::Unrestricted(unrestricted_client) => unrestricted_client,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RateLimitedClient {
    inner: ReqwestClient,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimitedClient {
    pub fn new(
        inner: ReqwestClient,
        limit: RateLimitWindow,
        burst: Option<NonZeroU32>,
    ) -> ModelResult<Self> {
        let mut quota = match limit {
            RateLimitWindow::PerSecond(allowed) => Quota::per_second(allowed),
            RateLimitWindow::PerMinute(allowed) => Quota::per_minute(allowed),
            RateLimitWindow::Custom { period } => Quota::with_period(period).ok_or_else(|| {
                report!(Error::ParseError)
                    .attach_printable(format!("Invalid rate limit period: {period:?}"))
            })?,
        };
        if let Some(b) = burst {
            quota = quota.allow_burst(b);
        }
        let limiter = Arc::new(RateLimiter::direct(quota));
        Ok(Self { inner, limiter })
    }

    /// Underlying reqwest client, for building requests.
    pub fn inner_client(&self) -> &ReqwestClient {
        &self.inner
    }

    pub async fn execute(&self, req: Request) -> Result<Response, ReqwestError> {
        self.limiter.until_ready().await;
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rate_limited_client_rejects_zero_period() {
        let result = RateLimitedClient::new(
            ReqwestClient::new(),
            RateLimitWindow::Custom {
                period: Duration::ZERO,
            },
            None,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rate_limited_client_builds_requests() {
        let client = Client::RateLimited(
            RateLimitedClient::new(
                ReqwestClient::new(),
                RateLimitWindow::PerSecond(NonZeroU32::new(2).unwrap()),
                NonZeroU32::new(4),
            )
            .unwrap(),
        );

        let request = client
            .inner_client()
            .get("https://api.0x.org/swap/v1/price")
            .header("0x-api-key", "key")
            .build()
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.headers()["0x-api-key"], "key");
    }
}
