use error_stack::{ResultExt as _, report};
use std::num::NonZeroU32;
use std::time::Duration;
use swap_models::network::RateLimitWindow;

use crate::error::{Error, EstimatorResult};

pub const ZEROX_API_KEY_ENV: &str = "ZEROX_API_KEY";
pub const ZEROX_RATE_LIMIT_ENV: &str = "ZEROX_RATE_LIMIT";
pub const ZEROX_RATE_LIMIT_BURST_ENV: &str = "ZEROX_RATE_LIMIT_BURST";
pub const ZEROX_TIMEOUT_MS_ENV: &str = "ZEROX_TIMEOUT_MS";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime settings of the 0x transport.
#[derive(Debug, Clone)]
pub struct ZeroXConfig {
    /// Sent as `0x-api-key`. Not validated locally, a bad key shows up as a failed request.
    pub api_key: String,
    pub rate_limit: Option<RateLimitWindow>,
    pub rate_limit_burst: Option<NonZeroU32>,
    pub request_timeout: Duration,
}

impl Default for ZeroXConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            rate_limit: None,
            rate_limit_burst: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ZeroXConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> EstimatorResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> EstimatorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ZEROX_API_KEY_ENV).unwrap_or_default();

        let rate_limit = match lookup(ZEROX_RATE_LIMIT_ENV) {
            Some(value) => Some(RateLimitWindow::from_string(value.trim()).ok_or_else(|| {
                report!(Error::ConfigError(format!(
                    "{ZEROX_RATE_LIMIT_ENV} must look like 5s, 100m, 1h or 1d, got {value:?}"
                )))
            })?),
            None => None,
        };

        let rate_limit_burst = match lookup(ZEROX_RATE_LIMIT_BURST_ENV) {
            Some(value) => Some(value.trim().parse::<NonZeroU32>().change_context(
                Error::ConfigError(format!(
                    "{ZEROX_RATE_LIMIT_BURST_ENV} must be a positive integer, got {value:?}"
                )),
            )?),
            None => None,
        };

        let request_timeout = match lookup(ZEROX_TIMEOUT_MS_ENV) {
            Some(value) => {
                let millis = value.trim().parse::<u64>().change_context(Error::ConfigError(
                    format!("{ZEROX_TIMEOUT_MS_ENV} must be milliseconds, got {value:?}"),
                ))?;
                if millis == 0 {
                    return Err(report!(Error::ConfigError(format!(
                        "{ZEROX_TIMEOUT_MS_ENV} cannot be zero"
                    ))));
                }
                Duration::from_millis(millis)
            }
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            api_key,
            rate_limit,
            rate_limit_burst,
            request_timeout,
        })
    }
}
