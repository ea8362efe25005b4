use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ModelResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error")]
    ParseError,

    #[error("Chain error: {0}")]
    ChainError(String),

    #[error("Reqwest error: {0}")]
    ReqwestError(String),

    #[error("Response error: status {status}")]
    ResponseError { status: u16, body: String },

    #[error("Empty response body")]
    EmptyBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_display_hides_body() {
        let err = Error::ResponseError {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "Response error: status 429");
    }
}
