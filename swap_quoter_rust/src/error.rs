use error_stack::{AttachmentKind, FrameKind, Report};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type EstimatorResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error")]
    ParseError,

    #[error("Reqwest error")]
    ReqwestError,

    #[error("Network {0} is not supported")]
    UnsupportedNetwork(u32),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid decimals: {0}")]
    InvalidDecimals(u8),

    #[error("Transport failure")]
    TransportFailure,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Models error")]
    ModelsError,
}

impl Error {
    /// Errors caused by the caller handing in a bad amount or precision.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidAmount(_) | Error::InvalidDecimals(_))
    }
}

pub trait ReportDisplayExt {
    fn format(&self) -> String;
}

impl ReportDisplayExt for Report<Error> {
    fn format(&self) -> String {
        let mut output = String::new();

        let frames = self.current_frames();

        for frame in frames.iter() {
            if let FrameKind::Attachment(AttachmentKind::Printable(attachment)) = frame.kind() {
                output.push_str(&format!(" {attachment} "));
            }
        }

        output.trim().to_string()
    }
}
