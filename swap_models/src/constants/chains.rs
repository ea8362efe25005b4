use error_stack::{Report, report};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::Error;

pub const EVM_ADDRESS_LENGTH: usize = 42;

/// `0x` followed by 40 hex digits. Checksum casing is not verified.
pub fn is_evm_address(address: &str) -> bool {
    address.len() == EVM_ADDRESS_LENGTH
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Networks the swap aggregator is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, EnumIter, Hash)]
#[repr(u32)]
pub enum ChainId {
    Ethereum = 1,
    Optimism = 10,
    Base = 8453,
    ArbitrumOne = 42161,
}

impl ChainId {
    pub fn supported_chains() -> Vec<ChainId> {
        ChainId::iter().collect()
    }

    pub fn id(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ChainId {
    type Error = Report<Error>;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        serde_json::from_str(&value.to_string()).map_err(|e| {
            Report::new(Error::ChainError(format!("Unsupported chain ID: {value}")))
                .attach_printable(format!("Failed to parse chain ID: {e}"))
        })
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ethereum => write!(f, "Ethereum"),
            Self::Optimism => write!(f, "Optimism"),
            Self::Base => write!(f, "Base"),
            Self::ArbitrumOne => write!(f, "Arbitrum One"),
        }
    }
}

impl TryFrom<&str> for ChainId {
    type Error = Report<Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Ethereum" | "1" => Ok(Self::Ethereum),
            "Optimism" | "10" => Ok(Self::Optimism),
            "Base" | "8453" => Ok(Self::Base),
            "ArbitrumOne" | "Arbitrum One" | "42161" => Ok(Self::ArbitrumOne),
            _ => Err(report!(Error::ChainError(format!(
                "Invalid chain name: {value}"
            )))),
        }
    }
}
