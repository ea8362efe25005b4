use swap_models::constants::chains::ChainId;

pub trait ZeroXChain {
    /// Host serving the 0x swap API for this chain.
    fn to_zero_x_api_host(&self) -> &'static str;
}

impl ZeroXChain for ChainId {
    fn to_zero_x_api_host(&self) -> &'static str {
        match self {
            ChainId::Ethereum => "api.0x.org",
            ChainId::Optimism => "optimism.api.0x.org",
            ChainId::Base => "base.api.0x.org",
            ChainId::ArbitrumOne => "arbitrum.api.0x.org",
        }
    }
}

/// Resolves a chain id to its 0x API host. `None` means swaps are not offered on
/// that network, which callers are expected to handle as a normal outcome.
pub fn resolve_endpoint(chain_id: u32) -> Option<&'static str> {
    ChainId::try_from(chain_id)
        .ok()
        .map(|chain| chain.to_zero_x_api_host())
}

pub fn supported_chain_ids() -> Vec<u32> {
    ChainId::supported_chains()
        .into_iter()
        .map(ChainId::id)
        .collect()
}
