//! Chain access: network profiles, reference resolution, token metadata,
//! and the dual-path execution clients.

use url::Url;

use crate::error::ConfigError;

pub mod artifact;
pub mod client;
pub mod registry;
pub mod resolver;
pub mod rpc;
pub mod token;

pub use client::{
    ChainReader, DeploymentReceipt, ExecutionBackends, ExecutionPath, TransactionSubmitter,
};
pub use registry::TokenRegistry;
pub use resolver::{AddressResolver, NameResolver};
pub use token::{NATIVE_TOKEN_ADDRESS, TokenDescriptor};

/// Network profile for one execution context.
///
/// Name resolution deliberately points at a different, more established
/// network than the execution chain: ENS lives on Ethereum mainnet while
/// transactions execute on Abstract.
#[derive(Debug, Clone)]
pub struct ChainProfile {
    pub chain_id: u64,
    /// Execution-chain RPC endpoint.
    pub rpc_url: Url,
    /// Name-service RPC endpoint.
    pub name_service_url: Url,
}

impl ChainProfile {
    pub const ABSTRACT_TESTNET_CHAIN_ID: u64 = 11124;

    /// Abstract testnet execution with Ethereum mainnet name resolution.
    pub fn abstract_testnet() -> Result<Self, ConfigError> {
        Self::new(
            Self::ABSTRACT_TESTNET_CHAIN_ID,
            "https://api.testnet.abs.xyz",
            "https://cloudflare-eth.com",
        )
    }

    /// Build a profile from raw endpoint strings, validating both.
    pub fn new(chain_id: u64, rpc_url: &str, name_service_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            chain_id,
            rpc_url: parse_endpoint(rpc_url)?,
            name_service_url: parse_endpoint(name_service_url)?,
        })
    }
}

/// Endpoint validation: https only, except plain http to loopback hosts for
/// local development nodes. Userinfo is never accepted.
fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Endpoint {
        url: raw.to_string(),
        reason: format!("URL parse failed: {e}"),
    })?;

    if !url.username().is_empty() || url.password().is_some() {
        return Err(ConfigError::Endpoint {
            url: raw.to_string(),
            reason: "URL contains userinfo (@), which is not allowed".to_string(),
        });
    }

    let loopback = matches!(url.host_str(), Some("localhost") | Some("127.0.0.1"));
    match url.scheme() {
        "https" => Ok(url),
        "http" if loopback => Ok(url),
        other => Err(ConfigError::Endpoint {
            url: raw.to_string(),
            reason: format!("scheme '{other}' is not allowed (https required)"),
        }),
    }
}
