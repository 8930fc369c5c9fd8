//! Chain read boundary and execution-path clients.
//!
//! Both traits are injected into the pipeline at call time; nothing here is
//! a process-wide singleton, so tests substitute fakes per field.

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use serde::Serialize;

use crate::error::ExecutionError;

/// Which transaction back-end submits an operation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPath {
    /// The signing key submits directly from its own account.
    Direct,
    /// The Abstract Global Wallet smart account submits on behalf of the
    /// signing key.
    Relay,
}

impl ExecutionPath {
    /// Path selection from the extracted relay flag.
    pub fn from_relay_flag(use_agw: bool) -> Self {
        if use_agw { Self::Relay } else { Self::Direct }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Relay => "relay",
        }
    }
}

impl std::fmt::Display for ExecutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only chain access used for balances and token metadata.
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn native_balance(&self, owner: Address) -> Result<U256, ExecutionError>;
    async fn erc20_balance(&self, token: Address, owner: Address) -> Result<U256, ExecutionError>;
    async fn erc20_symbol(&self, token: Address) -> Result<String, ExecutionError>;
    async fn erc20_decimals(&self, token: Address) -> Result<u8, ExecutionError>;
}

/// Receipt data recovered once a deployment transaction is mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub transaction_hash: B256,
    pub contract_address: Address,
}

/// Transaction submission boundary, implemented once per execution path.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// The path this client submits through.
    fn path(&self) -> ExecutionPath;

    /// Send native value to a recipient, no contract call.
    async fn send_native(&self, to: Address, value: U256) -> Result<B256, ExecutionError>;

    /// Invoke `transfer(to, amount)` on an ERC-20 contract.
    async fn send_erc20(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<B256, ExecutionError>;

    /// Deploy the ERC-20 artifact and block until the receipt yields the
    /// contract address.
    async fn deploy_token(
        &self,
        name: &str,
        symbol: &str,
        initial_supply: U256,
    ) -> Result<DeploymentReceipt, ExecutionError>;
}

/// The two execution back-ends, selected exactly once per operation.
///
/// There is no transition between paths mid-operation: callers select at
/// entry and hold the returned reference for the whole call.
#[derive(Clone)]
pub struct ExecutionBackends {
    direct: Arc<dyn TransactionSubmitter>,
    relay: Option<Arc<dyn TransactionSubmitter>>,
}

impl ExecutionBackends {
    pub fn new(
        direct: Arc<dyn TransactionSubmitter>,
        relay: Option<Arc<dyn TransactionSubmitter>>,
    ) -> Self {
        Self { direct, relay }
    }

    /// Select the back-end for a path.
    pub fn select(&self, path: ExecutionPath) -> Result<&dyn TransactionSubmitter, ExecutionError> {
        match path {
            ExecutionPath::Direct => Ok(self.direct.as_ref()),
            ExecutionPath::Relay => self.relay.as_deref().ok_or_else(|| {
                ExecutionError::RelayUnavailable(format!(
                    "{} is not configured",
                    crate::config::AGW_ADDRESS_KEY
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_flag_maps_to_the_path() {
        assert_eq!(ExecutionPath::from_relay_flag(false), ExecutionPath::Direct);
        assert_eq!(ExecutionPath::from_relay_flag(true), ExecutionPath::Relay);
        assert_eq!(ExecutionPath::Relay.as_str(), "relay");
    }
}
