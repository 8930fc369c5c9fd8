//! Alloy-backed chain clients.
//!
//! Every client is constructed explicitly from a [`ChainProfile`] and the
//! validated wallet configuration. Hosts that cannot use plain JSON-RPC
//! (or tests) implement the chain traits themselves instead.

use std::sync::Arc;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, B256, Bytes, U256, address, keccak256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::chain::ChainProfile;
use crate::chain::artifact;
use crate::chain::client::{
    ChainReader, DeploymentReceipt, ExecutionBackends, ExecutionPath, TransactionSubmitter,
};
use crate::chain::resolver::NameResolver;
use crate::config::{AGW_ADDRESS_KEY, WalletConfig};
use crate::error::{ConfigError, ExecutionError, NameResolutionError};

sol! {
    #[sol(rpc)]
    contract IErc20 {
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 value) external returns (bool);
    }

    #[sol(rpc)]
    contract IEnsRegistry {
        function resolver(bytes32 node) external view returns (address);
    }

    #[sol(rpc)]
    contract IEnsResolver {
        function addr(bytes32 node) external view returns (address);
    }

    /// Minimal surface of the Abstract Global Wallet smart account: inner
    /// calls are wrapped into `execute`, deployments into `deployContract`,
    /// both submitted by the bound signing key.
    #[sol(rpc)]
    contract IAgwAccount {
        function execute(address target, uint256 value, bytes calldata data) external payable returns (bytes memory);
        function deployContract(bytes calldata bytecode) external returns (address);
    }
}

/// ENS registry on Ethereum mainnet.
const ENS_REGISTRY: Address = address!("00000000000c2e074ec69a0dfb2997ba6c7d2e1e");

fn client_error(error: impl std::fmt::Display) -> ExecutionError {
    ExecutionError::Client(error.to_string())
}

/// EIP-137 namehash.
fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    node
}

/// ENS resolver backed by the profile's name-service endpoint, which is a
/// different network from the execution chain.
#[derive(Clone)]
pub struct EnsNameResolver {
    provider: DynProvider,
}

impl EnsNameResolver {
    pub fn connect(profile: &ChainProfile) -> Self {
        let provider = ProviderBuilder::new()
            .connect_http(profile.name_service_url.clone())
            .erased();
        Self { provider }
    }
}

#[async_trait]
impl NameResolver for EnsNameResolver {
    async fn lookup(&self, name: &str) -> Result<Option<Address>, NameResolutionError> {
        let node = namehash(name);

        let registry = IEnsRegistry::new(ENS_REGISTRY, &self.provider);
        let resolver_address = registry
            .resolver(node)
            .call()
            .await
            .map_err(|e| NameResolutionError(e.to_string()))?;
        if resolver_address == Address::ZERO {
            return Ok(None);
        }

        let resolver = IEnsResolver::new(resolver_address, &self.provider);
        let resolved = resolver
            .addr(node)
            .call()
            .await
            .map_err(|e| NameResolutionError(e.to_string()))?;
        Ok((resolved != Address::ZERO).then_some(resolved))
    }
}

/// Read-only client for the execution chain.
#[derive(Clone)]
pub struct RpcChainReader {
    provider: DynProvider,
}

impl RpcChainReader {
    pub fn connect(profile: &ChainProfile) -> Self {
        let provider = ProviderBuilder::new()
            .connect_http(profile.rpc_url.clone())
            .erased();
        Self { provider }
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn native_balance(&self, owner: Address) -> Result<U256, ExecutionError> {
        self.provider.get_balance(owner).await.map_err(client_error)
    }

    async fn erc20_balance(&self, token: Address, owner: Address) -> Result<U256, ExecutionError> {
        IErc20::new(token, &self.provider)
            .balanceOf(owner)
            .call()
            .await
            .map_err(client_error)
    }

    async fn erc20_symbol(&self, token: Address) -> Result<String, ExecutionError> {
        IErc20::new(token, &self.provider)
            .symbol()
            .call()
            .await
            .map_err(client_error)
    }

    async fn erc20_decimals(&self, token: Address) -> Result<u8, ExecutionError> {
        IErc20::new(token, &self.provider)
            .decimals()
            .call()
            .await
            .map_err(client_error)
    }
}

fn signing_provider(
    profile: &ChainProfile,
    config: &WalletConfig,
) -> Result<DynProvider, ConfigError> {
    let signer = config.signer()?;
    let wallet = EthereumWallet::from(signer);
    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(profile.rpc_url.clone())
        .erased())
}

/// Direct-path client: the configured key signs and submits from its own
/// account.
#[derive(Clone)]
pub struct EoaWalletClient {
    provider: DynProvider,
}

impl EoaWalletClient {
    pub fn connect(profile: &ChainProfile, config: &WalletConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            provider: signing_provider(profile, config)?,
        })
    }
}

#[async_trait]
impl TransactionSubmitter for EoaWalletClient {
    fn path(&self) -> ExecutionPath {
        ExecutionPath::Direct
    }

    async fn send_native(&self, to: Address, value: U256) -> Result<B256, ExecutionError> {
        let request = TransactionRequest::default().with_to(to).with_value(value);
        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(client_error)?;
        pending.watch().await.map_err(client_error)
    }

    async fn send_erc20(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<B256, ExecutionError> {
        let data = Bytes::from(IErc20::transferCall { to, value: amount }.abi_encode());
        let request = TransactionRequest::default().with_to(token).with_input(data);
        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(client_error)?;
        pending.watch().await.map_err(client_error)
    }

    async fn deploy_token(
        &self,
        name: &str,
        symbol: &str,
        initial_supply: U256,
    ) -> Result<DeploymentReceipt, ExecutionError> {
        let code = artifact::deploy_code(name, symbol, initial_supply);
        let request = TransactionRequest::default().with_deploy_code(code);
        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(client_error)?;
        let receipt = pending.get_receipt().await.map_err(client_error)?;
        let transaction_hash = receipt.transaction_hash;
        let contract_address = receipt
            .contract_address
            .ok_or(ExecutionError::MissingContractAddress {
                tx_hash: transaction_hash,
            })?;
        Ok(DeploymentReceipt {
            transaction_hash,
            contract_address,
        })
    }
}

/// Relay-path client: wraps each call in the Abstract Global Wallet smart
/// account's execution semantics before submission, signed by the same key.
#[derive(Clone)]
pub struct AgwRelayClient {
    provider: DynProvider,
    account: Address,
}

impl AgwRelayClient {
    /// Connect the relay client. Requires the AGW account address setting.
    pub fn connect(profile: &ChainProfile, config: &WalletConfig) -> Result<Self, ConfigError> {
        let account = config.agw_account.ok_or_else(|| {
            ConfigError::Invalid(format!("{AGW_ADDRESS_KEY}: required for the relay path"))
        })?;
        Ok(Self {
            provider: signing_provider(profile, config)?,
            account,
        })
    }
}

#[async_trait]
impl TransactionSubmitter for AgwRelayClient {
    fn path(&self) -> ExecutionPath {
        ExecutionPath::Relay
    }

    async fn send_native(&self, to: Address, value: U256) -> Result<B256, ExecutionError> {
        let account = IAgwAccount::new(self.account, &self.provider);
        let pending = account
            .execute(to, value, Bytes::new())
            .send()
            .await
            .map_err(client_error)?;
        pending.watch().await.map_err(client_error)
    }

    async fn send_erc20(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<B256, ExecutionError> {
        let data = Bytes::from(IErc20::transferCall { to, value: amount }.abi_encode());
        let account = IAgwAccount::new(self.account, &self.provider);
        let pending = account
            .execute(token, U256::ZERO, data)
            .send()
            .await
            .map_err(client_error)?;
        pending.watch().await.map_err(client_error)
    }

    async fn deploy_token(
        &self,
        name: &str,
        symbol: &str,
        initial_supply: U256,
    ) -> Result<DeploymentReceipt, ExecutionError> {
        let code = artifact::deploy_code(name, symbol, initial_supply);
        let account = IAgwAccount::new(self.account, &self.provider);
        let pending = account
            .deployContract(code)
            .send()
            .await
            .map_err(client_error)?;
        let receipt = pending.get_receipt().await.map_err(client_error)?;
        let transaction_hash = receipt.transaction_hash;
        let contract_address = receipt
            .contract_address
            .ok_or(ExecutionError::MissingContractAddress {
                tx_hash: transaction_hash,
            })?;
        Ok(DeploymentReceipt {
            transaction_hash,
            contract_address,
        })
    }
}

/// Construct both execution back-ends for a profile and validated config.
/// The relay back-end is present only when the AGW account is configured.
pub fn build_backends(
    profile: &ChainProfile,
    config: &WalletConfig,
) -> Result<ExecutionBackends, ConfigError> {
    let direct: Arc<dyn TransactionSubmitter> = Arc::new(EoaWalletClient::connect(profile, config)?);
    let relay: Option<Arc<dyn TransactionSubmitter>> = match config.agw_account {
        Some(_) => Some(Arc::new(AgwRelayClient::connect(profile, config)?)),
        None => None,
    };
    Ok(ExecutionBackends::new(direct, relay))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::b256;

    use super::*;

    #[test]
    fn namehash_matches_the_eip137_vectors() {
        assert_eq!(namehash(""), B256::ZERO);
        assert_eq!(
            namehash("eth"),
            b256!("93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae")
        );
        assert_eq!(
            namehash("foo.eth"),
            b256!("de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f")
        );
    }
}
