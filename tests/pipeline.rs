//! End-to-end pipeline tests with fake collaborators.
//!
//! Every chain and host boundary is substituted: settings come from a map,
//! extraction returns canned objects, name resolution is a static table,
//! and both execution paths record the calls they receive.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, B256, U256, address, b256};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;

use agw_agent::actions::{Action, DeployTokenAction, GetBalanceAction, TransferAction};
use agw_agent::chain::client::{
    ChainReader, DeploymentReceipt, ExecutionBackends, ExecutionPath, TransactionSubmitter,
};
use agw_agent::chain::registry::TokenRegistry;
use agw_agent::chain::resolver::{AddressResolver, NameResolver};
use agw_agent::config::{ACCOUNT_ADDRESS_KEY, PRIVATE_KEY_KEY, SettingsSource};
use agw_agent::context::AgentContext;
use agw_agent::error::{ExecutionError, ExtractError, NameResolutionError};
use agw_agent::extract::ExtractionClient;
use agw_agent::memory::{EphemeralMemory, MemoryStore, token_record_key};

const AGENT_ID: &str = "agent-1";
const ACCOUNT: Address = address!("114b242d931b47d5cdcee7af065856f70ee278c4");
const RECIPIENT: Address = address!("cca8009f5e09f8c5db63cb0031052f9cb635af62");
const USDC: Address = address!("e4c7fbb0a626ed208021ccaba6be1566905e2dfc");
const DEPLOYED: Address = address!("4242424242424242424242424242424242424242");
const TX_HASH: B256 = b256!("dde850f9257365fffffc11324726ebdcf5b90b01c6eec9b3e7ab3e81fde6f14b");

struct MapSettings(HashMap<&'static str, String>);

impl SettingsSource for MapSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

fn wallet_settings() -> MapSettings {
    MapSettings(HashMap::from([
        (ACCOUNT_ADDRESS_KEY, ACCOUNT.to_checksum(None)),
        (PRIVATE_KEY_KEY, "11".repeat(32)),
    ]))
}

/// Extraction stub returning a canned object regardless of the message.
struct CannedExtraction(serde_json::Value);

#[async_trait]
impl ExtractionClient for CannedExtraction {
    async fn extract(
        &self,
        _template: &str,
        _message: &str,
    ) -> Result<serde_json::Value, ExtractError> {
        Ok(self.0.clone())
    }
}

/// Static name table standing in for the ENS lookup.
#[derive(Default)]
struct StaticNames(HashMap<String, Address>);

#[async_trait]
impl NameResolver for StaticNames {
    async fn lookup(&self, name: &str) -> Result<Option<Address>, NameResolutionError> {
        Ok(self.0.get(name).copied())
    }
}

/// Chain reader with fixed balances and token metadata.
#[derive(Default)]
struct FakeReader {
    native_balances: HashMap<Address, U256>,
    /// token -> (symbol, decimals, balance)
    tokens: HashMap<Address, (String, u8, U256)>,
}

impl FakeReader {
    fn token(&self, token: Address) -> Result<&(String, u8, U256), ExecutionError> {
        self.tokens
            .get(&token)
            .ok_or_else(|| ExecutionError::Client(format!("no contract at {token}")))
    }
}

#[async_trait]
impl ChainReader for FakeReader {
    async fn native_balance(&self, owner: Address) -> Result<U256, ExecutionError> {
        Ok(self.native_balances.get(&owner).copied().unwrap_or_default())
    }

    async fn erc20_balance(&self, token: Address, _owner: Address) -> Result<U256, ExecutionError> {
        Ok(self.token(token)?.2)
    }

    async fn erc20_symbol(&self, token: Address) -> Result<String, ExecutionError> {
        Ok(self.token(token)?.0.clone())
    }

    async fn erc20_decimals(&self, token: Address) -> Result<u8, ExecutionError> {
        Ok(self.token(token)?.1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmittedCall {
    Native {
        to: Address,
        value: U256,
    },
    Erc20 {
        token: Address,
        to: Address,
        amount: U256,
    },
    Deploy {
        name: String,
        symbol: String,
        initial_supply: U256,
    },
}

/// Submitter that records every call instead of touching a chain.
struct RecordingSubmitter {
    path: ExecutionPath,
    calls: Mutex<Vec<SubmittedCall>>,
}

impl RecordingSubmitter {
    fn new(path: ExecutionPath) -> Arc<Self> {
        Arc::new(Self {
            path,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<SubmittedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: SubmittedCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl TransactionSubmitter for RecordingSubmitter {
    fn path(&self) -> ExecutionPath {
        self.path
    }

    async fn send_native(&self, to: Address, value: U256) -> Result<B256, ExecutionError> {
        self.record(SubmittedCall::Native { to, value });
        Ok(TX_HASH)
    }

    async fn send_erc20(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<B256, ExecutionError> {
        self.record(SubmittedCall::Erc20 { token, to, amount });
        Ok(TX_HASH)
    }

    async fn deploy_token(
        &self,
        name: &str,
        symbol: &str,
        initial_supply: U256,
    ) -> Result<DeploymentReceipt, ExecutionError> {
        self.record(SubmittedCall::Deploy {
            name: name.to_string(),
            symbol: symbol.to_string(),
            initial_supply,
        });
        Ok(DeploymentReceipt {
            transaction_hash: TX_HASH,
            contract_address: DEPLOYED,
        })
    }
}

struct Fixture {
    ctx: AgentContext,
    direct: Arc<RecordingSubmitter>,
    relay: Arc<RecordingSubmitter>,
    memory: Arc<EphemeralMemory>,
}

fn fixture(extracted: serde_json::Value, reader: FakeReader, names: StaticNames) -> Fixture {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("agw_agent=debug")
        .with_test_writer()
        .try_init();

    let direct = RecordingSubmitter::new(ExecutionPath::Direct);
    let relay = RecordingSubmitter::new(ExecutionPath::Relay);
    let memory = Arc::new(EphemeralMemory::new());
    let ctx = AgentContext {
        agent_id: AGENT_ID.to_string(),
        settings: Arc::new(wallet_settings()),
        extraction: Arc::new(CannedExtraction(extracted)),
        memory: memory.clone(),
        reader: Arc::new(reader),
        resolver: AddressResolver::new(Arc::new(names)),
        registry: TokenRegistry::builtin(),
        backends: ExecutionBackends::new(
            direct.clone() as Arc<dyn TransactionSubmitter>,
            Some(relay.clone() as Arc<dyn TransactionSubmitter>),
        ),
    };
    Fixture {
        ctx,
        direct,
        relay,
        memory,
    }
}

#[tokio::test]
async fn native_transfer_uses_the_direct_path_with_scaled_base_units() {
    let fx = fixture(
        json!({
            "tokenAddress": null,
            "tokenSymbol": "ETH",
            "recipient": RECIPIENT.to_checksum(None),
            "amount": "0.01",
            "useAGW": false
        }),
        FakeReader::default(),
        StaticNames::default(),
    );

    let outcome = TransferAction.handle(&fx.ctx, "Send 0.01 ETH").await;

    assert!(outcome.success, "unexpected failure: {}", outcome.response.text);
    assert_eq!(
        fx.direct.calls(),
        vec![SubmittedCall::Native {
            to: RECIPIENT,
            value: U256::from(10_000_000_000_000_000u64),
        }]
    );
    assert!(fx.relay.calls().is_empty(), "relay path must stay untouched");
    assert!(outcome.response.text.contains("0.01 ETH"));
    assert!(outcome.response.text.contains("direct path"));
}

#[tokio::test]
async fn registry_token_transfer_routes_through_the_relay() {
    let mut reader = FakeReader::default();
    reader
        .tokens
        .insert(USDC, ("USDC".to_string(), 6, U256::ZERO));
    let names = StaticNames(HashMap::from([("alim.getclave.eth".to_string(), RECIPIENT)]));

    let fx = fixture(
        json!({
            "tokenAddress": null,
            "tokenSymbol": "USDC",
            "recipient": "alim.getclave.eth",
            "amount": "100",
            "useAGW": true
        }),
        reader,
        names,
    );

    let outcome = TransferAction
        .handle(&fx.ctx, "Send 100 USDC to alim.getclave.eth using AGW")
        .await;

    assert!(outcome.success, "unexpected failure: {}", outcome.response.text);
    assert_eq!(
        fx.relay.calls(),
        vec![SubmittedCall::Erc20 {
            token: USDC,
            to: RECIPIENT,
            amount: U256::from(100_000_000u64),
        }]
    );
    assert!(fx.direct.calls().is_empty(), "direct path must stay untouched");
    assert!(outcome.response.text.contains("100 USDC"));
    assert!(outcome.response.text.contains("relay path"));
}

#[tokio::test]
async fn unresolved_recipient_fails_before_any_submission() {
    let fx = fixture(
        json!({
            "tokenSymbol": "ETH",
            "recipient": "unregistered.eth",
            "amount": "1",
            "useAGW": false
        }),
        FakeReader::default(),
        StaticNames::default(),
    );

    let outcome = TransferAction.handle(&fx.ctx, "Send 1 ETH").await;

    assert!(!outcome.success);
    assert!(fx.direct.calls().is_empty());
    assert!(fx.relay.calls().is_empty());
    assert!(
        outcome.response.content["error"]
            .as_str()
            .unwrap()
            .contains("recipient")
    );
}

#[tokio::test]
async fn balance_query_defaults_to_the_configured_account() {
    let mut reader = FakeReader::default();
    reader
        .native_balances
        .insert(ACCOUNT, U256::from(1_500_000_000_000_000_000u64));

    let fx = fixture(
        json!({
            "tokenAddress": null,
            "walletAddress": null,
            "tokenSymbol": null
        }),
        reader,
        StaticNames::default(),
    );

    let outcome = GetBalanceAction.handle(&fx.ctx, "What's my ETH balance?").await;

    assert!(outcome.success, "unexpected failure: {}", outcome.response.text);
    assert!(outcome.response.text.contains("1.5 ETH"));
    let reported: Address = outcome.response.content["walletAddress"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(reported, ACCOUNT);
}

#[tokio::test]
async fn erc20_balance_reads_metadata_from_the_chain() {
    let mut reader = FakeReader::default();
    reader
        .tokens
        .insert(USDC, ("USDC".to_string(), 6, U256::from(100_000_000u64)));

    let fx = fixture(
        json!({
            "tokenSymbol": "USDC",
            "walletAddress": RECIPIENT.to_checksum(None)
        }),
        reader,
        StaticNames::default(),
    );

    let outcome = GetBalanceAction.handle(&fx.ctx, "Check USDC balance").await;

    assert!(outcome.success, "unexpected failure: {}", outcome.response.text);
    assert!(outcome.response.text.contains("100 USDC"));
}

#[tokio::test]
async fn deployment_persists_a_record_that_resolves_future_transfers() {
    let fx = fixture(
        json!({
            "name": "MyToken",
            "symbol": "MTK",
            "initialSupply": "1000000",
            "useAGW": false
        }),
        FakeReader::default(),
        StaticNames::default(),
    );

    let outcome = DeployTokenAction
        .handle(&fx.ctx, "Deploy MyToken with symbol MTK and supply 1000000")
        .await;

    assert!(outcome.success, "unexpected failure: {}", outcome.response.text);
    assert_eq!(
        fx.direct.calls(),
        vec![SubmittedCall::Deploy {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            initial_supply: U256::from(10u64).pow(U256::from(18)) * U256::from(1_000_000u64),
        }]
    );

    let record = fx
        .memory
        .get_by_key(&token_record_key("MTK", AGENT_ID))
        .await
        .unwrap()
        .expect("deployment record should be persisted");
    let recorded: Address = record.content["tokenAddress"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(recorded, DEPLOYED);

    // A later transfer of "MTK" resolves through the stored record.
    let mut reader = FakeReader::default();
    reader
        .tokens
        .insert(DEPLOYED, ("MTK".to_string(), 18, U256::ZERO));
    let mut ctx = fx.ctx.clone();
    ctx.extraction = Arc::new(CannedExtraction(json!({
        "tokenSymbol": "MTK",
        "recipient": RECIPIENT.to_checksum(None),
        "amount": "5",
        "useAGW": false
    })));
    ctx.reader = Arc::new(reader);

    let transfer = TransferAction.handle(&ctx, "Send 5 MTK").await;
    assert!(transfer.success, "unexpected failure: {}", transfer.response.text);
    assert_eq!(
        fx.direct.calls()[1],
        SubmittedCall::Erc20 {
            token: DEPLOYED,
            to: RECIPIENT,
            amount: U256::from(10u64).pow(U256::from(18)) * U256::from(5u64),
        }
    );
}

#[tokio::test]
async fn deploy_rejects_an_oversized_symbol() {
    let fx = fixture(
        json!({
            "name": "MyToken",
            "symbol": "TOOLONG",
            "initialSupply": "1000",
            "useAGW": false
        }),
        FakeReader::default(),
        StaticNames::default(),
    );

    let outcome = DeployTokenAction.handle(&fx.ctx, "Deploy").await;

    assert!(!outcome.success);
    assert!(fx.direct.calls().is_empty());
    assert!(
        outcome.response.content["error"]
            .as_str()
            .unwrap()
            .contains("symbol")
    );
}

#[tokio::test]
async fn missing_configuration_blocks_every_operation() {
    let mut fx = fixture(
        json!({ "useAGW": false }),
        FakeReader::default(),
        StaticNames::default(),
    );
    fx.ctx.settings = Arc::new(MapSettings(HashMap::new()));

    assert!(TransferAction.validate(&fx.ctx).await.is_err());

    let outcome = TransferAction.handle(&fx.ctx, "Send 1 ETH").await;
    assert!(!outcome.success);
    assert!(outcome.response.text.contains("configuration"));
    assert!(fx.direct.calls().is_empty());
    assert!(fx.relay.calls().is_empty());
}

#[tokio::test]
async fn relay_requests_fail_cleanly_when_the_relay_is_not_configured() {
    let mut fx = fixture(
        json!({
            "tokenSymbol": "ETH",
            "recipient": RECIPIENT.to_checksum(None),
            "amount": "1",
            "useAGW": true
        }),
        FakeReader::default(),
        StaticNames::default(),
    );
    fx.ctx.backends = ExecutionBackends::new(
        fx.direct.clone() as Arc<dyn TransactionSubmitter>,
        None,
    );

    let outcome = TransferAction.handle(&fx.ctx, "Send 1 ETH via AGW").await;

    assert!(!outcome.success);
    assert!(fx.direct.calls().is_empty());
    assert!(
        outcome.response.content["error"]
            .as_str()
            .unwrap()
            .contains("not configured")
    );
}
