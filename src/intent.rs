//! Raw, resolved, and validated intent shapes for the three wallet
//! operations.
//!
//! Extraction output is an untrusted boundary: the raw shapes tolerate
//! missing and null fields, normalization fills in concrete addresses from
//! session memory, the static registry, and the address resolver, and
//! validation is the last gate before any chain interaction. The executor
//! only ever accepts the validated parameter types.

use std::str::FromStr;

use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::chain::client::ExecutionPath;
use crate::chain::registry::TokenRegistry;
use crate::chain::resolver::AddressResolver;
use crate::chain::token::NATIVE_TOKEN_ADDRESS;
use crate::error::{FieldViolation, ValidationError};
use crate::memory::{self, MemoryStore};

/// Longest symbol accepted for a deployment.
pub const MAX_SYMBOL_LEN: usize = 5;

/// Accept strings or bare numbers for amount-like fields; the model does
/// not reliably quote numerics.
fn de_opt_stringly<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Raw transfer parameters as extracted from the user message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransferIntent {
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub amount: Option<String>,
    #[serde(default, rename = "useAGW", alias = "use_agw")]
    pub use_agw: Option<bool>,
}

/// Raw balance-query parameters as extracted from the user message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalanceIntent {
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// Raw deployment parameters as extracted from the user message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeployIntent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de_opt_stringly")]
    pub initial_supply: Option<String>,
    #[serde(default, rename = "useAGW", alias = "use_agw")]
    pub use_agw: Option<bool>,
}

/// Resolve a token reference in priority order: explicit address, then the
/// session deployment record, then the static registry. A total miss leaves
/// the token absent; transfer and balance treat absence as the native asset
/// at the validation boundary.
pub async fn resolve_token_reference(
    token_address: Option<&str>,
    token_symbol: Option<&str>,
    memory: &dyn MemoryStore,
    registry: &TokenRegistry,
    agent_id: &str,
) -> Option<Address> {
    if let Some(raw) = token_address
        && let Ok(address) = Address::from_str(raw.trim())
    {
        return Some(address);
    }

    let symbol = token_symbol?.trim();
    if symbol.is_empty() {
        return None;
    }

    let key = memory::token_record_key(symbol, agent_id);
    match memory.get_by_key(&key).await {
        Ok(Some(record)) => {
            if let Some(address) = memory::record_token_address(&record) {
                tracing::debug!(symbol, %address, "token resolved from session record");
                return Some(address);
            }
        }
        Ok(None) => {}
        Err(error) => tracing::warn!(symbol, %error, "session record lookup failed"),
    }

    match registry.lookup(symbol) {
        Ok(token) => {
            tracing::debug!(symbol, address = %token.address, "token resolved from registry");
            Some(token.address)
        }
        Err(error) => {
            tracing::warn!(symbol, %error, "token reference left unresolved");
            None
        }
    }
}

/// Transfer intent after symbol and name resolution.
#[derive(Debug, Clone)]
pub struct ResolvedTransfer {
    pub token_address: Option<Address>,
    pub recipient: Option<Address>,
    pub amount: Option<String>,
    pub use_agw: Option<bool>,
}

/// Normalize a raw transfer: resolve the token reference and the recipient.
/// A failed recipient resolution is retained as `None` so validation can
/// reject it explicitly. Side-effect-free apart from logging.
pub async fn normalize_transfer(
    raw: RawTransferIntent,
    memory: &dyn MemoryStore,
    registry: &TokenRegistry,
    resolver: &AddressResolver,
    agent_id: &str,
) -> ResolvedTransfer {
    let token_address = resolve_token_reference(
        raw.token_address.as_deref(),
        raw.token_symbol.as_deref(),
        memory,
        registry,
        agent_id,
    )
    .await;

    let recipient = match raw.recipient.as_deref().map(str::trim) {
        Some(reference) if !reference.is_empty() => resolver.resolve(reference).await,
        _ => None,
    };

    ResolvedTransfer {
        token_address,
        recipient,
        amount: raw.amount,
        use_agw: raw.use_agw,
    }
}

/// Balance intent after symbol and name resolution.
#[derive(Debug, Clone)]
pub struct ResolvedBalance {
    pub token_address: Option<Address>,
    pub wallet: Option<Address>,
}

/// Normalize a raw balance query. A missing wallet reference defaults to
/// the agent's own configured account.
pub async fn normalize_balance(
    raw: RawBalanceIntent,
    memory: &dyn MemoryStore,
    registry: &TokenRegistry,
    resolver: &AddressResolver,
    agent_id: &str,
    default_wallet: Address,
) -> ResolvedBalance {
    let token_address = resolve_token_reference(
        raw.token_address.as_deref(),
        raw.token_symbol.as_deref(),
        memory,
        registry,
        agent_id,
    )
    .await;

    let wallet = match raw.wallet_address.as_deref().map(str::trim) {
        Some(reference) if !reference.is_empty() => resolver.resolve(reference).await,
        _ => Some(default_wallet),
    };

    ResolvedBalance {
        token_address,
        wallet,
    }
}

/// Validated transfer parameters; the only transfer input the executor
/// accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub token_address: Address,
    pub recipient: Address,
    pub amount: String,
    pub path: ExecutionPath,
}

impl TransferParams {
    /// Validate a resolved transfer, aggregating every field violation.
    /// An absent token address means the native asset.
    pub fn validate(resolved: &ResolvedTransfer) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let token_address = resolved.token_address.unwrap_or(NATIVE_TOKEN_ADDRESS);

        if resolved.recipient.is_none() {
            violations.push(FieldViolation::new(
                "recipient",
                "recipient did not resolve to a valid address",
            ));
        }

        let amount = resolved.amount.as_deref().map(str::trim).unwrap_or("");
        if amount.is_empty() {
            violations.push(FieldViolation::new("amount", "amount is required"));
        }

        if resolved.use_agw.is_none() {
            violations.push(FieldViolation::new("useAGW", "relay flag must be a boolean"));
        }

        match (resolved.recipient, resolved.use_agw) {
            (Some(recipient), Some(use_agw)) if violations.is_empty() => Ok(Self {
                token_address,
                recipient,
                amount: amount.to_string(),
                path: ExecutionPath::from_relay_flag(use_agw),
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

/// Validated balance parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceParams {
    pub token_address: Address,
    pub wallet: Address,
}

impl BalanceParams {
    /// Validate a resolved balance query. An absent token address means the
    /// native asset.
    pub fn validate(resolved: &ResolvedBalance) -> Result<Self, ValidationError> {
        match resolved.wallet {
            Some(wallet) => Ok(Self {
                token_address: resolved.token_address.unwrap_or(NATIVE_TOKEN_ADDRESS),
                wallet,
            }),
            None => Err(ValidationError::new(vec![FieldViolation::new(
                "walletAddress",
                "wallet did not resolve to a valid address",
            )])),
        }
    }
}

/// Validated deployment parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    pub name: String,
    pub symbol: String,
    pub initial_supply: String,
    pub path: ExecutionPath,
}

impl DeployParams {
    /// Validate a raw deployment intent. Deployments have no resolution
    /// stage, so this consumes the raw shape directly.
    pub fn validate(raw: &RawDeployIntent) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name = raw.name.as_deref().map(str::trim).unwrap_or("");
        if name.is_empty() {
            violations.push(FieldViolation::new("name", "name is required"));
        }

        let symbol = raw.symbol.as_deref().map(str::trim).unwrap_or("");
        if symbol.is_empty() {
            violations.push(FieldViolation::new("symbol", "symbol is required"));
        } else if symbol.chars().count() > MAX_SYMBOL_LEN {
            violations.push(FieldViolation::new(
                "symbol",
                format!("symbol must be {MAX_SYMBOL_LEN} characters or less"),
            ));
        }

        let initial_supply = raw.initial_supply.as_deref().map(str::trim).unwrap_or("");
        let supply_valid = Decimal::from_str(initial_supply)
            .map(|supply| supply > Decimal::ZERO)
            .unwrap_or(false);
        if !supply_valid {
            violations.push(FieldViolation::new(
                "initialSupply",
                "initial supply must be a positive number",
            ));
        }

        if raw.use_agw.is_none() {
            violations.push(FieldViolation::new("useAGW", "relay flag must be a boolean"));
        }

        match raw.use_agw {
            Some(use_agw) if violations.is_empty() => Ok(Self {
                name: name.to_string(),
                symbol: symbol.to_string(),
                initial_supply: initial_supply.to_string(),
                path: ExecutionPath::from_relay_flag(use_agw),
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}
