//! Outcome reporting back to the host.
//!
//! Every pipeline run, success or failure, produces a renderable response:
//! plain language in `text`, the structured payload in `content`. Raw error
//! messages go into the payload for diagnostics; stack traces never reach
//! the host.

use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::error::{Error, MemoryError};
use crate::executor::{BalanceOutcome, DeployOutcome, OperationKind, TransferOutcome};
use crate::memory::{DeploymentRecord, MemoryStore};

/// Renderable response payload handed back to the host.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionResponse {
    pub text: String,
    pub content: serde_json::Value,
}

/// Final result of one action invocation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub response: ActionResponse,
}

impl ActionOutcome {
    pub fn succeeded(response: ActionResponse) -> Self {
        Self {
            success: true,
            response,
        }
    }

    pub fn failed(response: ActionResponse) -> Self {
        Self {
            success: false,
            response,
        }
    }
}

/// Success message for a completed transfer.
pub fn transfer_success(outcome: &TransferOutcome) -> ActionResponse {
    ActionResponse {
        text: format!(
            "Transfer completed successfully! Sent {} {} to {} using the {} path. Transaction hash: {}",
            outcome.formatted_amount,
            outcome.symbol,
            outcome.recipient.to_checksum(None),
            outcome.path,
            outcome.transaction_hash,
        ),
        content: json!({
            "hash": outcome.transaction_hash,
            "tokenAmount": outcome.formatted_amount,
            "symbol": outcome.symbol,
            "recipient": outcome.recipient,
            "path": outcome.path,
        }),
    }
}

/// Success message for a completed balance query.
pub fn balance_success(outcome: &BalanceOutcome) -> ActionResponse {
    ActionResponse {
        text: format!(
            "Balance for {}: {} {}",
            outcome.wallet.to_checksum(None),
            outcome.formatted_balance,
            outcome.symbol,
        ),
        content: json!({
            "balance": outcome.formatted_balance,
            "symbol": outcome.symbol,
            "walletAddress": outcome.wallet,
        }),
    }
}

/// Success message for a completed deployment.
pub fn deploy_success(outcome: &DeployOutcome) -> ActionResponse {
    ActionResponse {
        text: format!(
            "Token \"{}\" ({}) deployed successfully! Contract address: {}. Transaction hash: {}",
            outcome.name,
            outcome.symbol,
            outcome.contract_address.to_checksum(None),
            outcome.transaction_hash,
        ),
        content: json!({
            "hash": outcome.transaction_hash,
            "tokenName": outcome.name,
            "tokenSymbol": outcome.symbol,
            "contractAddress": outcome.contract_address,
            "initialSupply": outcome.initial_supply,
            "path": outcome.path,
        }),
    }
}

/// Failure response: a plain-language category in the text, the raw
/// underlying message in the structured payload.
pub fn failure(kind: OperationKind, error: &Error) -> ActionResponse {
    let category = match error {
        Error::Config(_) => "configuration validation failed",
        Error::Extraction(_) => "could not extract valid parameters",
        Error::Validation(_) => "invalid parameters",
        Error::Memory(_) => "session memory is unavailable",
        Error::Execution(_) => "the transaction failed",
    };
    let text = match kind {
        OperationKind::Transfer => format!("Unable to process transfer request: {category}."),
        OperationKind::Balance => format!("Unable to process balance request: {category}."),
        OperationKind::Deploy => {
            format!("Unable to process token deployment request: {category}.")
        }
    };
    ActionResponse {
        text,
        content: json!({
            "operation": kind,
            "error": error.to_string(),
        }),
    }
}

/// Persist the deployment record so later symbol references resolve without
/// a registry or chain lookup. A redeployment under the same symbol
/// overwrites the prior record.
pub async fn record_deployment(
    memory: &dyn MemoryStore,
    agent_id: &str,
    outcome: &DeployOutcome,
) -> Result<(), MemoryError> {
    let record = DeploymentRecord {
        token_address: outcome.contract_address,
        name: outcome.name.clone(),
        symbol: outcome.symbol.clone(),
        initial_supply: outcome.initial_supply.clone(),
        created_at: Utc::now(),
    }
    .into_record(agent_id)?;

    tracing::info!(key = %record.key, "persisting deployment record");
    memory.create_record(record).await
}
