//! Operation execution against the path-selected back-end.
//!
//! The executors only accept validated parameter types; path and operation
//! kind are explicit enums, so every path x kind combination is dispatched
//! through `ExecutionBackends::select` plus one of the three functions here
//! and is independently testable.

use alloy::primitives::{Address, B256};
use serde::Serialize;

use crate::chain::client::{ChainReader, ExecutionBackends, ExecutionPath};
use crate::chain::token::{self, NATIVE_DECIMALS, NATIVE_SYMBOL};
use crate::error::ExecutionError;
use crate::intent::{BalanceParams, DeployParams, TransferParams};

/// The operation kinds the pipeline executes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Transfer,
    Balance,
    Deploy,
}

/// Outcome of a completed transfer. Produced exactly once per successful
/// execution; immutable.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransferOutcome {
    pub transaction_hash: B256,
    pub formatted_amount: String,
    pub symbol: String,
    pub recipient: Address,
    pub path: ExecutionPath,
}

/// Outcome of a completed balance query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BalanceOutcome {
    pub wallet: Address,
    pub formatted_balance: String,
    pub symbol: String,
}

/// Outcome of a completed deployment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeployOutcome {
    pub transaction_hash: B256,
    pub contract_address: Address,
    pub name: String,
    pub symbol: String,
    pub initial_supply: String,
    pub path: ExecutionPath,
}

/// Execute a validated transfer.
///
/// Token metadata comes from the fixed native descriptor or a concurrent
/// `symbol`/`decimals` read; the decimal amount is scaled before submission.
pub async fn execute_transfer(
    reader: &dyn ChainReader,
    backends: &ExecutionBackends,
    params: &TransferParams,
) -> Result<TransferOutcome, ExecutionError> {
    let submitter = backends.select(params.path)?;
    let descriptor = token::token_metadata(reader, params.token_address).await?;
    let base_amount = token::scale_amount(&params.amount, descriptor.decimals)?;

    let transaction_hash = if token::is_native_token(params.token_address) {
        tracing::info!(
            recipient = %params.recipient,
            amount = %params.amount,
            path = params.path.as_str(),
            "submitting native transfer"
        );
        submitter.send_native(params.recipient, base_amount).await?
    } else {
        tracing::info!(
            token = %params.token_address,
            recipient = %params.recipient,
            amount = %params.amount,
            path = params.path.as_str(),
            "submitting token transfer"
        );
        submitter
            .send_erc20(params.token_address, params.recipient, base_amount)
            .await?
    };

    Ok(TransferOutcome {
        transaction_hash,
        formatted_amount: token::format_amount(base_amount, descriptor.decimals),
        symbol: descriptor.symbol,
        recipient: params.recipient,
        path: params.path,
    })
}

/// Execute a validated balance query. Contract balances read the balance,
/// decimals, and symbol concurrently and join before formatting.
pub async fn execute_balance(
    reader: &dyn ChainReader,
    params: &BalanceParams,
) -> Result<BalanceOutcome, ExecutionError> {
    if token::is_native_token(params.token_address) {
        let balance = reader.native_balance(params.wallet).await?;
        return Ok(BalanceOutcome {
            wallet: params.wallet,
            formatted_balance: token::format_amount(balance, NATIVE_DECIMALS),
            symbol: NATIVE_SYMBOL.to_string(),
        });
    }

    let (balance, decimals, symbol) = tokio::try_join!(
        reader.erc20_balance(params.token_address, params.wallet),
        reader.erc20_decimals(params.token_address),
        reader.erc20_symbol(params.token_address),
    )?;

    Ok(BalanceOutcome {
        wallet: params.wallet,
        formatted_balance: token::format_amount(balance, decimals),
        symbol,
    })
}

/// Execute a validated deployment: the initial supply is scaled to 18
/// decimals, and the receipt wait recovers the contract address.
pub async fn execute_deploy(
    backends: &ExecutionBackends,
    params: &DeployParams,
) -> Result<DeployOutcome, ExecutionError> {
    let submitter = backends.select(params.path)?;
    let supply = token::scale_amount(&params.initial_supply, NATIVE_DECIMALS)?;

    tracing::info!(
        name = %params.name,
        symbol = %params.symbol,
        path = params.path.as_str(),
        "submitting token deployment"
    );
    let receipt = submitter
        .deploy_token(&params.name, &params.symbol, supply)
        .await?;

    Ok(DeployOutcome {
        transaction_hash: receipt.transaction_hash,
        contract_address: receipt.contract_address,
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        initial_supply: params.initial_supply.clone(),
        path: params.path,
    })
}
