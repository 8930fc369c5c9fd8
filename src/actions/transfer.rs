//! Token and native-asset transfer action.

use async_trait::async_trait;

use crate::actions::Action;
use crate::config::WalletConfig;
use crate::context::AgentContext;
use crate::error::{ConfigError, Error};
use crate::executor::{self, OperationKind, TransferOutcome};
use crate::extract::{self, templates};
use crate::intent::{RawTransferIntent, TransferParams, normalize_transfer};
use crate::report::{self, ActionOutcome};

pub const TRANSFER_ACTION_NAME: &str = "SEND_TOKEN";

/// Transfers tokens from the agent's wallet to another address.
pub struct TransferAction;

#[async_trait]
impl Action for TransferAction {
    fn name(&self) -> &'static str {
        TRANSFER_ACTION_NAME
    }

    fn description(&self) -> &'static str {
        "Transfer tokens from the agent's wallet to another address"
    }

    async fn validate(&self, ctx: &AgentContext) -> Result<(), ConfigError> {
        WalletConfig::validate(ctx.settings.as_ref()).map(|_| ())
    }

    async fn handle(&self, ctx: &AgentContext, message: &str) -> ActionOutcome {
        tracing::info!(action = TRANSFER_ACTION_NAME, "starting transfer handler");
        match run(ctx, message).await {
            Ok(outcome) => {
                tracing::info!(hash = %outcome.transaction_hash, "transfer completed");
                ActionOutcome::succeeded(report::transfer_success(&outcome))
            }
            Err(error) => {
                tracing::error!(%error, "transfer failed");
                ActionOutcome::failed(report::failure(OperationKind::Transfer, &error))
            }
        }
    }
}

async fn run(ctx: &AgentContext, message: &str) -> Result<TransferOutcome, Error> {
    WalletConfig::validate(ctx.settings.as_ref())?;

    let extracted = ctx
        .extraction
        .extract(templates::TRANSFER_TEMPLATE, message)
        .await?;
    let raw: RawTransferIntent = extract::decode_intent("transfer", extracted)?;

    let resolved = normalize_transfer(
        raw,
        ctx.memory.as_ref(),
        &ctx.registry,
        &ctx.resolver,
        &ctx.agent_id,
    )
    .await;
    let params = TransferParams::validate(&resolved)?;

    Ok(executor::execute_transfer(ctx.reader.as_ref(), &ctx.backends, &params).await?)
}
