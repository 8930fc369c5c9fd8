//! Token balance query action.

use async_trait::async_trait;

use crate::actions::Action;
use crate::config::WalletConfig;
use crate::context::AgentContext;
use crate::error::{ConfigError, Error};
use crate::executor::{self, BalanceOutcome, OperationKind};
use crate::extract::{self, templates};
use crate::intent::{BalanceParams, RawBalanceIntent, normalize_balance};
use crate::report::{self, ActionOutcome};

pub const BALANCE_ACTION_NAME: &str = "GET_BALANCE";

/// Checks a token balance for a given address, defaulting to the agent's
/// own account.
pub struct GetBalanceAction;

#[async_trait]
impl Action for GetBalanceAction {
    fn name(&self) -> &'static str {
        BALANCE_ACTION_NAME
    }

    fn description(&self) -> &'static str {
        "Check token balance for a given address"
    }

    async fn validate(&self, ctx: &AgentContext) -> Result<(), ConfigError> {
        WalletConfig::validate(ctx.settings.as_ref()).map(|_| ())
    }

    async fn handle(&self, ctx: &AgentContext, message: &str) -> ActionOutcome {
        tracing::info!(action = BALANCE_ACTION_NAME, "starting balance handler");
        match run(ctx, message).await {
            Ok(outcome) => {
                tracing::info!(wallet = %outcome.wallet, "balance check completed");
                ActionOutcome::succeeded(report::balance_success(&outcome))
            }
            Err(error) => {
                tracing::error!(%error, "balance check failed");
                ActionOutcome::failed(report::failure(OperationKind::Balance, &error))
            }
        }
    }
}

async fn run(ctx: &AgentContext, message: &str) -> Result<BalanceOutcome, Error> {
    let config = WalletConfig::validate(ctx.settings.as_ref())?;

    let extracted = ctx
        .extraction
        .extract(templates::BALANCE_TEMPLATE, message)
        .await?;
    let raw: RawBalanceIntent = extract::decode_intent("balance", extracted)?;

    let resolved = normalize_balance(
        raw,
        ctx.memory.as_ref(),
        &ctx.registry,
        &ctx.resolver,
        &ctx.agent_id,
        config.account,
    )
    .await;
    let params = BalanceParams::validate(&resolved)?;

    Ok(executor::execute_balance(ctx.reader.as_ref(), &params).await?)
}
