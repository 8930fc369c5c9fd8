//! ERC-20 token deployment action.

use async_trait::async_trait;

use crate::actions::Action;
use crate::config::WalletConfig;
use crate::context::AgentContext;
use crate::error::{ConfigError, Error};
use crate::executor::{self, DeployOutcome, OperationKind};
use crate::extract::{self, templates};
use crate::intent::{DeployParams, RawDeployIntent};
use crate::report::{self, ActionOutcome};

pub const DEPLOY_ACTION_NAME: &str = "DEPLOY_TOKEN";

/// Deploys a new ERC-20 token contract and records it in session memory so
/// later symbol references resolve to the new address.
pub struct DeployTokenAction;

#[async_trait]
impl Action for DeployTokenAction {
    fn name(&self) -> &'static str {
        DEPLOY_ACTION_NAME
    }

    fn description(&self) -> &'static str {
        "Deploy a new ERC20 token contract"
    }

    async fn validate(&self, ctx: &AgentContext) -> Result<(), ConfigError> {
        WalletConfig::validate(ctx.settings.as_ref()).map(|_| ())
    }

    async fn handle(&self, ctx: &AgentContext, message: &str) -> ActionOutcome {
        tracing::info!(action = DEPLOY_ACTION_NAME, "starting deploy handler");
        match run(ctx, message).await {
            Ok(outcome) => {
                tracing::info!(
                    contract = %outcome.contract_address,
                    hash = %outcome.transaction_hash,
                    "token deployment completed"
                );
                ActionOutcome::succeeded(report::deploy_success(&outcome))
            }
            Err(error) => {
                tracing::error!(%error, "token deployment failed");
                ActionOutcome::failed(report::failure(OperationKind::Deploy, &error))
            }
        }
    }
}

async fn run(ctx: &AgentContext, message: &str) -> Result<DeployOutcome, Error> {
    WalletConfig::validate(ctx.settings.as_ref())?;

    let extracted = ctx
        .extraction
        .extract(templates::DEPLOY_TEMPLATE, message)
        .await?;
    let raw: RawDeployIntent = extract::decode_intent("deploy", extracted)?;
    let params = DeployParams::validate(&raw)?;

    let outcome = executor::execute_deploy(&ctx.backends, &params).await?;

    // The transaction is already on chain at this point; a failed record
    // write must not turn the deployment into a reported failure.
    if let Err(error) = report::record_deployment(ctx.memory.as_ref(), &ctx.agent_id, &outcome).await
    {
        tracing::warn!(%error, "deployment record was not persisted");
    }

    Ok(outcome)
}
