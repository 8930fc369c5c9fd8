//! Action surface exposed to the host runtime.

use async_trait::async_trait;

use crate::context::AgentContext;
use crate::error::ConfigError;
use crate::report::ActionOutcome;

mod balance;
mod deploy;
mod transfer;

pub use balance::{BALANCE_ACTION_NAME, GetBalanceAction};
pub use deploy::{DEPLOY_ACTION_NAME, DeployTokenAction};
pub use transfer::{TRANSFER_ACTION_NAME, TransferAction};

/// One natural-language wallet operation.
///
/// `validate` is the configuration gate: hosts call it before dispatching,
/// and `handle` re-checks it on entry since settings can be hot-reloaded
/// between invocations.
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable action name for host dispatch.
    fn name(&self) -> &'static str;

    /// Human-readable description for host registration.
    fn description(&self) -> &'static str;

    /// Check that the wallet configuration allows this action to run.
    async fn validate(&self, ctx: &AgentContext) -> Result<(), ConfigError>;

    /// Run the full pipeline for one user message.
    ///
    /// Never panics and never returns an error: failures are reported
    /// inside the outcome so the host always has a response to render.
    async fn handle(&self, ctx: &AgentContext, message: &str) -> ActionOutcome;
}

/// The built-in wallet actions in registration order.
pub fn builtin_actions() -> Vec<Box<dyn Action>> {
    vec![
        Box::new(TransferAction),
        Box::new(GetBalanceAction),
        Box::new(DeployTokenAction),
    ]
}
