//! Natural-language wallet actions for the Abstract network.
//!
//! The pipeline turns a user message into a signed on-chain transaction:
//! structured extraction, reference resolution against session memory and a
//! static token registry, strict parameter validation, and execution through
//! either the direct wallet client or the Abstract Global Wallet relay.
//!
//! Hosts embed the crate by implementing the boundary traits
//! ([`config::SettingsSource`], [`extract::ExtractionClient`],
//! [`memory::MemoryStore`]) and wiring an [`AgentContext`] from a
//! [`chain::ChainProfile`]:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use agw_agent::chain::rpc::{EnsNameResolver, RpcChainReader, build_backends};
//! use agw_agent::chain::{AddressResolver, ChainProfile, TokenRegistry};
//! use agw_agent::config::{EnvSettings, WalletConfig};
//! use agw_agent::memory::EphemeralMemory;
//! use agw_agent::{AgentContext, builtin_actions};
//!
//! # fn extraction_client() -> Arc<dyn agw_agent::extract::ExtractionClient> { unimplemented!() }
//! # fn main() -> Result<(), agw_agent::Error> {
//! let profile = ChainProfile::abstract_testnet()?;
//! let settings = Arc::new(EnvSettings);
//! let config = WalletConfig::validate(settings.as_ref())?;
//!
//! let ctx = AgentContext {
//!     agent_id: "agent-1".to_string(),
//!     settings,
//!     extraction: extraction_client(),
//!     memory: Arc::new(EphemeralMemory::new()),
//!     reader: Arc::new(RpcChainReader::connect(&profile)),
//!     resolver: AddressResolver::new(Arc::new(EnsNameResolver::connect(&profile))),
//!     registry: TokenRegistry::builtin(),
//!     backends: build_backends(&profile, &config)?,
//! };
//! let actions = builtin_actions();
//! # let _ = (ctx, actions);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod chain;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod extract;
pub mod intent;
pub mod memory;
pub mod report;

pub use actions::{Action, DeployTokenAction, GetBalanceAction, TransferAction, builtin_actions};
pub use context::AgentContext;
pub use error::Error;
pub use report::{ActionOutcome, ActionResponse};
