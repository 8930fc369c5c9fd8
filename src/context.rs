//! Shared collaborator handles for one agent runtime.

use std::sync::Arc;

use crate::chain::client::{ChainReader, ExecutionBackends};
use crate::chain::registry::TokenRegistry;
use crate::chain::resolver::AddressResolver;
use crate::config::SettingsSource;
use crate::extract::ExtractionClient;
use crate::memory::MemoryStore;

/// Everything an action needs from the host runtime.
///
/// All collaborators are injected at construction and scoped to one chain
/// context; the pipeline holds no global state, so tests substitute fakes
/// per field.
#[derive(Clone)]
pub struct AgentContext {
    /// Identity used to namespace session memory keys.
    pub agent_id: String,
    pub settings: Arc<dyn SettingsSource>,
    pub extraction: Arc<dyn ExtractionClient>,
    pub memory: Arc<dyn MemoryStore>,
    pub reader: Arc<dyn ChainReader>,
    pub resolver: AddressResolver,
    pub registry: TokenRegistry,
    pub backends: ExecutionBackends,
}
