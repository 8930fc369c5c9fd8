//! Session memory boundary.
//!
//! The host runtime owns the persistent record store; the pipeline only
//! reads prior deployment records and appends new ones. Keys are
//! deterministic so symbol lookups stay O(1) across conversation turns.

use std::collections::HashMap;
use std::str::FromStr;

use alloy::primitives::Address;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MemoryError;

/// A single record in the host's session memory store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryRecord {
    pub id: Uuid,
    /// Deterministic lookup key, e.g. `"MTK-agent-1"`.
    pub key: String,
    /// Logical grouping, e.g. `"tokens-agent-1"`.
    pub room: String,
    pub content: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Session-scoped record store owned by the host runtime.
///
/// The pipeline treats it as read/append-only; it never performs
/// read-modify-write cycles on stored records.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    async fn get_by_key(&self, key: &str) -> Result<Option<MemoryRecord>, MemoryError>;
    async fn create_record(&self, record: MemoryRecord) -> Result<(), MemoryError>;
}

/// Deterministic record key for a deployed token symbol.
///
/// The symbol is upper-cased so later lookups are case-insensitive.
pub fn token_record_key(symbol: &str, agent_id: &str) -> String {
    format!("{}-{}", symbol.trim().to_ascii_uppercase(), agent_id)
}

/// Logical room grouping all deployment records for one agent.
pub fn token_room(agent_id: &str) -> String {
    format!("tokens-{agent_id}")
}

/// Token address carried by a stored record, if the content has one.
pub fn record_token_address(record: &MemoryRecord) -> Option<Address> {
    record
        .content
        .get("tokenAddress")
        .and_then(|value| value.as_str())
        .and_then(|raw| Address::from_str(raw).ok())
}

/// Record persisted after a successful token deployment. Never mutated; a
/// redeployment under the same symbol replaces the record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub token_address: Address,
    pub name: String,
    pub symbol: String,
    pub initial_supply: String,
    pub created_at: DateTime<Utc>,
}

impl DeploymentRecord {
    /// Wrap into a memory record under the deterministic token key.
    pub fn into_record(self, agent_id: &str) -> Result<MemoryRecord, MemoryError> {
        let key = token_record_key(&self.symbol, agent_id);
        let room = token_room(agent_id);
        let created_at = self.created_at;
        let content = serde_json::to_value(&self)
            .map_err(|e| MemoryError::Backend(format!("failed to encode deployment record: {e}")))?;
        Ok(MemoryRecord {
            id: Uuid::new_v4(),
            key,
            room,
            content,
            created_at,
        })
    }
}

/// In-process memory store for tests and embedded hosts.
///
/// Duplicate keys overwrite the prior record, which is also how symbol
/// redeployments behave.
#[derive(Debug, Default)]
pub struct EphemeralMemory {
    records: tokio::sync::RwLock<HashMap<String, MemoryRecord>>,
}

impl EphemeralMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoryStore for EphemeralMemory {
    async fn get_by_key(&self, key: &str) -> Result<Option<MemoryRecord>, MemoryError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn create_record(&self, record: MemoryRecord) -> Result<(), MemoryError> {
        self.records.write().await.insert(record.key.clone(), record);
        Ok(())
    }
}
