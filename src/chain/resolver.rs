//! Counterparty reference resolution.

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::error::NameResolutionError;

/// Name-service lookup boundary (ENS or compatible).
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolve a normalized name to an address. `Ok(None)` means the name is
    /// not registered; errors are transport failures.
    async fn lookup(&self, name: &str) -> Result<Option<Address>, NameResolutionError>;
}

/// Resolves literal addresses and human-readable names.
///
/// Resolution failure is never fatal here: the resolver yields `None` and
/// logs the outcome, and the validation stage decides whether a missing
/// address terminates the operation.
#[derive(Clone)]
pub struct AddressResolver {
    names: Arc<dyn NameResolver>,
}

impl AddressResolver {
    pub fn new(names: Arc<dyn NameResolver>) -> Self {
        Self { names }
    }

    /// Normalize a name reference before lookup (trim plus ASCII case-fold).
    pub fn normalize_name(reference: &str) -> String {
        reference.trim().to_ascii_lowercase()
    }

    /// Resolve a reference to an address.
    ///
    /// Literal addresses return immediately with no network call; anything
    /// else is treated as a name and looked up.
    pub async fn resolve(&self, reference: &str) -> Option<Address> {
        if let Ok(address) = Address::from_str(reference.trim()) {
            return Some(address);
        }

        let name = Self::normalize_name(reference);
        match self.names.lookup(&name).await {
            Ok(Some(address)) => {
                tracing::info!(%name, address = %address.to_checksum(None), "resolved name");
                Some(address)
            }
            Ok(None) => {
                tracing::debug!(%name, "name is not registered");
                None
            }
            Err(error) => {
                tracing::error!(%name, %error, "name resolution failed");
                None
            }
        }
    }
}
