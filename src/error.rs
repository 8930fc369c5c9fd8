//! Error types for the action pipeline.

use alloy::primitives::B256;

/// Top-level error type for the agent actions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One line per invalid or missing setting, joined.
    #[error("Wallet configuration validation failed:\n{0}")]
    Invalid(String),

    #[error("Invalid signing key: {0}")]
    Signer(String),

    #[error("Invalid endpoint '{url}': {reason}")]
    Endpoint { url: String, reason: String },
}

/// Structured-extraction boundary errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("extraction backend failed: {0}")]
    Backend(String),

    #[error("extraction reply carried no parseable JSON object")]
    NoJsonObject,

    #[error("extracted object does not match the {intent} intent shape: {reason}")]
    Shape {
        intent: &'static str,
        reason: String,
    },
}

/// A single field rejected by parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Aggregate of every field violation found in one validation pass.
///
/// Validation never stops at the first bad field; the whole set is reported
/// at once, and nothing past the validator runs when this is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Fallback registry miss. Tolerated when a higher-priority source already
/// resolved the symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Token {0} not found")]
pub struct UnknownTokenError(pub String);

/// Name-service lookup transport failure.
#[derive(Debug, thiserror::Error)]
#[error("name lookup failed: {0}")]
pub struct NameResolutionError(pub String);

/// Session memory store errors.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("memory backend failed: {0}")]
    Backend(String),
}

/// Chain execution errors. Client failures carry the underlying message
/// verbatim; nothing at this layer retries.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("chain client error: {0}")]
    Client(String),

    #[error("invalid amount '{amount}' for {decimals} decimals: {reason}")]
    Amount {
        amount: String,
        decimals: u8,
        reason: String,
    },

    #[error("deployment receipt for {tx_hash} is missing the contract address")]
    MissingContractAddress { tx_hash: B256 },

    #[error("relay path is not available: {0}")]
    RelayUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_all_violations() {
        let error = ValidationError::new(vec![
            FieldViolation::new("recipient", "recipient is required"),
            FieldViolation::new("amount", "amount is required"),
        ]);
        assert_eq!(
            error.to_string(),
            "recipient: recipient is required; amount: amount is required"
        );
    }

    #[test]
    fn unknown_token_error_names_the_symbol() {
        assert_eq!(
            UnknownTokenError("PEPE".into()).to_string(),
            "Token PEPE not found"
        );
    }
}
