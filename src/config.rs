//! Wallet configuration guard.
//!
//! Validates the host-provided settings before any action handler touches
//! the chain. Settings may be hot-reloaded by the host, so validation runs
//! on every action entry instead of being cached.

use std::str::FromStr;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Setting key for the agent's account address.
pub const ACCOUNT_ADDRESS_KEY: &str = "ABSTRACT_ADDRESS";

/// Setting key for the agent's signing key (64 hex characters, no prefix).
pub const PRIVATE_KEY_KEY: &str = "ABSTRACT_PRIVATE_KEY";

/// Optional setting key for the Abstract Global Wallet account address used
/// by the relay path.
pub const AGW_ADDRESS_KEY: &str = "ABSTRACT_AGW_ADDRESS";

/// Key-value settings lookup provided by the host runtime.
pub trait SettingsSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings source backed by process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingsSource for EnvSettings {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.trim().is_empty())
    }
}

fn is_raw_private_key(value: &str) -> bool {
    value.len() == 64 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validated wallet credentials.
#[derive(Clone)]
pub struct WalletConfig {
    /// The agent's externally-owned account.
    pub account: Address,
    /// The smart account used by the relay path, when configured.
    pub agw_account: Option<Address>,
    private_key: SecretString,
}

impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("account", &self.account)
            .field("agw_account", &self.agw_account)
            .finish_non_exhaustive()
    }
}

impl WalletConfig {
    /// Validate the required settings, aggregating one message per invalid
    /// field. Stateless: identical settings always produce identical results.
    pub fn validate(source: &dyn SettingsSource) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();

        let account = match source.get(ACCOUNT_ADDRESS_KEY) {
            None => {
                problems.push(format!("{ACCOUNT_ADDRESS_KEY}: account address is required"));
                None
            }
            Some(raw) => match Address::from_str(raw.trim()) {
                Ok(address) => Some(address),
                Err(_) => {
                    problems.push(format!("{ACCOUNT_ADDRESS_KEY}: must be a valid address"));
                    None
                }
            },
        };

        let private_key = match source.get(PRIVATE_KEY_KEY) {
            None => {
                problems.push(format!("{PRIVATE_KEY_KEY}: private key is required"));
                None
            }
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if is_raw_private_key(&trimmed) {
                    Some(SecretString::from(trimmed))
                } else {
                    problems.push(format!(
                        "{PRIVATE_KEY_KEY}: must be a 64-character hexadecimal string (32 bytes) without the '0x' prefix"
                    ));
                    None
                }
            }
        };

        let agw_account = match source.get(AGW_ADDRESS_KEY) {
            None => None,
            Some(raw) => match Address::from_str(raw.trim()) {
                Ok(address) => Some(address),
                Err(_) => {
                    problems.push(format!("{AGW_ADDRESS_KEY}: must be a valid address when set"));
                    None
                }
            },
        };

        if let (Some(account), Some(private_key)) = (account, private_key)
            && problems.is_empty()
        {
            return Ok(Self {
                account,
                agw_account,
                private_key,
            });
        }
        Err(ConfigError::Invalid(problems.join("\n")))
    }

    /// Build the local signer for the configured private key.
    pub fn signer(&self) -> Result<PrivateKeySigner, ConfigError> {
        PrivateKeySigner::from_str(self.private_key.expose_secret())
            .map_err(|e| ConfigError::Signer(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapSettings(HashMap<&'static str, String>);

    impl SettingsSource for MapSettings {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    fn valid_settings() -> MapSettings {
        MapSettings(HashMap::from([
            (
                ACCOUNT_ADDRESS_KEY,
                "0x114B242D931B47D5cDcEe7AF065856f70ee278C4".to_string(),
            ),
            (PRIVATE_KEY_KEY, "11".repeat(32)),
        ]))
    }

    #[test]
    fn valid_settings_pass() {
        let config = WalletConfig::validate(&valid_settings()).unwrap();
        assert_eq!(
            config.account.to_checksum(None),
            "0x114B242D931B47D5cDcEe7AF065856f70ee278C4"
        );
        assert!(config.agw_account.is_none());
        assert!(config.signer().is_ok());
    }

    #[test]
    fn missing_settings_aggregate_one_message_per_field() {
        let err = WalletConfig::validate(&MapSettings(HashMap::new())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(ACCOUNT_ADDRESS_KEY));
        assert!(message.contains(PRIVATE_KEY_KEY));
    }

    #[test]
    fn prefixed_private_key_is_rejected() {
        let mut settings = valid_settings();
        settings
            .0
            .insert(PRIVATE_KEY_KEY, format!("0x{}", "11".repeat(32)));
        let err = WalletConfig::validate(&settings).unwrap_err();
        assert!(err.to_string().contains("without the '0x' prefix"));
    }

    #[test]
    fn malformed_agw_address_is_rejected() {
        let mut settings = valid_settings();
        settings.0.insert(AGW_ADDRESS_KEY, "not-an-address".to_string());
        let err = WalletConfig::validate(&settings).unwrap_err();
        assert!(err.to_string().contains(AGW_ADDRESS_KEY));
    }

    #[test]
    fn validation_is_idempotent() {
        let settings = valid_settings();
        let first = WalletConfig::validate(&settings).unwrap();
        let second = WalletConfig::validate(&settings).unwrap();
        assert_eq!(first.account, second.account);
        assert_eq!(first.agw_account, second.agw_account);
    }
}
