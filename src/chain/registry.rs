//! Static well-known token table.

use alloy::primitives::{Address, address};

use crate::chain::token::{NATIVE_DECIMALS, NATIVE_SYMBOL, NATIVE_TOKEN_ADDRESS, TokenDescriptor};
use crate::error::UnknownTokenError;

/// Bridged USDC contract on Abstract testnet.
const USDC_ADDRESS: Address = address!("e4c7fbb0a626ed208021ccaba6be1566905e2dfc");

/// Last-resort symbol table for well-known tokens.
///
/// Session deployment records always take priority over this table; the
/// normalizer only consults it after the memory store misses.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    entries: Vec<TokenDescriptor>,
}

impl TokenRegistry {
    /// Built-in table: the native asset plus bridged USDC.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                TokenDescriptor {
                    address: NATIVE_TOKEN_ADDRESS,
                    symbol: NATIVE_SYMBOL.to_string(),
                    decimals: NATIVE_DECIMALS,
                },
                TokenDescriptor {
                    address: USDC_ADDRESS,
                    symbol: "USDC".to_string(),
                    decimals: 6,
                },
            ],
        }
    }

    /// Case-insensitive exact-match lookup.
    pub fn lookup(&self, symbol: &str) -> Result<&TokenDescriptor, UnknownTokenError> {
        let wanted = symbol.trim();
        self.entries
            .iter()
            .find(|token| token.symbol.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTokenError(wanted.to_string()))
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
