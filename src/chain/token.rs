//! Token descriptors and base-unit scaling.

use alloy::primitives::utils::{format_units, parse_units};
use alloy::primitives::{Address, U256, address};
use serde::{Deserialize, Serialize};

use crate::chain::client::ChainReader;
use crate::error::ExecutionError;

/// Sentinel address for the chain's native asset. Distinct from any ERC-20
/// contract; transfers to it never go through contract calls.
pub const NATIVE_TOKEN_ADDRESS: Address = address!("000000000000000000000000000000000000800a");

/// Native asset symbol.
pub const NATIVE_SYMBOL: &str = "ETH";

/// Native asset decimal count.
pub const NATIVE_DECIMALS: u8 = 18;

/// Metadata for one transferable asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenDescriptor {
    /// Fixed descriptor for the native asset; involves no chain read.
    pub fn native() -> Self {
        Self {
            address: NATIVE_TOKEN_ADDRESS,
            symbol: NATIVE_SYMBOL.to_string(),
            decimals: NATIVE_DECIMALS,
        }
    }
}

/// Whether an address is the native-asset sentinel.
pub fn is_native_token(address: Address) -> bool {
    address == NATIVE_TOKEN_ADDRESS
}

/// Fetch metadata for a token address.
///
/// The native sentinel short-circuits; contract tokens read `symbol()` and
/// `decimals()` concurrently and join before proceeding.
pub async fn token_metadata(
    reader: &dyn ChainReader,
    token: Address,
) -> Result<TokenDescriptor, ExecutionError> {
    if is_native_token(token) {
        return Ok(TokenDescriptor::native());
    }
    let (symbol, decimals) =
        tokio::try_join!(reader.erc20_symbol(token), reader.erc20_decimals(token))?;
    Ok(TokenDescriptor {
        address: token,
        symbol,
        decimals,
    })
}

/// Scale a human decimal string into base units.
pub fn scale_amount(amount: &str, decimals: u8) -> Result<U256, ExecutionError> {
    parse_units(amount.trim(), decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| ExecutionError::Amount {
            amount: amount.to_string(),
            decimals,
            reason: e.to_string(),
        })
}

/// Format base units back into a human decimal string.
pub fn format_amount(value: U256, decimals: u8) -> String {
    format_units(value, decimals)
        .map(|formatted| trim_trailing_zeros(&formatted))
        .unwrap_or_else(|_| value.to_string())
}

fn trim_trailing_zeros(formatted: &str) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted.to_string()
    }
}
