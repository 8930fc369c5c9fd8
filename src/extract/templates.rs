//! Prompt templates handed to the extraction service.
//!
//! Each template instructs the model to answer with a JSON markdown block
//! containing only the extracted values, using `null` for anything it cannot
//! determine. The `{{currentMessage}}` placeholder is substituted by
//! [`super::compose_context`].

/// Extraction template for token transfers.
pub const TRANSFER_TEMPLATE: &str = r#"Respond with a JSON markdown block containing only the extracted values. Use null for any values that cannot be determined.

Example response:
```json
{
    "tokenAddress": "<TOKEN_ADDRESS>",
    "recipient": "<RECIPIENT_ADDRESS>",
    "amount": "1000",
    "useAGW": true,
    "tokenSymbol": "USDC"
}
```

User message:
"{{currentMessage}}"

Given the message, extract the following information about the requested token transfer:
- Token contract address
- Recipient wallet address
- Amount to transfer
- Whether to use Abstract Global Wallet aka AGW
- The symbol of the token that wants to be transferred. Between 1 to 6 characters usually.

If the user did not specify "global wallet", "AGW", "agw", or "abstract global wallet" in their message, set useAGW to false, otherwise set it to true.

Respond with a JSON markdown block containing only the extracted values."#;

/// Extraction template for balance queries.
pub const BALANCE_TEMPLATE: &str = r#"Respond with a JSON markdown block containing only the extracted values. Use null for any values that cannot be determined.

Example response:
```json
{
    "tokenAddress": "<TOKEN_ADDRESS>",
    "walletAddress": "<WALLET_ADDRESS>",
    "tokenSymbol": "USDC"
}
```

User message:
"{{currentMessage}}"

Given the message, extract the following information about the requested balance check:
- Token contract address (optional, if not specified set to null)
- Wallet address to check (optional, if not specified set to null)
- The symbol of the token to check (optional, if not specified set to null). Between 1 to 6 characters usually.

Respond with a JSON markdown block containing only the extracted values."#;

/// Extraction template for token deployments.
pub const DEPLOY_TEMPLATE: &str = r#"Respond with a JSON markdown block containing only the extracted values. Use null for any values that cannot be determined.

Example response:
```json
{
    "name": "My Token",
    "symbol": "MTK",
    "initialSupply": "1000000",
    "useAGW": true
}
```

User message:
"{{currentMessage}}"

Given the message, extract the following information about the requested token deployment:
- Token name
- Token symbol (usually 3-4 characters)
- Initial supply amount
- Whether to use Abstract Global Wallet aka AGW

If the user did not specify "global wallet", "AGW", "agw", or "abstract global wallet" in their message, set useAGW to false, otherwise set it to true.

Respond with a JSON markdown block containing only the extracted values."#;
