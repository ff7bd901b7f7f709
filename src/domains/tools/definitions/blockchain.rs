//! Wallet, balance and tipping tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolDefinition;
use crate::domains::tools::ToolError;

/// Parameters for `user-wallets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserWalletsParams {
    #[schemars(description = "ID of the user to get wallet information for")]
    pub user_id: String,
}

impl UserWalletsParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserWalletsTool;

impl ToolDefinition for UserWalletsTool {
    const NAME: &'static str = "user-wallets";
    const DESCRIPTION: &'static str = "Get wallets associated with a user";
    type Params = UserWalletsParams;
}

/// Supported chains for balance lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Blockchain {
    Ethereum,
    Solana,
}

/// Parameters for `token-balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceParams {
    #[schemars(description = "Wallet address to check token balance for")]
    pub wallet_address: String,

    #[schemars(description = "Blockchain network (ethereum or solana)")]
    pub blockchain: Blockchain,

    #[schemars(description = "Token mint address (required for Solana SPL tokens)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_mint: Option<String>,
}

impl TokenBalanceParams {
    pub fn new(wallet_address: impl Into<String>, blockchain: Blockchain) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            blockchain,
            token_mint: None,
        }
    }

    pub fn with_token_mint(mut self, mint: impl Into<String>) -> Self {
        self.token_mint = Some(mint.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct TokenBalanceTool;

impl ToolDefinition for TokenBalanceTool {
    const NAME: &'static str = "token-balance";
    const DESCRIPTION: &'static str = "Get token balance";
    type Params = TokenBalanceParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        if params.blockchain == Blockchain::Solana && params.token_mint.is_none() {
            return Err(ToolError::invalid_arguments(
                Self::NAME,
                "tokenMint is required for Solana SPL tokens",
            ));
        }
        Ok(())
    }
}

/// Tokens that can be tipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Audio,
    Usdc,
    Sol,
}

/// Parameters for `send-tip`.
#[derive(Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendTipParams {
    #[schemars(description = "ID of the user sending the tip")]
    pub sender_user_id: String,

    #[schemars(description = "ID of the user receiving the tip")]
    pub receiver_user_id: String,

    #[schemars(description = "Amount to tip")]
    pub amount: String,

    #[schemars(description = "Type of token to send")]
    pub token_type: TokenType,

    #[schemars(description = "Wallet address of the sender")]
    pub sender_wallet_address: String,

    /// Only ever a test key in these examples.
    #[schemars(description = "Private key of the sender wallet (IMPORTANT: only use for testing!)")]
    pub signer_private_key: String,

    #[schemars(description = "Optional message to include with the tip")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Custom Debug implementation to redact the signing key from logs.
impl std::fmt::Debug for SendTipParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendTipParams")
            .field("sender_user_id", &self.sender_user_id)
            .field("receiver_user_id", &self.receiver_user_id)
            .field("amount", &self.amount)
            .field("token_type", &self.token_type)
            .field("sender_wallet_address", &self.sender_wallet_address)
            .field("signer_private_key", &"[REDACTED]")
            .field("message", &self.message)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SendTipTool;

impl ToolDefinition for SendTipTool {
    const NAME: &'static str = "send-tip";
    const DESCRIPTION: &'static str = "Send a tip";
    type Params = SendTipParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        match params.amount.trim().parse::<f64>() {
            Ok(amount) if amount > 0.0 => Ok(()),
            _ => Err(ToolError::invalid_arguments(
                Self::NAME,
                format!("amount must be a positive number, got '{}'", params.amount),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tip(amount: &str) -> SendTipParams {
        SendTipParams {
            sender_user_id: "123".to_string(),
            receiver_user_id: "456".to_string(),
            amount: amount.to_string(),
            token_type: TokenType::Audio,
            sender_wallet_address: "0x123abc...".to_string(),
            signer_private_key: "0xprivate...".to_string(),
            message: Some("Love your music!".to_string()),
        }
    }

    #[test]
    fn test_token_type_wire_names() {
        let value = serde_json::to_value(tip("5")).unwrap();
        assert_eq!(value["tokenType"], "AUDIO");
        assert_eq!(value["signerPrivateKey"], "0xprivate...");
        assert_eq!(serde_json::to_value(TokenType::Usdc).unwrap(), json!("USDC"));
    }

    #[test]
    fn test_send_tip_key_redacted_in_debug() {
        let debug_str = format!("{:?}", tip("5"));
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("0xprivate"));
    }

    #[test]
    fn test_send_tip_rejects_bad_amount() {
        assert!(SendTipTool::request(&tip("5")).is_ok());
        assert!(SendTipTool::request(&tip("0")).is_err());
        assert!(SendTipTool::request(&tip("five")).is_err());
    }

    #[test]
    fn test_token_balance_solana_needs_mint() {
        let ethereum = TokenBalanceParams::new("0x123abc...", Blockchain::Ethereum);
        assert!(TokenBalanceTool::request(&ethereum).is_ok());

        let solana = TokenBalanceParams::new("9xQeWvG816bUx9EP", Blockchain::Solana);
        assert!(TokenBalanceTool::request(&solana).is_err());
        assert!(TokenBalanceTool::request(&solana.with_token_mint("mint")).is_ok());
    }

    #[test]
    fn test_token_balance_arguments() {
        let value =
            serde_json::to_value(TokenBalanceParams::new("0x123abc...", Blockchain::Ethereum))
                .unwrap();
        assert_eq!(
            value,
            json!({ "walletAddress": "0x123abc...", "blockchain": "ethereum" })
        );
    }
}
