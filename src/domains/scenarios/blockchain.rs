//! Wallet lookup, balance check and a tip to an artist.

use super::{Scenario, Walkthrough};
use crate::core::{McpClient, Result};
use crate::domains::tools::definitions::{
    Blockchain, SendTipParams, SendTipTool, TokenBalanceParams, TokenBalanceTool, TokenType,
    UserWalletsParams, UserWalletsTool,
};

const WALLET: &str = "0x123abc...";

pub struct BlockchainScenario;

impl Scenario for BlockchainScenario {
    fn name(&self) -> &'static str {
        "blockchain"
    }

    fn title(&self) -> &'static str {
        "BLOCKCHAIN EXAMPLE"
    }

    fn build(&self, client: &McpClient) -> Result<Walkthrough> {
        let tip = SendTipParams {
            sender_user_id: "123".to_string(),
            receiver_user_id: "456".to_string(),
            amount: "5".to_string(),
            token_type: TokenType::Audio,
            sender_wallet_address: WALLET.to_string(),
            signer_private_key: "0xprivate...".to_string(),
            message: Some("Love your music!".to_string()),
        };

        Ok(Walkthrough::new()
            .show(
                "User Wallets Request",
                client.tool::<UserWalletsTool>(&UserWalletsParams::new("123"))?,
            )
            .silent(client.tool::<TokenBalanceTool>(&TokenBalanceParams::new(
                WALLET,
                Blockchain::Ethereum,
            ))?)
            .show("Send Tip Request", client.tool::<SendTipTool>(&tip)?)
            .answer(
                "Example LLM response",
                "I've sent a 5 AUDIO token tip to the artist. Your current balance is now 95 AUDIO tokens.",
            ))
    }
}
