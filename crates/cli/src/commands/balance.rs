use fusion_sdk::{solana_utils::solana_sdk::pubkey::Pubkey, utils::serde::StringPubkey};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Command, Context};

/// Show the native and token balances of an owner.
#[derive(Debug, clap::Args)]
pub struct Balance {
    /// Owner, defaults to the wallet account.
    owner: Option<Pubkey>,
}

#[derive(Debug, Serialize)]
struct Output {
    owner: StringPubkey,
    lamports: u64,
    sol: Decimal,
    mint: StringPubkey,
    token_account: Option<StringPubkey>,
    token_amount_raw: u64,
    token_amount: Decimal,
}

impl Command for Balance {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let balances = client.balances(self.owner.as_ref()).await?;
        let output = Output {
            owner: balances.owner.into(),
            lamports: balances.lamports,
            sol: balances.sol,
            mint: client.program().mint,
            token_account: balances.token.account.map(Into::into),
            token_amount_raw: balances.token.amount,
            token_amount: balances.token_amount,
        };
        println!("{}", ctx.output().display_one(output)?);
        Ok(())
    }
}
