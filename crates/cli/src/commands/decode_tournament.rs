use base64::{engine::general_purpose::STANDARD, Engine};
use fusion_sdk::accounts::TournamentAccount;

use super::{tournament::TournamentView, Command, Context};

/// Decode raw tournament account data, offline.
#[derive(Debug, clap::Args)]
pub struct DecodeTournament {
    /// Account data encoded in base64, discriminator included.
    data: String,
}

impl Command for DecodeTournament {
    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()> {
        let data = STANDARD.decode(self.data.trim())?;
        let account = TournamentAccount::decode(&data)?;
        let view = TournamentView::new(account, ctx.program().mint_decimals)?;
        println!("{}", ctx.output().display_one(view)?);
        Ok(())
    }
}
