use fusion_sdk::{solana_utils::solana_sdk::pubkey::Pubkey, utils::serde::StringPubkey};
use serde::Serialize;

use super::{Command, Context};

/// Derive the addresses used by the tournament program.
#[derive(Debug, clap::Args)]
pub struct Address {
    /// Derive tournament scoped addresses for this id.
    #[arg(long)]
    tournament: Option<u64>,
    /// Derive participant scoped addresses for this owner.
    #[arg(long)]
    participant: Option<Pubkey>,
}

#[derive(Debug, Serialize)]
struct Addresses {
    program: StringPubkey,
    platform: StringPubkey,
    #[serde(skip_serializing_if = "Option::is_none")]
    tournament: Option<StringPubkey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prize_vault: Option<StringPubkey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    participant_list: Option<StringPubkey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    player_stats: Option<StringPubkey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_account: Option<StringPubkey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<StringPubkey>,
}

impl Command for Address {
    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()> {
        let program = ctx.program();
        let mut addresses = Addresses {
            program: program.id,
            platform: program.find_platform_address()?.into(),
            tournament: None,
            prize_vault: None,
            participant_list: None,
            player_stats: None,
            token_account: None,
            team: None,
        };

        if let Some(id) = self.tournament {
            addresses.tournament = Some(program.find_tournament_address(id)?.into());
            addresses.prize_vault = Some(program.find_prize_vault_address(id)?.into());
            addresses.participant_list = Some(program.find_participant_list_address(id)?.into());
        }

        if let Some(participant) = self.participant.as_ref() {
            addresses.player_stats = Some(program.find_player_stats_address(participant)?.into());
            addresses.token_account =
                Some(program.find_associated_token_address(participant)?.into());
            if let Some(id) = self.tournament {
                addresses.team = Some(program.find_team_address(id, participant)?.into());
            }
        }

        println!("{}", ctx.output().display_one(addresses)?);
        Ok(())
    }
}
