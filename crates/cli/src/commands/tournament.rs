use eyre::OptionExt;
use fusion_sdk::{
    accounts::TournamentAccount,
    builders::JoinTournament,
    client::ops::{TournamentOps, TournamentParams},
    solana_utils::solana_sdk::pubkey::Pubkey,
};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

use super::Context;

/// Tournament commands.
#[derive(Debug, clap::Args)]
pub struct Tournament {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Create a tournament with the next id of the platform counter.
    Create {
        /// Name.
        #[arg(long)]
        name: String,
        /// Competition, e.g. `Premier League`.
        #[arg(long)]
        competition: String,
        /// Entry fee in token units.
        #[arg(long)]
        entry_fee: Decimal,
        /// Max number of participants.
        #[arg(long)]
        max_participants: u16,
        /// Registration deadline (RFC 3339).
        #[arg(long, value_parser = parse_datetime)]
        deadline: OffsetDateTime,
        /// Duration in days.
        #[arg(long)]
        duration_days: u16,
    },
    /// Join a tournament with a squad of 15 players.
    Join {
        /// Tournament id.
        tournament: u64,
        /// Team name.
        #[arg(long)]
        team_name: String,
        /// Comma-separated player ids.
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<u32>,
        /// Token account paying the entry fee.
        ///
        /// Defaults to the account found by the balance check, or the
        /// associated token account.
        #[arg(long)]
        token_account: Option<Pubkey>,
        /// Skip the client-side entry fee check.
        #[arg(long)]
        skip_balance_check: bool,
    },
    /// Fetch a tournament.
    Get {
        /// Tournament id.
        tournament: u64,
    },
    /// Print the id the next created tournament will get.
    NextId,
}

fn parse_datetime(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    use time::format_description::well_known::Rfc3339;

    OffsetDateTime::parse(s, &Rfc3339)
}

#[derive(Debug, Serialize)]
pub(super) struct TournamentView {
    #[serde(flatten)]
    account: TournamentAccount,
    entry_fee_decimal: Decimal,
    prize_pool_decimal: Decimal,
    is_full: bool,
}

impl TournamentView {
    /// Create a view with amounts in token units of a mint with `decimals`.
    pub(super) fn new(account: TournamentAccount, decimals: u8) -> eyre::Result<Self> {
        Ok(Self {
            entry_fee_decimal: account.entry_fee_decimal(decimals)?,
            prize_pool_decimal: account.prize_pool_decimal(decimals)?,
            is_full: account.is_full(),
            account,
        })
    }
}

#[derive(Debug, Serialize)]
struct Created {
    tournament_id: u64,
    signature: String,
}

impl super::Command for Tournament {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let output = ctx.output();
        match &self.command {
            Command::Create {
                name,
                competition,
                entry_fee,
                max_participants,
                deadline,
                duration_days,
            } => {
                if *deadline <= OffsetDateTime::now_utc() {
                    eyre::bail!("registration deadline must be in the future");
                }
                let params = TournamentParams::builder()
                    .name(name)
                    .competition(competition)
                    .entry_fee(*entry_fee)
                    .max_participants(*max_participants)
                    .registration_deadline(deadline.unix_timestamp())
                    .duration_days(*duration_days)
                    .build();
                let tx = client.create_tournament(&params).await?;
                let tournament_id = *tx.get_output();
                tracing::info!(tournament_id, "creating tournament");
                if let Some(signature) = ctx.send(&tx).await? {
                    let created = Created {
                        tournament_id,
                        signature: signature.to_string(),
                    };
                    println!("{}", output.display_one(created)?);
                }
            }
            Command::Join {
                tournament,
                team_name,
                players,
                token_account,
                skip_balance_check,
            } => {
                JoinTournament::check_squad(players)?;
                let token_account = if *skip_balance_check {
                    *token_account
                } else {
                    let check = client.check_entry_fee(*tournament).await?;
                    tracing::info!(
                        entry_fee = check.entry_fee,
                        balance = check.balance,
                        "entry fee check passed"
                    );
                    token_account.or(check.token_account)
                };
                let token_account = token_account.as_ref();
                let tx = client.join_tournament(*tournament, team_name, players, token_account)?;
                ctx.send(&tx).await?;
            }
            Command::Get { tournament } => {
                let account = client
                    .tournament(*tournament)
                    .await?
                    .into_value()
                    .ok_or_eyre("tournament not found")?;
                let view = TournamentView::new(account, client.program().mint_decimals)?;
                println!("{}", output.display_one(view)?);
            }
            Command::NextId => {
                println!("{}", client.next_tournament_id().await?);
            }
        }
        Ok(())
    }
}
