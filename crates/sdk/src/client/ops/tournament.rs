use fusion_solana_utils::{transaction_builder::TransactionBuilder, wallet::Wallet};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use typed_builder::TypedBuilder;

use crate::{
    builders::{CreateTournament, JoinTournament},
    client::balance::token_balance,
};

/// Parameters of a new tournament.
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, TypedBuilder)]
pub struct TournamentParams {
    /// Name.
    #[builder(setter(into))]
    pub name: String,
    /// Competition.
    #[builder(setter(into))]
    pub competition: String,
    /// Entry fee in token units.
    pub entry_fee: Decimal,
    /// Max number of participants.
    pub max_participants: u16,
    /// Registration deadline (unix seconds).
    pub registration_deadline: i64,
    /// Duration in days.
    pub duration_days: u16,
}

/// Outcome of a successful entry fee check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryFeeCheck {
    /// Entry fee in minor units.
    pub entry_fee: u64,
    /// Balance in minor units.
    pub balance: u64,
    /// The token account that pays, `None` if the entry is free and the
    /// participant holds no token account.
    pub token_account: Option<Pubkey>,
}

/// Tournament operations.
#[allow(async_fn_in_trait)]
pub trait TournamentOps<W> {
    /// Create a tournament.
    ///
    /// Reads the platform counter and targets `counter + 1`; the output of the
    /// returned builder is that id. If another creator claims the id first the
    /// program rejects the transaction, and the caller should start over from
    /// a fresh counter read.
    async fn create_tournament(
        &self,
        params: &TournamentParams,
    ) -> crate::Result<TransactionBuilder<W, u64>>;

    /// Join a tournament.
    ///
    /// The entry fee is debited from `token_account`, or from the associated
    /// token account of the payer if not provided.
    fn join_tournament(
        &self,
        tournament_id: u64,
        team_name: &str,
        player_ids: &[u32],
        token_account: Option<&Pubkey>,
    ) -> crate::Result<TransactionBuilder<W>>;

    /// Check that the payer can afford the entry fee of a tournament.
    ///
    /// This only improves error reporting; the program enforces the transfer.
    async fn check_entry_fee(&self, tournament_id: u64) -> crate::Result<EntryFeeCheck>;
}

impl<W: Wallet + Clone> TournamentOps<W> for crate::Client<W> {
    async fn create_tournament(
        &self,
        params: &TournamentParams,
    ) -> crate::Result<TransactionBuilder<W, u64>> {
        let creator = self.try_payer()?;
        let tournament_id = self.next_tournament_id().await?;
        let ix = CreateTournament::builder()
            .program(self.program().clone())
            .creator(creator)
            .tournament_id(tournament_id)
            .name(params.name.clone())
            .competition(params.competition.clone())
            .entry_fee(params.entry_fee)
            .max_participants(params.max_participants)
            .registration_deadline(params.registration_deadline)
            .duration_days(params.duration_days)
            .build()
            .build_instruction()?;
        tracing::debug!(tournament_id, %creator, "prepared create_tournament");
        Ok(self.transaction().instruction(ix).output(tournament_id))
    }

    fn join_tournament(
        &self,
        tournament_id: u64,
        team_name: &str,
        player_ids: &[u32],
        token_account: Option<&Pubkey>,
    ) -> crate::Result<TransactionBuilder<W>> {
        let participant = self.try_payer()?;
        let mut builder = JoinTournament::builder()
            .program(self.program().clone())
            .participant(participant)
            .tournament_id(tournament_id)
            .team_name(team_name)
            .player_ids(player_ids.to_vec())
            .build();
        builder.token_account = token_account.copied().map(Into::into);
        let ix = builder.build_instruction()?;
        Ok(self.transaction().instruction(ix))
    }

    async fn check_entry_fee(&self, tournament_id: u64) -> crate::Result<EntryFeeCheck> {
        let participant = self.try_payer()?;
        let tournament = self
            .tournament(tournament_id)
            .await?
            .into_value()
            .ok_or_else(|| {
                crate::Error::precondition(format!("tournament {tournament_id} not found"))
            })?;
        let balance = token_balance(self.rpc(), self.program(), &participant).await?;
        if balance.amount < tournament.entry_fee {
            let decimals = self.program().mint_decimals;
            return Err(crate::Error::precondition(format!(
                "insufficient balance: entry fee is {}, balance is {}",
                tournament.entry_fee_decimal(decimals)?,
                crate::utils::amount_to_decimal(balance.amount, decimals)?,
            )));
        }
        Ok(EntryFeeCheck {
            entry_fee: tournament.entry_fee,
            balance: balance.amount,
            token_account: balance.account,
        })
    }
}
