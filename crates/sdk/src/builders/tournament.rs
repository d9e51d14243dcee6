use rust_decimal::Decimal;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    system_program, sysvar,
};
use typed_builder::TypedBuilder;

use crate::{
    constants::PLAYERS_PER_SQUAD,
    discriminator::{CREATE_TOURNAMENT, JOIN_TOURNAMENT},
    utils::{decimal_to_amount, serde::StringPubkey},
};

use super::FusionProgram;

/// Create a tournament.
///
/// The id must be the platform tournament counter plus one, read right
/// before building; see [`TournamentOps`](crate::client::ops::TournamentOps).
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateTournament {
    /// Program.
    #[cfg_attr(serde, serde(default))]
    #[builder(default)]
    pub program: FusionProgram,
    /// Creator, paying for the new accounts.
    #[builder(setter(into))]
    pub creator: StringPubkey,
    /// Id of the tournament to create.
    pub tournament_id: u64,
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
    /// Registration deadline as a unix timestamp in seconds.
    pub registration_deadline: i64,
    /// Duration in days.
    pub duration_days: u16,
}

impl CreateTournament {
    /// Entry fee in minor units of the mint.
    pub fn entry_fee_amount(&self) -> crate::Result<u64> {
        decimal_to_amount(self.entry_fee, self.program.mint_decimals)
    }

    /// Build the `create_tournament` instruction.
    pub fn build_instruction(&self) -> crate::Result<Instruction> {
        if self.tournament_id == 0 {
            return Err(crate::Error::precondition("tournament ids start at 1"));
        }
        let entry_fee = self.entry_fee_amount()?;

        let program = &self.program;
        let id = self.tournament_id;
        let accounts = vec![
            AccountMeta::new(program.find_platform_address()?, false),
            AccountMeta::new(program.find_tournament_address(id)?, false),
            AccountMeta::new(program.find_prize_vault_address(id)?, false),
            AccountMeta::new_readonly(program.mint.0, false),
            AccountMeta::new(self.creator.0, true),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(program.token_program_id.0, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ];

        Ok(program
            .instruction(CREATE_TOURNAMENT)
            .arg(&self.name)?
            .arg(&self.competition)?
            .arg(entry_fee)?
            .arg(self.max_participants)?
            .arg(self.registration_deadline)?
            .arg(self.duration_days)?
            .accounts(accounts)
            .build())
    }
}

/// Join a tournament with a squad.
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, TypedBuilder)]
pub struct JoinTournament {
    /// Program.
    #[cfg_attr(serde, serde(default))]
    #[builder(default)]
    pub program: FusionProgram,
    /// Participant, paying the entry fee.
    #[builder(setter(into))]
    pub participant: StringPubkey,
    /// Id of the tournament.
    pub tournament_id: u64,
    /// Team name.
    #[builder(setter(into))]
    pub team_name: String,
    /// Player ids of the squad.
    #[builder(setter(into))]
    pub player_ids: Vec<u32>,
    /// Token account debited for the entry fee.
    ///
    /// Defaults to the associated token account of the participant.
    #[cfg_attr(serde, serde(default))]
    #[builder(default, setter(into, strip_option))]
    pub token_account: Option<StringPubkey>,
}

impl JoinTournament {
    /// Check that `player_ids` is a complete squad.
    pub fn check_squad(player_ids: &[u32]) -> crate::Result<()> {
        if player_ids.len() != PLAYERS_PER_SQUAD {
            return Err(crate::Error::precondition(format!(
                "a squad must have exactly {PLAYERS_PER_SQUAD} players, got {}",
                player_ids.len()
            )));
        }
        Ok(())
    }

    /// Build the `join_tournament` instruction.
    pub fn build_instruction(&self) -> crate::Result<Instruction> {
        Self::check_squad(&self.player_ids)?;

        let program = &self.program;
        let id = self.tournament_id;
        let participant = self.participant.0;
        let token_account = match self.token_account {
            Some(account) => account.0,
            None => program.find_associated_token_address(&participant)?,
        };
        let accounts = vec![
            AccountMeta::new(program.find_platform_address()?, false),
            AccountMeta::new(program.find_tournament_address(id)?, false),
            AccountMeta::new(program.find_team_address(id, &participant)?, false),
            AccountMeta::new(program.find_player_stats_address(&participant)?, false),
            AccountMeta::new(program.find_participant_list_address(id)?, false),
            AccountMeta::new(token_account, false),
            AccountMeta::new(program.find_prize_vault_address(id)?, false),
            AccountMeta::new(participant, true),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(program.token_program_id.0, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ];

        Ok(program
            .instruction(JOIN_TOURNAMENT)
            .arg(&self.team_name)?
            .arg(self.player_ids.as_slice())?
            .accounts(accounts)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use solana_sdk::pubkey::Pubkey;

    use super::*;
    use crate::{
        codec::Cursor,
        constants::{DEVNET_USDC_MINT, TOKEN_PROGRAM_ID},
        discriminator::{CREATE_TOURNAMENT_DISCRIMINATOR, JOIN_TOURNAMENT_DISCRIMINATOR},
    };

    fn create(entry_fee: Decimal) -> CreateTournament {
        CreateTournament::builder()
            .creator(Pubkey::new_unique())
            .tournament_id(1)
            .name("Weekend Cup")
            .competition("Premier League")
            .entry_fee(entry_fee)
            .max_participants(100)
            .registration_deadline(1_735_689_600)
            .duration_days(7)
            .build()
    }

    #[test]
    fn create_tournament_payload() {
        let ix = create(dec!(10.0)).build_instruction().unwrap();
        let mut cursor = Cursor::new(&ix.data);
        assert_eq!(cursor.take(8).unwrap(), CREATE_TOURNAMENT_DISCRIMINATOR);
        assert_eq!(cursor.read::<String>().unwrap(), "Weekend Cup");
        assert_eq!(cursor.read::<String>().unwrap(), "Premier League");
        assert_eq!(cursor.read::<u64>().unwrap(), 10_000_000);
        assert_eq!(cursor.read::<u16>().unwrap(), 100);
        assert_eq!(cursor.read::<i64>().unwrap(), 1_735_689_600);
        assert_eq!(cursor.read::<u16>().unwrap(), 7);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn create_tournament_accounts() {
        let builder = create(dec!(5));
        let program = FusionProgram::default();
        let ix = builder.build_instruction().unwrap();
        assert_eq!(ix.program_id, program.id.0);

        let expected = [
            (program.find_platform_address().unwrap(), false, true),
            (program.find_tournament_address(1).unwrap(), false, true),
            (program.find_prize_vault_address(1).unwrap(), false, true),
            (DEVNET_USDC_MINT, false, false),
            (builder.creator.0, true, true),
            (system_program::ID, false, false),
            (TOKEN_PROGRAM_ID, false, false),
            (sysvar::rent::ID, false, false),
        ];
        let actual = ix
            .accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[test]
    fn create_tournament_rejects_bad_fee() {
        assert!(matches!(
            create(dec!(-1)).build_instruction(),
            Err(crate::Error::Precondition(_))
        ));
        assert!(matches!(
            create(dec!(0.0000001)).build_instruction(),
            Err(crate::Error::Precondition(_))
        ));
    }

    #[test]
    fn entry_fee_uses_configured_mint_decimals() {
        let program = FusionProgram::builder()
            .id(Pubkey::new_unique())
            .mint(Pubkey::new_unique())
            .mint_decimals(9)
            .build();
        let mut builder = create(dec!(10));
        builder.program = program.clone();
        let ix = builder.build_instruction().unwrap();

        let mut cursor = Cursor::new(&ix.data);
        cursor.skip(8).unwrap();
        cursor.read::<String>().unwrap();
        cursor.read::<String>().unwrap();
        let raw = cursor.read::<u64>().unwrap();
        assert_eq!(raw, 10_000_000_000);
        assert_eq!(
            crate::utils::amount_to_decimal(raw, program.mint_decimals).unwrap(),
            dec!(10)
        );
    }

    fn join(player_ids: Vec<u32>) -> JoinTournament {
        JoinTournament::builder()
            .participant(Pubkey::new_unique())
            .tournament_id(3)
            .team_name("Invincibles")
            .player_ids(player_ids)
            .build()
    }

    #[test]
    fn join_tournament_payload_and_accounts() {
        let builder = join((100..115).collect());
        let program = &builder.program;
        let participant = builder.participant.0;
        let ix = builder.build_instruction().unwrap();

        let mut cursor = Cursor::new(&ix.data);
        assert_eq!(cursor.take(8).unwrap(), JOIN_TOURNAMENT_DISCRIMINATOR);
        assert_eq!(cursor.read::<String>().unwrap(), "Invincibles");
        assert_eq!(
            cursor.read::<Vec<u32>>().unwrap(),
            (100..115).collect::<Vec<_>>()
        );
        assert_eq!(cursor.remaining(), 0);

        let expected = [
            (program.find_platform_address().unwrap(), false, true),
            (program.find_tournament_address(3).unwrap(), false, true),
            (program.find_team_address(3, &participant).unwrap(), false, true),
            (program.find_player_stats_address(&participant).unwrap(), false, true),
            (program.find_participant_list_address(3).unwrap(), false, true),
            (program.find_associated_token_address(&participant).unwrap(), false, true),
            (program.find_prize_vault_address(3).unwrap(), false, true),
            (participant, true, true),
            (system_program::ID, false, false),
            (TOKEN_PROGRAM_ID, false, false),
            (sysvar::rent::ID, false, false),
        ];
        let actual = ix
            .accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[test]
    fn join_tournament_with_explicit_token_account() {
        let token_account = Pubkey::new_unique();
        let mut builder = join(vec![1; 15]);
        builder.token_account = Some(token_account.into());
        let ix = builder.build_instruction().unwrap();
        assert_eq!(ix.accounts[5].pubkey, token_account);
    }

    #[test]
    fn join_tournament_requires_full_squad() {
        for len in [0, 14, 16] {
            let err = join(vec![7; len]).build_instruction().unwrap_err();
            assert!(matches!(err, crate::Error::Precondition(_)), "{len}");
        }
    }
}
