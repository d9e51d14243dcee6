use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use typed_builder::TypedBuilder;

use crate::{
    codec::Encode,
    constants::{
        ASSOCIATED_TOKEN_PROGRAM_ID, DEVNET_PROGRAM_ID, DEVNET_USDC_MINT, TOKEN_PROGRAM_ID,
        USDC_DECIMALS,
    },
    discriminator, pda,
    utils::serde::StringPubkey,
};

/// Instruction builders related to tournaments.
pub mod tournament;

pub use tournament::{CreateTournament, JoinTournament};

/// Deployment of the tournament program and the token it settles in.
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct FusionProgram {
    /// Program ID.
    #[builder(setter(into))]
    pub id: StringPubkey,
    /// Mint of the entry fee token.
    #[builder(default = DEVNET_USDC_MINT.into(), setter(into))]
    pub mint: StringPubkey,
    /// Decimals of the mint.
    #[builder(default = USDC_DECIMALS)]
    pub mint_decimals: u8,
    /// Token program ID.
    #[builder(default = TOKEN_PROGRAM_ID.into(), setter(into))]
    pub token_program_id: StringPubkey,
    /// Associated token program ID.
    #[builder(default = ASSOCIATED_TOKEN_PROGRAM_ID.into(), setter(into))]
    pub associated_token_program_id: StringPubkey,
}

impl Default for FusionProgram {
    fn default() -> Self {
        Self::builder().id(DEVNET_PROGRAM_ID).build()
    }
}

impl FusionProgram {
    /// Create an instruction builder.
    pub fn instruction(&self, name: &str) -> InstructionBuilder<'_> {
        InstructionBuilder {
            program: self,
            data: discriminator::resolve(name).to_vec(),
            accounts: vec![],
        }
    }

    /// Find platform address.
    pub fn find_platform_address(&self) -> crate::Result<Pubkey> {
        Ok(pda::find_platform_address(&self.id)?.0)
    }

    /// Find tournament address.
    pub fn find_tournament_address(&self, tournament_id: u64) -> crate::Result<Pubkey> {
        Ok(pda::find_tournament_address(tournament_id, &self.id)?.0)
    }

    /// Find prize vault address.
    pub fn find_prize_vault_address(&self, tournament_id: u64) -> crate::Result<Pubkey> {
        Ok(pda::find_prize_vault_address(tournament_id, &self.id)?.0)
    }

    /// Find team address.
    pub fn find_team_address(
        &self,
        tournament_id: u64,
        participant: &Pubkey,
    ) -> crate::Result<Pubkey> {
        Ok(pda::find_team_address(tournament_id, participant, &self.id)?.0)
    }

    /// Find player stats address.
    pub fn find_player_stats_address(&self, participant: &Pubkey) -> crate::Result<Pubkey> {
        Ok(pda::find_player_stats_address(participant, &self.id)?.0)
    }

    /// Find participant list address.
    pub fn find_participant_list_address(&self, tournament_id: u64) -> crate::Result<Pubkey> {
        Ok(pda::find_participant_list_address(tournament_id, &self.id)?.0)
    }

    /// Find the associated token account of `owner` for the configured mint.
    pub fn find_associated_token_address(&self, owner: &Pubkey) -> crate::Result<Pubkey> {
        Ok(pda::find_associated_token_address(
            owner,
            &self.mint,
            &self.token_program_id,
            &self.associated_token_program_id,
        )?
        .0)
    }
}

/// Builder for program instructions.
pub struct InstructionBuilder<'a> {
    program: &'a FusionProgram,
    data: Vec<u8>,
    accounts: Vec<AccountMeta>,
}

impl InstructionBuilder<'_> {
    /// Append an encoded argument.
    pub fn arg(mut self, arg: impl Encode) -> crate::Result<Self> {
        arg.encode(&mut self.data)?;
        Ok(self)
    }

    /// Append accounts.
    pub fn accounts(mut self, mut accounts: Vec<AccountMeta>) -> Self {
        self.accounts.append(&mut accounts);
        self
    }

    /// Build.
    pub fn build(self) -> Instruction {
        Instruction {
            program_id: self.program.id.0,
            accounts: self.accounts,
            data: self.data,
        }
    }
}
