use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

use crate::{
    codec::{Cursor, Decode, EncodingError},
    constants::ACCOUNT_DISCRIMINATOR_LEN,
    utils::amount_to_decimal,
};

/// Tournament status.
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(serde, serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum TournamentStatus {
    /// Open for registration.
    Created,
    /// Running.
    Active,
    /// Finished.
    Completed,
    /// Cancelled.
    Cancelled,
}

impl Decode for TournamentStatus {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError> {
        let value = cursor.read::<u8>()?;
        Self::try_from(value).map_err(|_| EncodingError::InvalidTag {
            kind: "tournament status",
            value,
        })
    }
}

/// Decoded tournament account.
#[cfg_attr(serde, derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentAccount {
    /// Id.
    pub id: u64,
    /// Creator.
    #[cfg_attr(serde, serde(with = "crate::utils::serde::pubkey"))]
    pub creator: Pubkey,
    /// Name.
    pub name: String,
    /// Competition.
    pub competition: String,
    /// Entry fee in minor units.
    pub entry_fee: u64,
    /// Max number of participants.
    pub max_participants: u16,
    /// Current number of participants.
    pub current_participants: u32,
    /// Prize pool in minor units.
    pub prize_pool: u64,
    /// Registration deadline (unix seconds).
    pub registration_deadline: i64,
    /// Duration in days.
    pub duration_days: u16,
    /// End time (unix seconds).
    pub end_time: i64,
    /// Current gameweek.
    pub current_gameweek: u32,
    /// Status.
    pub status: TournamentStatus,
    /// Whether the prizes have been distributed.
    pub prizes_distributed: bool,
}

impl TournamentAccount {
    /// Decode the raw account data, discriminator included.
    ///
    /// The discriminator is skipped without being checked. Trailing bytes are
    /// ignored.
    pub fn decode(data: &[u8]) -> Result<Self, EncodingError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(ACCOUNT_DISCRIMINATOR_LEN)?;
        Ok(Self {
            id: cursor.read()?,
            creator: cursor.read()?,
            name: cursor.read()?,
            competition: cursor.read()?,
            entry_fee: cursor.read()?,
            max_participants: cursor.read()?,
            current_participants: cursor.read()?,
            prize_pool: cursor.read()?,
            registration_deadline: cursor.read()?,
            duration_days: cursor.read()?,
            end_time: cursor.read()?,
            current_gameweek: cursor.read()?,
            status: cursor.read()?,
            prizes_distributed: cursor.read()?,
        })
    }

    /// Entry fee in token units of a mint with `decimals`.
    pub fn entry_fee_decimal(&self, decimals: u8) -> crate::Result<Decimal> {
        amount_to_decimal(self.entry_fee, decimals)
    }

    /// Prize pool in token units of a mint with `decimals`.
    pub fn prize_pool_decimal(&self, decimals: u8) -> crate::Result<Decimal> {
        amount_to_decimal(self.prize_pool, decimals)
    }

    /// Returns whether the tournament has reached its max participants.
    pub fn is_full(&self) -> bool {
        self.current_participants >= u32::from(self.max_participants)
    }
}
