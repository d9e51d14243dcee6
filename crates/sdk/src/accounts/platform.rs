use solana_sdk::pubkey::Pubkey;

use crate::{
    codec::{Cursor, EncodingError},
    constants::ACCOUNT_DISCRIMINATOR_LEN,
};

/// Decoded prefix of the platform account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformAccount {
    /// Authority.
    pub authority: Pubkey,
    /// Number of tournaments created so far.
    pub tournament_count: u64,
}

impl PlatformAccount {
    /// Decode the raw account data, discriminator included.
    pub fn decode(data: &[u8]) -> Result<Self, EncodingError> {
        let mut cursor = Cursor::new(data);
        cursor.skip(ACCOUNT_DISCRIMINATOR_LEN)?;
        Ok(Self {
            authority: cursor.read()?,
            tournament_count: cursor.read()?,
        })
    }

    /// Id the next created tournament will get.
    pub fn next_tournament_id(&self) -> Option<u64> {
        self.tournament_count.checked_add(1)
    }
}
