use solana_sdk::pubkey::Pubkey;

use crate::{
    codec::{Cursor, EncodingError},
    constants::TOKEN_ACCOUNT_AMOUNT_OFFSET,
};

/// Read the amount of an SPL token account.
pub fn read_token_amount(data: &[u8]) -> Result<u64, EncodingError> {
    let mut cursor = Cursor::new(data);
    cursor.skip(TOKEN_ACCOUNT_AMOUNT_OFFSET)?;
    cursor.read()
}

/// Leading fields of an SPL token account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccount {
    /// Mint.
    pub mint: Pubkey,
    /// Owner.
    pub owner: Pubkey,
    /// Amount in minor units.
    pub amount: u64,
}

impl TokenAccount {
    /// Decode the raw account data.
    pub fn decode(data: &[u8]) -> Result<Self, EncodingError> {
        let mut cursor = Cursor::new(data);
        Ok(Self {
            mint: cursor.read()?,
            owner: cursor.read()?,
            amount: cursor.read()?,
        })
    }
}
