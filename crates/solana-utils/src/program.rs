use solana_sdk::pubkey::Pubkey;

use crate::{config::Config, transaction_builder::TransactionBuilder, wallet::Wallet};

/// Program.
#[derive(Clone)]
pub struct Program<W> {
    program_id: Pubkey,
    cfg: Config<W>,
}

impl<W> Program<W> {
    /// Create a new [`Program`].
    pub fn new(program_id: Pubkey, cfg: Config<W>) -> Self {
        Self { program_id, cfg }
    }
}

impl<W: Wallet + Clone> Program<W> {
    /// Create a [`TransactionBuilder`].
    pub fn transaction(&self) -> TransactionBuilder<W> {
        TransactionBuilder::new(self.program_id, &self.cfg)
    }
}
