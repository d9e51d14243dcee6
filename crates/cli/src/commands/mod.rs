use std::path::Path;

use enum_dispatch::enum_dispatch;
use eyre::OptionExt;
use fusion_sdk::{
    builders::FusionProgram,
    solana_utils::{
        solana_sdk::signature::Signature, transaction_builder::TransactionBuilder,
        wallet::WalletKind,
    },
    Client,
};

use crate::config::OutputFormat;

use address::Address;
use balance::Balance;
use decode_tournament::DecodeTournament;
use discriminator::Discriminator;
use init_config::InitConfig;
use tournament::Tournament;

mod address;
mod balance;
mod decode_tournament;
mod discriminator;
mod init_config;
mod tournament;

/// Commands.
#[enum_dispatch]
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Initialize config file.
    InitConfig(InitConfig),
    /// Derive program addresses.
    Address(Address),
    /// Print the discriminator of an instruction.
    Discriminator(Discriminator),
    /// Tournament commands.
    Tournament(Tournament),
    /// Show native and token balances.
    Balance(Balance),
    /// Decode raw tournament account data.
    DecodeTournament(DecodeTournament),
}

#[enum_dispatch(Commands)]
pub(crate) trait Command {
    fn is_client_required(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()>;
}

/// Execution context of a command.
pub struct Context<'a> {
    config_path: &'a Path,
    program: &'a FusionProgram,
    output: OutputFormat,
    client: Option<&'a Client<WalletKind>>,
}

impl<'a> Context<'a> {
    pub(super) fn new(
        config_path: &'a Path,
        program: &'a FusionProgram,
        output: OutputFormat,
        client: Option<&'a Client<WalletKind>>,
    ) -> Self {
        Self {
            config_path,
            program,
            output,
            client,
        }
    }

    pub(crate) fn config_path(&self) -> &Path {
        self.config_path
    }

    pub(crate) fn program(&self) -> &FusionProgram {
        self.program
    }

    pub(crate) fn output(&self) -> OutputFormat {
        self.output
    }

    pub(crate) fn client(&self) -> eyre::Result<&'a Client<WalletKind>> {
        self.client.ok_or_eyre("client is not provided")
    }

    /// Send the transaction and print the signature.
    ///
    /// Returns `None` if the wallet owner cancelled.
    pub(crate) async fn send<T>(
        &self,
        tx: &TransactionBuilder<WalletKind, T>,
    ) -> eyre::Result<Option<Signature>> {
        let client = self.client()?;
        match client.send_transaction(tx).await {
            Ok(signature) => {
                println!("{signature}");
                Ok(Some(signature))
            }
            Err(err) if err.is_user_rejection() => {
                tracing::info!(%err, "transaction rejected by the wallet");
                eprintln!("cancelled");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
