mod output;

use clap::ArgAction;
use fusion_sdk::{
    builders::FusionProgram,
    client::ClientOptions,
    solana_utils::{
        cluster::Cluster,
        solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel},
        wallet::{Wallet, WalletKind},
    },
    utils::serde::StringPubkey,
    Client,
};

pub use output::OutputFormat;

use crate::wallet::signer_from_source;

const DEFAULT_WALLET: &str = "~/.config/solana/id.json";

/// Configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Path to the wallet.
    wallet: String,
    /// Cluster to connect to.
    cluster: Cluster,
    /// Commitment level.
    commitment: CommitmentLevel,
    /// Tournament program ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    program: Option<StringPubkey>,
    /// Mint of the entry fee token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mint: Option<StringPubkey>,
    /// Decimals of the entry fee token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mint_decimals: Option<u8>,
    /// Whether a local signer may be used.
    native_wallet: bool,
    /// Output format.
    output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet: DEFAULT_WALLET.to_string(),
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            program: None,
            mint: None,
            mint_decimals: None,
            native_wallet: true,
            output: OutputFormat::default(),
        }
    }
}

/// Configuration overrides from the command line.
///
/// Only the flags that are present take part in the merge.
#[derive(Debug, Clone, Default, clap::Args, serde::Serialize)]
pub struct ConfigArgs {
    /// Path to the wallet.
    #[arg(long, short, env = "FUSION_WALLET")]
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet: Option<String>,
    /// Cluster to connect to.
    #[arg(long = "url", short = 'u', env = "FUSION_CLUSTER")]
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster: Option<Cluster>,
    /// Commitment level.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    commitment: Option<CommitmentLevel>,
    /// Tournament program ID.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<StringPubkey>,
    /// Mint of the entry fee token.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    mint: Option<StringPubkey>,
    /// Decimals of the entry fee token.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    mint_decimals: Option<u8>,
    /// Whether a local signer may be used.
    ///
    /// When disabled, every command that needs a signature fails before
    /// building the transaction.
    #[arg(long, action = ArgAction::Set)]
    #[serde(skip_serializing_if = "Option::is_none")]
    native_wallet: Option<bool>,
    /// Output format.
    #[arg(long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl Config {
    /// Returns the cluster.
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Returns whether a local signer may be used.
    pub fn native_wallet(&self) -> bool {
        self.native_wallet
    }

    /// Returns the output format.
    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Returns the program deployment, devnet unless overridden.
    pub fn program(&self) -> FusionProgram {
        let mut program = FusionProgram::default();
        if let Some(id) = self.program {
            program.id = id;
        }
        if let Some(mint) = self.mint {
            program.mint = mint;
        }
        if let Some(decimals) = self.mint_decimals {
            program.mint_decimals = decimals;
        }
        program
    }

    /// Selects the wallet implementation.
    ///
    /// A wallet file that cannot be loaded leaves the wallet unavailable, so
    /// read-only commands keep working.
    pub fn wallet(&self) -> WalletKind {
        if !self.native_wallet {
            return WalletKind::select(None);
        }
        match signer_from_source(&self.wallet) {
            Ok(signer) => WalletKind::select(Some(signer)),
            Err(err) => {
                tracing::warn!(%err, wallet = %self.wallet, "failed to load wallet");
                WalletKind::select(None)
            }
        }
    }

    /// Creates a client, connecting the wallet if one is available.
    pub fn client(&self) -> eyre::Result<Client<WalletKind>> {
        let wallet = self.wallet();
        if wallet.is_available() {
            wallet.connect()?;
        }
        let options = ClientOptions::builder()
            .program(self.program())
            .commitment(CommitmentConfig {
                commitment: self.commitment,
            })
            .build();
        Ok(Client::new_with_options(
            self.cluster.clone(),
            wallet,
            options,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use fusion_sdk::constants::{DEVNET_PROGRAM_ID, DEVNET_USDC_MINT, USDC_DECIMALS};

    use super::*;

    #[test]
    fn default_program_is_devnet() {
        let program = Config::default().program();
        assert_eq!(program.id.0, DEVNET_PROGRAM_ID);
        assert_eq!(program.mint.0, DEVNET_USDC_MINT);
        assert_eq!(program.mint_decimals, USDC_DECIMALS);
    }

    #[test]
    fn disabled_native_wallet_is_unavailable() {
        let config = Config {
            native_wallet: false,
            ..Default::default()
        };
        assert!(!config.wallet().is_available());
    }

    #[test]
    fn missing_wallet_file_is_unavailable() {
        let config = Config {
            wallet: "/nonexistent/fusion/id.json".to_string(),
            ..Default::default()
        };
        assert!(!config.wallet().is_available());
    }

    #[test]
    fn absent_flags_are_not_serialized() -> eyre::Result<()> {
        let args = ConfigArgs {
            mint_decimals: Some(9),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&args)?, r#"{"mint_decimals":9}"#);
        Ok(())
    }

    #[test]
    fn default_config_serializes() -> eyre::Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        assert!(content.contains("cluster = \"devnet\""));
        assert!(content.contains("native_wallet = true"));
        Ok(())
    }
}
