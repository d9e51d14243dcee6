/// Configuration.
pub mod config;

/// Utils for wallet.
pub mod wallet;

/// Commands.
pub mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::{Command, Commands, Context};
use config::{Config, ConfigArgs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

const ENV_PREFIX: &str = "FUSION_";
const CONFIG_DIR: &str = "fusion";

/// We use `__` in the name of environment variable as an alias of `.`.
///
/// See [`Env`] for more infomation.
const DOT_ALIAS: &str = "__";

/// Command-line interface for Football Fusion.
#[derive(Debug)]
pub struct Cli {
    config_path: PathBuf,
    config: Config,
    command: Commands,
}

impl Cli {
    /// Creates from the command line arguments.
    pub fn init() -> eyre::Result<Self> {
        Self::from_inner(Inner::parse())
    }

    fn from_inner(cli: Inner) -> eyre::Result<Self> {
        let config_path = cli.find_config()?;
        let Inner { args, command, .. } = cli;

        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path.clone()))
            .merge(Env::prefixed(ENV_PREFIX).split(DOT_ALIAS))
            .merge(Serialized::defaults(args))
            .extract()?;

        Ok(Self {
            config_path,
            config,
            command,
        })
    }

    /// Get the config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute command.
    pub async fn execute(&self) -> eyre::Result<()> {
        let program = self.config.program();
        let client = if self.command.is_client_required() {
            Some(self.config.client()?)
        } else {
            None
        };
        self.command
            .execute(Context::new(
                &self.config_path,
                &program,
                self.config.output(),
                client.as_ref(),
            ))
            .await
    }
}

/// Command-line interface for Football Fusion.
#[derive(Debug, Parser)]
#[command(name = "fusion", version, about)]
struct Inner {
    /// Path to the config file.
    #[clap(long = "config", short)]
    config_path: Option<PathBuf>,
    /// Overrides of the config.
    #[command(flatten)]
    args: ConfigArgs,
    /// Commands.
    #[command(subcommand)]
    command: Commands,
}

impl Inner {
    fn find_config(&self) -> eyre::Result<PathBuf> {
        use etcetera::{choose_base_strategy, BaseStrategy};

        match self.config_path.as_ref() {
            Some(path) => Ok(path.clone()),
            None => {
                let strategy = choose_base_strategy()?;
                Ok(strategy.config_dir().join(CONFIG_DIR).join("config.toml"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eyre::OptionExt;

    use super::*;

    #[test]
    fn flags_override_file() -> eyre::Result<()> {
        let dir = std::env::temp_dir().join(format!("fusion-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        std::fs::write(&path, "cluster = \"localnet\"\nmint_decimals = 9\n")?;

        let inner = Inner::try_parse_from([
            "fusion",
            "--config",
            path.to_str().ok_or_eyre("non utf-8 path")?,
            "--url",
            "testnet",
            "discriminator",
            "join_tournament",
        ])?;
        let cli = Cli::from_inner(inner)?;
        assert_eq!(cli.config().program().mint_decimals, 9);
        assert_eq!(cli.config().cluster().to_string(), "testnet");

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn file_applies_without_flags() -> eyre::Result<()> {
        let dir = std::env::temp_dir().join(format!("fusion-cli-file-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        std::fs::write(&path, "cluster = \"localnet\"\nnative_wallet = false\n")?;

        let inner = Inner::try_parse_from([
            "fusion",
            "--config",
            path.to_str().ok_or_eyre("non utf-8 path")?,
            "tournament",
            "next-id",
        ]);
        let cli = Cli::from_inner(inner?)?;
        assert_eq!(cli.config().cluster().to_string(), "localnet");
        assert!(!cli.config().native_wallet());

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
