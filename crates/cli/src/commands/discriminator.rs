use fusion_sdk::discriminator::{is_registered, resolve};
use serde::Serialize;

use super::{Command, Context};

/// Print the 8-byte discriminator of an instruction.
#[derive(Debug, clap::Args)]
pub struct Discriminator {
    /// Instruction name, e.g. `join_tournament`.
    name: String,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    name: &'a str,
    discriminator: [u8; 8],
    hex: String,
    registered: bool,
}

impl Command for Discriminator {
    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()> {
        let discriminator = resolve(&self.name);
        let output = Output {
            name: &self.name,
            discriminator,
            hex: discriminator.iter().map(|b| format!("{b:02x}")).collect(),
            registered: is_registered(&self.name),
        };
        println!("{}", ctx.output().display_one(output)?);
        Ok(())
    }
}
