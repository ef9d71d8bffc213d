use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    ForceDecode(force_decode::ForceDecodeArgs),
}

impl CliArgs {
    pub fn run(self) -> CliResult<()> {
        match self.command {
            Commands::Hide(args) => args.run(),
            Commands::Unveil(args) => args.run(),
            Commands::ForceDecode(args) => args.run(),
        }
    }
}
