mod cli;
mod commands;

use clap::Parser;
use pixveil_core::PixveilError;

pub type CliResult<T> = Result<T, PixveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    cli::CliArgs::parse().run()
}
