use std::path::PathBuf;

use clap::Args;

use super::StegoArgs;
use crate::CliResult;

/// Unveils a message from a stego image with a known configuration
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub input_image: PathBuf,

    /// Write the recovered bytes to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    #[command(flatten)]
    pub stego: StegoArgs,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = pixveil_core::commands::unveil(
            &self.input_image,
            self.output_file.as_deref(),
            &self.stego.to_config(),
        )?;

        if self.output_file.is_none() {
            println!("{}", String::from_utf8_lossy(&message));
        }

        Ok(())
    }
}
