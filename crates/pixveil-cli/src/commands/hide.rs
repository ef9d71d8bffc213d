use std::path::PathBuf;

use clap::Args;

use super::StegoArgs;
use crate::CliResult;

/// Hides a text message in PNG images
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file (always PNG)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    #[command(flatten)]
    pub stego: StegoArgs,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        pixveil_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            &self.stego.to_config(),
        )
    }
}
