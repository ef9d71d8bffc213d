use std::path::PathBuf;

use clap::Args;
use log::info;
use pixveil_core::rank;

use crate::CliResult;

/// Brute-forces an image of unknown construction and ranks every
/// channel/technique combination by how much of it decodes to readable text
#[derive(Args, Debug)]
pub struct ForceDecodeArgs {
    /// Source image that may contain secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub input_image: PathBuf,

    /// Show only the top N candidates
    #[arg(short = 'n', long, value_name = "count", default_value = "12")]
    pub limit: usize,

    /// Hide candidates scoring below this printable ratio
    #[arg(long, value_name = "ratio", default_value = "0.0")]
    pub min_ratio: f64,

    /// Also print the raw bitstream of every candidate
    #[arg(long)]
    pub show_bits: bool,
}

impl ForceDecodeArgs {
    pub fn run(self) -> CliResult<()> {
        let candidates = rank(pixveil_core::commands::force_scan(&self.input_image)?);
        info!("scanned {} combinations", candidates.len());

        let shown = candidates
            .iter()
            .filter(|c| c.printable_ratio >= self.min_ratio)
            .take(self.limit);

        for candidate in shown {
            println!(
                "{:>5} / {:<18} ratio {:.3}  {} chars",
                candidate.channel.as_str(),
                candidate.technique.as_str(),
                candidate.printable_ratio,
                candidate.total_chars,
            );
            println!("       {}", candidate.preview(64));
            if self.show_bits {
                println!("       bits: {}", candidate.bits);
            }
        }

        Ok(())
    }
}
