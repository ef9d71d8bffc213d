pub mod force_decode;
pub mod hide;
pub mod unveil;

use clap::Args;
use pixveil_core::{ChannelSet, StegoConfig, TraversalMode};

/// Codec options shared by the configuration-aware subcommands.
#[derive(Args, Debug)]
pub struct StegoArgs {
    /// Color channels used for embedding, any subset of "rgb"
    #[arg(short = 'c', long, value_name = "channels", default_value = "rgb")]
    pub channels: ChannelSet,

    /// Pixel traversal order, e.g. "spiral-clockwise"
    #[arg(
        short = 't',
        long,
        value_name = "traversal mode",
        default_value = "top-bottom-left-right"
    )]
    pub traversal: TraversalMode,

    /// End-of-message marker appended to the payload
    #[arg(long, value_name = "marker", default_value = "##END##")]
    pub marker: String,
}

impl StegoArgs {
    pub fn to_config(&self) -> StegoConfig {
        StegoConfig::default()
            .with_channels(self.channels)
            .with_traversal(self.traversal)
            .with_marker(self.marker.as_bytes().to_vec())
    }
}
