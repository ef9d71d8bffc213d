//! Path-level operations shared by the fluent API and the command line tool.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::codec::LsbCodec;
use crate::config::StegoConfig;
use crate::error::PixveilError;
use crate::media::{open_image, save_image};
use crate::result::Result;
use crate::scan::{DecodedCandidate, ForceDecoder};

/// hides a text message inside a carrier image file and writes the stego image
pub fn hide(carrier: &Path, target: &Path, message: &str, config: &StegoConfig) -> Result<()> {
    let image = open_image(carrier)?;
    let stego = LsbCodec::encode(&image, message.as_bytes(), config)?;

    save_image(&stego, target)
}

/// Recovers a message from a stego image file with a known configuration.
///
/// The raw bytes are returned either way; when `destination` is given they
/// are also written out as a file.
pub fn unveil(
    secret_media: &Path,
    destination: Option<&Path>,
    config: &StegoConfig,
) -> Result<Vec<u8>> {
    let image = open_image(secret_media)?;
    let message = LsbCodec::decode(&image, config)?;

    if let Some(destination) = destination {
        let mut target_file =
            File::create(destination).map_err(|source| PixveilError::WriteError { source })?;
        target_file
            .write_all(&message)
            .map_err(|source| PixveilError::WriteError { source })?;
    }

    Ok(message)
}

/// Runs the combinatorial scanner against an image file of unknown
/// construction. One candidate per channel/technique combination, in
/// enumeration order.
pub fn force_scan(secret_media: &Path) -> Result<Vec<DecodedCandidate>> {
    let image = open_image(secret_media)?;

    Ok(ForceDecoder::new().scan(&image))
}
