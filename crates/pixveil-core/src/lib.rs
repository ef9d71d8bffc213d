//! # Pixveil Core API
//!
//! Two workflows are exposed:
//! - [`LsbCodec`] hides and recovers a message with a known [`StegoConfig`]
//!   (channels, traversal order, end-of-message marker)
//! - [`ForceDecoder`] brute-forces an image of unknown construction and scores
//!   every channel/technique combination by printable-character ratio
//!
//! # Usage Examples
//!
//! ## Hide and recover a message
//!
//! ```rust
//! use image::RgbaImage;
//! use pixveil_core::{LsbCodec, StegoConfig};
//!
//! let carrier = RgbaImage::new(32, 32);
//! let config = StegoConfig::default();
//!
//! let stego = LsbCodec::encode(&carrier, b"Hello, World!", &config)
//!     .expect("Failed to hide message in image");
//!
//! let message = LsbCodec::decode(&stego, &config)
//!     .expect("Failed to recover message");
//! assert_eq!(message, b"Hello, World!");
//! ```
//!
//! ## Brute-force an image of unknown construction
//!
//! ```rust
//! use image::RgbaImage;
//! use pixveil_core::{rank, ForceDecoder, LsbCodec, StegoConfig};
//!
//! let config = StegoConfig::default().with_channels("r".parse().unwrap());
//! let stego = LsbCodec::encode(&RgbaImage::new(16, 16), b"find me", &config)
//!     .expect("Failed to hide message in image");
//!
//! let candidates = rank(ForceDecoder::new().scan(&stego));
//! assert_eq!(candidates.len(), 12);
//! assert!(candidates[0].printable_ratio >= candidates[11].printable_ratio);
//! ```
//!
//! File-based workflows live in [`commands`] and, in builder form, in [`api`].

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod result;
pub mod scan;
pub mod traversal;

pub use crate::codec::LsbCodec;
pub use crate::config::{Channel, ChannelSet, StegoConfig, DEFAULT_MARKER};
pub use crate::error::PixveilError;
pub use crate::result::Result;
pub use crate::scan::{
    printable_ratio, rank, DecodedCandidate, ForceDecodeOptions, ForceDecoder, Technique,
};
pub use crate::traversal::TraversalMode;

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn should_hide_and_unveil_a_message_through_files() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier_path = out_dir.path().join("carrier.png");
        let stego_path = out_dir.path().join("secret.png");

        media::save_image(&prepare_gradient_image(32, 32), &carrier_path)?;

        let config = StegoConfig::default();
        commands::hide(&carrier_path, &stego_path, "Hello, World!", &config)?;

        let l = std::fs::metadata(&stego_path)
            .expect("Stego image was not written.")
            .len();
        assert!(l > 0, "File is not supposed to be empty");

        let message = commands::unveil(&stego_path, None, &config)?;
        assert_eq!(message, b"Hello, World!");

        Ok(())
    }

    #[test]
    fn should_write_the_unveiled_message_to_a_file_when_asked() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier_path = out_dir.path().join("carrier.png");
        let stego_path = out_dir.path().join("secret.png");
        let message_path = out_dir.path().join("message.bin");

        media::save_image(&prepare_gradient_image(32, 32), &carrier_path)?;

        let config = StegoConfig::default();
        commands::hide(&carrier_path, &stego_path, "on disk", &config)?;
        commands::unveil(&stego_path, Some(message_path.as_path()), &config)?;

        let written = std::fs::read(&message_path)?;
        assert_eq!(written, b"on disk");

        Ok(())
    }

    #[test]
    fn should_fail_to_unveil_with_the_wrong_marker() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier_path = out_dir.path().join("carrier.png");
        let stego_path = out_dir.path().join("secret.png");

        media::save_image(&prepare_gradient_image(32, 32), &carrier_path)?;

        commands::hide(&carrier_path, &stego_path, "sealed", &StegoConfig::default())?;

        let wrong = StegoConfig::default().with_marker(&b"<nope>"[..]);
        match commands::unveil(&stego_path, None, &wrong) {
            Err(PixveilError::MarkerNotFound) => Ok(()),
            other => panic!("expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_non_image_media() {
        let result = commands::force_scan(Path::new("Cargo.toml"));
        assert!(matches!(result, Err(PixveilError::UnsupportedMedia)));
    }

    #[test]
    fn should_force_scan_a_stego_file_and_rank_the_right_channel_first() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier_path = out_dir.path().join("carrier.png");
        let stego_path = out_dir.path().join("secret.png");

        // zero carrier: everything but the payload decodes to 0x00 bytes
        media::save_image(&image::RgbaImage::new(24, 24), &carrier_path)?;

        let config = StegoConfig::default().with_channels("g".parse().unwrap());
        commands::hide(
            &carrier_path,
            &stego_path,
            "a perfectly printable sentence",
            &config,
        )?;

        let ranked = rank(commands::force_scan(&stego_path)?);
        assert_eq!(ranked.len(), 12);
        assert_eq!(ranked[0].channel, Channel::Green);
        assert_eq!(ranked[0].technique.as_str(), "msb-first");

        Ok(())
    }

    #[test]
    fn illustrate_the_builder_api() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier_path = out_dir.path().join("carrier.png");
        let stego_path = out_dir.path().join("secret.png");

        media::save_image(&prepare_gradient_image(24, 24), &carrier_path)?;

        api::hide::prepare()
            .with_message("builders all the way down")
            .with_image(&carrier_path)
            .with_output(&stego_path)
            .execute()?;

        let message = api::unveil::prepare()
            .from_secret_file(&stego_path)
            .execute()?;
        assert_eq!(message, b"builders all the way down");

        let candidates = api::force_decode::prepare()
            .from_secret_file(&stego_path)
            .with_ranking()
            .execute()?;
        assert_eq!(candidates.len(), 12);

        Ok(())
    }
}
