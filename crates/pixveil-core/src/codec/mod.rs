//! The single-configuration codec: embeds a message (plus its end-of-message
//! marker) into a copy of the carrier, and walks an identically configured
//! carrier to recover it again.

pub(crate) mod slots;

mod decoder;
mod encoder;

pub(crate) use decoder::LsbReader;
pub(crate) use encoder::LsbWriter;

use std::io::{ErrorKind, Write};

use byteorder::ReadBytesExt;
use image::RgbaImage;
use log::debug;

use crate::config::StegoConfig;
use crate::error::PixveilError;
use crate::result::Result;

/// Entry point for single-configuration embedding and recovery.
pub struct LsbCodec;

impl LsbCodec {
    /// Hides `message` followed by the configured marker inside a copy of
    /// `carrier`.
    ///
    /// The caller's image is never touched; the returned buffer is a fresh
    /// stego artifact of the same dimensions. Fails with
    /// [`PixveilError::CapacityExceeded`] before any pixel is written when the
    /// packed payload does not fit.
    pub fn encode(carrier: &RgbaImage, message: &[u8], config: &StegoConfig) -> Result<RgbaImage> {
        config.validate()?;

        let (width, height) = carrier.dimensions();
        let capacity = config.capacity_bits(width, height);
        let payload_bits = (message.len() + config.marker().len()) * 8;
        if payload_bits > capacity {
            return Err(PixveilError::CapacityExceeded {
                max_chars: capacity / 8,
            });
        }

        let mut payload = Vec::with_capacity(message.len() + config.marker().len());
        payload.extend_from_slice(message);
        payload.extend_from_slice(config.marker());

        debug!(
            "hiding {} payload bits in {capacity} carrier bits ({width}x{height}, {} channels)",
            payload_bits,
            config.channels().len()
        );

        let mut stego = carrier.clone();
        {
            let mut writer = LsbWriter::new(&mut stego, config);
            writer
                .write_all(&payload)
                .map_err(|_e| PixveilError::ImageEncodingError)?;
        }

        Ok(stego)
    }

    /// Recovers a message embedded with the same configuration.
    ///
    /// Bytes are assembled one at a time until the tail of the output matches
    /// the marker; the marker itself is stripped from the result. Walking the
    /// whole carrier without a match fails with
    /// [`PixveilError::MarkerNotFound`] instead of returning garbage.
    pub fn decode(image: &RgbaImage, config: &StegoConfig) -> Result<Vec<u8>> {
        config.validate()?;

        let mut reader = LsbReader::new(image, config);
        let marker = config.marker();
        let mut message: Vec<u8> = Vec::new();

        loop {
            match reader.read_u8() {
                Ok(byte) => {
                    message.push(byte);
                    if message.ends_with(marker) {
                        message.truncate(message.len() - marker.len());
                        return Ok(message);
                    }
                }
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(PixveilError::MarkerNotFound)
                }
                Err(source) => return Err(PixveilError::ReadError { source }),
            }
        }
    }
}
