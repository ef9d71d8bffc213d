use std::path::Path;

use image::RgbaImage;
use log::error;

use crate::error::PixveilError;
use crate::result::Result;

/// Loads a carrier media file as an RGBA pixel buffer.
///
/// PNG and JPEG input is accepted for reading; everything else is rejected by
/// extension before touching the file.
pub fn open_image(path: &Path) -> Result<RgbaImage> {
    let Some(ext) = path.extension() else {
        return Err(PixveilError::UnsupportedMedia);
    };

    match ext.to_string_lossy().to_lowercase().as_str() {
        "png" | "jpg" | "jpeg" => Ok(image::open(path)
            .map_err(|_e| PixveilError::InvalidImageMedia)?
            .to_rgba8()),
        _ => Err(PixveilError::UnsupportedMedia),
    }
}

/// Stores a stego image, always as PNG. A lossy format at this point would
/// destroy the payload.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image {path:?}: {e}");
            PixveilError::ImageEncodingError
        })
}
