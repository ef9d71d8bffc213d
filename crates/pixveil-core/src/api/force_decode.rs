use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::PixveilError;
use crate::scan::{rank, DecodedCandidate};

pub fn prepare() -> ForceDecodeApi {
    ForceDecodeApi::default()
}

#[derive(Default, Debug)]
pub struct ForceDecodeApi {
    secret_media: Option<PathBuf>,
    ranked: bool,
}

impl ForceDecodeApi {
    /// This is the image of unknown construction to brute-force
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Sort candidates by descending printable ratio instead of enumeration order
    pub fn with_ranking(mut self) -> Self {
        self.ranked = true;
        self
    }

    pub fn execute(self) -> Result<Vec<DecodedCandidate>, PixveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixveilError::CarrierNotSet);
        };

        let candidates = commands::force_scan(&secret_media)?;
        Ok(if self.ranked {
            rank(candidates)
        } else {
            candidates
        })
    }
}
