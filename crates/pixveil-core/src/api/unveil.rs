use std::path::{Path, PathBuf};

use crate::commands;
use crate::config::StegoConfig;
use crate::error::PixveilError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output: Option<PathBuf>,
    config: StegoConfig,
}

impl UnveilApi {
    /// Use the given codec configuration
    pub fn with_config(mut self, config: StegoConfig) -> Self {
        self.config = config;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Additionally write the recovered bytes to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil and return the recovered message bytes
    pub fn execute(self) -> Result<Vec<u8>, PixveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixveilError::CarrierNotSet);
        };

        commands::unveil(&secret_media, self.output.as_deref(), &self.config)
    }
}
