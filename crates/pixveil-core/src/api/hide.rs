use std::path::{Path, PathBuf};

use crate::commands;
use crate::config::StegoConfig;
use crate::error::PixveilError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    config: StegoConfig,
}

impl HideApi {
    /// Use the given codec configuration
    pub fn with_config(mut self, config: StegoConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), PixveilError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(PixveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixveilError::TargetNotSet);
        };
        let Some(message) = self.message else {
            return Err(PixveilError::MissingMessage);
        };

        commands::hide(&image, &output, &message, &self.config)
    }

    fn validate(&self) -> Result<(), PixveilError> {
        self.config.validate()?;
        if self.message.is_none() {
            return Err(PixveilError::MissingMessage);
        }

        Ok(())
    }
}
