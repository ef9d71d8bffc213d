use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixveilError {
    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a message that does not fit into the carrier under the chosen
    /// channel and traversal configuration. Carries the whole-image byte capacity
    /// as a sizing hint for the caller
    #[error("Capacity Error: The message does not fit into the carrier image, which can hold at most {max_chars} characters")]
    CapacityExceeded { max_chars: usize },

    /// Represents a decode that walked the whole carrier without ever seeing the
    /// end-of-message marker. Either the configuration is wrong or nothing is embedded
    #[error("No message found: the end-of-message marker never appeared in the carrier")]
    MarkerNotFound,

    /// Represents an encode or decode attempt without any color channel selected
    #[error("At least one color channel must be selected")]
    EmptyChannelSet,

    /// Represents an encode or decode attempt with an empty end-of-message marker
    #[error("The end-of-message marker must not be empty")]
    EmptyMarker,

    /// Represents an unknown channel letter in a channel selection such as `rgx`
    #[error("Unknown color channel: {0}")]
    UnknownChannel(char),

    /// Represents an unknown traversal mode name
    #[error("Unknown traversal mode: {0}")]
    UnknownTraversalMode(String),

    /// Represents the error of invalid UTF-8 text data found inside of a recovered message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
