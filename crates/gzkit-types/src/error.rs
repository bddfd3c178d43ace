//! Error types and handling for gzkit
//!
//! Every failure surfaces to the caller as one of the [`Error`] variants below.
//! No layer swallows or retries a lower layer's error, so the variant a caller
//! sees is the one the failing operation produced.

use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Main error type for gzkit operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Opening, reading or writing a stream failed
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error, unchanged
        #[from]
        source: std::io::Error,
    },

    /// The input is not a valid gzip container
    #[error("Corrupt gzip data: {message}")]
    CorruptData {
        /// What the decoder rejected
        message: String,
    },

    /// Decompressed bytes are not valid UTF-8
    #[error("Invalid UTF-8 text: {source}")]
    InvalidText {
        /// The UTF-8 decoding failure
        #[from]
        source: FromUtf8Error,
    },

    /// The output file already exists
    #[error("File {} already exists", path.display())]
    AlreadyExists {
        /// Path of the existing output file
        path: PathBuf,
    },

    /// An argument failed validation
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why the argument was rejected
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// I/O related errors
    Io,
    /// Invalid compressed data
    CorruptData,
    /// Invalid decompressed text
    InvalidText,
    /// Output already exists
    AlreadyExists,
    /// Argument validation failure
    InvalidArgument,
    /// Configuration errors
    Config,
}

impl Error {
    /// Get the error kind
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::CorruptData { .. } => ErrorKind::CorruptData,
            Self::InvalidText { .. } => ErrorKind::InvalidText,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// Create a new corrupt data error
    pub fn corrupt_data<S: Into<String>>(message: S) -> Self {
        Self::CorruptData {
            message: message.into(),
        }
    }

    /// Create a new already-exists error
    pub fn already_exists<P: Into<PathBuf>>(path: P) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(parameter: &'static str, message: S) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
