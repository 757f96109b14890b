//! Error types for the Gemini vision client.

use thiserror::Error;

use crate::mime::supported_extensions;

/// Errors that can occur when asking the model about an image.
#[derive(Debug, Error)]
pub enum Error {
    /// The credential is missing or the configuration could not be read.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The image extension is not in the supported set.
    #[error(
        "Unsupported image format. Supported formats: {supported}. Got: {extension}",
        supported = supported_extensions()
    )]
    UnsupportedFormat {
        /// Offending extension, including the leading dot (empty if none)
        extension: String,
    },

    /// The image could not be read. Carries the native I/O error untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The remote generation call failed.
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl Error {
    /// Creates a new Configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Errors raised by the Gemini REST API or the transport under it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error occurred while sending the request or reading the response.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message reported by the service, or the raw body
        message: String,
    },

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
