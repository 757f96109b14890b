//! Common part model used in both requests and responses.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::Error, mime};

/// One unit of content: text, inline binary data, or a part kind this crate
/// does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
    },
    /// A part containing inline data
    InlineData {
        /// The inline data content of the part
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    /// Any other part returned by the API (function calls, code, ...)
    Other(serde_json::Value),
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an inline data part from raw bytes.
    pub fn inline_data(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// Reads an image from disk into an inline data part.
    ///
    /// The MIME type is resolved from the extension before the file is
    /// touched, so an unsupported format never causes a read.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedFormat`] for an unknown extension, [`Error::Io`]
    /// if the file cannot be read.
    pub async fn image_from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let mime_type = mime::image_mime_type(path)?;
        let data = tokio::fs::read(path).await?;
        Ok(Self::inline_data(data, mime_type))
    }

    /// Returns the text if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns the inline data if this is an inline data part.
    pub fn as_inline_data(&self) -> Option<&InlineData> {
        match self {
            Self::InlineData { inline_data } => Some(inline_data),
            _ => None,
        }
    }
}

/// Binary data sent inline with its MIME type.
///
/// Held as raw bytes; base64 only exists on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// The MIME type of the inline data
    pub mime_type: String,
    /// The raw bytes
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
