//! Request models for the Gemini AI API.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::Part;

/// A request to the `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// The contents of the request, including the prompt text.
    pub contents: Vec<Content>,
    /// Optional sampling configuration; the service default applies if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub generation_config: Option<GenerationConfig>,
}

impl Request {
    /// Creates a new request with the given text prompt.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::new(vec![Part::text(text)])],
            generation_config: None,
        }
    }
}

impl From<Vec<Content>> for Request {
    fn from(contents: Vec<Content>) -> Self {
        Self {
            contents,
            generation_config: None,
        }
    }
}

/// A content object containing the ordered parts of one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// The producer of the content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts that make up the content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates content without a role.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { role: None, parts }
    }
}

/// The producer of a content object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Content written by the user.
    User,
    /// Content generated by the model.
    Model,
}

/// Sampling settings for a generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(doc)]
pub struct GenerationConfig {
    /// Controls randomness of the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub temperature: Option<f32>,
    /// Nucleus sampling probability mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub top_p: Option<f32>,
    /// Number of highest-probability tokens considered.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub top_k: Option<u32>,
    /// Upper bound on generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub max_output_tokens: Option<u32>,
    /// Number of candidates to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub candidate_count: Option<u32>,
    /// Sequences that stop generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub stop_sequences: Option<Vec<String>>,
}
