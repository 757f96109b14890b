use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::GenerationConfig;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration parameters for the generative model
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct ModelParams {
    /// Model identifier (e.g., "gemini-2.0-flash")
    #[builder(setter(into), default = String::from(DEFAULT_MODEL))]
    pub model: String,
    /// Generation config applied when a request carries none
    #[builder(default, setter(strip_option))]
    pub generation_config: Option<GenerationConfig>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&str> for ModelParams {
    fn from(model: &str) -> Self {
        Self::builder().model(model).build()
    }
}

impl From<String> for ModelParams {
    fn from(model: String) -> Self {
        Self::builder().model(model).build()
    }
}
