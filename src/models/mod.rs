//! Data structures for the Gemini AI API requests and responses.

mod model_params;
mod part;
mod request;
mod request_type;
mod response;

pub use model_params::{ModelParams, DEFAULT_MODEL};
pub use part::{InlineData, Part};
pub use request::{Content, GenerationConfig, Request, Role};
pub use request_type::RequestType;
pub use response::{Candidate, FinishReason, PromptFeedback, Response, UsageMetadata};
