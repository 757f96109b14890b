//! Client implementation for the Gemini AI API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{ApiError, Error},
    models::{Content, GenerationConfig, ModelParams, Request, RequestType, Response},
};

/// Default API endpoint for Google's Generative AI service
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version
const DEFAULT_API_VERSION: &str = "v1beta";
/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// The remote generation call.
///
/// Implemented by [`GenerativeModel`] over HTTP; tests substitute their own.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates a response for `contents` with the given model.
    ///
    /// `config` of `None` leaves sampling at the service defaults.
    async fn generate_content(
        &self,
        model: &str,
        contents: Vec<Content>,
        config: Option<GenerationConfig>,
    ) -> Result<Response, ApiError>;
}

/// A client for interacting with the Gemini AI API.
#[derive(Debug, Clone)]
pub struct GenerativeModel {
    api_key: String,
    params: ModelParams,
    base_url: String,
    client: reqwest::Client,
}

impl GenerativeModel {
    /// Creates a new GenerativeModel with the specified API key and model.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key for authentication
    /// * `params` - The model parameters
    pub fn new(api_key: impl Into<String>, params: impl Into<ModelParams>) -> Self {
        Self {
            api_key: api_key.into(),
            params: params.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a new GenerativeModel from a loaded [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the config has no API key.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let api_key = config.api_key()?;
        Ok(Self::new(api_key, config.model.as_str()).with_base_url(&config.base_url))
    }

    /// Creates a new GenerativeModel from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GEMINI_API_KEY` - The API key for authentication
    ///
    /// # Arguments
    ///
    /// * `model` - The model identifier (e.g., "gemini-2.0-flash")
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    pub fn from_env(model: impl Into<String>) -> Result<Self, Error> {
        let config = Config::load()?.with_model(model);
        Self::from_config(&config)
    }

    /// Points the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The model requests are sent to by [`generate_response`](Self::generate_response).
    pub fn model(&self) -> &str {
        &self.params.model
    }

    fn build_url(&self, model: &str, request_type: RequestType) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url, DEFAULT_API_VERSION, model, request_type
        )
    }

    /// Makes a request to the Gemini AI API.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or answers with a non-success status.
    async fn make_request(
        &self,
        url: &str,
        mut request: Request,
    ) -> Result<reqwest::Response, ApiError> {
        request.generation_config = request
            .generation_config
            .or_else(|| self.params.generation_config.clone());

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "Gemini API responded");
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&error_body),
            });
        }

        Ok(response)
    }

    /// Sends the HTTP request and parses the response body.
    async fn send_request(&self, model: &str, request: Request) -> Result<Response, ApiError> {
        let url = self.build_url(model, RequestType::GenerateContent);
        let body = self.make_request(&url, request).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Generates a response with the configured model.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or if the response cannot be parsed.
    pub async fn generate_response(
        &self,
        request: impl Into<Request>,
    ) -> Result<Response, ApiError> {
        self.send_request(&self.params.model, request.into()).await
    }
}

#[async_trait]
impl ContentGenerator for GenerativeModel {
    async fn generate_content(
        &self,
        model: &str,
        contents: Vec<Content>,
        config: Option<GenerationConfig>,
    ) -> Result<Response, ApiError> {
        let request = Request {
            contents,
            generation_config: config,
        };
        self.send_request(model, request).await
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pulls the message out of a Google error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}
