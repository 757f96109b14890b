//! Ask a model about an image: one text prompt plus the image inlined.

use std::path::Path;

use crate::{
    client::{ContentGenerator, GenerativeModel},
    config::Config,
    error::Error,
    models::{Content, Part, DEFAULT_MODEL},
};

/// Prompt used when the caller does not supply one.
pub const DEFAULT_PROMPT: &str = "What's this image about?";

/// Builds the image request and sends it through a [`ContentGenerator`].
#[derive(Debug, Clone)]
pub struct ImagePrompter<G> {
    generator: G,
    model: String,
}

impl<G: ContentGenerator> ImagePrompter<G> {
    /// Creates a prompter that targets the default model.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Targets a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The model identifier requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The injected generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Sends the prompt and image and returns the generated text.
    ///
    /// # Errors
    ///
    /// Format and I/O errors as for [`build_content`];
    /// [`Error::Remote`] if the generation call fails.
    #[tracing::instrument(skip_all, fields(model = %self.model))]
    pub async fn generate(
        &self,
        image_path: impl AsRef<Path>,
        prompt: Option<&str>,
    ) -> Result<String, Error> {
        let image_path = image_path.as_ref();
        let content = build_content(image_path, prompt).await?;
        if let Some(image) = content.parts.get(1).and_then(Part::as_inline_data) {
            tracing::debug!(
                path = %image_path.display(),
                mime_type = %image.mime_type,
                bytes = image.data.len(),
                "Built image request"
            );
        }

        let response = self
            .generator
            .generate_content(&self.model, vec![content], None)
            .await?;

        let text = response.text();
        if text.is_empty() {
            let block_reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref());
            tracing::warn!(
                finish_reason = ?response.finish_reason(),
                block_reason = ?block_reason,
                "Response contained no text"
            );
        }
        Ok(text)
    }
}

/// Builds the envelope: the prompt, then the image bytes.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] before any read if the extension is not
/// supported, otherwise [`Error::Io`] if the file cannot be read.
pub async fn build_content(
    image_path: impl AsRef<Path>,
    prompt: Option<&str>,
) -> Result<Content, Error> {
    let image = Part::image_from_path(image_path).await?;
    let prompt = prompt.unwrap_or(DEFAULT_PROMPT);
    Ok(Content::new(vec![Part::text(prompt), image]))
}

/// Asks Gemini about the image at `image_path`.
///
/// Reads `GEMINI_API_KEY` (and the rest of [`Config`]) before touching the
/// file. `prompt` defaults to [`DEFAULT_PROMPT`].
///
/// # Errors
///
/// [`Error::Configuration`] if the credential is missing or empty, then the
/// errors of [`ImagePrompter::generate`].
pub async fn generate_from_image(
    image_path: impl AsRef<Path>,
    prompt: Option<&str>,
) -> Result<String, Error> {
    let config = Config::load()?;
    generate_from_image_with(&config, image_path, prompt).await
}

/// Like [`generate_from_image`], with an explicit configuration.
pub async fn generate_from_image_with(
    config: &Config,
    image_path: impl AsRef<Path>,
    prompt: Option<&str>,
) -> Result<String, Error> {
    let model = GenerativeModel::from_config(config)?;
    ImagePrompter::new(model)
        .with_model(&config.model)
        .generate(image_path, prompt)
        .await
}
