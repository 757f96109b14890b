#![deny(missing_docs)]

//! Ask Google Gemini about an image.
//!
//! Sends one text prompt together with an inline image to the Gemini
//! `generateContent` endpoint and returns the generated text. The remote call
//! sits behind [`ContentGenerator`], so it can be swapped for a test double.
//!
//! ```no_run
//! # async fn run() -> Result<(), gemini_vision::error::Error> {
//! let text = gemini_vision::generate_from_image("photo.jpg", None).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod mime;
pub mod models;
pub mod prompter;

pub use client::{ContentGenerator, GenerativeModel};
pub use config::Config;
pub use error::{ApiError, Error};
pub use prompter::{generate_from_image, generate_from_image_with, ImagePrompter, DEFAULT_PROMPT};
