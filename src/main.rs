//! gemini-vision: ask Gemini about an image from the command line.
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! gemini-vision photo.jpg
//! gemini-vision photo.png "Describe this image in detail"
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use gemini_vision::{generate_from_image_with, Config, DEFAULT_PROMPT};

mod logging;

/// Send an image and a prompt to Gemini and print the answer.
///
/// Supported formats: .jpg, .jpeg, .png, .gif, .webp
#[derive(Parser, Debug)]
#[command(name = "gemini-vision")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the image file
    image: PathBuf,

    /// Prompt sent along with the image
    #[arg(default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Model identifier (overrides GEMINI_MODEL and the config file)
    #[arg(short, long)]
    model: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    let config = Config::load()?;
    let text = run(cli, config).await?;
    println!("{text}");

    Ok(())
}

/// Checks the image path, applies CLI overrides, and asks the model.
async fn run(cli: Cli, mut config: Config) -> Result<String> {
    if !cli.image.exists() {
        bail!("Image file '{}' not found", cli.image.display());
    }

    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    tracing::info!("Analyzing image: {}", cli.image.display());
    tracing::info!("Sending request to Gemini...");

    Ok(generate_from_image_with(&config, &cli.image, Some(&cli.prompt)).await?)
}
