#![warn(missing_docs)]
//! Command-line image generation via the OpenAI Images API (DALL-E).
//!
//! The crate resolves a request from command-line flags, piped standard
//! input, and environment fallbacks, sends it to the image generation
//! service once, and prints the resulting image URLs on a single line.
//!
//! # Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use dalle_cli::{dispatch, resolve, Cli, Defaults, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> dalle_cli::Result<()> {
//!     let cli = Cli::parse_from(["dalle", "-p", "a red fox", "-k", "sk-test"]);
//!     let config = resolve(&cli, &Defaults::from_env(), || None).unwrap();
//!     let client = OpenAiClient::new(config.api_key.clone());
//!     let line = dispatch(&client, &config).await?;
//!     println!("{line}");
//!     Ok(())
//! }
//! ```

mod error;

pub mod cli;
pub mod config;
pub mod openai;
pub mod service;

// Re-export error types at crate root
pub use error::{DalleError, Result};

// Re-export the request pipeline types
pub use cli::Cli;
pub use config::{resolve, Defaults, RequestConfig, UsageError};
pub use openai::OpenAiClient;
pub use service::{dispatch, format_urls, GeneratedImage, ImageService};
