//! CLI for image generation using DALL-E.

use clap::{CommandFactory, Parser};
use dalle_cli::{dispatch, resolve, Cli, Defaults, OpenAiClient, UsageError};
use std::io::{IsTerminal, Read};

#[tokio::main]
async fn main() {
    // Diagnostics stay on stderr; stdout carries only the result line.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = Defaults::from_env();

    let config = match resolve(&cli, &defaults, read_piped_stdin) {
        Ok(config) => config,
        Err(err) => usage_error(&err),
    };

    let client = OpenAiClient::new(config.api_key.clone());
    match dispatch(&client, &config).await {
        Ok(line) => println!("{line}"),
        Err(err) => {
            eprintln!("Image generation error: {err}");
            std::process::exit(1);
        }
    }
}

/// Builds the diagnostic filter from the `RUST_LOG` directive; without one,
/// logging is fully silent.
fn log_filter(directive: Option<String>) -> tracing_subscriber::EnvFilter {
    directive
        .and_then(|text| text.parse().ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new("off"))
}

/// Reads all of stdin when it is piped rather than an interactive terminal.
fn read_piped_stdin() -> Option<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text).ok()?;
    Some(text)
}

/// Reports a resolution failure through the argument parser's error
/// convention and exits.
fn usage_error(err: &UsageError) -> ! {
    let kind = match err {
        UsageError::ApiKeyRequired | UsageError::PromptRequired => {
            clap::error::ErrorKind::MissingRequiredArgument
        }
        UsageError::NumberNotNumeric | UsageError::NumberZero => {
            clap::error::ErrorKind::InvalidValue
        }
    };
    Cli::command().error(kind, err).exit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_silent() {
        assert_eq!(log_filter(None).to_string(), "off");
    }

    #[test]
    fn test_log_filter_honors_directive() {
        assert_eq!(log_filter(Some("debug".to_string())).to_string(), "debug");
    }
}
