//! Request configuration: environment-sourced defaults, the per-field
//! resolution precedence chain, and validation.
//!
//! Resolution order for the prompt is flag, then piped stdin (trimmed),
//! then the `PROMPT` environment variable. Every other field falls back
//! from its flag to a fixed default; the API key's "fixed default" is the
//! `OPENAI_API_KEY` value captured at startup. A flag that was passed with
//! an empty value counts as absent.

use crate::cli::Cli;

/// Default model variant.
pub const DEFAULT_MODEL: &str = "dall-e-3";
/// Default image dimensions.
pub const DEFAULT_SIZE: &str = "1024x1024";
/// Default quality tier.
pub const DEFAULT_QUALITY: &str = "standard";
/// Default image count, as the flag would carry it.
pub const DEFAULT_NUMBER: &str = "1";

/// Fallback values captured from the environment once at process start.
///
/// Built explicitly in `main` and passed into [`resolve`]; nothing reads
/// the environment during resolution.
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    /// Fallback API key, from `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Last-resort prompt source, from `PROMPT`.
    pub prompt: Option<String>,
}

impl Defaults {
    /// Captures the fallback environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            prompt: std::env::var("PROMPT").ok(),
        }
    }
}

/// Validation failures detected before any request is dispatched.
///
/// Reported through the argument parser's error convention; no network
/// activity happens once one of these is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// No API key from the flag or the environment.
    #[error("API key required.")]
    ApiKeyRequired,
    /// No prompt from the flag, stdin, or the environment.
    #[error("Prompt required.")]
    PromptRequired,
    /// The count flag held something other than decimal digits.
    #[error("Number must be numeric.")]
    NumberNotNumeric,
    /// The count flag parsed to zero.
    #[error("Number must be at least 1.")]
    NumberZero,
}

/// A fully resolved, validated image generation request.
///
/// Constructed once per invocation by [`resolve`] and not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    /// Credential for the image generation service.
    pub api_key: String,
    /// Text description of the desired image.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Image dimensions descriptor.
    pub size: String,
    /// Quality tier descriptor.
    pub quality: String,
    /// Count of images requested, at least 1.
    pub number: u32,
}

/// Resolves a validated [`RequestConfig`] from the parsed flags, the
/// startup [`Defaults`], and standard input.
///
/// `read_stdin` returns the raw stdin text when stdin is not an interactive
/// terminal and `None` otherwise. It is invoked at most once, and only when
/// the prompt flag is absent or empty; stdin is a one-shot source.
pub fn resolve(
    cli: &Cli,
    defaults: &Defaults,
    read_stdin: impl FnOnce() -> Option<String>,
) -> Result<RequestConfig, UsageError> {
    let api_key = non_empty(&cli.api_key)
        .or_else(|| non_empty(&defaults.api_key))
        .ok_or(UsageError::ApiKeyRequired)?;

    let prompt = resolve_prompt(cli, defaults, read_stdin).ok_or(UsageError::PromptRequired)?;

    let model = non_empty(&cli.model).unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let size = non_empty(&cli.size).unwrap_or_else(|| DEFAULT_SIZE.to_string());
    let quality = non_empty(&cli.quality).unwrap_or_else(|| DEFAULT_QUALITY.to_string());

    let number_text = non_empty(&cli.number).unwrap_or_else(|| DEFAULT_NUMBER.to_string());
    let number = parse_number(&number_text)?;

    Ok(RequestConfig {
        api_key,
        prompt,
        model,
        size,
        quality,
        number,
    })
}

/// Walks the prompt sources in precedence order: flag, piped stdin
/// (trimmed), `PROMPT` environment variable.
fn resolve_prompt(
    cli: &Cli,
    defaults: &Defaults,
    read_stdin: impl FnOnce() -> Option<String>,
) -> Option<String> {
    if let Some(prompt) = non_empty(&cli.prompt) {
        return Some(prompt);
    }

    if let Some(text) = read_stdin() {
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    non_empty(&defaults.prompt)
}

/// Returns the value if it was provided and non-empty.
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

fn parse_number(text: &str) -> Result<u32, UsageError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UsageError::NumberNotNumeric);
    }
    // Digits-only input can still overflow u32; report it the same way.
    let number: u32 = text.parse().map_err(|_| UsageError::NumberNotNumeric)?;
    if number == 0 {
        return Err(UsageError::NumberZero);
    }
    Ok(number)
}
