//! CLI argument definitions.
//!
//! Every value flag is an `Option<String>`: the resolution precedence chain
//! in [`crate::config`] owns defaulting, and an explicitly empty value
//! counts as absent there. Defaults are documented in the help text.

use clap::Parser;

/// Command-line image generation using DALL-E.
#[derive(Debug, Parser)]
#[command(name = "dalle", version, about = "CLI for image generation using DALL-E")]
pub struct Cli {
    /// API key for the OpenAI service [default: the OPENAI_API_KEY
    /// environment variable]
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Text prompt describing the desired image [default: piped stdin,
    /// then the PROMPT environment variable]
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Generation model variant [default: dall-e-3]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Image dimensions, e.g. 1024x1024 [default: 1024x1024]
    #[arg(short, long)]
    pub size: Option<String>,

    /// Quality tier, e.g. standard or hd [default: standard]
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Number of images to generate [default: 1]
    #[arg(short, long)]
    pub number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["dalle"]);
        assert!(cli.api_key.is_none());
        assert!(cli.prompt.is_none());
        assert!(cli.model.is_none());
        assert!(cli.size.is_none());
        assert!(cli.quality.is_none());
        assert!(cli.number.is_none());
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from([
            "dalle",
            "--api-key",
            "sk-test",
            "--prompt",
            "a red fox",
            "--model",
            "dall-e-2",
            "--size",
            "512x512",
            "--quality",
            "hd",
            "--number",
            "3",
        ]);
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.prompt.as_deref(), Some("a red fox"));
        assert_eq!(cli.model.as_deref(), Some("dall-e-2"));
        assert_eq!(cli.size.as_deref(), Some("512x512"));
        assert_eq!(cli.quality.as_deref(), Some("hd"));
        assert_eq!(cli.number.as_deref(), Some("3"));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "dalle", "-k", "sk-test", "-p", "a red fox", "-m", "dall-e-2", "-s", "512x512", "-q",
            "hd", "-n", "3",
        ]);
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.prompt.as_deref(), Some("a red fox"));
        assert_eq!(cli.model.as_deref(), Some("dall-e-2"));
        assert_eq!(cli.size.as_deref(), Some("512x512"));
        assert_eq!(cli.quality.as_deref(), Some("hd"));
        assert_eq!(cli.number.as_deref(), Some("3"));
    }

    #[test]
    fn test_empty_value_is_accepted_by_the_parser() {
        // Emptiness is interpreted by the resolver, not rejected here.
        let cli = Cli::parse_from(["dalle", "--number", ""]);
        assert_eq!(cli.number.as_deref(), Some(""));
    }
}
