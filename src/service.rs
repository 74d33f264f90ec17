//! The image generation service seam and the single-request dispatcher.

use async_trait::async_trait;

use crate::config::RequestConfig;
use crate::error::Result;

/// One image produced by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Location of the rendered image.
    pub url: String,
    /// Prompt rewrite reported by the service, when present.
    pub revised_prompt: Option<String>,
}

/// An image generation backend.
///
/// Implementations take a validated [`RequestConfig`] and return the
/// generated images in the order the service produced them.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Generates images for the request.
    async fn generate(&self, config: &RequestConfig) -> Result<Vec<GeneratedImage>>;
}

/// Sends one request to the service and renders the result line.
///
/// The returned string is the whole stdout payload: the image URLs in
/// service order, formatted as a list.
pub async fn dispatch(service: &dyn ImageService, config: &RequestConfig) -> Result<String> {
    let images = service.generate(config).await?;
    Ok(format_urls(&images))
}

/// Formats the image URLs as a single bracketed, quoted list.
///
/// An empty batch renders as `[]`.
pub fn format_urls(images: &[GeneratedImage]) -> String {
    let urls: Vec<&str> = images.iter().map(|image| image.url.as_str()).collect();
    format!("{urls:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DalleError;

    struct FixedImages(Vec<GeneratedImage>);

    #[async_trait]
    impl ImageService for FixedImages {
        async fn generate(&self, _config: &RequestConfig) -> Result<Vec<GeneratedImage>> {
            Ok(self.0.clone())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl ImageService for AlwaysFails {
        async fn generate(&self, _config: &RequestConfig) -> Result<Vec<GeneratedImage>> {
            Err(DalleError::Service {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    fn config() -> RequestConfig {
        RequestConfig {
            api_key: "sk-test".to_string(),
            prompt: "a red fox".to_string(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            number: 2,
        }
    }

    fn image(url: &str) -> GeneratedImage {
        GeneratedImage {
            url: url.to_string(),
            revised_prompt: None,
        }
    }

    #[tokio::test]
    async fn test_dispatch_preserves_service_order() {
        let service = FixedImages(vec![image("https://img/1"), image("https://img/2")]);
        let line = dispatch(&service, &config()).await.unwrap();
        assert_eq!(line, r#"["https://img/1", "https://img/2"]"#);
    }

    #[tokio::test]
    async fn test_dispatch_renders_empty_batch_as_empty_list() {
        let service = FixedImages(vec![]);
        let line = dispatch(&service, &config()).await.unwrap();
        assert_eq!(line, "[]");
    }

    #[tokio::test]
    async fn test_dispatch_error_report_line() {
        let service = AlwaysFails;
        let err = dispatch(&service, &config()).await.unwrap_err();
        assert_eq!(
            format!("Image generation error: {err}"),
            "Image generation error: rate limited"
        );
    }

    #[test]
    fn test_format_urls_quotes_each_url() {
        let images = vec![image("https://img/a")];
        assert_eq!(format_urls(&images), r#"["https://img/a"]"#);
    }
}
