//! One thin adapter per image backend. Each returns candidate URLs or fails;
//! the orchestrator treats a failure as an empty contribution.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use acg_core::{ImageSource, Result, Settings};

fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Build the configured image sources. Order does not imply fallback;
/// results are concatenated, not short-circuited.
pub fn from_settings(settings: &Settings) -> Vec<Box<dyn ImageSource>> {
    let timeout = settings.request_timeout;
    let mut sources: Vec<Box<dyn ImageSource>> = Vec::new();

    if let Some(key) = &settings.unsplash_api_key {
        sources.push(Box::new(UnsplashSource::new(key.clone(), timeout)));
    }
    if let Some(key) = &settings.pixabay_api_key {
        sources.push(Box::new(PixabaySource::new(key.clone(), timeout)));
    }
    if let Some(key) = &settings.pexels_api_key {
        sources.push(Box::new(PexelsSource::new(key.clone(), timeout)));
    }
    if let Some(key) = &settings.openai_api_key {
        sources.push(Box::new(OpenAiImageSource::new(key.clone(), timeout)));
    }

    sources
}

#[derive(Deserialize)]
struct UnsplashResponse {
    #[serde(default)]
    results: Vec<UnsplashPhoto>,
}

#[derive(Deserialize)]
struct UnsplashPhoto {
    urls: UnsplashUrls,
}

#[derive(Deserialize)]
struct UnsplashUrls {
    regular: Option<String>,
}

pub struct UnsplashSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl UnsplashSource {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key,
            base_url: "https://api.unsplash.com".to_string(),
        }
    }
}

impl fmt::Debug for UnsplashSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsplashSource")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ImageSource for UnsplashSource {
    fn name(&self) -> &str {
        "Unsplash"
    }

    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .query(&[
                ("query", keyword),
                ("per_page", &limit.to_string()),
                ("orientation", "landscape"),
            ])
            .header("Authorization", format!("Client-ID {}", self.api_key))
            .send()
            .await?
            .error_for_status()?
            .json::<UnsplashResponse>()
            .await?;

        Ok(response
            .results
            .into_iter()
            .filter_map(|photo| photo.urls.regular)
            .collect())
    }
}

#[derive(Deserialize)]
struct PixabayResponse {
    #[serde(default)]
    hits: Vec<PixabayHit>,
}

#[derive(Deserialize)]
struct PixabayHit {
    #[serde(rename = "webformatURL")]
    webformat_url: Option<String>,
}

pub struct PixabaySource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PixabaySource {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key,
            base_url: "https://pixabay.com/api/".to_string(),
        }
    }
}

impl fmt::Debug for PixabaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixabaySource")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ImageSource for PixabaySource {
    fn name(&self) -> &str {
        "Pixabay"
    }

    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", keyword),
                ("per_page", &limit.to_string()),
                ("image_type", "photo"),
                ("orientation", "horizontal"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<PixabayResponse>()
            .await?;

        Ok(response
            .hits
            .into_iter()
            .filter_map(|hit| hit.webformat_url)
            .collect())
    }
}

#[derive(Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Deserialize)]
struct PexelsPhoto {
    src: PexelsSrc,
}

#[derive(Deserialize)]
struct PexelsSrc {
    large: Option<String>,
}

pub struct PexelsSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PexelsSource {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key,
            base_url: "https://api.pexels.com/v1".to_string(),
        }
    }
}

impl fmt::Debug for PexelsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsSource")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ImageSource for PexelsSource {
    fn name(&self) -> &str {
        "Pexels"
    }

    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("query", keyword),
                ("per_page", &limit.to_string()),
                ("orientation", "landscape"),
            ])
            .header("Authorization", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<PexelsResponse>()
            .await?;

        Ok(response
            .photos
            .into_iter()
            .filter_map(|photo| photo.src.large)
            .collect())
    }
}

#[derive(Serialize)]
struct ImageGenerationRequest {
    prompt: String,
    n: u32,
    size: String,
}

#[derive(Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

/// AI image generation. One request per prompt, at most two prompts; a
/// failed generation is skipped rather than failing the search.
pub struct OpenAiImageSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiImageSource {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    fn prompts(keyword: &str) -> Vec<String> {
        vec![
            format!("Professional stock photo of {}, high quality, realistic, commercial use", keyword),
            format!("Beautiful {} concept, modern design, clean background", keyword),
        ]
    }
}

impl fmt::Debug for OpenAiImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiImageSource")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ImageSource for OpenAiImageSource {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<String>> {
        let mut urls = Vec::new();
        for prompt in Self::prompts(keyword).into_iter().take(limit) {
            let body = ImageGenerationRequest {
                prompt,
                n: 1,
                size: "1024x1024".to_string(),
            };
            let generated = self
                .client
                .post(format!("{}/images/generations", self.base_url))
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&body)
                .send()
                .await?
                .error_for_status()?
                .json::<ImageGenerationResponse>()
                .await?;
            urls.extend(generated.data.into_iter().filter_map(|image| image.url));
        }
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_credentials_means_no_sources() {
        assert!(from_settings(&Settings::default()).is_empty());
    }

    #[test]
    fn openai_key_also_enables_image_generation() {
        let settings = Settings {
            pexels_api_key: Some("p".to_string()),
            openai_api_key: Some("o".to_string()),
            ..Settings::default()
        };
        let sources = from_settings(&settings);
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Pexels", "OpenAI"]);
    }

    #[test]
    fn pixabay_response_field_name_matches_wire_format() {
        let raw = r#"{"hits": [{"webformatURL": "https://img/x.jpg"}, {}]}"#;
        let parsed: PixabayResponse = serde_json::from_str(raw).unwrap();
        let urls: Vec<_> = parsed.hits.into_iter().filter_map(|h| h.webformat_url).collect();
        assert_eq!(urls, vec!["https://img/x.jpg"]);
    }
}
