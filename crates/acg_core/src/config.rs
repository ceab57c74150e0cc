use std::path::PathBuf;
use std::time::Duration;

use crate::{Error, Result};

/// Runtime configuration, read once at startup and passed by reference into
/// every component constructor. There is no ambient global settings object.
#[derive(Debug, Clone)]
pub struct Settings {
    // Text-generation providers, in fallback priority order.
    pub openai_api_key: Option<String>,
    pub cohere_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub huggingface_token: Option<String>,

    // Image providers.
    pub unsplash_api_key: Option<String>,
    pub pixabay_api_key: Option<String>,
    pub pexels_api_key: Option<String>,

    // WordPress publishing.
    pub wordpress_url: Option<String>,
    pub wordpress_user: Option<String>,
    pub wordpress_app_password: Option<String>,

    pub output_dir: PathBuf,
    pub content_length: usize,
    pub max_images_per_article: usize,
    pub language: String,
    pub request_timeout: Duration,
    /// When false, sourced images stay as remote URLs instead of being
    /// downloaded next to the article.
    pub download_images: bool,

    // Caps and heuristic thresholds. Ad-hoc values, kept configurable
    // rather than hard-coded.
    pub related_keyword_cap: usize,
    pub question_cap: usize,
    pub competition_high_domains: usize,
    pub competition_medium_domains: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            cohere_api_key: None,
            anthropic_api_key: None,
            huggingface_token: None,
            unsplash_api_key: None,
            pixabay_api_key: None,
            pexels_api_key: None,
            wordpress_url: None,
            wordpress_user: None,
            wordpress_app_password: None,
            output_dir: PathBuf::from("output"),
            content_length: 1500,
            max_images_per_article: 3,
            language: "id".to_string(),
            request_timeout: Duration::from_secs(30),
            download_images: true,
            related_keyword_cap: 20,
            question_cap: 5,
            competition_high_domains: 4,
            competition_medium_domains: 2,
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env_opt(name).and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Settings {
    /// Build settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            openai_api_key: env_opt("OPENAI_API_KEY"),
            cohere_api_key: env_opt("COHERE_API_KEY"),
            anthropic_api_key: env_opt("ANTHROPIC_API_KEY"),
            huggingface_token: env_opt("HUGGINGFACE_TOKEN"),
            unsplash_api_key: env_opt("UNSPLASH_API_KEY"),
            pixabay_api_key: env_opt("PIXABAY_API_KEY"),
            pexels_api_key: env_opt("PEXELS_API_KEY"),
            wordpress_url: env_opt("WORDPRESS_URL"),
            wordpress_user: env_opt("WORDPRESS_USER"),
            wordpress_app_password: env_opt("WORDPRESS_APP_PASSWORD"),
            output_dir: env_opt("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            content_length: env_parse("CONTENT_LENGTH", defaults.content_length),
            max_images_per_article: env_parse(
                "MAX_IMAGES_PER_ARTICLE",
                defaults.max_images_per_article,
            ),
            language: env_opt("LANGUAGE").unwrap_or(defaults.language),
            request_timeout: Duration::from_secs(env_parse("REQUEST_TIMEOUT_SECS", 30)),
            download_images: env_parse("DOWNLOAD_IMAGES", defaults.download_images),
            related_keyword_cap: defaults.related_keyword_cap,
            question_cap: defaults.question_cap,
            competition_high_domains: defaults.competition_high_domains,
            competition_medium_domains: defaults.competition_medium_domains,
        }
    }

    /// Startup validation: at least one text provider must be configured and
    /// the output directory must exist or be creatable.
    pub fn validate(&self) -> Result<()> {
        if !self.has_text_provider() {
            return Err(Error::Config(
                "at least one AI API key is required (OpenAI, Cohere, Anthropic, or HuggingFace)"
                    .to_string(),
            ));
        }
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::Config(format!(
                "cannot create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;
        Ok(())
    }

    pub fn has_text_provider(&self) -> bool {
        self.openai_api_key.is_some()
            || self.cohere_api_key.is_some()
            || self.anthropic_api_key.is_some()
            || self.huggingface_token.is_some()
    }

    pub fn wordpress_configured(&self) -> bool {
        self.wordpress_url.is_some()
            && self.wordpress_user.is_some()
            && self.wordpress_app_password.is_some()
    }

    /// Which credentials are present, for the startup status report.
    pub fn provider_status(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("openai", self.openai_api_key.is_some()),
            ("cohere", self.cohere_api_key.is_some()),
            ("anthropic", self.anthropic_api_key.is_some()),
            ("huggingface", self.huggingface_token.is_some()),
            ("unsplash", self.unsplash_api_key.is_some()),
            ("pixabay", self.pixabay_api_key.is_some()),
            ("pexels", self.pexels_api_key.is_some()),
            ("wordpress", self.wordpress_configured()),
        ]
    }
}
