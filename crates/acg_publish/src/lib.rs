//! WordPress REST publishing. Treated as a terminal capability: a failure
//! surfaces as an error the caller reports once, never as a retry.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use acg_core::{Error, Result, Settings};

#[derive(Deserialize)]
struct PostResponse {
    id: u64,
}

pub struct WordPressClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl WordPressClient {
    /// Returns `None` when WordPress credentials are not configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let base_url = settings.wordpress_url.clone()?;
        let user = settings.wordpress_user.as_deref()?;
        let password = settings.wordpress_app_password.as_deref()?;

        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Some(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: basic_auth(user, password),
        })
    }

    /// Publish an article. Returns the new post id on success.
    pub async fn publish(&self, keyword: &str, content: &str, title: Option<&str>) -> Result<u64> {
        let title = title
            .map(|t| t.to_string())
            .unwrap_or_else(|| format!("Panduan Lengkap: {}", keyword));
        let body = serde_json::json!({
            "title": title,
            "content": content,
            "status": "publish",
            "categories": [1],
            "tags": [keyword],
            "meta": {
                "_yoast_wpseo_metadesc": format!(
                    "Panduan lengkap tentang {kw}. Pelajari cara, tips, dan manfaat {kw}.",
                    kw = keyword
                ),
                "_yoast_wpseo_focuskw": keyword,
            }
        });

        let response = self
            .client
            .post(format!("{}/wp-json/wp/v2/posts", self.base_url))
            .header("Authorization", &self.auth_header)
            .json(&body)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::CREATED {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Publish(format!(
                "publish failed with status {}: {}",
                status, detail
            )));
        }

        let post = response.json::<PostResponse>().await?;
        info!("📰 Published '{}' as post {}", keyword, post.id);
        Ok(post.id)
    }

    /// Connectivity probe against the posts endpoint.
    pub async fn test_connection(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/wp-json/wp/v2/posts", self.base_url))
            .header("Authorization", &self.auth_header)
            .send()
            .await;
        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("⚠️ WordPress responded with status {}", response.status());
                false
            }
            Err(e) => {
                warn!("⚠️ WordPress connection failed: {}", e);
                false
            }
        }
    }
}

fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

/// Rework a self-contained HTML document for WordPress: the theme supplies
/// CSS, so the inline stylesheet goes and theme classes come in.
pub fn prepare_for_wordpress(html: &str) -> String {
    let without_style = Regex::new(r"(?s)<style>.*?</style>")
        .unwrap()
        .replace_all(html, "")
        .into_owned();

    let with_classes = without_style
        .replace("<h1>", "<h1 class=\"entry-title\">")
        .replace("<h2>", "<h2 class=\"section-title\">")
        .replace("<h3>", "<h3 class=\"subsection-title\">");

    Regex::new(r"<img([^>]+?)/?>")
        .unwrap()
        .replace_all(&with_classes, "<img$1 class=\"wp-image-responsive\" />")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_settings_give_no_client() {
        assert!(WordPressClient::from_settings(&Settings::default()).is_none());
    }

    #[test]
    fn partially_configured_settings_give_no_client() {
        let settings = Settings {
            wordpress_url: Some("https://blog.example".to_string()),
            ..Settings::default()
        };
        assert!(WordPressClient::from_settings(&settings).is_none());
    }

    #[test]
    fn basic_auth_encodes_credentials() {
        assert_eq!(basic_auth("user", "pass"), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn prepare_strips_styles_and_adds_theme_classes() {
        let html = "<html><style>body { color: red; }</style>\
                    <h1>Judul</h1><h2>Bagian</h2><img src=\"a.jpg\" alt=\"x\" /></html>";
        let prepared = prepare_for_wordpress(html);
        assert!(!prepared.contains("<style>"));
        assert!(prepared.contains("<h1 class=\"entry-title\">"));
        assert!(prepared.contains("<h2 class=\"section-title\">"));
        assert!(prepared.contains("class=\"wp-image-responsive\""));
    }
}
