use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything learned about a keyword before generation starts.
/// Built once by the research aggregator and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    pub keyword: String,
    pub related_keywords: Vec<String>,
    pub questions: Vec<String>,
    pub top_results: Vec<TopResult>,
    pub competition: Competition,
    pub search_volume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopResult {
    pub title: String,
    pub url: String,
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub level: String,
    pub difficulty: String,
    pub unique_domains: usize,
    pub total_results: usize,
}

impl Default for Competition {
    fn default() -> Self {
        Self {
            level: "Unknown".to_string(),
            difficulty: "Unknown".to_string(),
            unique_domains: 0,
            total_results: 0,
        }
    }
}

/// Heading skeleton the content request is built around. The serde names
/// match the JSON document the text providers are asked to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outline {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub h1: String,
    #[serde(rename = "h2_sections", default)]
    pub sections: Vec<OutlineSection>,
    #[serde(rename = "faq", default)]
    pub faq_questions: Vec<String>,
    #[serde(default)]
    pub conclusion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineSection {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "h3_subsections", default)]
    pub subsections: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(rename = "content", default)]
    pub body_html: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub word_count: usize,
}

/// An image either still on the provider's CDN or already saved next to the
/// article output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    Remote(String),
    Local(PathBuf),
}

impl ImageRef {
    /// Value usable as an `<img src>` attribute.
    pub fn src(&self) -> String {
        match self {
            ImageRef::Remote(url) => url.clone(),
            ImageRef::Local(path) => path.to_string_lossy().into_owned(),
        }
    }
}

/// The unit that gets written to disk and optionally published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub keyword: String,
    pub content: GeneratedContent,
    pub images: Vec<ImageRef>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_parses_provider_document_shape() {
        let raw = r#"{
            "title": "Panduan Lengkap: Diet Sehat",
            "h1": "Panduan Lengkap: Diet Sehat",
            "h2_sections": [
                {"title": "Apa itu diet sehat?", "h3_subsections": ["Definisi", "Manfaat"]}
            ],
            "faq": ["Apa itu diet sehat?"],
            "conclusion": "Kesimpulan tentang diet sehat"
        }"#;
        let outline: Outline = serde_json::from_str(raw).unwrap();
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].subsections, vec!["Definisi", "Manfaat"]);
        assert_eq!(outline.faq_questions.len(), 1);
    }

    #[test]
    fn content_parses_with_missing_fields() {
        let raw = r#"{"title": "T", "content": "<p>x</p>"}"#;
        let content: GeneratedContent = serde_json::from_str(raw).unwrap();
        assert_eq!(content.body_html, "<p>x</p>");
        assert_eq!(content.word_count, 0);
        assert!(content.keywords.is_empty());
    }

    #[test]
    fn image_ref_src_for_both_variants() {
        assert_eq!(ImageRef::Remote("http://a/b.jpg".into()).src(), "http://a/b.jpg");
        let local = ImageRef::Local(PathBuf::from("output/images/x/image_1.jpg"));
        assert_eq!(local.src(), "output/images/x/image_1.jpg");
    }
}
