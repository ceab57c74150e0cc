use std::path::PathBuf;

use chrono::Utc;
use tracing::{error, info};

use acg_core::{sanitize_keyword, Article, Result, Settings};
use acg_images::ImageSourcer;
use acg_providers::Generator;
use acg_research::Researcher;

pub mod assemble;
pub mod input;

/// Result of one keyword's run: the assembled article, its HTML, and where
/// it landed on disk.
#[derive(Debug)]
pub struct KeywordOutcome {
    pub keyword: String,
    pub article: Article,
    pub html: String,
    pub html_path: PathBuf,
}

/// Per-batch accounting. A keyword failure is recorded here and never stops
/// the keywords after it.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub success: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// The sequential per-keyword chain: research, outline, content, images,
/// assembly, file output. One keyword runs to completion before the next
/// begins; nothing is shared between runs.
pub struct Pipeline {
    researcher: Researcher,
    generator: Generator,
    images: ImageSourcer,
    output_dir: PathBuf,
}

impl Pipeline {
    pub fn new(settings: &Settings) -> Self {
        Self {
            researcher: Researcher::from_settings(settings),
            generator: Generator::from_settings(settings),
            images: ImageSourcer::from_settings(settings),
            output_dir: settings.output_dir.clone(),
        }
    }

    pub async fn run(&self, keyword: &str) -> Result<KeywordOutcome> {
        info!("🔍 Processing keyword: {}", keyword);

        info!("📊 Researching keyword...");
        let research = self.researcher.research(keyword).await;

        info!("📝 Generating content outline...");
        let outline = self.generator.generate_outline(keyword, &research).await;

        info!("✍️ Generating content...");
        let content = self
            .generator
            .generate_content(keyword, &outline, &research)
            .await;

        info!("🖼️ Sourcing images...");
        let images = self.images.source_and_persist(keyword).await;

        let article = Article {
            keyword: keyword.to_string(),
            content,
            images,
            generated_at: Utc::now(),
        };

        info!("🌐 Building HTML...");
        let html = assemble::assemble(
            &article.keyword,
            &article.content,
            &article.images,
            article.generated_at,
        );

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let html_path = self
            .output_dir
            .join(format!("{}.html", sanitize_keyword(keyword)));
        tokio::fs::write(&html_path, &html).await?;
        info!("✅ Content saved to {}", html_path.display());

        Ok(KeywordOutcome {
            keyword: keyword.to_string(),
            article,
            html,
            html_path,
        })
    }

    /// Process keywords strictly one after another, recording per-keyword
    /// outcomes instead of propagating failures.
    pub async fn run_batch(&self, keywords: &[String]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        info!("🚀 Processing {} keywords...", keywords.len());

        for (index, keyword) in keywords.iter().enumerate() {
            info!("[{}/{}] Processing: {}", index + 1, keywords.len(), keyword);
            match self.run(keyword).await {
                Ok(_) => summary.success.push(keyword.clone()),
                Err(e) => {
                    error!("❌ Error processing '{}': {}", keyword, e);
                    summary.failed.push((keyword.clone(), e.to_string()));
                }
            }
        }

        info!(
            "📊 Results: {} success, {} failed",
            summary.success.len(),
            summary.failed.len()
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_settings(output_dir: PathBuf) -> Settings {
        Settings {
            output_dir,
            download_images: false,
            request_timeout: Duration::from_secs(2),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn end_to_end_with_no_providers_configured() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(&offline_settings(dir.path().to_path_buf()));

        let outcome = pipeline.run("diet sehat").await.unwrap();

        // With every provider unconfigured the article is the deterministic
        // fallback document.
        assert_eq!(outcome.article.content.word_count, 500);
        assert!(!outcome.article.content.body_html.is_empty());
        assert!(outcome.article.images.len() <= 3);
        assert!(outcome
            .article
            .images
            .iter()
            .all(|image| match image {
                acg_core::ImageRef::Remote(url) =>
                    acg_images::FALLBACK_POOL.contains(&url.as_str()),
                acg_core::ImageRef::Local(_) => false,
            }));
        assert!(outcome.html.contains("Kesimpulan"));
        assert!(outcome.html_path.ends_with("diet_sehat.html"));
        assert!(outcome.html_path.exists());
    }

    #[tokio::test]
    async fn batch_records_every_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(&offline_settings(dir.path().to_path_buf()));

        let keywords = vec!["seo".to_string(), "diet sehat".to_string()];
        let summary = pipeline.run_batch(&keywords).await;

        assert_eq!(summary.success.len() + summary.failed.len(), 2);
        assert_eq!(summary.success, keywords);
    }
}
