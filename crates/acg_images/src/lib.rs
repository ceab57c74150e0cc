use std::collections::HashSet;
use std::path::PathBuf;

use futures::future::join_all;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use acg_core::{sanitize_keyword, ImageRef, ImageSource, Settings};

pub mod providers;

/// How many candidates each backend is asked for.
const PER_SOURCE: usize = 3;

/// Built-in pool used to top up an article when the providers come back
/// short. Seeded URLs so the same pool entry always resolves to the same
/// image.
pub const FALLBACK_POOL: [&str; 8] = [
    "https://picsum.photos/seed/artikel-1/800/600",
    "https://picsum.photos/seed/artikel-2/800/600",
    "https://picsum.photos/seed/artikel-3/800/600",
    "https://picsum.photos/seed/artikel-4/800/600",
    "https://picsum.photos/seed/artikel-5/800/600",
    "https://picsum.photos/seed/artikel-6/800/600",
    "https://picsum.photos/seed/artikel-7/800/600",
    "https://picsum.photos/seed/artikel-8/800/600",
];

const ALT_TEXTS: [(&str, &str); 5] = [
    ("", "ilustrasi utama"),
    ("Gambar ", "konsep visual"),
    ("Foto ", "referensi visual"),
    ("Desain ", "inspirasi"),
    ("Visualisasi ", "panduan"),
];

/// Image sourcing orchestrator: queries every configured backend
/// independently, merges and caps the results, tops up from the static
/// pool, then best-effort persists each image locally.
pub struct ImageSourcer {
    sources: Vec<Box<dyn ImageSource>>,
    client: reqwest::Client,
    cap: usize,
    output_dir: PathBuf,
    download: bool,
}

impl ImageSourcer {
    pub fn from_settings(settings: &Settings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            sources: providers::from_settings(settings),
            client,
            cap: settings.max_images_per_article,
            output_dir: settings.output_dir.clone(),
            download: settings.download_images,
        }
    }

    /// Collect candidate URLs from every backend. Backends that fail
    /// contribute nothing; a run with zero configured backends goes
    /// straight to the fallback pool.
    pub async fn source(&self, keyword: &str) -> Vec<String> {
        // All backends are queried independently; order carries no fallback
        // meaning, results are concatenated.
        let searches = self
            .sources
            .iter()
            .map(|source| async move { (source.name(), source.search(keyword, PER_SOURCE).await) });
        let mut pool = Vec::new();
        for (name, outcome) in join_all(searches).await {
            match outcome {
                Ok(urls) => {
                    info!("🖼️ {} returned {} images for '{}'", name, urls.len(), keyword);
                    pool.extend(urls);
                }
                Err(e) => warn!("⚠️ {} image search failed for '{}': {}", name, keyword, e),
            }
        }

        let mut urls = dedup_truncate(pool, self.cap);
        if urls.len() < self.cap {
            fill_from_pool(&mut urls, self.cap, &mut rand::thread_rng());
        }
        urls
    }

    /// Download each URL next to the article output, dropping entries whose
    /// retrieval fails. Zero persisted images is not an error. With
    /// downloads disabled the URLs are kept as remote references.
    pub async fn persist(&self, keyword: &str, urls: Vec<String>) -> Vec<ImageRef> {
        if !self.download {
            return urls.into_iter().map(ImageRef::Remote).collect();
        }

        let dir = self.output_dir.join("images").join(sanitize_keyword(keyword));
        if let Err(e) = tokio::fs::create_dir_all(&dir).await {
            warn!("⚠️ Cannot create image directory {}: {}", dir.display(), e);
            return Vec::new();
        }

        let mut saved = Vec::new();
        for (index, url) in urls.into_iter().enumerate() {
            match self.download_one(&url, &dir, index).await {
                Ok(path) => saved.push(ImageRef::Local(path)),
                Err(e) => warn!("⚠️ Dropping image {}: {}", url, e),
            }
        }
        info!("💾 Persisted {} images for '{}'", saved.len(), keyword);
        saved
    }

    async fn download_one(
        &self,
        url: &str,
        dir: &std::path::Path,
        index: usize,
    ) -> acg_core::Result<PathBuf> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let path = dir.join(format!("image_{}.jpg", index + 1));
        tokio::fs::write(&path, &bytes).await?;
        Ok(path)
    }

    pub async fn source_and_persist(&self, keyword: &str) -> Vec<ImageRef> {
        let urls = self.source(keyword).await;
        self.persist(keyword, urls).await
    }
}

/// Drop duplicate URLs preserving first occurrence, then truncate.
pub fn dedup_truncate(urls: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .take(cap)
        .collect()
}

/// Top up with a random no-duplicate sample from the static pool until the
/// cap is reached or the pool is exhausted.
pub fn fill_from_pool<R: rand::Rng>(urls: &mut Vec<String>, cap: usize, rng: &mut R) {
    let mut candidates: Vec<&str> = FALLBACK_POOL
        .iter()
        .copied()
        .filter(|candidate| !urls.iter().any(|existing| existing == candidate))
        .collect();
    candidates.shuffle(rng);
    for candidate in candidates {
        if urls.len() >= cap {
            break;
        }
        urls.push(candidate.to_string());
    }
}

/// Rotating alt text for the n-th image of an article.
pub fn alt_text(keyword: &str, index: usize) -> String {
    let (prefix, suffix) = ALT_TEXTS[index % ALT_TEXTS.len()];
    format!("{}{} - {}", prefix, keyword, suffix)
}
