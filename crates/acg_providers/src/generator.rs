use serde::de::DeserializeOwned;
use tracing::{info, warn};

use acg_core::{GeneratedContent, GenerationRequest, Outline, ResearchResult, Settings, TextProvider};

use crate::{adapters, fallback, parse, prompts};

/// Fallback orchestrator for text generation. Providers are tried in static
/// priority order for a single prompt; the first parsable response wins.
/// There is no retry within a provider, and no error ever reaches the
/// caller: exhaustion yields the deterministic fallback document.
pub struct Generator {
    providers: Vec<Box<dyn TextProvider>>,
    content_length: usize,
}

impl Generator {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(adapters::from_settings(settings), settings.content_length)
    }

    pub fn new(providers: Vec<Box<dyn TextProvider>>, content_length: usize) -> Self {
        Self {
            providers,
            content_length,
        }
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    async fn generate_document<T: DeserializeOwned>(
        &self,
        request: &GenerationRequest,
        task: &str,
    ) -> Option<T> {
        for provider in &self.providers {
            match provider.generate(request).await {
                Ok(text) => match parse::parse_document::<T>(&text) {
                    Ok(document) => {
                        info!("✨ {} produced a valid {} document", provider.name(), task);
                        return Some(document);
                    }
                    // An unparsable document counts as a provider failure.
                    Err(e) => {
                        warn!("⚠️ {} returned an unparsable {}: {}", provider.name(), task, e)
                    }
                },
                Err(e) => warn!("⚠️ {} {} request failed: {}", provider.name(), task, e),
            }
        }
        None
    }

    pub async fn generate_outline(&self, keyword: &str, research: &ResearchResult) -> Outline {
        let request = prompts::outline_request(keyword, research);
        match self.generate_document::<Outline>(&request, "outline").await {
            Some(outline) => outline,
            None => {
                info!("📋 Using fallback outline for '{}'", keyword);
                fallback::outline(keyword)
            }
        }
    }

    pub async fn generate_content(
        &self,
        keyword: &str,
        outline: &Outline,
        research: &ResearchResult,
    ) -> GeneratedContent {
        let request = prompts::content_request(keyword, outline, research, self.content_length);
        match self
            .generate_document::<GeneratedContent>(&request, "content")
            .await
        {
            Some(content) => content,
            None => {
                info!("📋 Using fallback content for '{}'", keyword);
                fallback::content(keyword, outline)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use acg_core::{Competition, Error, Result};

    struct FailingProvider {
        name: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TextProvider for FailingProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Provider("simulated outage".to_string()))
        }
    }

    struct CannedProvider {
        name: &'static str,
        response: String,
    }

    #[async_trait]
    impl TextProvider for CannedProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            Ok(self.response.clone())
        }
    }

    fn research(keyword: &str) -> ResearchResult {
        ResearchResult {
            keyword: keyword.to_string(),
            related_keywords: vec![],
            questions: vec![],
            top_results: vec![],
            competition: Competition::default(),
            search_volume: "low".to_string(),
        }
    }

    fn outline_json() -> String {
        r#"```json
{
    "title": "Judul dari Provider",
    "h1": "Judul dari Provider",
    "h2_sections": [{"title": "Bagian", "h3_subsections": ["Sub"]}],
    "faq": ["Pertanyaan?"],
    "conclusion": "Selesai"
}
```"#
            .to_string()
    }

    #[tokio::test]
    async fn all_providers_failing_yields_fallback_outline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let providers: Vec<Box<dyn TextProvider>> = vec![
            Box::new(FailingProvider { name: "a", calls: calls.clone() }),
            Box::new(FailingProvider { name: "b", calls: calls.clone() }),
            Box::new(FailingProvider { name: "c", calls: calls.clone() }),
            Box::new(FailingProvider { name: "d", calls: calls.clone() }),
        ];
        let generator = Generator::new(providers, 1500);
        let research = research("diet sehat");

        let outline = generator.generate_outline("diet sehat", &research).await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert!(!outline.title.is_empty());
        assert!(!outline.sections.is_empty());

        let content = generator.generate_content("diet sehat", &outline, &research).await;
        assert_eq!(content.word_count, 500);
        assert!(!content.body_html.is_empty());
    }

    #[tokio::test]
    async fn no_providers_configured_yields_fallback() {
        let generator = Generator::new(vec![], 1500);
        let research = research("seo");
        let outline = generator.generate_outline("seo", &research).await;
        assert_eq!(outline.faq_questions.len(), 5);
    }

    #[tokio::test]
    async fn first_success_short_circuits_the_chain() {
        let skipped = Arc::new(AtomicUsize::new(0));
        let providers: Vec<Box<dyn TextProvider>> = vec![
            Box::new(CannedProvider { name: "first", response: outline_json() }),
            Box::new(FailingProvider { name: "second", calls: skipped.clone() }),
        ];
        let generator = Generator::new(providers, 1500);

        let outline = generator.generate_outline("seo", &research("seo")).await;
        assert_eq!(outline.title, "Judul dari Provider");
        assert_eq!(skipped.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unparsable_response_advances_to_next_provider() {
        let providers: Vec<Box<dyn TextProvider>> = vec![
            Box::new(CannedProvider { name: "garbled", response: "maaf, tidak ada JSON".to_string() }),
            Box::new(CannedProvider { name: "good", response: outline_json() }),
        ];
        let generator = Generator::new(providers, 1500);

        let outline = generator.generate_outline("seo", &research("seo")).await;
        assert_eq!(outline.title, "Judul dari Provider");
    }
}
