use std::time::Duration;

use acg_core::{Settings, TextProvider};

pub mod anthropic;
pub mod cohere;
pub mod huggingface;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use cohere::CohereProvider;
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Build the configured adapters in static fallback priority order:
/// OpenAI, then Cohere, then Anthropic, then HuggingFace. A provider
/// without a credential is skipped entirely.
pub fn from_settings(settings: &Settings) -> Vec<Box<dyn TextProvider>> {
    let timeout = settings.request_timeout;
    let mut providers: Vec<Box<dyn TextProvider>> = Vec::new();

    if let Some(key) = &settings.openai_api_key {
        providers.push(Box::new(OpenAiProvider::new(key.clone(), timeout)));
    }
    if let Some(key) = &settings.cohere_api_key {
        providers.push(Box::new(CohereProvider::new(key.clone(), timeout)));
    }
    if let Some(key) = &settings.anthropic_api_key {
        providers.push(Box::new(AnthropicProvider::new(key.clone(), timeout)));
    }
    if let Some(token) = &settings.huggingface_token {
        providers.push(Box::new(HuggingFaceProvider::new(token.clone(), timeout)));
    }

    providers
}
