use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use acg_core::{Error, GenerationRequest, Result, TextProvider};

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}

pub struct CohereProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CohereProvider {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: super::http_client(timeout),
            api_key,
            base_url: "https://api.cohere.ai/v1".to_string(),
        }
    }
}

impl fmt::Debug for CohereProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CohereProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TextProvider for CohereProvider {
    fn name(&self) -> &str {
        "Cohere"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        // Cohere's generate endpoint has no system role; prepend it.
        let body = GenerateRequest {
            model: "command".to_string(),
            prompt: format!("{}\n\n{}", request.system, request.prompt),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        response
            .generations
            .into_iter()
            .next()
            .map(|generation| generation.text)
            .ok_or_else(|| Error::Provider("Cohere returned no generations".to_string()))
    }
}
