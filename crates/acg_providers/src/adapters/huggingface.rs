use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use acg_core::{Error, GenerationRequest, Result, TextProvider};

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    temperature: f32,
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct InferenceOutput {
    generated_text: String,
}

pub struct HuggingFaceProvider {
    client: Client,
    token: String,
    base_url: String,
    model: String,
}

impl HuggingFaceProvider {
    pub fn new(token: String, timeout: Duration) -> Self {
        Self {
            client: super::http_client(timeout),
            token,
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
        }
    }
}

impl fmt::Debug for HuggingFaceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceProvider")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl TextProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = InferenceRequest {
            inputs: format!("{}\n\n{}", request.system, request.prompt),
            parameters: InferenceParameters {
                temperature: request.temperature,
                max_new_tokens: request.max_tokens,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, self.model))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<InferenceOutput>>()
            .await?;

        response
            .into_iter()
            .next()
            .map(|output| output.generated_text)
            .ok_or_else(|| Error::Provider("HuggingFace returned no generations".to_string()))
    }
}
