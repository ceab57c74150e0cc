use async_trait::async_trait;

use crate::Result;

/// One text-generation request as sent to any provider backend.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A text-generation backend. Implementations are constructed only when a
/// credential is present; an unconfigured provider simply never exists.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Generate raw text for the request, or fail. Callers treat any error
    /// identically: log and move on to the next provider.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// A stock-photo or AI-image backend returning candidate image URLs.
#[async_trait]
pub trait ImageSource: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<String>>;
}
