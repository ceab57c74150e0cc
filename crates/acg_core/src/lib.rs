pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::Settings;
pub use error::Error;
pub use traits::{GenerationRequest, ImageSource, TextProvider};
pub use types::{
    Article, Competition, GeneratedContent, ImageRef, Outline, OutlineSection, ResearchResult,
    TopResult,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Turn a keyword into a filesystem-safe name ("diet sehat" -> "diet_sehat").
pub fn sanitize_keyword(keyword: &str) -> String {
    keyword
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

pub mod prelude {
    pub use super::{Article, Error, GeneratedContent, ImageRef, Outline, ResearchResult, Result, Settings};
}
