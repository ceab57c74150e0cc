pub mod adapters;
pub mod fallback;
pub mod generator;
pub mod parse;
pub mod prompts;

pub use generator::Generator;

pub mod prelude {
    pub use super::generator::Generator;
    pub use acg_core::{GeneratedContent, Outline, Result, TextProvider};
}
