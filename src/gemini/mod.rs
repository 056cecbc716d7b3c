pub mod api;
pub mod prompt;

pub use api::{GeminiClient, DEFAULT_MODEL, KNOWN_MODELS};
