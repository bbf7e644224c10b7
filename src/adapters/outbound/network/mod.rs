/// Network adapters for external API calls
mod gemini_analyzer;

pub use gemini_analyzer::{GeminiAnalyzer, API_KEY_ENV_VARS, DEFAULT_API_BASE_URL};
