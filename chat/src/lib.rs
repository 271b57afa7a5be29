pub mod error;
pub mod providers;

pub use error::ApiError;
pub use providers::{GeneratedText, GenerateTextProvider, gemini::GeminiProvider};
