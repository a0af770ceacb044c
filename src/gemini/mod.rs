pub mod client;
pub mod part;
pub mod request;
pub mod response;

pub use client::GeminiClient;
pub use part::{GeminiInlineData, GeminiPart};
pub use request::{GeminiContent, GeminiRequest};
pub use response::{
    GeminiBlockReason, GeminiCandidate, GeminiFinishReason, GeminiPromptFeedback, GeminiResponse,
    GeminiUsage,
};
