use crate::gemini::GeminiClient;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}
