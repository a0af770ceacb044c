use crate::config::Config;
use crate::gemini::part::GeminiPart;
use crate::gemini::request::{GeminiContent, GeminiRequest};
use crate::gemini::response::GeminiResponse;
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct GeminiClient {
    http_client: Arc<reqwest::Client>,
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http_client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self {
            http_client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        }
    }

    fn build_target_url(&self) -> String {
        let path = format!("models/{}:generateContent", self.model);
        let base = if self.api_base.ends_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        };
        // The generative-language API authenticates via a key query param
        if self.api_key.is_empty() {
            base
        } else {
            format!("{}?key={}", base, self.api_key)
        }
    }

    /// Send a single-turn generateContent request carrying the given parts
    /// and extract the textual reply.
    pub async fn generate_reply(&self, parts: Vec<GeminiPart>) -> Result<String> {
        let target_url = self.build_target_url();
        let body = GeminiRequest {
            contents: vec![GeminiContent::user(parts)],
        };

        info!("Forwarding request to model: {}", self.model);
        debug!(
            "request body: {}",
            serde_json::to_string(&body).context("failed to serialize request")?
        );

        let response = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("failed to reach the generative language API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("API error (status {}): {}", status, error_text);
        }

        let response: GeminiResponse = response
            .json()
            .await
            .context("failed to parse the model response")?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "token usage: prompt={:?} candidates={:?} total={:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        match response.reply_text() {
            Some(text) => Ok(text),
            None => {
                if let Some(reason) = response.block_reason() {
                    bail!("prompt was blocked by the API: {:?}", reason);
                }
                match response.finish_reason() {
                    Some(reason) => bail!("model returned no text (finish reason {:?})", reason),
                    None => bail!("model response contained no candidates"),
                }
            }
        }
    }
}
