use crate::gemini::GeminiPart;
use crate::models::{ChatReply, ErrorResponse, ImageUpload};
use crate::state::AppState;
use anyhow::Context;
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::{debug, warn};

/// Upper bound for the multipart body; the generateContent API caps
/// inline-data requests at 20MB.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[axum_macros::debug_handler]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[axum_macros::debug_handler]
pub async fn chat(
    State(state): State<AppState>,
    multipart: Multipart,
) -> axum::response::Response {
    match relay_chat(&state, multipart).await {
        Ok(reply) => (StatusCode::OK, Json(ChatReply { reply })).into_response(),
        Err(e) => {
            warn!("chat relay failed: {:#}", e);
            let error_response = ErrorResponse {
                error: format!("{:#}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
        }
    }
}

/// The whole relay path. Any failure surfaces at the handler boundary above
/// as a single flattened error response.
async fn relay_chat(state: &AppState, mut multipart: Multipart) -> anyhow::Result<String> {
    let mut message = String::new();
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .context("failed to read multipart form")?
    {
        match field.name() {
            Some("message") => {
                message = field
                    .text()
                    .await
                    .context("failed to read the message field")?;
            }
            Some("image") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .context("failed to read the image field")?;
                image = Some(ImageUpload { mime_type, data });
            }
            _ => {} // unknown fields are ignored
        }
    }

    let parts = build_parts(&message, image);
    debug!("relaying {} part(s)", parts.len());

    state.gemini.generate_reply(parts).await
}

/// Text part first (only when the message is non-empty), then the image
/// (only when a file was uploaded).
fn build_parts(message: &str, image: Option<ImageUpload>) -> Vec<GeminiPart> {
    let mut parts = Vec::new();
    if !message.is_empty() {
        parts.push(GeminiPart::text(message));
    }
    if let Some(upload) = image {
        parts.push(GeminiPart::inline_image(upload.mime_type, &upload.data));
    }
    parts
}
