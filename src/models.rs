use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A decoded `image` form field: the raw upload plus its declared media type.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub mime_type: String,
    pub data: Bytes,
}
