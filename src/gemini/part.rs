use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

impl GeminiPart {
    pub fn text(text: impl Into<String>) -> Self {
        GeminiPart::Text {
            text: text.into(),
            thought: None,
        }
    }

    /// Inline-data part embedding the payload in the request body,
    /// base64-encoded as the generateContent API expects.
    pub fn inline_image(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        GeminiPart::InlineData {
            inline_data: GeminiInlineData {
                mime_type: mime_type.into(),
                data: STANDARD.encode(bytes),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_image_data_decodes_back_to_the_upload() {
        let raw = b"\x89PNG\r\n\x1a\nfake-image-bytes";
        let part = GeminiPart::inline_image("image/png", raw);
        match part {
            GeminiPart::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/png");
                assert_eq!(STANDARD.decode(&inline_data.data).unwrap(), raw);
            }
            other => panic!("expected inline data part, got {:?}", other),
        }
    }

    #[test]
    fn untagged_parts_deserialize_by_shape() {
        let text: GeminiPart = serde_json::from_value(json!({ "text": "hi" })).unwrap();
        assert!(matches!(text, GeminiPart::Text { .. }));

        let inline: GeminiPart = serde_json::from_value(json!({
            "inlineData": { "mimeType": "image/jpeg", "data": "aGk=" }
        }))
        .unwrap();
        assert!(matches!(inline, GeminiPart::InlineData { .. }));
    }
}
