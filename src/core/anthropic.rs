use crate::core::extract::extract_json_object;
use crate::server::error::ApiError;
use crate::server::types::{AnalysisResult, AnalyzeRequest, AppState};
use crate::utils::constants::{
    ANTHROPIC_MODEL, ANTHROPIC_VERSION, BRAND_SYSTEM_PROMPT, DEFAULT_IMAGE_MIME,
    IMAGE_INSTRUCTION, MAX_TOKENS, TEXT_INSTRUCTION_PREFIX, TEXT_INSTRUCTION_SUFFIX,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug)]
pub struct MessageRequest {
    model: &'static str,
    max_tokens: u32,
    system: &'static str,
    messages: Vec<Message>,
}

#[derive(Serialize, Debug)]
struct Message {
    role: &'static str,
    content: UserContent,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum UserContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Serialize, Debug)]
struct ImageSource {
    #[serde(rename = "type")]
    source_type: &'static str,
    media_type: String,
    data: String,
}

// Typed view of the messages API reply; only the first text block matters.
#[derive(Deserialize, Debug)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
    error: Option<UpstreamError>,
}

#[derive(Deserialize, Debug)]
struct ResponseBlock {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct UpstreamError {
    message: String,
}

// One inbound request maps to exactly one upstream call. No retries; any
// failure surfaces immediately as a 502-class error.
pub async fn analyze(state: &AppState, request: &AnalyzeRequest) -> Result<Value, ApiError> {
    let payload = build_message_request(request);

    let response = state
        .http_client
        .post(&state.api_url)
        .header("x-api-key", &state.api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("API request failed: {e}")))?;

    let body: MessagesResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to parse API response: {e}")))?;

    if let Some(err) = body.error {
        tracing::error!(message = %err.message, "upstream reported an error");
        return Err(ApiError::Upstream(err.message));
    }

    let text = body
        .content
        .first()
        .and_then(|block| block.text.as_deref())
        .unwrap_or("");

    parse_verdict(text)
}

pub(crate) fn build_message_request(request: &AnalyzeRequest) -> MessageRequest {
    let content = if request.is_image() {
        UserContent::Blocks(vec![
            ContentBlock::Image {
                source: ImageSource {
                    source_type: "base64",
                    media_type: request
                        .mime_type
                        .clone()
                        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
                    data: request.content.clone(),
                },
            },
            ContentBlock::Text {
                text: IMAGE_INSTRUCTION.to_string(),
            },
        ])
    } else {
        UserContent::Text(format!(
            "{TEXT_INSTRUCTION_PREFIX}{}{TEXT_INSTRUCTION_SUFFIX}",
            request.content
        ))
    };

    MessageRequest {
        model: ANTHROPIC_MODEL,
        max_tokens: MAX_TOKENS,
        system: BRAND_SYSTEM_PROMPT,
        messages: vec![Message {
            role: "user",
            content,
        }],
    }
}

// Recover the verdict object from the model's reply text, check its shape
// against the documented schema, and relay the original value so any extra
// fields the model added pass through untouched.
pub(crate) fn parse_verdict(text: &str) -> Result<Value, ApiError> {
    let span = extract_json_object(text).ok_or_else(|| {
        ApiError::Upstream("Could not parse Claude response as JSON".to_string())
    })?;

    let value: Value = serde_json::from_str(span)
        .map_err(|e| ApiError::Upstream(format!("Failed to parse API response: {e}")))?;

    let _: AnalysisResult = serde_json::from_value(value.clone())
        .map_err(|e| ApiError::Upstream(format!("Malformed analysis object: {e}")))?;

    Ok(value)
}
