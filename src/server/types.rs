use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub api_url: String,
    pub api_key: String,
}

// Inbound analysis request. Anything that is not `type: "image"` is treated
// as text, including a missing type field.
#[derive(Deserialize, Debug, Clone)]
pub struct AnalyzeRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub content: String,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

impl AnalyzeRequest {
    pub fn is_image(&self) -> bool {
        self.kind == "image"
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    OnBrand,
    NeedsWork,
    OffBrand,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fail,
    Warn,
}

// The verdict object the model is prompted to produce. Used to check the
// shape of recovered JSON before relaying it; categories stay free-form
// strings since the prompt's issue and pass category lists differ.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub summary: String,
    pub win_quote: String,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub passes: Vec<Pass>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub name: String,
    pub severity: Severity,
    pub category: String,
    pub excerpt: Option<String>,
    pub fix: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Pass {
    pub name: String,
    pub category: String,
}
