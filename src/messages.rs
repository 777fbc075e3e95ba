use serde::{Deserialize, Serialize};

/// One prior exchange entry, replayed by the client on every chat call.
/// Advisory context only; the gateway accepts it but the mock paths never
/// read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "agentId")]
    pub agent_id: String,
    pub prompt: String,
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
