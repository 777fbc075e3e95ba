use reqwest::Client;
use serde_json::Value;

use crate::catalog::{AgentDescriptor, ToolDescriptor};
use crate::messages::{ChatRequest, ChatResponse, HistoryTurn};

/// Client-side failure taxonomy. Transport errors mean the gateway could not
/// be reached at all; gateway errors carry the decoded `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("cannot reach the gateway: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway returned {status}: {message}")]
    Gateway { status: u16, message: String },
}

/// HTTP client for the gateway API, one method per route.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_agents(&self) -> Result<Vec<AgentDescriptor>, ClientError> {
        let url = format!("{}/api/v1/agents", self.base_url);
        let response = self.client.get(&url).send().await?;
        let agents = Self::check(response).await?.json().await?;
        Ok(agents)
    }

    pub async fn fetch_tools(&self) -> Result<Vec<ToolDescriptor>, ClientError> {
        let url = format!("{}/api/v1/tools", self.base_url);
        let response = self.client.get(&url).send().await?;
        let tools = Self::check(response).await?.json().await?;
        Ok(tools)
    }

    pub async fn chat(
        &self,
        agent_id: &str,
        prompt: &str,
        history: Vec<HistoryTurn>,
    ) -> Result<String, ClientError> {
        let url = format!("{}/api/v1/chat", self.base_url);
        let request = ChatRequest {
            agent_id: agent_id.to_string(),
            prompt: prompt.to_string(),
            history,
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let body: ChatResponse = Self::check(response).await?.json().await?;
        Ok(body.response)
    }

    /// Turn non-success statuses into `ClientError::Gateway`, pulling the
    /// message out of the error body when one is present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("unexpected error body")
                .to_string(),
            Err(_) => "no error body".to_string(),
        };

        Err(ClientError::Gateway {
            status: status.as_u16(),
            message,
        })
    }
}
