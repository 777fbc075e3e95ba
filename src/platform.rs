use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::catalog::AgentDescriptor;
use crate::config::PlatformConfig;
use crate::messages::HistoryTurn;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("platform client not initialized: {0}")]
    NotInitialized(String),
    #[error("{0}")]
    Call(String),
}

/// Seam for invoking a deployed custom agent.
///
/// The real remote protocol (sessions, streaming) is not defined yet; the
/// shipping implementation returns a deterministic placeholder acknowledgment.
/// A real client replaces this impl without touching the routes.
#[async_trait]
pub trait AgentPlatform: Send + Sync {
    async fn invoke(
        &self,
        agent: &AgentDescriptor,
        prompt: &str,
        history: &[HistoryTurn],
    ) -> Result<String, PlatformError>;
}

/// Client for the Vertex AI endpoint the custom agent is deployed on.
#[derive(Debug)]
pub struct VertexPlatform {
    #[allow(dead_code)]
    client: Client,
    api_endpoint: String,
    project_id: String,
}

impl VertexPlatform {
    /// Validate configuration and set up the HTTP client. Called once at
    /// startup; a failure here is logged and requests that need the platform
    /// fail individually instead of preventing the server from starting.
    pub fn init(config: &PlatformConfig) -> Result<Self, PlatformError> {
        if config.project_id.is_empty() {
            return Err(PlatformError::NotInitialized(
                "project_id is not set".to_string(),
            ));
        }
        if config.region.is_empty() {
            return Err(PlatformError::NotInitialized(
                "region is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| PlatformError::NotInitialized(e.to_string()))?;

        info!("Vertex AI client initialized successfully.");
        Ok(Self {
            client,
            api_endpoint: config.api_endpoint(),
            project_id: config.project_id.clone(),
        })
    }
}

#[async_trait]
impl AgentPlatform for VertexPlatform {
    async fn invoke(
        &self,
        agent: &AgentDescriptor,
        prompt: &str,
        _history: &[HistoryTurn],
    ) -> Result<String, PlatformError> {
        info!(
            endpoint = %self.api_endpoint,
            project = %self.project_id,
            "Attempting to chat with custom agent: {}",
            agent.resource_name
        );

        // Placeholder for the actual agent engine call. The remote API needs
        // a managed session and stream handling before this can go live.
        Ok(custom_agent_reply(&agent.name, prompt))
    }
}

/// Deterministic acknowledgment returned until the remote call is implemented.
pub fn custom_agent_reply(agent_name: &str, prompt: &str) -> String {
    format!(
        "**Response from your Custom Product Agent ({agent_name}):** \
         I have successfully processed your request: '{prompt}'. \
         If this were live, I would now be consulting the RAG tool (ProductCatalogTool) or the \
         Cloud Function (ProductInventoryTool) using my defined tools."
    )
}
