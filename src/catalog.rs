use serde::{Deserialize, Serialize};

use crate::config::PlatformConfig;

/// Kind of conversational backend behind an agent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentType {
    /// A custom agent deployed on the cloud platform; the chat gateway routes
    /// these through the platform seam.
    #[serde(rename = "Custom Agent")]
    Custom,
    /// A pre-built platform agent; always answered in mock mode.
    #[serde(rename = "Vertex AI Agent")]
    Prebuilt,
}

impl AgentType {
    /// Human-readable label, identical to the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            AgentType::Custom => "Custom Agent",
            AgentType::Prebuilt => "Vertex AI Agent",
        }
    }
}

/// A named, independently configured conversational backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub resource_name: String,
}

/// Descriptive record of a capability an agent could use. Never invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tool_type: String,
}

/// Static agent and tool catalogs, built once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct Catalog {
    agents: Vec<AgentDescriptor>,
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    /// Build the hard-coded catalogs. Only the custom agent's resource path
    /// comes from configuration.
    pub fn builtin(platform: &PlatformConfig) -> Self {
        let agents = vec![
            AgentDescriptor {
                id: "product-agent-custom".to_string(),
                name: "Product Inventory & Catalog Agent (Custom)".to_string(),
                description: "Custom agent leveraging ProductCatalogTool (RAG) and ProductInventoryTool (Cloud Function).".to_string(),
                agent_type: AgentType::Custom,
                resource_name: platform.custom_agent_resource_name.clone(),
            },
            AgentDescriptor {
                id: "free-agent-financial".to_string(),
                name: "Financial Analysis Assistant".to_string(),
                description: "Pre-built agent for general financial queries and market trends (Mock).".to_string(),
                agent_type: AgentType::Prebuilt,
                resource_name: "mock-financial-agent".to_string(),
            },
            AgentDescriptor {
                id: "free-agent-code".to_string(),
                name: "Code Generation Helper".to_string(),
                description: "Pre-built agent for generating Python snippets and debugging code (Mock).".to_string(),
                agent_type: AgentType::Prebuilt,
                resource_name: "mock-code-agent".to_string(),
            },
        ];

        let tools = vec![
            tool("Vertex AI Search", "Vertex AI Native", "Grounding with your private data stores.", "RAG Tool"),
            tool("Grounding with Google Search", "Vertex AI Native", "Real-time, public information search.", "Search Tool"),
            tool("Cloud SQL - PostgreSQL", "GCP Connector", "Connects to a PostgreSQL database on Google Cloud SQL.", "Database Connector"),
            tool("Google Calendar", "Google Connector", "Manages schedules and events via Google Calendar.", "Productivity Connector"),
            tool("Jira Cloud", "Third-Party Connector", "Interacts with Jira for issue and project management.", "Productivity Connector"),
            tool("Oracle DB", "Third-Party Connector", "Connects to an Oracle Database instance.", "Database Connector"),
        ];

        Self { agents, tools }
    }

    /// All agents, insertion order preserved.
    pub fn agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    /// All tools, insertion order preserved.
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Linear scan by unique id.
    pub fn find_agent(&self, id: &str) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|a| a.id == id)
    }
}

fn tool(name: &str, category: &str, description: &str, tool_type: &str) -> ToolDescriptor {
    ToolDescriptor {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        tool_type: tool_type.to_string(),
    }
}
