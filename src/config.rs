use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub platform_config: PlatformConfig,
    #[serde(default)]
    pub dashboard_config: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Coordinates of the cloud AI platform the custom agent is deployed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_region")]
    pub region: String,
    /// Full resource path of the deployed custom agent, e.g.
    /// projects/PROJECT_ID/locations/REGION/agents/AGENT_ID
    #[serde(default = "default_agent_resource")]
    pub custom_agent_resource_name: String,
}

fn default_project_id() -> String {
    "stately-moon-480119-h9".to_string()
}

fn default_region() -> String {
    "global".to_string()
}

fn default_agent_resource() -> String {
    format!(
        "projects/{}/locations/{}/agents/16e30e05-6c68-461f-921e-2d81f73541ed",
        default_project_id(),
        default_region()
    )
}

impl PlatformConfig {
    /// Regional API endpoint, e.g. `global-aiplatform.googleapis.com`.
    pub fn api_endpoint(&self) -> String {
        format!("{}-aiplatform.googleapis.com", self.region)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL the dashboard client talks to. Must match the gateway's host:port.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// How long fetched catalogs stay fresh, in seconds.
    #[serde(default = "default_catalog_ttl_secs")]
    pub catalog_ttl_secs: u64,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_catalog_ttl_secs() -> u64 {
    3600
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") || path_lower.ends_with(".jsonld") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }

    /// Apply environment overrides (`PORT` selects the listening port).
    pub fn apply_env(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.system_config.port = p,
                Err(_) => tracing::warn!("Ignoring unparsable PORT value: {}", port),
            }
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            region: default_region(),
            custom_agent_resource_name: default_agent_resource(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            catalog_ttl_secs: default_catalog_ttl_secs(),
        }
    }
}
