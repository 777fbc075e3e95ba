use std::sync::Arc;
use tracing::error;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::platform::{AgentPlatform, VertexPlatform};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// None when platform initialization failed at startup; chat requests on
    /// the custom-agent path then fail individually.
    pub platform: Option<Arc<dyn AgentPlatform>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(Catalog::builtin(&config.platform_config));

        let platform: Option<Arc<dyn AgentPlatform>> =
            match VertexPlatform::init(&config.platform_config) {
                Ok(p) => Some(Arc::new(p)),
                Err(e) => {
                    error!("Error initializing Vertex AI client: {}", e);
                    None
                }
            };

        Self {
            config,
            catalog,
            platform,
        }
    }
}
