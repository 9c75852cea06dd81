//! Config API.

use serde_json::Value;

use crate::client::AgentView;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Config, ConfigCreate};

pub(crate) fn get() -> ApiRequest<Config> {
    ApiRequest::get(&["api", "config"])
}

pub(crate) fn update(config: Value) -> Result<ApiRequest<Config>> {
    ApiRequest::put(&["api", "config"]).json(&ConfigCreate { config })
}

/// Project config API client.
///
/// Configs are versioned by creation: every update stores a new record.
pub struct ConfigApi {
    client: AgentView,
}

impl ConfigApi {
    pub(crate) fn new(client: AgentView) -> Self {
        Self { client }
    }

    /// Get the current config.
    pub async fn get(&self) -> Result<Config> {
        self.client.execute(get()).await
    }

    /// Store a new config.
    pub async fn update(&self, config: Value) -> Result<Config> {
        self.client.execute(update(config)?).await
    }
}
