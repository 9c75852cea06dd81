//! Runs API.

use crate::client::AgentView;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Run, RunCreate, RunUpdate};

pub(crate) fn create(options: &RunCreate) -> Result<ApiRequest<Run>> {
    ApiRequest::post(&["api", "runs"]).json(options)
}

pub(crate) fn update(id: &str, options: Option<RunUpdate>) -> Result<ApiRequest<Run>> {
    ApiRequest::patch(&["api", "runs", id]).json(&options.unwrap_or_default())
}

/// Runs API client.
pub struct RunsApi {
    client: AgentView,
}

impl RunsApi {
    pub(crate) fn new(client: AgentView) -> Self {
        Self { client }
    }

    /// Start a run in a session.
    pub async fn create(&self, options: RunCreate) -> Result<Run> {
        self.client.execute(create(&options)?).await
    }

    /// Update a run. Fields left unset are not touched.
    pub async fn update(&self, id: &str, options: impl Into<Option<RunUpdate>>) -> Result<Run> {
        self.client.execute(update(id, options.into())?).await
    }
}
