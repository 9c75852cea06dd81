//! Sessions API.

use crate::client::AgentView;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Env, Session, SessionCreate, SessionUpdate, SessionsPage, SessionsQuery, StarStatus};

pub(crate) fn create(env: Env, mut options: SessionCreate) -> Result<ApiRequest<Session>> {
    options.env.get_or_insert(env);
    ApiRequest::post(&["api", "sessions"]).json(&options)
}

pub(crate) fn get(id: &str) -> ApiRequest<Session> {
    ApiRequest::get(&["api", "sessions", id])
}

pub(crate) fn list(env: Env, query: Option<SessionsQuery>) -> Result<ApiRequest<SessionsPage>> {
    let request = ApiRequest::get(&["api", "sessions"]);
    let request = match query {
        Some(query) => request.query(&query)?,
        None => request,
    };
    Ok(request.query_default("env", env.as_str()))
}

pub(crate) fn update(id: &str, options: &SessionUpdate) -> Result<ApiRequest<Session>> {
    ApiRequest::patch(&["api", "sessions", id]).json(options)
}

pub(crate) fn star(id: &str) -> ApiRequest<StarStatus> {
    ApiRequest::put(&["api", "sessions", id, "star"])
}

pub(crate) fn unstar(id: &str) -> ApiRequest<StarStatus> {
    ApiRequest::delete(&["api", "sessions", id, "star"])
}

pub(crate) fn is_starred(id: &str) -> ApiRequest<StarStatus> {
    ApiRequest::get(&["api", "sessions", id, "star"])
}

/// Resulting star state. A bodiless `204` means the operation applied, so
/// it maps to the state the operation sets (`absent`).
pub(crate) fn starred_or(status: Option<StarStatus>, absent: bool) -> bool {
    status.map_or(absent, |status| status.starred)
}

/// Sessions API client.
pub struct SessionsApi {
    client: AgentView,
}

impl SessionsApi {
    pub(crate) fn new(client: AgentView) -> Self {
        Self { client }
    }

    /// Create a session in the client's env unless `options` names another.
    pub async fn create(&self, options: SessionCreate) -> Result<Session> {
        self.client.execute(create(self.client.env(), options)?).await
    }

    /// Get a session by ID, with its runs.
    pub async fn get(&self, id: &str) -> Result<Session> {
        self.client.execute(get(id)).await
    }

    /// List one page of sessions in the client's env.
    pub async fn list(&self, query: impl Into<Option<SessionsQuery>>) -> Result<SessionsPage> {
        self.client
            .execute(list(self.client.env(), query.into())?)
            .await
    }

    /// Replace a session's metadata.
    pub async fn update(&self, id: &str, options: SessionUpdate) -> Result<Session> {
        self.client.execute(update(id, &options)?).await
    }

    /// Star a session. Returns the resulting state.
    pub async fn star(&self, id: &str) -> Result<bool> {
        Ok(starred_or(self.client.execute_opt(star(id)).await?, true))
    }

    /// Unstar a session. Returns the resulting state.
    pub async fn unstar(&self, id: &str) -> Result<bool> {
        Ok(starred_or(self.client.execute_opt(unstar(id)).await?, false))
    }

    /// Whether a session is starred by the current user. A `204` counts as
    /// not starred.
    pub async fn is_starred(&self, id: &str) -> Result<bool> {
        Ok(starred_or(self.client.execute_opt(is_starred(id)).await?, false))
    }
}
