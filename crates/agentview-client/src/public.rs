//! Token-only client for end-user facing apps.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::api::public;
use crate::client::{ClientBuilder, Connection};
use crate::error::Result;
use crate::request::ApiRequest;
use crate::transport::AsyncTransport;
use crate::types::{PublicSessionsQuery, Session, SessionsPage, User};

/// Client authenticated by a user token alone.
///
/// Every call is scoped to the token's owner, so no operation takes a user
/// id or env.
///
/// ```no_run
/// use agentview_client::PublicAgentView;
///
/// # async fn example() -> agentview_client::Result<()> {
/// let client = PublicAgentView::new("http://localhost:1990", "user-token")?;
/// let page = client
///     .list_sessions(agentview_client::PublicSessionsQuery::fields().agent("support"))
///     .await?;
/// println!("{} sessions", page.pagination.total_count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PublicAgentView {
    pub(crate) conn: Arc<Connection<AsyncTransport>>,
    pub(crate) user_token: String,
}

impl std::fmt::Debug for PublicAgentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicAgentView")
            .field("base_url", &self.conn.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PublicAgentView {
    /// Create a client with default settings.
    pub fn new(base_url: impl Into<String>, user_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new()
            .base_url(base_url)
            .user_token(user_token)
            .build_public()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.conn.base_url
    }

    /// Profile of the token's owner.
    pub async fn get_me(&self) -> Result<User> {
        self.execute(public::me()).await
    }

    /// Get one of the owner's sessions.
    pub async fn get_session(&self, id: &str) -> Result<Session> {
        self.execute(public::get_session(id)).await
    }

    /// List the owner's sessions, optionally narrowed to one agent.
    pub async fn list_sessions(
        &self,
        query: impl Into<Option<PublicSessionsQuery>>,
    ) -> Result<SessionsPage> {
        self.execute(public::list_sessions(query.into())?).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> Result<T> {
        let parts = self.conn.prepare(request, Some(self.user_token.as_str()))?;
        self.conn.transport.exchange(parts).await?.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_never_carries_api_key() {
        let client = PublicAgentView::new("http://localhost:1990", "tok").unwrap();
        assert!(client.conn.api_key.is_none());
        assert_eq!(client.base_url().as_str(), "http://localhost:1990/");
    }

    #[test]
    fn test_builder_api_key_is_ignored() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:1990")
            .api_key("key")
            .user_token("tok")
            .build_public()
            .unwrap();
        assert!(client.conn.api_key.is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let client = PublicAgentView::new("http://localhost:1990", "secret-token").unwrap();
        assert!(!format!("{client:?}").contains("secret-token"));
    }
}
