//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{ConfigApi, RunsApi, SessionsApi, UsersApi};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::public::PublicAgentView;
use crate::request::ApiRequest;
use crate::transport::AsyncTransport;
use crate::types::{Env, UserToken};

/// Immutable connection settings shared by a client and everything derived
/// from it.
#[derive(Debug)]
pub(crate) struct Connection<T> {
    pub(crate) transport: T,
    pub(crate) base_url: Url,
    pub(crate) api_key: Option<String>,
    pub(crate) env: Env,
}

impl<T> Connection<T> {
    /// Resolve `request` and log it.
    pub(crate) fn prepare<R>(
        &self,
        request: ApiRequest<R>,
        user_token: Option<&str>,
    ) -> Result<crate::request::RequestParts> {
        tracing::trace!(method = %request.method(), path = %request.path(), "preparing request");
        request.into_parts(&self.base_url, self.api_key.as_deref(), user_token)
    }
}

/// Admin client for the AgentView API.
///
/// Authenticates with an API key and may additionally be scoped to one end
/// user via [`AgentView::as_user`]. Cloning is cheap; clones and scoped
/// clients share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use agentview_client::{AgentView, SessionCreate, UserCreate};
///
/// # async fn example() -> agentview_client::Result<()> {
/// let client = AgentView::builder()
///     .base_url("http://localhost:1990")
///     .api_key("av_secret")
///     .build()?;
///
/// let user = client.users().create(UserCreate::fields().external_id("crm-42")).await?;
/// let session = client
///     .sessions()
///     .create(SessionCreate::new("support").with_user(&user.id))
///     .await?;
///
/// let scoped = client.as_user(&user)?;
/// let me = scoped.users().me().await?;
/// assert_eq!(me.id, session.user_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AgentView {
    pub(crate) conn: Arc<Connection<AsyncTransport>>,
    pub(crate) user_token: Option<String>,
}

impl std::fmt::Debug for AgentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentView")
            .field("base_url", &self.conn.base_url.as_str())
            .field("env", &self.conn.env)
            .field("user_scoped", &self.user_token.is_some())
            .finish()
    }
}

impl AgentView {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Build a client from `AGENTVIEW_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_config(&ClientConfig::from_env()?).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.conn.base_url
    }

    /// Env injected into env-scoped calls that don't name one.
    pub fn env(&self) -> Env {
        self.conn.env
    }

    /// The user token this client is scoped to, if any.
    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    /// Return a client scoped to `user`, leaving `self` untouched.
    ///
    /// Fails with [`Error::InvalidArgument`] if this client is already scoped
    /// to a different token.
    pub fn as_user<U: UserToken + ?Sized>(&self, user: &U) -> Result<Self> {
        let token = check_scope(self.user_token.as_deref(), user.user_token())?;
        Ok(Self {
            conn: Arc::clone(&self.conn),
            user_token: Some(token.to_string()),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the sessions API.
    pub fn sessions(&self) -> SessionsApi {
        SessionsApi::new(self.clone())
    }

    /// Access the runs API.
    pub fn runs(&self) -> RunsApi {
        RunsApi::new(self.clone())
    }

    /// Access the project config API (internal/admin use).
    pub fn config(&self) -> ConfigApi {
        ConfigApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Execution
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> Result<T> {
        let parts = self.conn.prepare(request, self.user_token.as_deref())?;
        self.conn.transport.exchange(parts).await?.decode()
    }

    /// Execute a request whose success may carry no body (`204`).
    pub(crate) async fn execute_opt<T: DeserializeOwned>(
        &self,
        request: ApiRequest<T>,
    ) -> Result<Option<T>> {
        let parts = self.conn.prepare(request, self.user_token.as_deref())?;
        self.conn.transport.exchange(parts).await?.decode_opt()
    }
}

/// Check that scoping to `token` does not conflict with `current`.
pub(crate) fn check_scope<'a>(current: Option<&str>, token: &'a str) -> Result<&'a str> {
    match current {
        Some(current) if current != token => Err(Error::InvalidArgument(
            "client is already scoped to another user's token".to_string(),
        )),
        _ => Ok(token),
    }
}

/// Builder for creating an [`AgentView`] (or its blocking twin).
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_token: Option<String>,
    env: Env,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: Some(config.api_base_url.clone()),
            api_key: config.api_key.clone(),
            user_token: config.user_token.clone(),
            env: config.env,
            timeout: config.timeout_secs.map(Duration::from_secs),
            user_agent: None,
        }
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Scope the client to a user token from the start.
    pub fn user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    /// Set the default env (`playground` unless set).
    pub fn env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    /// Set a per-request timeout. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the async admin client.
    pub fn build(self) -> Result<AgentView> {
        let settings = self.settings(true)?;
        let http = reqwest::Client::builder()
            .default_headers(settings.headers)
            .user_agent(settings.user_agent)
            .build()?;

        Ok(AgentView {
            conn: Arc::new(Connection {
                transport: AsyncTransport::new(http, self.timeout),
                base_url: settings.base_url,
                api_key: self.api_key,
                env: self.env,
            }),
            user_token: self.user_token,
        })
    }

    /// Build the async token-only client.
    pub fn build_public(self) -> Result<PublicAgentView> {
        let settings = self.settings(false)?;
        let token = self
            .user_token
            .ok_or_else(|| Error::Config("user_token is required".to_string()))?;
        let http = reqwest::Client::builder()
            .default_headers(settings.headers)
            .user_agent(settings.user_agent)
            .build()?;

        Ok(PublicAgentView {
            conn: Arc::new(Connection {
                transport: AsyncTransport::new(http, self.timeout),
                base_url: settings.base_url,
                api_key: None,
                env: self.env,
            }),
            user_token: token,
        })
    }

    /// Build the blocking admin client.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::AgentView> {
        use crate::transport::BlockingTransport;

        let settings = self.settings(true)?;
        let http = reqwest::blocking::Client::builder()
            .default_headers(settings.headers)
            .user_agent(settings.user_agent)
            .build()?;

        Ok(crate::blocking::AgentView {
            conn: Arc::new(Connection {
                transport: BlockingTransport::new(http, self.timeout),
                base_url: settings.base_url,
                api_key: self.api_key,
                env: self.env,
            }),
            user_token: self.user_token,
        })
    }

    /// Build the blocking token-only client.
    #[cfg(feature = "blocking")]
    pub fn build_blocking_public(self) -> Result<crate::blocking::PublicAgentView> {
        use crate::transport::BlockingTransport;

        let settings = self.settings(false)?;
        let token = self
            .user_token
            .ok_or_else(|| Error::Config("user_token is required".to_string()))?;
        let http = reqwest::blocking::Client::builder()
            .default_headers(settings.headers)
            .user_agent(settings.user_agent)
            .build()?;

        Ok(crate::blocking::PublicAgentView {
            conn: Arc::new(Connection {
                transport: BlockingTransport::new(http, self.timeout),
                base_url: settings.base_url,
                api_key: None,
                env: self.env,
            }),
            user_token: token,
        })
    }

    /// Validate the builder and derive shared HTTP settings.
    fn settings(&self, needs_api_key: bool) -> Result<Settings> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        if needs_api_key && self.api_key.is_none() {
            return Err(Error::Config("api_key is required".to_string()));
        }

        // Parse and normalize base URL
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("agentview-client/{}", env!("CARGO_PKG_VERSION")));

        Ok(Settings {
            base_url,
            headers,
            user_agent,
        })
    }
}

struct Settings {
    base_url: Url,
    headers: HeaderMap,
    user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AgentView {
        ClientBuilder::new()
            .base_url("http://localhost:1990")
            .api_key("key")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().api_key("key").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = ClientBuilder::new().base_url("http://localhost:1990").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = ClientBuilder::new().base_url("not a url").api_key("k").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        assert_eq!(client().base_url().as_str(), "http://localhost:1990/");

        let client = ClientBuilder::new()
            .base_url("http://localhost:1990/av")
            .api_key("key")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:1990/av/");
    }

    #[test]
    fn test_default_env_is_playground() {
        assert_eq!(client().env(), Env::Playground);
    }

    #[test]
    fn test_as_user_does_not_mutate_original() {
        let admin = client();
        let scoped = admin.as_user("tok-1").unwrap();

        assert_eq!(admin.user_token(), None);
        assert_eq!(scoped.user_token(), Some("tok-1"));
        assert_eq!(scoped.env(), admin.env());
        assert!(Arc::ptr_eq(&admin.conn, &scoped.conn));
    }

    #[test]
    fn test_as_user_conflicting_token_fails() {
        let scoped = client().as_user("tok-1").unwrap();
        assert!(scoped.as_user("tok-1").is_ok());
        assert!(matches!(
            scoped.as_user("tok-2"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_public_requires_token() {
        let result = ClientBuilder::new()
            .base_url("http://localhost:1990")
            .build_public();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let scoped = client().as_user("secret-token").unwrap();
        let text = format!("{scoped:?}");
        assert!(!text.contains("secret-token"));
        assert!(!text.contains("key"));
    }
}
