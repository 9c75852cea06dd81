//! Blocking clients.
//!
//! Same operations and request shapes as the async clients; each call
//! blocks the current thread until the exchange completes. Must not be used
//! from inside an async runtime.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{config, public, runs, sessions, users};
use crate::client::{ClientBuilder, Connection, check_scope};
use crate::error::Result;
use crate::request::ApiRequest;
use crate::transport::BlockingTransport;
use crate::types::{
    Config, Env, PublicSessionsQuery, Run, RunCreate, RunUpdate, Session, SessionCreate,
    SessionUpdate, SessionsPage, SessionsQuery, User, UserCreate, UserLookup, UserToken,
    UserUpdate,
};

/// Blocking admin client. See [`crate::AgentView`].
#[derive(Clone)]
pub struct AgentView {
    pub(crate) conn: Arc<Connection<BlockingTransport>>,
    pub(crate) user_token: Option<String>,
}

impl std::fmt::Debug for AgentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::AgentView")
            .field("base_url", &self.conn.base_url.as_str())
            .field("env", &self.conn.env)
            .field("user_scoped", &self.user_token.is_some())
            .finish()
    }
}

impl AgentView {
    /// Create a new client builder. Finish with [`ClientBuilder::build_blocking`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
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
    pub fn as_user<U: UserToken + ?Sized>(&self, user: &U) -> Result<Self> {
        let token = check_scope(self.user_token.as_deref(), user.user_token())?;
        Ok(Self {
            conn: Arc::clone(&self.conn),
            user_token: Some(token.to_string()),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a user in the client's env unless `options` names another.
    pub fn create_user(&self, options: impl Into<Option<UserCreate>>) -> Result<User> {
        self.execute(users::create(self.env(), options.into())?)
    }

    /// Look up a user.
    pub fn get_user(&self, lookup: UserLookup) -> Result<User> {
        self.execute(users::get(self.env(), self.user_token(), lookup)?)
    }

    /// The user this client is scoped to.
    pub fn me(&self) -> Result<User> {
        self.get_user(UserLookup::Me)
    }

    /// Update a user.
    pub fn update_user(&self, id: &str, options: impl Into<Option<UserUpdate>>) -> Result<User> {
        self.execute(users::update(id, options.into())?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sessions
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a session in the client's env unless `options` names another.
    pub fn create_session(&self, options: SessionCreate) -> Result<Session> {
        self.execute(sessions::create(self.env(), options)?)
    }

    /// Get a session by ID, with its runs.
    pub fn get_session(&self, id: &str) -> Result<Session> {
        self.execute(sessions::get(id))
    }

    /// List one page of sessions in the client's env.
    pub fn list_sessions(&self, query: impl Into<Option<SessionsQuery>>) -> Result<SessionsPage> {
        self.execute(sessions::list(self.env(), query.into())?)
    }

    /// Replace a session's metadata.
    pub fn update_session(&self, id: &str, options: SessionUpdate) -> Result<Session> {
        self.execute(sessions::update(id, &options)?)
    }

    /// Star a session. Returns the resulting state.
    pub fn star_session(&self, id: &str) -> Result<bool> {
        Ok(sessions::starred_or(self.execute_opt(sessions::star(id))?, true))
    }

    /// Unstar a session. Returns the resulting state.
    pub fn unstar_session(&self, id: &str) -> Result<bool> {
        Ok(sessions::starred_or(self.execute_opt(sessions::unstar(id))?, false))
    }

    /// Whether a session is starred by the current user.
    pub fn is_session_starred(&self, id: &str) -> Result<bool> {
        Ok(sessions::starred_or(self.execute_opt(sessions::is_starred(id))?, false))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Runs
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a run in a session.
    pub fn create_run(&self, options: RunCreate) -> Result<Run> {
        self.execute(runs::create(&options)?)
    }

    /// Update a run. Fields left unset are not touched.
    pub fn update_run(&self, id: &str, options: impl Into<Option<RunUpdate>>) -> Result<Run> {
        self.execute(runs::update(id, options.into())?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Config
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the current config.
    pub fn get_config(&self) -> Result<Config> {
        self.execute(config::get())
    }

    /// Store a new config.
    pub fn update_config(&self, config: Value) -> Result<Config> {
        self.execute(config::update(config)?)
    }

    fn execute<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> Result<T> {
        let parts = self.conn.prepare(request, self.user_token.as_deref())?;
        self.conn.transport.exchange(parts)?.decode()
    }

    fn execute_opt<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> Result<Option<T>> {
        let parts = self.conn.prepare(request, self.user_token.as_deref())?;
        self.conn.transport.exchange(parts)?.decode_opt()
    }
}

/// Blocking token-only client. See [`crate::PublicAgentView`].
#[derive(Clone)]
pub struct PublicAgentView {
    pub(crate) conn: Arc<Connection<BlockingTransport>>,
    pub(crate) user_token: String,
}

impl std::fmt::Debug for PublicAgentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::PublicAgentView")
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
            .build_blocking_public()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.conn.base_url
    }

    /// Profile of the token's owner.
    pub fn get_me(&self) -> Result<User> {
        self.execute(public::me())
    }

    /// Get one of the owner's sessions.
    pub fn get_session(&self, id: &str) -> Result<Session> {
        self.execute(public::get_session(id))
    }

    /// List the owner's sessions, optionally narrowed to one agent.
    pub fn list_sessions(
        &self,
        query: impl Into<Option<PublicSessionsQuery>>,
    ) -> Result<SessionsPage> {
        self.execute(public::list_sessions(query.into())?)
    }

    fn execute<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> Result<T> {
        let parts = self.conn.prepare(request, Some(self.user_token.as_str()))?;
        self.conn.transport.exchange(parts)?.decode()
    }
}
