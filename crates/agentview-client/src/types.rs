//! Request and response types for the AgentView API.
//!
//! Field names follow Rust conventions; every type maps to the API's
//! camelCase wire names through serde. Opaque payloads (`metadata`,
//! `content`, `state`, `config`, `value`) are kept as raw JSON.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::datetime::{timestamp, timestamp_opt};
use crate::patch::Patch;

/// Free-form metadata attached to sessions and runs.
pub type Metadata = HashMap<String, Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Data partition that scopes users and sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Env {
    Production,
    #[default]
    Playground,
    SharedPlayground,
}

impl Env {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Env::Production => "production",
            Env::Playground => "playground",
            Env::SharedPlayground => "shared-playground",
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Env {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Env::Production),
            "playground" => Ok(Env::Playground),
            "shared-playground" => Ok(Env::SharedPlayground),
            other => Err(crate::Error::InvalidArgument(format!(
                "unknown env '{other}', expected production, playground or shared-playground"
            ))),
        }
    }
}

/// Run lifecycle status.
///
/// `InProgress` moves to one of the three terminal states. The server owns
/// the transitions; the client only validates the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Completed,
    Cancelled,
    Failed,
}

impl Status {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
            Status::Failed => "failed",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// An end user of an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// The caller's own identifier for the user.
    #[serde(default)]
    pub external_id: Option<String>,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Member who created the user, if any.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Data partition.
    pub env: Env,
    /// Bearer token for user-scoped calls.
    pub token: String,
}

/// Body for creating or updating a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    /// The caller's own identifier for the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Defaults to the client's env on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Env>,
}

/// Users are updated with the same fields they are created with.
pub type UserUpdate = UserCreate;

/// How `get_user` locates a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// The user the client is scoped to.
    Me,
    /// By user id.
    Id(String),
    /// By user token.
    Token(String),
    /// By the caller's own identifier. `env` defaults to the client's env.
    ExternalId {
        external_id: String,
        env: Option<Env>,
    },
}

impl UserLookup {
    /// Look up by user id.
    pub fn id(id: impl Into<String>) -> Self {
        UserLookup::Id(id.into())
    }

    /// Look up by user token.
    pub fn token(token: impl Into<String>) -> Self {
        UserLookup::Token(token.into())
    }

    /// Look up by the caller's own identifier in the client's env.
    pub fn external_id(external_id: impl Into<String>) -> Self {
        UserLookup::ExternalId {
            external_id: external_id.into(),
            env: None,
        }
    }

    /// Narrow an external-id lookup to `env`. No effect on other modes.
    pub fn in_env(self, env: Env) -> Self {
        match self {
            UserLookup::ExternalId { external_id, .. } => UserLookup::ExternalId {
                external_id,
                env: Some(env),
            },
            other => other,
        }
    }
}

/// Anything that carries a user token.
pub trait UserToken {
    fn user_token(&self) -> &str;
}

impl UserToken for User {
    fn user_token(&self) -> &str {
        &self.token
    }
}

impl UserToken for str {
    fn user_token(&self) -> &str {
        self
    }
}

impl UserToken for String {
    fn user_token(&self) -> &str {
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Versions, scores, comments
// ─────────────────────────────────────────────────────────────────────────────

/// Agent version a run was produced by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Unique identifier.
    pub id: String,
    /// Version string, e.g. `1.0.0`.
    pub version: String,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A named score on a session item. Soft-deleted when `deleted_at` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Unique identifier.
    pub id: String,
    /// Scored session item.
    pub session_item_id: String,
    /// Display name.
    pub name: String,
    /// Score value.
    pub value: Value,
    /// Comment the score was given with.
    #[serde(default)]
    pub comment_id: Option<String>,
    /// Member who created it.
    pub created_by: String,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// When it was deleted.
    #[serde(default, with = "timestamp_opt")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Member who deleted it.
    #[serde(default)]
    pub deleted_by: Option<String>,
}

impl Score {
    /// Whether the score was soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Body for creating a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCreate {
    /// Scored session item.
    pub session_item_id: String,
    /// Display name.
    pub name: String,
    /// Score value.
    pub value: Value,
    /// Comment the score was given with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
}

/// A comment on a session item.
///
/// `content` is `None` with `score` set for score-only comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentMessage {
    /// Unique identifier.
    pub id: String,
    /// Author.
    pub user_id: String,
    /// Comment text.
    #[serde(default)]
    pub content: Option<String>,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    #[serde(default, with = "timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
    /// When it was deleted.
    #[serde(default, with = "timestamp_opt")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Member who deleted it.
    #[serde(default)]
    pub deleted_by: Option<String>,
    /// Score attached to the comment.
    #[serde(default)]
    pub score: Option<Score>,
}

impl CommentMessage {
    /// Whether the comment was soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the comment only carries a score.
    pub fn is_score_only(&self) -> bool {
        self.content.is_none() && self.score.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session items and runs
// ─────────────────────────────────────────────────────────────────────────────

/// One item produced within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionItem {
    /// Unique identifier.
    pub id: String,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Item payload.
    pub content: Value,
    /// Run that produced the item.
    pub run_id: String,
    /// Owning session.
    pub session_id: String,
}

impl AsRef<SessionItem> for SessionItem {
    fn as_ref(&self) -> &SessionItem {
        self
    }
}

/// A session item with its comment thread and scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionItemWithCollaboration {
    /// The item itself.
    #[serde(flatten)]
    pub item: SessionItem,
    /// Comment thread, oldest first.
    #[serde(default)]
    pub comment_messages: Vec<CommentMessage>,
    /// Scores on the item.
    #[serde(default)]
    pub scores: Vec<Score>,
}

impl AsRef<SessionItem> for SessionItemWithCollaboration {
    fn as_ref(&self) -> &SessionItem {
        &self.item
    }
}

/// One agent invocation within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run<I = SessionItem> {
    /// Unique identifier.
    pub id: String,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When the run reached a terminal status.
    #[serde(default, with = "timestamp_opt")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: Status,
    /// Why the run failed.
    #[serde(default)]
    pub fail_reason: Option<Value>,
    /// Agent version.
    pub version: Version,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Opaque agent state.
    #[serde(default)]
    pub state: Option<Value>,
    /// Items produced by the run.
    pub session_items: Vec<I>,
    /// Owning session.
    pub session_id: String,
    /// Agent version id.
    #[serde(default)]
    pub version_id: Option<String>,
}

/// A run whose items carry comments and scores.
pub type RunWithCollaboration = Run<SessionItemWithCollaboration>;

impl<I: AsRef<SessionItem>> Run<I> {
    /// Item contents in creation order.
    pub fn items(&self) -> impl Iterator<Item = &Value> {
        self.session_items.iter().map(|i| &i.as_ref().content)
    }
}

/// Body for creating a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCreate {
    /// Owning session.
    pub session_id: String,
    /// Initial items.
    pub items: Vec<Value>,
    /// Agent version string.
    pub version: String,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Opaque agent state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    /// Why the run failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<Value>,
}

impl RunCreate {
    /// Create a run body with the required fields.
    pub fn new(session_id: impl Into<String>, items: Vec<Value>, version: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            items,
            version: version.into(),
            metadata: None,
            status: None,
            state: None,
            fail_reason: None,
        }
    }

    /// Set metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the agent state.
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the fail reason.
    pub fn with_fail_reason(mut self, reason: Value) -> Self {
        self.fail_reason = Some(reason);
        self
    }
}

/// Body for updating a run. Unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunUpdate {
    /// Items to append.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,
    /// Replacement metadata.
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub metadata: Patch<Metadata>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Replacement agent state.
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub state: Patch<Value>,
    /// Why the run failed.
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub fail_reason: Patch<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────────────────────────────────────

/// A session as returned by list endpoints, without runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Unique identifier.
    pub id: String,
    /// Agent name.
    pub agent: String,
    /// Short human-readable session number.
    pub handle: String,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Owning user.
    pub user: User,
    /// Owning user id.
    pub user_id: String,
    /// Data partition.
    pub env: Env,
    /// Opaque agent state.
    #[serde(default)]
    pub state: Option<Value>,
}

/// A session with its runs in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session<R = Run> {
    /// Unique identifier.
    pub id: String,
    /// Agent name.
    pub agent: String,
    /// Short human-readable session number.
    pub handle: String,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When it was last updated.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Owning user.
    pub user: User,
    /// Owning user id.
    pub user_id: String,
    /// Data partition.
    pub env: Env,
    /// Opaque agent state.
    #[serde(default)]
    pub state: Option<Value>,
    /// Runs in creation order.
    pub runs: Vec<R>,
}

/// A session whose runs carry comments and scores.
pub type SessionWithCollaboration = Session<RunWithCollaboration>;

impl<I: AsRef<SessionItem>> Session<Run<I>> {
    /// The most recent run.
    pub fn last_run(&self) -> Option<&Run<I>> {
        self.runs.last()
    }

    /// Runs that count towards the conversation: failed runs are dropped
    /// unless they are the latest one.
    pub fn active_runs(&self) -> Vec<&Run<I>> {
        let last = self.runs.len().saturating_sub(1);
        self.runs
            .iter()
            .enumerate()
            .filter(|(index, run)| run.status != Status::Failed || *index == last)
            .map(|(_, run)| run)
            .collect()
    }

    /// Item contents across runs, in order.
    pub fn items(&self, active_only: bool) -> Vec<&Value> {
        let runs: Vec<&Run<I>> = if active_only {
            self.active_runs()
        } else {
            self.runs.iter().collect()
        };
        runs.into_iter().flat_map(|run| run.items()).collect()
    }

    /// Distinct agent versions, first-seen order.
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for run in &self.runs {
            let version = run.version.version.as_str();
            if !versions.contains(&version) {
                versions.push(version);
            }
        }
        versions
    }
}

/// Body for creating a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreate {
    /// Agent name.
    pub agent: String,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Owner. The server creates a user when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Defaults to the client's env.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Env>,
}

impl SessionCreate {
    /// Create a session body for `agent`.
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            metadata: None,
            user_id: None,
            env: None,
        }
    }

    /// Set the owning user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Override the client's env.
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }
}

/// Body for updating a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUpdate {
    /// Replacement metadata.
    pub metadata: Metadata,
}

impl SessionUpdate {
    /// Replace metadata with `metadata`.
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

/// Response of the star endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarStatus {
    /// Whether the session is starred.
    pub starred: bool,
}

/// Filters for the admin session listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsQuery {
    /// Only sessions of this agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Page number, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only sessions of this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Defaults to the client's env.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Env>,
    /// Only starred (or unstarred) sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

/// Filters for the public session listing. The token fixes user and env.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicSessionsQuery {
    /// Only sessions of this agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Page number, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Pagination
// ─────────────────────────────────────────────────────────────────────────────

/// Page position within a listing. Page numbers start at 1; the start and
/// end indices are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number, starting at 1.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Number of pages.
    pub total_pages: u32,
    /// Number of matching items.
    pub total_count: u64,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_previous_page: bool,
    /// Index of the first item on this page.
    pub current_page_start: u64,
    /// Index of the last item on this page.
    pub current_page_end: u64,
}

impl Pagination {
    /// Number of items on the current page.
    pub fn page_len(&self) -> u64 {
        if self.total_count == 0 || self.current_page_end < self.current_page_start {
            0
        } else {
            self.current_page_end - self.current_page_start + 1
        }
    }
}

/// One page of sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsPage {
    /// Sessions on this page.
    pub sessions: Vec<SessionSummary>,
    /// Position of this page.
    pub pagination: Pagination,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

/// A stored project config. Each update produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Unique identifier.
    pub id: String,
    /// Opaque config document.
    pub config: Value,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Member who stored this version.
    pub created_by: String,
}

/// Body for replacing the project config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigCreate {
    /// New config document.
    pub config: Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Organization
// ─────────────────────────────────────────────────────────────────────────────

/// Organization member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Organization role.
    pub role: Role,
    /// Avatar URL.
    #[serde(default)]
    pub image: Option<String>,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdate {
    /// New role.
    pub role: Role,
}

/// Pending invitation to the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// Unique identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Organization role.
    pub role: Role,
    /// When the invitation expires.
    #[serde(with = "timestamp")]
    pub expires_at: DateTime<Utc>,
    /// When it was created.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Invitation state, e.g. `pending`.
    pub status: String,
    /// Member who sent the invitation.
    #[serde(default)]
    pub invited_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationCreate {
    /// Invitee email address.
    pub email: String,
    /// Role granted on acceptance.
    pub role: Role,
}

// ─────────────────────────────────────────────────────────────────────────────
// Webhooks
// ─────────────────────────────────────────────────────────────────────────────

/// Payload the server posts to an agent endpoint to start a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunBody {
    /// The session the run belongs to.
    pub session: Session,
    /// Input that triggered the run.
    pub input: Value,
}
