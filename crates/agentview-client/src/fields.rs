//! Call-site field expansion for optional request models.
//!
//! Operations whose options model is optional accept
//! `impl Into<Option<M>>`, so callers can pass `None`, a full model, or a
//! [`Fields`] builder that names individual fields:
//!
//! ```no_run
//! # use agentview_client::{AgentView, UserCreate, Result};
//! # async fn example(client: AgentView) -> Result<()> {
//! let user = client
//!     .users()
//!     .create(UserCreate::fields().external_id("crm-42"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Setters given an absent value (`None`) leave the field untouched, and a
//! builder on which nothing was set converts to `None` rather than to a
//! default model.

use serde_json::Value;

use crate::patch::Patch;
use crate::types::{
    Env, Metadata, PublicSessionsQuery, RunUpdate, SessionsQuery, Status, UserCreate,
};

/// A field argument that may be absent.
pub trait FieldValue<T> {
    fn into_field(self) -> Option<T>;
}

impl<T> FieldValue<T> for T {
    fn into_field(self) -> Option<T> {
        Some(self)
    }
}

impl<T> FieldValue<T> for Option<T> {
    fn into_field(self) -> Option<T> {
        self
    }
}

impl FieldValue<String> for &str {
    fn into_field(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl FieldValue<String> for Option<&str> {
    fn into_field(self) -> Option<String> {
        self.map(str::to_string)
    }
}

/// Named-field builder for an options model `M`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<M> {
    model: Option<M>,
}

impl<M> Default for Fields<M> {
    fn default() -> Self {
        Self { model: None }
    }
}

impl<M: Default> Fields<M> {
    /// Start with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    fn set<T>(mut self, value: impl FieldValue<T>, apply: impl FnOnce(&mut M, T)) -> Self {
        if let Some(value) = value.into_field() {
            apply(self.model.get_or_insert_with(M::default), value);
        }
        self
    }

    /// The model built so far, `None` if no field was provided.
    pub fn build(self) -> Option<M> {
        self.model
    }

    /// Borrow the model built so far.
    pub fn as_model(&self) -> Option<&M> {
        self.model.as_ref()
    }
}

impl<M> From<Fields<M>> for Option<M> {
    fn from(fields: Fields<M>) -> Self {
        fields.model
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

impl UserCreate {
    /// Build options field by field.
    pub fn fields() -> Fields<Self> {
        Fields::new()
    }
}

impl Fields<UserCreate> {
    /// Set the external id.
    pub fn external_id(self, value: impl FieldValue<String>) -> Self {
        self.set(value, |m, v| m.external_id = Some(v))
    }

    /// Set the env instead of the client's.
    pub fn env(self, value: impl FieldValue<Env>) -> Self {
        self.set(value, |m, v| m.env = Some(v))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session listing
// ─────────────────────────────────────────────────────────────────────────────

impl SessionsQuery {
    /// Build filters field by field.
    pub fn fields() -> Fields<Self> {
        Fields::new()
    }
}

impl Fields<SessionsQuery> {
    /// Filter by agent.
    pub fn agent(self, value: impl FieldValue<String>) -> Self {
        self.set(value, |m, v| m.agent = Some(v))
    }

    /// Set the page number.
    pub fn page(self, value: impl FieldValue<u32>) -> Self {
        self.set(value, |m, v| m.page = Some(v))
    }

    /// Set the page size.
    pub fn limit(self, value: impl FieldValue<u32>) -> Self {
        self.set(value, |m, v| m.limit = Some(v))
    }

    /// Filter by owning user.
    pub fn user_id(self, value: impl FieldValue<String>) -> Self {
        self.set(value, |m, v| m.user_id = Some(v))
    }

    /// Filter by env instead of the client's.
    pub fn env(self, value: impl FieldValue<Env>) -> Self {
        self.set(value, |m, v| m.env = Some(v))
    }

    /// Filter by starred state.
    pub fn starred(self, value: impl FieldValue<bool>) -> Self {
        self.set(value, |m, v| m.starred = Some(v))
    }
}

impl PublicSessionsQuery {
    /// Build filters field by field.
    pub fn fields() -> Fields<Self> {
        Fields::new()
    }
}

impl Fields<PublicSessionsQuery> {
    /// Filter by agent.
    pub fn agent(self, value: impl FieldValue<String>) -> Self {
        self.set(value, |m, v| m.agent = Some(v))
    }

    /// Set the page number.
    pub fn page(self, value: impl FieldValue<u32>) -> Self {
        self.set(value, |m, v| m.page = Some(v))
    }

    /// Set the page size.
    pub fn limit(self, value: impl FieldValue<u32>) -> Self {
        self.set(value, |m, v| m.limit = Some(v))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Run updates
// ─────────────────────────────────────────────────────────────────────────────

impl RunUpdate {
    /// Build an update field by field.
    pub fn fields() -> Fields<Self> {
        Fields::new()
    }
}

impl Fields<RunUpdate> {
    /// Append items.
    pub fn items(self, value: impl FieldValue<Vec<Value>>) -> Self {
        self.set(value, |m, v| m.items = Some(v))
    }

    /// Replace metadata.
    pub fn metadata(self, value: impl FieldValue<Metadata>) -> Self {
        self.set(value, |m, v| m.metadata = Patch::Value(v))
    }

    /// Set the status.
    pub fn status(self, value: impl FieldValue<Status>) -> Self {
        self.set(value, |m, v| m.status = Some(v))
    }

    /// Replace the agent state.
    pub fn state(self, value: impl FieldValue<Value>) -> Self {
        self.set(value, |m, v| m.state = Patch::Value(v))
    }

    /// Set the fail reason.
    pub fn fail_reason(self, value: impl FieldValue<Value>) -> Self {
        self.set(value, |m, v| m.fail_reason = Patch::Value(v))
    }

    fn clear(mut self, apply: impl FnOnce(&mut RunUpdate)) -> Self {
        apply(self.model.get_or_insert_with(RunUpdate::default));
        self
    }

    /// Send `metadata: null`.
    pub fn clear_metadata(self) -> Self {
        self.clear(|m| m.metadata = Patch::Null)
    }

    /// Send `state: null`.
    pub fn clear_state(self) -> Self {
        self.clear(|m| m.state = Patch::Null)
    }

    /// Send `failReason: null`.
    pub fn clear_fail_reason(self) -> Self {
        self.clear(|m| m.fail_reason = Patch::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_fields_gives_absent_model() {
        let options: Option<UserCreate> = UserCreate::fields().into();
        assert_eq!(options, None);
        assert_ne!(options, Some(UserCreate::default()));
    }

    #[test]
    fn test_absent_values_are_dropped() {
        let none: Option<&str> = None;
        let options = UserCreate::fields().external_id(none).env(None).build();
        assert_eq!(options, None);

        let options = UserCreate::fields()
            .external_id(none)
            .env(Env::Production)
            .build();
        assert_eq!(
            options,
            Some(UserCreate {
                external_id: None,
                env: Some(Env::Production)
            })
        );
    }

    #[test]
    fn test_string_fields_accept_str_and_string() {
        let a = SessionsQuery::fields().agent("support").build();
        let b = SessionsQuery::fields().agent("support".to_string()).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_match_direct_model() {
        let expanded = SessionsQuery::fields()
            .agent("support")
            .page(2u32)
            .starred(true)
            .build();
        let direct = SessionsQuery {
            agent: Some("support".into()),
            page: Some(2u32),
            starred: Some(true),
            ..Default::default()
        };
        assert_eq!(expanded, Some(direct));
    }

    #[test]
    fn test_clear_sets_explicit_null() {
        let update = RunUpdate::fields().clear_fail_reason().build().unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "failReason": null })
        );
    }

    #[test]
    fn test_run_update_values() {
        let update = RunUpdate::fields()
            .status(Status::Failed)
            .fail_reason(json!({ "message": "timeout" }))
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "status": "failed", "failReason": { "message": "timeout" } })
        );
    }
}
