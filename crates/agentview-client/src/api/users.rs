//! Users API.

use crate::client::{AgentView, check_scope};
use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{Env, User, UserCreate, UserLookup, UserUpdate};

pub(crate) fn create(env: Env, options: Option<UserCreate>) -> Result<ApiRequest<User>> {
    let mut body = options.unwrap_or_default();
    body.env.get_or_insert(env);
    ApiRequest::post(&["api", "users"]).json(&body)
}

/// Resolve a lookup against the client's env and current scope.
///
/// A token lookup on a client scoped to a different token fails locally.
pub(crate) fn get(env: Env, scope: Option<&str>, lookup: UserLookup) -> Result<ApiRequest<User>> {
    Ok(match lookup {
        UserLookup::Me => ApiRequest::get(&["api", "users", "me"]),
        UserLookup::Id(id) => ApiRequest::get(&["api", "users", id.as_str()]),
        UserLookup::Token(token) => {
            check_scope(scope, &token)?;
            ApiRequest::get(&["api", "users", "me"]).with_user_token(token)
        }
        UserLookup::ExternalId { external_id, env: lookup_env } => {
            let env = lookup_env.unwrap_or(env);
            ApiRequest::get(&["api", "users", "by-external-id", external_id.as_str()])
                .query_default("env", env.as_str())
        }
    })
}

pub(crate) fn update(id: &str, options: Option<UserUpdate>) -> Result<ApiRequest<User>> {
    ApiRequest::patch(&["api", "users", id]).json(&options.unwrap_or_default())
}

/// Users API client.
pub struct UsersApi {
    client: AgentView,
}

impl UsersApi {
    pub(crate) fn new(client: AgentView) -> Self {
        Self { client }
    }

    /// Create a user in the client's env unless `options` names another.
    pub async fn create(&self, options: impl Into<Option<UserCreate>>) -> Result<User> {
        let request = create(self.client.env(), options.into())?;
        self.client.execute(request).await
    }

    /// Look up a user.
    pub async fn get(&self, lookup: UserLookup) -> Result<User> {
        let request = get(self.client.env(), self.client.user_token(), lookup)?;
        self.client.execute(request).await
    }

    /// The user this client is scoped to.
    pub async fn me(&self) -> Result<User> {
        self.get(UserLookup::Me).await
    }

    /// Update a user.
    pub async fn update(&self, id: &str, options: impl Into<Option<UserUpdate>>) -> Result<User> {
        self.client.execute(update(id, options.into())?).await
    }
}
