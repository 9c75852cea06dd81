//! Public (token-only) endpoints.

use crate::error::Result;
use crate::request::ApiRequest;
use crate::types::{PublicSessionsQuery, Session, SessionsPage, User};

pub(crate) fn me() -> ApiRequest<User> {
    ApiRequest::get(&["api", "public", "me"])
}

pub(crate) fn get_session(id: &str) -> ApiRequest<Session> {
    ApiRequest::get(&["api", "public", "sessions", id])
}

pub(crate) fn list_sessions(query: Option<PublicSessionsQuery>) -> Result<ApiRequest<SessionsPage>> {
    let request = ApiRequest::get(&["api", "public", "sessions"]);
    match query {
        Some(query) => request.query(&query),
        None => Ok(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_has_no_env() {
        let request = list_sessions(PublicSessionsQuery::fields().agent("support").build()).unwrap();
        assert_eq!(request.path(), "/api/public/sessions");
        assert_eq!(
            request.query_params(),
            &[("agent".to_string(), "support".to_string())]
        );

        let request = list_sessions(None).unwrap();
        assert!(request.query_params().is_empty());
    }
}
