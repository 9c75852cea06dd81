//! Transport-independent description of one API call.
//!
//! Each operation builds an [`ApiRequest`] once; the async and blocking
//! clients only differ in how they execute it.

use std::marker::PhantomData;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Header carrying the end-user token.
pub const USER_TOKEN_HEADER: &str = "x-user-token";

/// A request whose successful response decodes to `T`.
#[derive(Debug)]
pub(crate) struct ApiRequest<T> {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    user_token: Option<String>,
    _response: PhantomData<fn() -> T>,
}

impl<T> ApiRequest<T> {
    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
            user_token: None,
            _response: PhantomData,
        }
    }

    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn put(segments: &[&str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn patch(segments: &[&str]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append query parameters from a serializable filter struct.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        self.query.extend(query_pairs(query)?);
        Ok(self)
    }

    /// Add `key=value` unless the query already carries `key`.
    pub fn query_default(mut self, key: &str, value: &str) -> Self {
        if !self.query.iter().any(|(k, _)| k == key) {
            self.query.insert(0, (key.to_string(), value.to_string()));
        }
        self
    }

    /// Send this request with `token` instead of the client's own scope.
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path for logging, e.g. `/api/users/me`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    #[cfg(test)]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    #[cfg(test)]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Resolve the request against a base URL and credentials.
    ///
    /// `api_key` becomes `Authorization: Bearer ...`; the effective user
    /// token (the override, else `scope_token`) becomes `X-User-Token`.
    pub fn into_parts(
        self,
        base_url: &Url,
        api_key: Option<&str>,
        scope_token: Option<&str>,
    ) -> Result<RequestParts> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base URL cannot be a base: {base_url}")))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {key}"), "API key")?);
        }
        if let Some(token) = self.user_token.as_deref().or(scope_token) {
            headers.insert(
                HeaderName::from_static(USER_TOKEN_HEADER),
                header_value(token, "user token")?,
            );
        }

        Ok(RequestParts {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}

/// A fully resolved HTTP request.
#[derive(Debug)]
pub(crate) struct RequestParts {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("Invalid {what}: not a valid header value")))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Flatten a filter struct into string query pairs.
///
/// Unset fields are skipped, booleans become `"true"`/`"false"`, enums use
/// their wire value, and numbers use their decimal form.
pub(crate) fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(query)?;
    let Value::Object(map) = value else {
        return Err(Error::InvalidArgument(
            "query parameters must serialize to an object".to_string(),
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        pairs.push((key, text));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Env, SessionsQuery};

    fn base() -> Url {
        Url::parse("http://localhost:3000/").unwrap()
    }

    #[test]
    fn test_query_pairs_stringify() {
        let query = SessionsQuery {
            agent: Some("support".into()),
            page: Some(3),
            env: Some(Env::SharedPlayground),
            starred: Some(false),
            ..Default::default()
        };
        let pairs = query_pairs(&query).unwrap();
        assert!(pairs.contains(&("agent".into(), "support".into())));
        assert!(pairs.contains(&("page".into(), "3".into())));
        assert!(pairs.contains(&("env".into(), "shared-playground".into())));
        assert!(pairs.contains(&("starred".into(), "false".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "userId" || k == "limit"));
    }

    #[test]
    fn test_query_default_does_not_override() {
        let request: ApiRequest<()> = ApiRequest::get(&["api", "sessions"])
            .query(&SessionsQuery {
                env: Some(Env::Production),
                ..Default::default()
            })
            .unwrap()
            .query_default("env", "playground");
        assert_eq!(
            request.query_params(),
            &[("env".to_string(), "production".to_string())]
        );

        let request: ApiRequest<()> =
            ApiRequest::get(&["api", "sessions"]).query_default("env", "playground");
        assert_eq!(
            request.query_params(),
            &[("env".to_string(), "playground".to_string())]
        );
    }

    #[test]
    fn test_into_parts_builds_url_and_headers() {
        let request: ApiRequest<()> = ApiRequest::get(&["api", "users", "by-external-id", "a b/c"])
            .query_default("env", "playground");
        let parts = request
            .into_parts(&base(), Some("key-1"), Some("tok-1"))
            .unwrap();

        assert_eq!(
            parts.url.as_str(),
            "http://localhost:3000/api/users/by-external-id/a%20b%2Fc?env=playground"
        );
        assert_eq!(parts.headers[AUTHORIZATION], "Bearer key-1");
        assert_eq!(parts.headers[USER_TOKEN_HEADER], "tok-1");
    }

    #[test]
    fn test_token_override_wins() {
        let request: ApiRequest<()> =
            ApiRequest::get(&["api", "users", "me"]).with_user_token("other");
        let parts = request.into_parts(&base(), None, Some("tok-1")).unwrap();
        assert_eq!(parts.headers[USER_TOKEN_HEADER], "other");
        assert!(parts.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let base = Url::parse("http://localhost:3000/prefix/").unwrap();
        let request: ApiRequest<()> = ApiRequest::get(&["api", "config"]);
        let parts = request.into_parts(&base, Some("k"), None).unwrap();
        assert_eq!(parts.url.as_str(), "http://localhost:3000/prefix/api/config");
    }

    #[test]
    fn test_rejects_bad_header_values() {
        let request: ApiRequest<()> = ApiRequest::get(&["api", "users", "me"]);
        let err = request
            .into_parts(&base(), Some("bad\nkey"), None)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
