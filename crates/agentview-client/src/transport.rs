//! HTTP exchange and response handling.
//!
//! One request per call: no retries, and no timeout unless one was
//! configured on the client.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::request::RequestParts;

/// Fallback message when an error response has no usable body.
const UNKNOWN_ERROR: &str = "Unknown error";

/// A raw HTTP response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Decode a successful response, or normalize a failed one into
    /// [`Error::Api`]. A `204 No Content` yields `None`.
    pub fn decode_opt<T: DeserializeOwned>(self) -> Result<Option<T>> {
        if !self.status.is_success() {
            return Err(api_error(self.status.as_u16(), &self.body));
        }
        if self.status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&self.body)?))
    }

    /// Like [`RawResponse::decode_opt`] for operations that always answer
    /// with a body. A `204` decodes from JSON `null`, so it only succeeds
    /// for nullable `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self.decode_opt()? {
            Some(value) => Ok(value),
            None => Ok(serde_json::from_value(Value::Null)?),
        }
    }
}

/// Build the uniform API error from a non-2xx response body.
///
/// A JSON object with a `message` field supplies the message and its other
/// fields become `details`. Anything else falls back to the raw body text.
pub(crate) fn api_error(status: u16, body: &str) -> Error {
    if let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(body) {
        if let Some(message) = fields.remove("message") {
            let message = match message {
                Value::String(s) => s,
                other => other.to_string(),
            };
            return Error::Api {
                status,
                message,
                details: fields,
            };
        }
    } else if !body.trim().is_empty() {
        tracing::warn!(status, "Error response body is not a JSON object");
    }

    let message = if body.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        body.to_string()
    };
    Error::Api {
        status,
        message,
        details: Map::new(),
    }
}

/// Async transport.
#[derive(Debug, Clone)]
pub(crate) struct AsyncTransport {
    http: reqwest::Client,
    timeout: Option<Duration>,
}

impl AsyncTransport {
    pub fn new(http: reqwest::Client, timeout: Option<Duration>) -> Self {
        Self { http, timeout }
    }

    pub async fn exchange(&self, parts: RequestParts) -> Result<RawResponse> {
        let method = parts.method.clone();
        let path = parts.url.path().to_string();

        let mut builder = self
            .http
            .request(parts.method, parts.url)
            .headers(parts.headers);
        if let Some(body) = &parts.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(%method, %path, status = status.as_u16(), "agentview request");
        Ok(RawResponse { status, body })
    }
}

/// Blocking transport.
#[cfg(feature = "blocking")]
#[derive(Debug, Clone)]
pub(crate) struct BlockingTransport {
    http: reqwest::blocking::Client,
    timeout: Option<Duration>,
}

#[cfg(feature = "blocking")]
impl BlockingTransport {
    pub fn new(http: reqwest::blocking::Client, timeout: Option<Duration>) -> Self {
        Self { http, timeout }
    }

    pub fn exchange(&self, parts: RequestParts) -> Result<RawResponse> {
        let method = parts.method.clone();
        let path = parts.url.path().to_string();

        let mut builder = self
            .http
            .request(parts.method, parts.url)
            .headers(parts.headers);
        if let Some(body) = &parts.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;

        tracing::debug!(%method, %path, status = status.as_u16(), "agentview request");
        Ok(RawResponse { status, body })
    }
}
