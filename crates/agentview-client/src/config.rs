//! Client configuration loaded from the environment or a TOML file.
//!
//! ```toml
//! api_base_url = "http://localhost:1990"
//! api_key = "av_secret"
//! env = "production"
//! timeout_secs = 30
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Env;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "AGENTVIEW_API_BASE_URL";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "AGENTVIEW_API_KEY";
/// Environment variable holding a user token.
pub const USER_TOKEN_ENV: &str = "AGENTVIEW_USER_TOKEN";
/// Environment variable holding the default env.
pub const ENV_ENV: &str = "AGENTVIEW_ENV";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "AGENTVIEW_TIMEOUT_SECS";

/// Connection settings for building a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(default)]
    pub env: Env,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create a config pointing at `api_base_url` with everything else unset.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_key: None,
            user_token: None,
            env: Env::default(),
            timeout_secs: None,
        }
    }

    /// Read `AGENTVIEW_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_base_url = var(BASE_URL_ENV)
            .ok_or_else(|| Error::Config(format!("{BASE_URL_ENV} is not set")))?;
        let env = match var(ENV_ENV) {
            Some(value) => value
                .trim()
                .parse::<Env>()
                .map_err(|e| Error::Config(format!("{ENV_ENV}: {e}")))?,
            None => Env::default(),
        };
        let timeout_secs = match var(TIMEOUT_ENV) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{value}'"))
            })?),
            None => None,
        };

        Ok(Self {
            api_base_url,
            api_key: var(API_KEY_ENV),
            user_token: var(USER_TOKEN_ENV),
            env,
            timeout_secs,
        })
    }

    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(format!("invalid client config: {e}")))
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading client config");
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_full() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:1990"),
            (API_KEY_ENV, "key"),
            (USER_TOKEN_ENV, "tok"),
            (ENV_ENV, "shared-playground"),
            (TIMEOUT_ENV, "15"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:1990");
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.user_token.as_deref(), Some("tok"));
        assert_eq!(config.env, Env::SharedPlayground);
        assert_eq!(config.timeout_secs, Some(15));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:1990"),
            (API_KEY_ENV, ""),
        ]))
        .unwrap();
        assert_eq!(config, ClientConfig::new("http://localhost:1990"));
    }

    #[test]
    fn test_from_lookup_missing_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[(API_KEY_ENV, "key")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_lookup_bad_values() {
        let err = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:1990"),
            (ENV_ENV, "staging"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains(ENV_ENV)));

        let err = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:1990"),
            (TIMEOUT_ENV, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_parse_toml() {
        let config = ClientConfig::from_toml_str(
            r#"
api_base_url = "https://agentview.example.com"
api_key = "key"
env = "production"
"#,
        )
        .unwrap();
        assert_eq!(config.env, Env::Production);
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("agentview.toml");
        fs::write(&path, "api_base_url = \"http://localhost:1990\"\ntimeout_secs = 5\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.env, Env::Playground);
    }

    #[test]
    fn test_load_errors() {
        let err = ClientConfig::load("/nonexistent/agentview.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("agentview.toml");
        fs::write(&path, "this is not valid toml {{{{").unwrap();
        assert!(matches!(ClientConfig::load(&path), Err(Error::Config(_))));
    }
}
