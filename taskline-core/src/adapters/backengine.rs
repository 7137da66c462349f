//! Backengine API client
//!
//! Handles communication with the remote Backengine task service:
//! account signup, credential-to-token login, and the authenticated task
//! collection endpoints.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Credentials, Task, TaskDraft};
use crate::ports::TaskBackend;

/// Fixed fallback messages, one per wire operation. Used whenever a
/// failure carries no server-supplied `detail`.
pub const MSG_SIGNUP_FAILED: &str = "Error signing up";
pub const MSG_LOGIN_FAILED: &str = "Error logging in";
pub const MSG_FETCH_FAILED: &str = "Error fetching todos";
pub const MSG_CREATE_FAILED: &str = "Error creating todo";

/// Environment variable to override the API base URL.
/// Set this to point at a staging or mock server for testing.
pub const TASKLINE_BASE_URL_ENV: &str = "TASKLINE_BASE_URL";

// =============================================================================
// API Response Models
// =============================================================================

/// Successful login response
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Failure body shape: the service reports errors as `{"detail": ...}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

// =============================================================================
// Backengine HTTP Client
// =============================================================================

/// Backengine API client
#[derive(Debug)]
pub struct BackengineClient {
    client: Client,
    base_url: String,
}

impl BackengineClient {
    /// Create a client from configuration.
    ///
    /// The `TASKLINE_BASE_URL` environment variable takes precedence over
    /// the configured base URL.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = std::env::var(TASKLINE_BASE_URL_ENV)
            .unwrap_or_else(|_| config.api_base_url.clone());
        Self::new_with_base_url(&base_url, config.timeout_secs)
    }

    /// Create a client with an explicit base URL.
    ///
    /// Prefer `new()` with the `TASKLINE_BASE_URL` env var for testing.
    pub fn new_with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid API base URL: {}", e)))?;

        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(Error::Config(format!(
                "API base URL must be http(s), got '{}'",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl TaskBackend for BackengineClient {
    fn signup(&self, credentials: &Credentials) -> Result<()> {
        let response = self
            .client
            .post(self.url("/signup"))
            .json(credentials)
            .send()
            .map_err(|_| Error::auth(MSG_SIGNUP_FAILED))?;

        // Success body is ignored beyond the ok-check
        if response.status().is_success() {
            return Ok(());
        }
        Err(Error::auth(error_message(response, MSG_SIGNUP_FAILED)))
    }

    fn login(&self, credentials: &Credentials) -> Result<String> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .map_err(|_| Error::auth(MSG_LOGIN_FAILED))?;

        if !response.status().is_success() {
            return Err(Error::auth(error_message(response, MSG_LOGIN_FAILED)));
        }

        let body: LoginResponse = response.json().map_err(|_| Error::auth(MSG_LOGIN_FAILED))?;
        Ok(body.access_token)
    }

    fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(self.url("/todos"))
            .bearer_auth(token)
            .send()
            .map_err(|_| Error::fetch(MSG_FETCH_FAILED))?;

        if !response.status().is_success() {
            return Err(Error::fetch(error_message(response, MSG_FETCH_FAILED)));
        }

        response.json().map_err(|_| Error::fetch(MSG_FETCH_FAILED))
    }

    fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<Task> {
        let response = self
            .client
            .post(self.url("/todos"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .map_err(|_| Error::create(MSG_CREATE_FAILED))?;

        if !response.status().is_success() {
            return Err(Error::create(error_message(response, MSG_CREATE_FAILED)));
        }

        response.json().map_err(|_| Error::create(MSG_CREATE_FAILED))
    }
}

// =============================================================================
// Error Normalization
// =============================================================================

/// Extract the user-facing message from a failure response.
///
/// The body is parsed as JSON regardless of status; a string `detail`
/// field wins, anything else (missing field, non-string detail, non-JSON
/// body, unreadable body) falls back to the fixed operation message.
fn error_message(response: Response, fallback: &str) -> String {
    match response.text() {
        Ok(body) => extract_detail(&body).unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

/// Pull a string `detail` field out of a JSON body, if there is one
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_from_json_body() {
        assert_eq!(
            extract_detail(r#"{"detail":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_extract_detail_missing_field() {
        assert_eq!(extract_detail(r#"{"error":"nope"}"#), None);
    }

    #[test]
    fn test_extract_detail_non_string_detail() {
        assert_eq!(extract_detail(r#"{"detail":{"code":42}}"#), None);
        assert_eq!(extract_detail(r#"{"detail":42}"#), None);
    }

    #[test]
    fn test_extract_detail_non_json_body() {
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn test_extract_detail_null_detail() {
        assert_eq!(extract_detail(r#"{"detail":null}"#), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackengineClient::new_with_base_url("http://localhost:8000/", 30).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
        assert_eq!(client.url("/todos"), "http://localhost:8000/todos");
    }

    #[test]
    fn test_reject_invalid_base_url() {
        assert!(BackengineClient::new_with_base_url("not a url", 30).is_err());
        assert!(BackengineClient::new_with_base_url("ftp://example.com", 30).is_err());
    }

    #[test]
    fn test_env_var_overrides_configured_base_url() {
        let config = Config {
            api_base_url: "https://configured.example.com".to_string(),
            timeout_secs: 30,
        };

        std::env::set_var(TASKLINE_BASE_URL_ENV, "http://localhost:9999");
        let client = BackengineClient::new(&config).unwrap();
        std::env::remove_var(TASKLINE_BASE_URL_ENV);

        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
