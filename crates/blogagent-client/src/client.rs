use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use blogagent_core::{GenerateRequest, GenerationResult};

use crate::error::{GenerateError, GenerateResult};

/// Path of the generation endpoint, relative to the configured base URL.
const GENERATE_PATH: &str = "/api/generate_blog";

/// Default request timeout. A hung backend must not leave the form in
/// Loading indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Generation backend client.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    base_url: String,
}

/// The JSON body the backend returns. Successful responses carry either
/// `blog_content` or `content`; application-level failures carry `error`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    blog_content: Option<String>,
    content: Option<String>,
    error: Option<String>,
}

impl GenerationClient {
    /// Create a new client for the backend at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("blogagent/0.1.0 (https://github.com/oxur/blogagent)")
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    /// Create a client with the default timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::new(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Submit one generation request and await its outcome.
    ///
    /// # Errors
    /// Returns [`GenerateError::Timeout`] or [`GenerateError::Transport`]
    /// when the request does not complete, [`GenerateError::Status`] on a
    /// non-2xx status, and [`GenerateError::Application`] when the backend
    /// reports an error in the body.
    pub async fn generate(&self, request: &GenerateRequest) -> GenerateResult<GenerationResult> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        log::debug!("POST {} title={:?} tone={}", url, request.title, request.tone);

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerateError::Status {
                code: status.as_u16(),
                message: status_message(&body, status),
            });
        }

        decode_success(&body)
    }
}

/// Decode a 2xx response body into a result or an application error.
fn decode_success(body: &str) -> GenerateResult<GenerationResult> {
    let payload: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::Decode {
            message: e.to_string(),
        })?;

    if let Some(message) = payload.error {
        return Err(GenerateError::Application { message });
    }

    // `blog_content` wins when both keys are present.
    payload
        .blog_content
        .or(payload.content)
        .map(GenerationResult::new)
        .ok_or_else(|| GenerateError::Decode {
            message: "response carried neither content nor error".to_string(),
        })
}

/// Prefer the backend's own error message over the bare status line.
fn status_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<GenerateResponse>(body)
        .ok()
        .and_then(|p| p.error)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GenerationClient::with_defaults("http://127.0.0.1:5000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = GenerationClient::with_defaults("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_decode_content_key() {
        let result = decode_success(r#"{"content":"X"}"#).unwrap();
        assert_eq!(result.content, "X");
    }

    #[test]
    fn test_decode_blog_content_key() {
        let result = decode_success(r##"{"blog_content":"# Post"}"##).unwrap();
        assert_eq!(result.content, "# Post");
    }

    #[test]
    fn test_blog_content_wins_over_content() {
        let result =
            decode_success(r#"{"blog_content":"primary","content":"secondary"}"#).unwrap();
        assert_eq!(result.content, "primary");
    }

    #[test]
    fn test_error_field_is_failure() {
        // An application error must never decode as success.
        let err = decode_success(r#"{"error":"Y"}"#).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Application { ref message } if message == "Y"
        ));
    }

    #[test]
    fn test_error_field_wins_over_content() {
        let err = decode_success(r#"{"content":"X","error":"Y"}"#).unwrap_err();
        assert!(err.is_application());
    }

    #[test]
    fn test_empty_body_is_decode_error() {
        assert!(matches!(
            decode_success("{}"),
            Err(GenerateError::Decode { .. })
        ));
        assert!(matches!(
            decode_success("not json"),
            Err(GenerateError::Decode { .. })
        ));
    }

    #[test]
    fn test_status_message_prefers_body_error() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(
            status_message(r#"{"error":"model overloaded"}"#, status),
            "model overloaded"
        );
        assert_eq!(status_message("<html>oops</html>", status), "Internal Server Error");
    }
}
