// API client module: a small blocking HTTP client for the flashcards
// backend. One request per run, no retries.

use crate::error::{ProbeError, Result};
use crate::payload::FlashcardRequest;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const GENERATE_IMAGE_PATH: &str = "/api/ai/flashcards/generate-image";

/// Where to send the request and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Status code and raw body of whatever the backend answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Holds a reqwest blocking client, the base URL of the backend and the
/// bearer token for authenticated calls.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client whose every request is bounded by `config.timeout`.
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Store a JWT token for subsequent authenticated requests.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Full URL of the image-to-flashcards endpoint.
    pub fn generate_image_url(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_IMAGE_PATH)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(t) = &self.token {
            let mut val = HeaderValue::from_str(&format!("Bearer {}", t))
                .map_err(|_| ProbeError::InvalidToken)?;
            val.set_sensitive(true);
            headers.insert(AUTHORIZATION, val);
        }
        Ok(headers)
    }

    /// POST the payload and hand back the status and body untouched.
    /// Only transport failures are errors; a 4xx/5xx is a normal response.
    pub fn generate_from_image(&self, req: &FlashcardRequest) -> Result<ApiResponse> {
        let url = self.generate_image_url();
        let headers = self.headers()?;
        tracing::debug!(%url, authenticated = self.has_token(), "sending generate-image request");

        let res = self.client.post(&url).headers(headers).json(req).send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(ApiResponse { status, body })
    }
}
