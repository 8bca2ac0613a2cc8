use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::types::{AestheticError, AestheticRequest, AestheticSuggestion};

/// Environment variable naming the service endpoint.
pub const ENDPOINT_ENV: &str = "QUICKQUOTE_AESTHETIC_URL";

/// Environment variable carrying the bearer credential, if the deployment
/// requires one.
pub const TOKEN_ENV: &str = "QUICKQUOTE_AESTHETIC_TOKEN";

/// Error body the service returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP client for the aesthetic-suggestion service.
#[derive(Debug, Clone)]
pub struct AestheticClient {
    endpoint: Url,
    token: Option<String>,
    http: reqwest::Client,
}

impl AestheticClient {
    /// Client against an explicit endpoint.
    pub fn new(
        endpoint: &str,
        token: Option<String>,
    ) -> Result<Self, AestheticError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|_| AestheticError::InvalidEndpoint(endpoint.to_string()))?;
        Ok(Self {
            endpoint,
            token,
            http: reqwest::Client::new(),
        })
    }

    /// Client configured from the environment; the endpoint variable is the
    /// only required configuration the application has.
    pub fn from_env() -> Result<Self, AestheticError> {
        let endpoint = std::env::var(ENDPOINT_ENV).map_err(|_| AestheticError::NotConfigured)?;
        let token = std::env::var(TOKEN_ENV).ok();
        Self::new(&endpoint, token)
    }

    /// Requests a suggestion for the given logo.
    ///
    /// Validates the decoded response against the schema contract before
    /// returning it, so callers never see a structurally empty suggestion.
    pub async fn generate(
        &self,
        request: &AestheticRequest,
    ) -> Result<AestheticSuggestion, AestheticError> {
        debug!(endpoint = %self.endpoint, "requesting aesthetic suggestion");

        let mut call = self.http.post(self.endpoint.clone()).json(request);
        if let Some(token) = &self.token {
            call = call.bearer_auth(token);
        }
        let response = call.send().await?;

        let status = response.status();
        if status.is_success() {
            let suggestion = response.json::<AestheticSuggestion>().await?;
            suggestion.validate()?;
            return Ok(suggestion);
        }

        let body = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "unknown error".to_string());

        if status.is_client_error() {
            Err(AestheticError::Rejected(body))
        } else {
            Err(AestheticError::Server(body))
        }
    }
}
