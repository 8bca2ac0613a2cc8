use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of the aesthetic-suggestion call.
///
/// None of these touch document state; the caller surfaces them as one
/// transient notification and may retry manually.
#[derive(Debug, Error)]
pub enum AestheticError {
    #[error("aesthetic service endpoint is not configured")]
    NotConfigured,

    #[error("invalid aesthetic service endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("aesthetic request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service refused the request (4xx).
    #[error("aesthetic service rejected the request: {0}")]
    Rejected(String),

    /// The service itself failed (5xx).
    #[error("aesthetic service failed: {0}")]
    Server(String),

    /// The response decoded but does not satisfy the schema contract.
    #[error("aesthetic response failed validation: {0}")]
    InvalidSuggestion(String),
}

/// What the service needs: the logo as a data URI, plus optional free-text
/// guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AestheticRequest {
    pub logo_data_uri: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// What the service proposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AestheticSuggestion {
    /// Complementary colors as `#rrggbb` hex strings, strongest first.
    pub color_scheme: Vec<String>,
    pub font_recommendation: String,
    pub overall_aesthetic: String,
}

impl AestheticSuggestion {
    /// Checks the schema contract beyond what serde can express: at least
    /// one color, and every entry a six-digit hex color.
    pub fn validate(&self) -> Result<(), AestheticError> {
        if self.color_scheme.is_empty() {
            return Err(AestheticError::InvalidSuggestion(
                "empty color scheme".to_string(),
            ));
        }
        if let Some(bad) = self.color_scheme.iter().find(|c| !is_hex_color(c)) {
            return Err(AestheticError::InvalidSuggestion(format!(
                "'{bad}' is not a hex color"
            )));
        }
        Ok(())
    }

    /// The color a caller would write into the theme.
    pub fn primary_color(&self) -> Option<&str> {
        self.color_scheme.first().map(String::as_str)
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
