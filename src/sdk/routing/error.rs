use serde::Deserialize;
use thiserror::Error;

// Status envelope the Maps web services attach to every JSON response
#[derive(Deserialize, Debug, Default)]
pub struct MapsStatusPayload {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl MapsStatusPayload {
    /// Maps an upstream status code onto the error taxonomy.
    ///
    /// `OK`, `ZERO_RESULTS` and a missing status are left to the caller, which
    /// decides from the payload shape whether anything was found.
    pub fn into_error(self) -> Option<ResolutionError> {
        let status = self.status?;
        match status.as_str() {
            "OK" | "ZERO_RESULTS" => None,
            _ => {
                let message = match self.error_message {
                    Some(detail) => format!("{}: {}", status, detail),
                    None => status,
                };
                Some(ResolutionError::Transport(message))
            }
        }
    }
}

/// Failure of a single pipeline stage.
///
/// Every variant is a leaf: it carries a description, never another error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Nothing found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Too many results ({count}), provide a more detailed query")]
    TooManyResults { count: usize },
}

impl From<reqwest::Error> for ResolutionError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key.
        ResolutionError::Transport(e.without_url().to_string())
    }
}

impl From<serde_json::Error> for ResolutionError {
    fn from(e: serde_json::Error) -> Self {
        ResolutionError::MalformedResponse(e.to_string())
    }
}
