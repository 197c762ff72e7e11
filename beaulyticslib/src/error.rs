//! Error types for beaulyticslib

use thiserror::Error;

/// Errors that can occur at the fallible edges of the library.
///
/// Formatting itself never fails; these cover decoding message lists and
/// replies from the AI endpoint.
#[derive(Error, Debug)]
pub enum BeaulyticsError {
    /// Malformed JSON input
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The AI endpoint answered with an error object
    #[error("{}", upstream_message(.error, .status, .detail))]
    Upstream {
        error: String,
        status: Option<u16>,
        detail: Option<String>,
    },

    /// The AI endpoint answered with neither content nor an error
    #[error("reply contained neither content nor an error")]
    EmptyReply,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn upstream_message(error: &str, status: &Option<u16>, detail: &Option<String>) -> String {
    let mut message = format!("upstream error: {error}");
    if let Some(status) = status {
        message.push_str(&format!(" (status {status})"));
    }
    if let Some(detail) = detail {
        message.push_str(&format!(": {detail}"));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_status_and_detail() {
        let err = BeaulyticsError::Upstream {
            error: "rate limited".to_string(),
            status: Some(429),
            detail: Some("try again later".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "upstream error: rate limited (status 429): try again later"
        );
    }

    #[test]
    fn test_upstream_message_bare() {
        let err = BeaulyticsError::Upstream {
            error: "unauthorized".to_string(),
            status: None,
            detail: None,
        };
        assert_eq!(err.to_string(), "upstream error: unauthorized");
    }
}
