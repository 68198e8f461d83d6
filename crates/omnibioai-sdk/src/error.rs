//! Error type for registry calls.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The registry answered with a non-2xx status.
    #[error("registry returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
    /// The request never produced a usable response: connection failure,
    /// timeout, or a body that is not valid JSON.
    #[error("failed to call registry: {0}")]
    Transport(#[from] reqwest::Error),
    /// The configured base URL is not usable as a request prefix.
    #[error("invalid registry URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl Error {
    /// Status code of an [`Error::Http`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = Error::Http {
            status: 404,
            body: r#"{"detail":"Not found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"registry returned HTTP 404: {"detail":"Not found"}"#
        );
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_timeout());
    }

    #[test]
    fn invalid_base_url_has_no_status() {
        let err = Error::InvalidBaseUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid registry URL 'not a url': relative URL without a base"
        );
        assert_eq!(err.status(), None);
    }
}
