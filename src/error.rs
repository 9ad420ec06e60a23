//! Error types for the Last.fm client and the export pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to the Last.fm API.
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, refused
    /// connection, timeout, interrupted body).
    #[error("Network error calling Last.fm: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with a successful JSON payload.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The response decoded fine but an expected key was missing.
    #[error("Unexpected response: key '{key}' missing for method {method}")]
    Shape { key: String, method: String },
}

/// Ways a response can violate the HTTP/JSON protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Non-success HTTP status.
    #[error("HTTP error from Last.fm: {status} {reason}")]
    Status { status: u16, reason: String },

    /// Body was not a JSON object.
    #[error("Failed to decode JSON from Last.fm response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body carried an explicit `error` field.
    #[error("Last.fm API error {code}: {message}")]
    Remote { code: String, message: String },
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Protocol,
    Shape,
}

impl ApiError {
    /// Which class of fault this is.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport(_) => ApiErrorKind::Transport,
            ApiError::Protocol(_) => ApiErrorKind::Protocol,
            ApiError::Shape { .. } => ApiErrorKind::Shape,
        }
    }

    pub(crate) fn shape(key: &str, method: &str) -> Self {
        ApiError::Shape {
            key: key.to_string(),
            method: method.to_string(),
        }
    }
}

/// Errors returned by a full library export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Fetching the library failed; no file was written.
    #[error("Last.fm error: {0}")]
    Api(#[from] ApiError),

    /// Creating the output directory or writing a file failed.
    #[error("Could not write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// True for failures that came from the remote API.
    pub fn is_api(&self) -> bool {
        matches!(self, ExportError::Api(_))
    }

    /// True for failures that came from the local file system.
    pub fn is_persistence(&self) -> bool {
        matches!(self, ExportError::Persistence { .. })
    }

    pub(crate) fn persistence<P: Into<PathBuf>, E: Into<std::io::Error>>(path: P, err: E) -> Self {
        ExportError::Persistence {
            path: path.into(),
            source: err.into(),
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let shape = ApiError::shape("artists", "library.getartists");
        assert_eq!(shape.kind(), ApiErrorKind::Shape);

        let remote: ApiError = ProtocolError::Remote {
            code: "6".to_string(),
            message: "User not found".to_string(),
        }
        .into();
        assert_eq!(remote.kind(), ApiErrorKind::Protocol);
    }

    #[test]
    fn test_error_messages() {
        let shape = ApiError::shape("albums", "library.getalbums");
        assert_eq!(
            shape.to_string(),
            "Unexpected response: key 'albums' missing for method library.getalbums"
        );

        let status: ApiError = ProtocolError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        }
        .into();
        assert_eq!(
            status.to_string(),
            "HTTP error from Last.fm: 503 Service Unavailable"
        );

        let remote: ApiError = ProtocolError::Remote {
            code: "10".to_string(),
            message: "Invalid API key".to_string(),
        }
        .into();
        assert_eq!(remote.to_string(), "Last.fm API error 10: Invalid API key");
    }

    #[test]
    fn test_export_error_classes() {
        let api: ExportError = ApiError::shape("artists", "library.getartists").into();
        assert!(api.is_api());
        assert!(!api.is_persistence());

        let io = ExportError::persistence(
            "/nowhere/lib.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(io.is_persistence());
        assert!(io.to_string().contains("/nowhere/lib.json"));
    }
}
