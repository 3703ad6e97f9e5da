//! Errors returned by backend calls.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthorized,

    #[error("backend answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The picked file could not be read before sending.
    #[error("could not read file: {0}")]
    FileRead(String),
}

impl ApiError {
    /// Maps a non-success status code to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Status { status, body: body.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, "{}"), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Status { status: 500, body: "boom".to_string() }
        );
    }

    #[test]
    fn display() {
        assert_eq!(ApiError::from_status(404, "missing").to_string(), "backend answered 404: missing");
        assert_eq!(ApiError::Transport("offline".into()).to_string(), "request failed: offline");
        assert_eq!(ApiError::FileRead("permission denied".into()).to_string(), "could not read file: permission denied");
    }
}
