use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single backend call, after the `{ success, ... }` envelope has
/// been collapsed.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered `success: false`.
    #[error("backend rejected request: {0}")]
    Rejected(String),

    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not obtain auth token: {0}")]
    Token(String),
}

impl ApiError {
    /// Message suitable for showing to the admin. Only backend rejections carry
    /// a message meant for humans; everything else collapses to a generic retry hint.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            _ => "Try again".to_string(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejections_surface_backend_text() {
        let rejected = ApiError::Rejected("Movie not found".to_string());
        assert_eq!(rejected.user_message(), "Movie not found");

        let status = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "<html>boom</html>".to_string(),
        };
        assert_eq!(status.user_message(), "Try again");
        assert_eq!(ApiError::Token("expired".into()).user_message(), "Try again");
    }
}
