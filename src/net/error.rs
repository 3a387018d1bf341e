//! Failure taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::session::SessionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: the session is invalid or expired.
    #[error("Unauthorized")]
    Unauthorized,
    /// HTTP 404: the resource does not exist.
    #[error("Not Found")]
    NotFound,
    /// Any other non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Transport fault (DNS, CORS, connection reset...).
    #[error("request failed: {0}")]
    Request(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The call needs a bearer token but nobody is signed in.
    #[error("user is not authenticated")]
    NotAuthenticated,
    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the caller should drop the session and send the user to login.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message shown under the login form.
    pub fn login_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Wrong credentials",
            _ => "An unknown error occurred, please try again later",
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotAuthenticated => Self::NotAuthenticated,
            SessionError::MalformedToken(e) => Self::Decode(e.to_string()),
        }
    }
}

/// Map an HTTP status to success or the matching [`ApiError`].
///
/// # Errors
///
/// 401 and 404 get their own variants; every other non-2xx is [`ApiError::Status`].
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        other => Err(ApiError::Status(other)),
    }
}
