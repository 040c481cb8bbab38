use thiserror::Error;

/// Failure of a catalog API call.
///
/// The form surfaces both variants identically to the user; the split only
/// matters for logging and tests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response never arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside the accepted set.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    pub fn status(status: reqwest::StatusCode, body: String) -> Self {
        Self::Status {
            status: status.as_u16(),
            body,
        }
    }

    /// Status code of a rejection, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
