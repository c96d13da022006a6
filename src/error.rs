use thiserror::Error;

/// Top-level error type for the optimath engine.
///
/// The optimization engine and the presentation layer never fail: absent or
/// non-positive input is a first-class empty state and degenerate dimensions
/// are guarded locally. Errors exist only at the two fallible boundaries,
/// input parsing and the external chat collaborator.
#[derive(Debug, Error)]
pub enum OptimathError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// Errors from the volume input surface.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
}

/// Errors reported by the external chat collaborator.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request rate limit exceeded")]
    RateLimited,

    #[error("invalid API credential")]
    InvalidApiKey,

    #[error("chat request failed: {0}")]
    Failed(String),
}

impl ChatError {
    /// Returns the user-facing message shown in the message log for this
    /// failure class.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateLimited => {
                "You have exceeded the request limit. Please wait a few seconds and try again."
            }
            Self::InvalidApiKey => "There is a problem with the API key. Please verify it is valid.",
            Self::Failed(_) => {
                "Sorry, something went wrong while processing your question. Please try again."
            }
        }
    }
}

/// Convenience type alias for results using [`OptimathError`].
pub type Result<T> = std::result::Result<T, OptimathError>;
