use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Dataset or image provider could not be reached or read.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("no results")]
    NoResults,
    /// Deployment problem, e.g. a missing provider credential.
    #[error("misconfigured: {0}")]
    Misconfigured(&'static str),
    #[error("invalid input: {0}")]
    Invalid(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
}

impl CoreError {
    pub fn unavailable(reason: impl std::fmt::Display) -> Self {
        CoreError::SourceUnavailable(reason.to_string())
    }
}
