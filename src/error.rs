use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A required action input is absent or has an unsupported value
    #[error("{0}")]
    InvalidInput(String),
    /// The trigger payload carries no pull request
    #[error("{0}")]
    MissingContext(String),
    /// The commit-info provider could not produce commit data
    #[error("{0}")]
    ProviderFailure(String),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub fn missing_context(message: impl Into<String>) -> Self {
        Error::MissingContext(message.into())
    }

    pub fn provider_failure(message: impl Into<String>) -> Self {
        Error::ProviderFailure(message.into())
    }
}
