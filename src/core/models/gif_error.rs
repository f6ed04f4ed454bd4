use thiserror::Error;

/// Failure of a single request against the gif provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("provider responded with HTTP {0}")]
    Status(u16),
    #[error("unexpected response from provider: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GifError {
    #[error("Giphy API key is not configured")]
    Configuration,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not insert into the document: {0}")]
    Insertion(String),
}

impl GifError {
    #[allow(dead_code)]
    pub fn is_configuration(&self) -> bool {
        matches!(self, GifError::Configuration)
    }
}
