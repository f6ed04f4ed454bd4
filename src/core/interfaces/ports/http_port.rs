use async_trait::async_trait;

use crate::core::models::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single GET against a remote endpoint. Transport failures map to
/// [`FetchError::Network`]; status handling is left to the caller.
#[async_trait]
pub trait HttpPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}
