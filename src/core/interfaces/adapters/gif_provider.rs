use async_trait::async_trait;

use crate::core::models::{Credential, EmbedFragment, GifError};

#[async_trait]
pub trait GifProvider: Send + Sync {
    async fn fetch_random(&self, credential: &Credential) -> Result<EmbedFragment, GifError>;

    /// Returns at most one page of canonical image URLs, in provider order.
    async fn search(&self, query: &str, credential: &Credential) -> Result<Vec<String>, GifError>;
}
