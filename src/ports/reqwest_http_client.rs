use async_trait::async_trait;

use crate::core::interfaces::ports::{HttpPort, HttpResponse};
use crate::core::models::FetchError;

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn initialize() -> Self {
        log::debug!("[HTTP] initializing reqwest client");
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpPort for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))?;

        log::debug!("[HTTP] GET returned {} ({} bytes)", status, body.len());
        Ok(HttpResponse { status, body })
    }
}
