use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::core::interfaces::adapters::GifProvider;
use crate::core::interfaces::ports::{HttpPort, HttpResponse};
use crate::core::models::{Credential, EmbedFragment, FetchError, GifError};
use crate::global_constants;

#[derive(Debug, Deserialize)]
struct GiphyRendition {
    url: String,
}

#[derive(Debug, Deserialize)]
struct GiphyImages {
    original: GiphyRendition,
}

#[derive(Debug, Deserialize)]
struct GiphyGif {
    images: GiphyImages,
}

#[derive(Debug, Deserialize)]
struct GiphyRandomResponse {
    data: GiphyGif,
}

#[derive(Debug, Deserialize)]
struct GiphySearchResponse {
    data: Vec<GiphyGif>,
}

pub struct GiphyGifProvider {
    http: Arc<dyn HttpPort>,
}

impl GiphyGifProvider {
    pub fn new(http: Arc<dyn HttpPort>) -> Self {
        Self { http }
    }

    fn construct_random_url(&self, api_key: &str) -> String {
        format!(
            "{}?api_key={}&tag={}&rating={}",
            global_constants::GIPHY_RANDOM_URL,
            urlencoding::encode(api_key),
            global_constants::GIPHY_RANDOM_TAG,
            global_constants::GIPHY_RATING
        )
    }

    fn construct_search_url(&self, query: &str, api_key: &str) -> String {
        format!(
            "{}?api_key={}&q={}&limit={}&offset={}&rating={}&lang={}&bundle={}",
            global_constants::GIPHY_SEARCH_URL,
            urlencoding::encode(api_key),
            urlencoding::encode(query),
            global_constants::GIPHY_SEARCH_PAGE_SIZE,
            global_constants::GIPHY_SEARCH_OFFSET,
            global_constants::GIPHY_RATING,
            global_constants::GIPHY_SEARCH_LANGUAGE,
            global_constants::GIPHY_SEARCH_BUNDLE
        )
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response: HttpResponse = self.http.get(url).await?;

        if !response.is_success() {
            log::warn!("[GIPHY] Request failed with status {}", response.status);
            return Err(FetchError::Status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            log::warn!("[GIPHY] Could not parse response: {}", error);
            FetchError::MalformedResponse(error.to_string())
        })
    }
}

#[async_trait]
impl GifProvider for GiphyGifProvider {
    async fn fetch_random(&self, credential: &Credential) -> Result<EmbedFragment, GifError> {
        let api_key = credential.check()?;

        log::info!("[GIPHY] Fetching random gif");
        let response: GiphyRandomResponse = self
            .get_json(&self.construct_random_url(api_key))
            .await?;

        let url = response.data.images.original.url;
        log::debug!("[GIPHY] Random gif: {}", url);

        Ok(EmbedFragment::from_url(&url))
    }

    async fn search(&self, query: &str, credential: &Credential) -> Result<Vec<String>, GifError> {
        let api_key = credential.check()?;

        log::info!("[GIPHY] Searching gifs for {:?}", query);
        let response: GiphySearchResponse = self
            .get_json(&self.construct_search_url(query, api_key))
            .await?;

        let urls: Vec<String> = response
            .data
            .into_iter()
            .take(global_constants::GIPHY_SEARCH_PAGE_SIZE)
            .map(|gif| gif.images.original.url)
            .collect();

        log::debug!("[GIPHY] Search for {:?} returned {} gifs", query, urls.len());
        Ok(urls)
    }
}
