use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::interfaces::adapters::{GifProvider, HostSurface, InsertionSink};
use crate::core::interfaces::ports::{HttpPort, HttpResponse};
use crate::core::models::{Credential, EmbedFragment, FetchError, GifError, Notice};

pub struct MockHttpPort {
    requested_urls: Mutex<Vec<String>>,
    response: Result<HttpResponse, FetchError>,
}

impl MockHttpPort {
    pub fn returning(status: u16, body: &str) -> Self {
        Self {
            requested_urls: Mutex::new(Vec::new()),
            response: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            requested_urls: Mutex::new(Vec::new()),
            response: Err(error),
        }
    }

    pub fn get_request_count(&self) -> usize {
        self.requested_urls.lock().unwrap().len()
    }

    pub fn get_last_url(&self) -> Option<String> {
        self.requested_urls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpPort for MockHttpPort {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        self.response.clone()
    }
}

/// Giphy search response body whose results carry the given original URLs.
pub fn search_fixture(urls: &[&str]) -> String {
    let items: Vec<serde_json::Value> = urls
        .iter()
        .map(|url| {
            serde_json::json!({
                "id": "fixture",
                "images": {
                    "original": { "url": url, "width": "480" },
                    "fixed_height": { "url": "https://media.giphy.com/small.gif" }
                }
            })
        })
        .collect();

    serde_json::json!({ "data": items, "meta": { "status": 200 } }).to_string()
}

/// Provider double with per-query latency and canned results. Queries
/// without a canned result succeed with an empty page.
pub struct MockGifProvider {
    search_calls: Mutex<Vec<String>>,
    random_calls: Mutex<usize>,
    delays: HashMap<String, Duration>,
    results: HashMap<String, Result<Vec<String>, GifError>>,
    random_result: Result<EmbedFragment, GifError>,
}

impl MockGifProvider {
    pub fn new() -> Self {
        Self {
            search_calls: Mutex::new(Vec::new()),
            random_calls: Mutex::new(0),
            delays: HashMap::new(),
            results: HashMap::new(),
            random_result: Ok(EmbedFragment::from_url("https://media.giphy.com/random.gif")),
        }
    }

    pub fn with_result(mut self, query: &str, result: Result<Vec<String>, GifError>) -> Self {
        self.results.insert(query.to_string(), result);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn with_random_result(mut self, result: Result<EmbedFragment, GifError>) -> Self {
        self.random_result = result;
        self
    }

    pub fn get_search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn get_random_call_count(&self) -> usize {
        *self.random_calls.lock().unwrap()
    }
}

#[async_trait]
impl GifProvider for MockGifProvider {
    async fn fetch_random(&self, credential: &Credential) -> Result<EmbedFragment, GifError> {
        credential.check()?;
        *self.random_calls.lock().unwrap() += 1;
        self.random_result.clone()
    }

    async fn search(&self, query: &str, credential: &Credential) -> Result<Vec<String>, GifError> {
        credential.check()?;
        self.search_calls.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        self.results
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Clone)]
pub struct RecordingSink {
    inserted: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            inserted: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            inserted: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn get_inserted(&self) -> Vec<String> {
        self.inserted.lock().unwrap().clone()
    }
}

impl InsertionSink for RecordingSink {
    fn insert_at_cursor(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("document is read-only");
        }
        self.inserted.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct RecordingHostSurface {
    notices: Mutex<Vec<Notice>>,
    opened_tabs: Mutex<Vec<String>>,
}

impl RecordingHostSurface {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            opened_tabs: Mutex::new(Vec::new()),
        }
    }

    pub fn get_notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn get_opened_tabs(&self) -> Vec<String> {
        self.opened_tabs.lock().unwrap().clone()
    }
}

impl HostSurface for RecordingHostSurface {
    fn show_notice(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn open_settings_tab(&self, tab_id: &str) {
        self.opened_tabs.lock().unwrap().push(tab_id.to_string());
    }
}
