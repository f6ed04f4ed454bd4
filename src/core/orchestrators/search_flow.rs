use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::error_reporting::surface_error;
use crate::core::interfaces::adapters::{GifProvider, HostSurface, InsertionSink};
use crate::core::models::{Credential, EmbedFragment, GifError};
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Debouncing,
    Fetching,
    Settled,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchFlowMessage {
    QueryChanged(String),
    DebounceElapsed {
        generation: u64,
    },
    SearchResolved {
        query: String,
        result: Result<Vec<String>, GifError>,
    },
    ThumbnailSelected(usize),
    Close,
}

/// State of one open search surface.
///
/// Keystrokes re-arm a single debounce timer; when it fires the raw query
/// is committed as the debounced query and searched. A search result is
/// only applied while its query is still the debounced query, so a slow
/// response for an older query never replaces a newer one. Timer and
/// fetch tasks report back through the channel returned by [`open`], and
/// the host feeds those messages into [`update`].
///
/// [`open`]: SearchFlowController::open
/// [`update`]: SearchFlowController::update
pub struct SearchFlowController {
    provider: Arc<dyn GifProvider>,
    credential: Credential,
    sink: Box<dyn InsertionSink>,
    host: Arc<dyn HostSurface>,
    sender: UnboundedSender<SearchFlowMessage>,
    phase: SearchPhase,
    raw_query: String,
    debounced_query: Option<String>,
    results: Vec<String>,
    input_focused: bool,
    debounce_timer: Option<JoinHandle<()>>,
    debounce_generation: u64,
}

impl SearchFlowController {
    /// Must be called from within a tokio runtime.
    pub fn open(
        provider: Arc<dyn GifProvider>,
        credential: Credential,
        sink: Box<dyn InsertionSink>,
        host: Arc<dyn HostSurface>,
    ) -> (Self, UnboundedReceiver<SearchFlowMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut controller = Self {
            provider,
            credential,
            sink,
            host,
            sender,
            phase: SearchPhase::Idle,
            raw_query: String::new(),
            debounced_query: None,
            results: Vec::new(),
            input_focused: true,
            debounce_timer: None,
            debounce_generation: 0,
        };

        log::info!("[SEARCH_FLOW] Search surface opened");

        // The initial empty query goes through the same debounce path.
        controller.arm_debounce_timer();

        (controller, receiver)
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == SearchPhase::Closed
    }

    #[allow(dead_code)]
    pub fn has_input_focus(&self) -> bool {
        self.input_focused
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    #[allow(dead_code)]
    pub fn debounced_query(&self) -> Option<&str> {
        self.debounced_query.as_deref()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn update(&mut self, message: SearchFlowMessage) {
        if self.is_closed() {
            log::debug!("[SEARCH_FLOW] Ignoring {:?} after close", message);
            return;
        }

        match message {
            SearchFlowMessage::QueryChanged(query) => self.handle_query_changed(query),
            SearchFlowMessage::DebounceElapsed { generation } => {
                self.handle_debounce_elapsed(generation)
            }
            SearchFlowMessage::SearchResolved { query, result } => {
                self.handle_search_resolved(query, result)
            }
            SearchFlowMessage::ThumbnailSelected(index) => self.handle_thumbnail_selected(index),
            SearchFlowMessage::Close => self.close(),
        }
    }

    fn handle_query_changed(&mut self, query: String) {
        log::debug!("[SEARCH_FLOW] Query changed to {:?}", query);
        self.raw_query = query;
        self.arm_debounce_timer();
        self.phase = SearchPhase::Debouncing;
    }

    fn handle_debounce_elapsed(&mut self, generation: u64) {
        if generation != self.debounce_generation {
            log::debug!(
                "[SEARCH_FLOW] Ignoring superseded debounce timer {} (current {})",
                generation,
                self.debounce_generation
            );
            return;
        }

        self.debounce_timer = None;
        let query = self.raw_query.clone();
        self.debounced_query = Some(query.clone());

        if let Err(error) = self.credential.check() {
            surface_error(self.host.as_ref(), &error);
            self.phase = SearchPhase::Settled;
            return;
        }

        log::info!("[SEARCH_FLOW] Searching for {:?}", query);
        self.phase = SearchPhase::Fetching;

        let provider = Arc::clone(&self.provider);
        let credential = self.credential.clone();
        let sender = self.sender.clone();

        // In-flight searches are never aborted; their results are filtered
        // in `handle_search_resolved`.
        tokio::spawn(async move {
            let result = provider.search(&query, &credential).await;
            let _ = sender.send(SearchFlowMessage::SearchResolved { query, result });
        });
    }

    fn handle_search_resolved(&mut self, query: String, result: Result<Vec<String>, GifError>) {
        if self.debounced_query.as_deref() != Some(query.as_str()) {
            log::debug!(
                "[SEARCH_FLOW] Discarding stale results for {:?} (current {:?})",
                query,
                self.debounced_query
            );
            return;
        }

        match result {
            Ok(urls) => {
                log::info!(
                    "[SEARCH_FLOW] Showing {} results for {:?}",
                    urls.len(),
                    query
                );
                self.results = urls;
            }
            Err(error) => {
                // The previous result set stays on screen.
                surface_error(self.host.as_ref(), &error);
            }
        }

        if self.phase == SearchPhase::Fetching {
            self.phase = SearchPhase::Settled;
        }
    }

    fn handle_thumbnail_selected(&mut self, index: usize) {
        let Some(url) = self.results.get(index) else {
            log::warn!(
                "[SEARCH_FLOW] Thumbnail {} selected but only {} are shown",
                index,
                self.results.len()
            );
            return;
        };

        let fragment = EmbedFragment::from_url(url);
        log::info!("[SEARCH_FLOW] Inserting {}", url);

        if let Err(error) = self.sink.insert_at_cursor(fragment.as_str()) {
            surface_error(
                self.host.as_ref(),
                &GifError::Insertion(error.to_string()),
            );
        }

        self.close();
    }

    fn close(&mut self) {
        self.cancel_debounce_timer();
        self.input_focused = false;
        self.phase = SearchPhase::Closed;
        log::info!("[SEARCH_FLOW] Search surface closed");
    }

    fn arm_debounce_timer(&mut self) {
        self.cancel_debounce_timer();
        self.debounce_generation += 1;

        let generation = self.debounce_generation;
        let sender = self.sender.clone();

        self.debounce_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(global_constants::SEARCH_DEBOUNCE_MS)).await;
            let _ = sender.send(SearchFlowMessage::DebounceElapsed { generation });
        }));
    }

    fn cancel_debounce_timer(&mut self) {
        if let Some(timer) = self.debounce_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SearchFlowController {
    fn drop(&mut self) {
        self.cancel_debounce_timer();
    }
}
