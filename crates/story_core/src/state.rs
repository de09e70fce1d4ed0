use crate::view_model::AppViewModel;
use crate::{transition, CollectionState, Endpoint, Event, API_ENDPOINT};

/// Sequence number of one fetch cycle; strictly increasing per [`AppState`].
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    api_endpoint: String,
    query: String,
    endpoint: Endpoint,
    stories: CollectionState,
    mounted: bool,
    next_request_id: RequestId,
    latest_request: Option<RequestId>,
    clock: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl AppState {
    /// State for `initial_query` against the public search API.
    pub fn new(initial_query: String) -> Self {
        Self::with_api_endpoint(API_ENDPOINT, initial_query)
    }

    pub fn with_api_endpoint(api_endpoint: impl Into<String>, initial_query: String) -> Self {
        let api_endpoint = api_endpoint.into();
        let endpoint = Endpoint::for_query(&api_endpoint, &initial_query);
        Self {
            api_endpoint,
            query: initial_query,
            endpoint,
            stories: CollectionState::new(),
            mounted: false,
            next_request_id: 1,
            latest_request: None,
            clock: String::new(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.clone(),
            endpoint: self.endpoint.to_string(),
            stories: self.stories.clone(),
            clock: self.clock.clone(),
            can_submit: !self.query.trim().is_empty(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn stories(&self) -> &CollectionState {
        &self.stories
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    /// Returns `true` when the query actually changed.
    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        self.dirty = true;
        true
    }

    /// Derives the endpoint from the current query. Returns `true` when it changed.
    pub(crate) fn submit_query(&mut self) -> bool {
        let endpoint = Endpoint::for_query(&self.api_endpoint, &self.query);
        if endpoint == self.endpoint {
            return false;
        }
        self.endpoint = endpoint;
        self.dirty = true;
        true
    }

    pub(crate) fn issue_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request = Some(request_id);
        request_id
    }

    pub(crate) fn apply_event(&mut self, event: Event) {
        let stories = std::mem::take(&mut self.stories);
        self.stories = transition(stories, event);
        self.dirty = true;
    }

    pub(crate) fn set_clock(&mut self, clock: String) {
        if self.clock != clock {
            self.clock = clock;
            self.dirty = true;
        }
    }
}
