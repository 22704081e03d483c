//! Client-side cache of the current user's requests.
//!
//! The list only ever holds what the service last returned: a successful
//! submission is followed by a refetch, never by a local insert.

use crate::{ClientError, RequestApi};

use std::sync::Arc;

use log::{debug, error};
use ospo_core::display;
use ospo_core::{Request, RequestStats, RequestStatus, SubmitRequest, SubmitResponse};
use serde::Serialize;
use tokio::sync::watch;

pub const FETCH_FAILED: &str = "Failed to fetch requests";
pub const SUBMIT_FAILED: &str = "Failed to submit request";

/// Snapshot published to subscribers on every transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestState {
    pub requests: Vec<Request>,
    pub loading: bool,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_submission: Option<SubmitResponse>,
}

impl RequestState {
    /// Pending and in-review requests, in list order
    pub fn open_requests(&self) -> Vec<Request> {
        self.requests.iter().filter(|r| r.is_open()).cloned().collect()
    }

    pub fn stats(&self) -> RequestStats {
        RequestStats::from_requests(&self.requests)
    }

    /// One page (1-based) of the open requests
    pub fn page(&self, page: usize, page_size: usize) -> Vec<Request> {
        display::page(&self.open_requests(), page, page_size).to_vec()
    }
}

/// User-facing message, or `fallback` when the server gave no reason
fn message_or(err: &ClientError, fallback: &str) -> String {
    if err.detail().trim().is_empty() {
        fallback.to_string()
    } else {
        err.user_message()
    }
}

/// Owns the request list for one user and keeps it in sync with the service
pub struct RequestStore {
    api: Arc<dyn RequestApi>,
    user_id: String,
    state: watch::Sender<RequestState>,
}

impl RequestStore {
    /// Create an empty store. Nothing is fetched until [`Self::initialize`]
    /// or [`Self::fetch`] runs.
    pub fn new(api: Arc<dyn RequestApi>, user_id: impl Into<String>) -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            api,
            user_id: user_id.into(),
            state,
        }
    }

    /// Create a store and load the user's requests
    pub async fn initialize(api: Arc<dyn RequestApi>, user_id: impl Into<String>) -> Self {
        let store = Self::new(api, user_id);
        store.fetch(None).await;
        store
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn snapshot(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.borrow().requests.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Replace the list with the service's answer.
    ///
    /// On failure the list is left as it was and `error` is set. `loading`
    /// is cleared either way.
    pub async fn fetch(&self, status: Option<RequestStatus>) {
        self.begin();

        let result = self.api.get_requests(&self.user_id, status).await;

        self.state.send_modify(|state| {
            match result {
                Ok(requests) => {
                    debug!("fetched {} requests for {}", requests.len(), self.user_id);
                    state.requests = requests;
                }
                Err(e) => {
                    error!("Failed to fetch requests for {}: {e}", self.user_id);
                    state.error = Some(message_or(&e, FETCH_FAILED));
                }
            }
            state.loading = false;
        });
    }

    /// Refetch everything, unfiltered
    pub async fn refresh(&self) {
        self.fetch(None).await;
    }

    /// Submit a request, then reload the list from the service.
    ///
    /// Returns false when the submission itself failed; the list is then
    /// untouched. A failed reload after an accepted submission still
    /// returns true, with `error` describing the reload failure.
    pub async fn submit_new_request(&self, data: &SubmitRequest) -> bool {
        self.begin();

        let accepted = match self.api.submit_request(data, &self.user_id).await {
            Ok(response) => {
                debug!("{} accepted as {}", data.request_type, response.request_id);
                self.state.send_modify(|state| state.last_submission = Some(response));
                self.fetch(None).await;
                true
            }
            Err(e) => {
                error!("Failed to submit {} request: {e}", data.request_type);
                self.state.send_modify(|state| {
                    state.error = Some(message_or(&e, SUBMIT_FAILED));
                });
                false
            }
        };

        self.state.send_modify(|state| state.loading = false);
        accepted
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }
}
