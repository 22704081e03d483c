use crate::{ClientError, ClientResult, RequestApi};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::debug;
use ospo_core::fixtures;
use ospo_core::{
    ApprovedProject, Project, Request, RequestStatus, RequestType, SubmitRequest, SubmitResponse,
};

pub const PROJECT_SUBMITTED: &str = "Project request submitted successfully";
pub const PULL_REQUEST_SUBMITTED: &str = "Pull request approval submitted successfully";
pub const ACCESS_SUBMITTED: &str = "Access request submitted successfully";

const INJECTED_FAILURE_STATUS: u16 = 503;
const INJECTED_FAILURE_MESSAGE: &str = "Service Unavailable";

#[derive(Default)]
struct Backend {
    requests: Vec<Request>,
    catalog: Vec<ApprovedProject>,
    authored: HashMap<String, Vec<Project>>,
    contributed: HashMap<String, Vec<Project>>,
    fail_next: usize,
    calls: usize,
}

/// In-process stand-in for the request service.
///
/// Behaves like the real backend as far as the client can observe:
/// submissions are stored as `pending` with a server-assigned id, and list
/// calls return newest first.
#[derive(Default)]
pub struct InMemoryApi {
    backend: Mutex<Backend>,
}

impl InMemoryApi {
    /// Empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend preloaded with the demo requests, the approved catalog and
    /// the mock user's dashboard projects
    pub fn seeded() -> Self {
        let api = Self::with_requests(fixtures::pending_requests());
        api.lock().catalog = fixtures::approved_catalog();
        api.set_projects(
            fixtures::MOCK_USER_ID,
            fixtures::authored_projects(),
            fixtures::contributed_projects(),
        );
        api
    }

    pub fn with_requests(requests: Vec<Request>) -> Self {
        Self {
            backend: Mutex::new(Backend {
                requests,
                ..Backend::default()
            }),
        }
    }

    /// Make the next `count` calls fail with a 503
    pub fn fail_next(&self, count: usize) {
        self.lock().fail_next = count;
    }

    /// Move a request through review, as a reviewer would server-side.
    /// Returns false when no request has that id.
    pub fn set_status(&self, id: &str, status: RequestStatus) -> bool {
        let mut backend = self.lock();
        match backend.requests.iter_mut().find(|r| r.id == id) {
            Some(request) => {
                request.status = status;
                true
            }
            None => false,
        }
    }

    /// Replace the projects `user_id` owns and contributes to
    pub fn set_projects(&self, user_id: &str, authored: Vec<Project>, contributed: Vec<Project>) {
        let mut backend = self.lock();
        backend.authored.insert(user_id.to_string(), authored);
        backend.contributed.insert(user_id.to_string(), contributed);
    }

    pub fn stored_requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    /// Number of calls received, failed ones included
    pub fn call_count(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the call and consume one injected failure, if any
    fn begin_call(&self, operation: &str) -> ClientResult<MutexGuard<'_, Backend>> {
        let mut backend = self.lock();
        backend.calls += 1;

        if backend.fail_next > 0 {
            backend.fail_next -= 1;
            debug!("in-memory backend: injected failure for {operation}");
            return Err(ClientError::api_error(
                INJECTED_FAILURE_STATUS,
                INJECTED_FAILURE_MESSAGE,
            ));
        }

        Ok(backend)
    }
}

#[async_trait]
impl RequestApi for InMemoryApi {
    async fn submit_request(
        &self,
        data: &SubmitRequest,
        requester_id: &str,
    ) -> ClientResult<SubmitResponse> {
        let mut backend = self.begin_call("submit_request")?;

        // Project requests name a repository, not a catalog entry
        let project_name = match data.request_type {
            RequestType::Project => None,
            RequestType::PullRequest | RequestType::Access => data.project_name.clone(),
        };

        let request = Request::submitted(
            data.request_type,
            data.title.clone(),
            project_name,
            requester_id.to_string(),
        );
        let request_id = request.id.clone();
        backend.requests.push(request);

        let message = match data.request_type {
            RequestType::Project => PROJECT_SUBMITTED,
            RequestType::PullRequest => PULL_REQUEST_SUBMITTED,
            RequestType::Access => ACCESS_SUBMITTED,
        };

        debug!("in-memory backend stored {} request {request_id}", data.request_type);

        Ok(SubmitResponse {
            request_id,
            message: message.to_string(),
        })
    }

    async fn get_requests(
        &self,
        user_id: &str,
        status: Option<RequestStatus>,
    ) -> ClientResult<Vec<Request>> {
        let backend = self.begin_call("get_requests")?;

        let mut requests: Vec<Request> = backend
            .requests
            .iter()
            .filter(|r| r.requester_id.as_deref() == Some(user_id))
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(requests)
    }

    async fn get_approved_projects(&self) -> ClientResult<Vec<ApprovedProject>> {
        let backend = self.begin_call("get_approved_projects")?;
        Ok(backend.catalog.clone())
    }

    async fn get_authored_projects(&self, user_id: &str) -> ClientResult<Vec<Project>> {
        let backend = self.begin_call("get_authored_projects")?;
        Ok(backend.authored.get(user_id).cloned().unwrap_or_default())
    }

    async fn get_contributed_projects(&self, user_id: &str) -> ClientResult<Vec<Project>> {
        let backend = self.begin_call("get_contributed_projects")?;
        Ok(backend.contributed.get(user_id).cloned().unwrap_or_default())
    }
}
