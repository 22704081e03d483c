use crate::ClientResult;

use async_trait::async_trait;
use ospo_core::{ApprovedProject, Project, Request, RequestStatus, SubmitRequest, SubmitResponse};

/// Page requested by list calls. The service is paged but the client always
/// asks for the first page.
pub const GET_REQUESTS_PAGE: i32 = 1;
/// Upper bound on requests returned by one list call
pub const GET_REQUESTS_LIMIT: i32 = 100;

/// Operations offered by the remote request-tracking service
#[async_trait]
pub trait RequestApi: Send + Sync {
    /// Submit a new request on behalf of `requester_id`.
    ///
    /// Dispatches on `data.request_type` to the matching remote operation.
    /// Optional fields that are absent are sent as empty strings.
    async fn submit_request(
        &self,
        data: &SubmitRequest,
        requester_id: &str,
    ) -> ClientResult<SubmitResponse>;

    /// List the requests filed by `user_id`, optionally filtered by status
    async fn get_requests(
        &self,
        user_id: &str,
        status: Option<RequestStatus>,
    ) -> ClientResult<Vec<Request>>;

    /// The catalog of projects cleared for contribution
    async fn get_approved_projects(&self) -> ClientResult<Vec<ApprovedProject>>;

    /// Projects owned by `user_id`
    async fn get_authored_projects(&self, user_id: &str) -> ClientResult<Vec<Project>>;

    /// Projects `user_id` has contributed to
    async fn get_contributed_projects(&self, user_id: &str) -> ClientResult<Vec<Project>>;
}
