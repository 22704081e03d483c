use crate::convert::{
    access_request_to_proto, approved_project_from_proto, project_from_proto,
    project_request_to_proto, pull_request_approval_to_proto, request_from_proto,
};
use crate::{ClientError, ClientResult, GET_REQUESTS_LIMIT, GET_REQUESTS_PAGE, RequestApi};

use async_trait::async_trait;
use log::{debug, error};
use ospo_core::{
    ApprovedProject, Project, Request, RequestStatus, RequestType, SubmitRequest, SubmitResponse,
};
use ospo_proto::grpc_web::{self, CONTENT_TYPE, MESSAGE_HEADER, STATUS_HEADER};
use ospo_proto::{GrpcStatus, paths};
use prost::Message;
use reqwest::Client as ReqwestClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE as CONTENT_TYPE_HEADER, HeaderMap};

pub const GRPC_WEB_HEADER: &str = "x-grpc-web";

/// gRPC-Web client for `backend.RequestService` and `backend.ProjectService`.
pub struct GrpcWebClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl GrpcWebClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - gRPC-Web endpoint (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Run one unary call and return the decoded response message
    async fn unary<Req, Resp>(&self, path: &str, request: &Req) -> ClientResult<Resp>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("gRPC-Web call {url}");

        let body = grpc_web::encode_message(request)?;
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE)
            .header(ACCEPT, CONTENT_TYPE)
            .header(GRPC_WEB_HEADER, "1")
            .body(body)
            .send()
            .await?;

        let http_status = response.status();
        let header_status = status_from_headers(response.headers());
        let bytes = response.bytes().await?;

        if !http_status.is_success() {
            let message = http_status
                .canonical_reason()
                .unwrap_or("unexpected HTTP status");
            error!("gRPC-Web call {url} failed with HTTP {http_status}");
            return Err(ClientError::api_error(http_status.as_u16(), message));
        }

        // Trailers-only responses put the status in the HTTP headers
        if let Some(status) = header_status.filter(|s| !s.is_ok()) {
            error!("gRPC-Web call {url} failed: {} {}", status.code, status.message);
            return Err(ClientError::rpc_error(status.code, status.message));
        }

        let unary = grpc_web::decode_unary::<Resp>(bytes)?;

        if let Some(status) = unary.trailers.status().filter(|s| !s.is_ok()) {
            error!("gRPC-Web call {url} failed: {} {}", status.code, status.message);
            return Err(ClientError::rpc_error(status.code, status.message));
        }

        unary
            .message
            .ok_or_else(|| ClientError::invalid_data(format!("{path} returned no message")))
    }
}

fn status_from_headers(headers: &HeaderMap) -> Option<GrpcStatus> {
    let code = headers.get(STATUS_HEADER)?.to_str().ok()?.trim().parse().ok()?;
    let message = headers
        .get(MESSAGE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Some(GrpcStatus { code, message })
}

#[async_trait]
impl RequestApi for GrpcWebClient {
    async fn submit_request(
        &self,
        data: &SubmitRequest,
        requester_id: &str,
    ) -> ClientResult<SubmitResponse> {
        let (request_id, message) = match data.request_type {
            RequestType::Project => {
                let response: ospo_proto::SubmitProjectRequestResponse = self
                    .unary(
                        paths::SUBMIT_PROJECT_REQUEST,
                        &project_request_to_proto(data, requester_id),
                    )
                    .await?;
                (response.request_id, response.message)
            }
            RequestType::PullRequest => {
                let response: ospo_proto::SubmitPullRequestApprovalResponse = self
                    .unary(
                        paths::SUBMIT_PULL_REQUEST_APPROVAL,
                        &pull_request_approval_to_proto(data, requester_id),
                    )
                    .await?;
                (response.request_id, response.message)
            }
            RequestType::Access => {
                let response: ospo_proto::SubmitAccessRequestResponse = self
                    .unary(
                        paths::SUBMIT_ACCESS_REQUEST,
                        &access_request_to_proto(data, requester_id),
                    )
                    .await?;
                (response.request_id, response.message)
            }
        };

        Ok(SubmitResponse {
            request_id,
            message,
        })
    }

    async fn get_requests(
        &self,
        user_id: &str,
        status: Option<RequestStatus>,
    ) -> ClientResult<Vec<Request>> {
        let request = ospo_proto::GetRequestsRequest {
            user_id: user_id.to_string(),
            status: status.map(|s| s.as_str().to_string()).unwrap_or_default(),
            page: GET_REQUESTS_PAGE,
            limit: GET_REQUESTS_LIMIT,
        };

        let response: ospo_proto::GetRequestsResponse =
            self.unary(paths::GET_REQUESTS, &request).await?;

        response
            .requests
            .into_iter()
            .map(request_from_proto)
            .collect()
    }

    async fn get_approved_projects(&self) -> ClientResult<Vec<ApprovedProject>> {
        let request = ospo_proto::GetApprovedProjectsListRequest { active_only: false };

        let response: ospo_proto::GetApprovedProjectsListResponse = self
            .unary(paths::GET_APPROVED_PROJECTS_LIST, &request)
            .await?;

        response
            .approved_projects
            .into_iter()
            .map(approved_project_from_proto)
            .collect()
    }

    async fn get_authored_projects(&self, user_id: &str) -> ClientResult<Vec<Project>> {
        let request = ospo_proto::GetAuthoredProjectsRequest {
            user_id: user_id.to_string(),
        };

        let response: ospo_proto::GetAuthoredProjectsResponse =
            self.unary(paths::GET_AUTHORED_PROJECTS, &request).await?;

        response.projects.into_iter().map(project_from_proto).collect()
    }

    async fn get_contributed_projects(&self, user_id: &str) -> ClientResult<Vec<Project>> {
        let request = ospo_proto::GetContributedProjectsRequest {
            user_id: user_id.to_string(),
        };

        let response: ospo_proto::GetContributedProjectsResponse =
            self.unary(paths::GET_CONTRIBUTED_PROJECTS, &request).await?;

        response.projects.into_iter().map(project_from_proto).collect()
    }
}
