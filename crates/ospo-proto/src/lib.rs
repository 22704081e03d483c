//! Protobuf messages of the `backend.RequestService` and
//! `backend.ProjectService` RPC interfaces, plus the gRPC-Web frame codec
//! used to carry them over plain HTTP.
//!
//! The service itself lives elsewhere; only the client-side shapes are here.

pub mod error;
pub mod grpc_web;
pub mod messages;

#[cfg(test)]
mod tests;

pub use error::{ProtoError, Result as ProtoResult};
pub use grpc_web::{Frame, GrpcStatus, Trailers, UnaryResponse};
pub use messages::project_service::{
    ApprovedProject, GetApprovedProjectsListRequest, GetApprovedProjectsListResponse,
    GetAuthoredProjectsRequest, GetAuthoredProjectsResponse, GetContributedProjectsRequest,
    GetContributedProjectsResponse, Project,
};
pub use messages::request_service::{
    GetRequestsRequest, GetRequestsResponse, Request, SubmitAccessRequestRequest,
    SubmitAccessRequestResponse, SubmitProjectRequestRequest, SubmitProjectRequestResponse,
    SubmitPullRequestApprovalRequest, SubmitPullRequestApprovalResponse,
};

pub const REQUEST_SERVICE: &str = "backend.RequestService";
pub const PROJECT_SERVICE: &str = "backend.ProjectService";

/// Fully-qualified RPC method paths, as POSTed by a gRPC-Web client
pub mod paths {
    pub const SUBMIT_PROJECT_REQUEST: &str = "/backend.RequestService/SubmitProjectRequest";
    pub const SUBMIT_PULL_REQUEST_APPROVAL: &str =
        "/backend.RequestService/SubmitPullRequestApproval";
    pub const SUBMIT_ACCESS_REQUEST: &str = "/backend.RequestService/SubmitAccessRequest";
    pub const GET_REQUESTS: &str = "/backend.RequestService/GetRequests";
    pub const GET_APPROVED_PROJECTS_LIST: &str = "/backend.ProjectService/GetApprovedProjectsList";
    pub const GET_AUTHORED_PROJECTS: &str = "/backend.ProjectService/GetAuthoredProjects";
    pub const GET_CONTRIBUTED_PROJECTS: &str = "/backend.ProjectService/GetContributedProjects";
}
