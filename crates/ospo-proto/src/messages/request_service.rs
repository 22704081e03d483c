//! `backend.RequestService` messages

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct SubmitProjectRequestRequest {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub project_url: String,
    #[prost(string, tag = "3")]
    pub license: String,
    #[prost(string, tag = "4")]
    pub requester_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SubmitProjectRequestResponse {
    #[prost(string, tag = "1")]
    pub request_id: String,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SubmitPullRequestApprovalRequest {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub project_name: String,
    #[prost(string, tag = "3")]
    pub pr_url: String,
    #[prost(string, tag = "4")]
    pub requester_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SubmitPullRequestApprovalResponse {
    #[prost(string, tag = "1")]
    pub request_id: String,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SubmitAccessRequestRequest {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub project_name: String,
    #[prost(string, tag = "3")]
    pub role: String,
    #[prost(string, tag = "4")]
    pub requester_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SubmitAccessRequestResponse {
    #[prost(string, tag = "1")]
    pub request_id: String,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetRequestsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    /// Empty = all statuses
    #[prost(string, tag = "2")]
    pub status: String,
    #[prost(int32, tag = "3")]
    pub page: i32,
    #[prost(int32, tag = "4")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct Request {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub r#type: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub status: String,
    #[prost(string, tag = "5")]
    pub requester_id: String,
    /// RFC 3339, e.g. "2025-08-22T15:09:47Z"
    #[prost(string, tag = "6")]
    pub created_at: String,
    #[prost(string, tag = "7")]
    pub project_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetRequestsResponse {
    #[prost(message, repeated, tag = "1")]
    pub requests: Vec<Request>,
    #[prost(int32, tag = "2")]
    pub total: i32,
}
