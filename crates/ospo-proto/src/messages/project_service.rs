//! `backend.ProjectService` messages used by the client

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct GetApprovedProjectsListRequest {
    #[prost(bool, tag = "1")]
    pub active_only: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct ApprovedProject {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub repository_url: String,
    #[prost(string, tag = "5")]
    pub license: String,
    #[prost(string, tag = "6")]
    pub contribution_type: String,
    #[prost(string, tag = "7")]
    pub maintainer_contact: String,
    /// RFC 3339
    #[prost(string, tag = "8")]
    pub approval_date: String,
    #[prost(bool, tag = "9")]
    pub is_active: bool,
    #[prost(string, repeated, tag = "10")]
    pub allowed_contribution_types: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetApprovedProjectsListResponse {
    #[prost(message, repeated, tag = "1")]
    pub approved_projects: Vec<ApprovedProject>,
    #[prost(int32, tag = "2")]
    pub total: i32,
}

/// Dashboard project card
#[derive(Clone, PartialEq, Message)]
pub struct Project {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub status: String,
    #[prost(string, tag = "5")]
    pub last_activity: String,
    #[prost(string, tag = "6")]
    pub url: String,
    #[prost(string, tag = "7")]
    pub license: String,
    #[prost(string, tag = "8")]
    pub owner_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetAuthoredProjectsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetAuthoredProjectsResponse {
    #[prost(message, repeated, tag = "1")]
    pub projects: Vec<Project>,
    #[prost(int32, tag = "2")]
    pub total: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetContributedProjectsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct GetContributedProjectsResponse {
    #[prost(message, repeated, tag = "1")]
    pub projects: Vec<Project>,
    #[prost(int32, tag = "2")]
    pub total: i32,
}
