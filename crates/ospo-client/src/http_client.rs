use crate::{ClientError, ClientResult, GET_REQUESTS_LIMIT, GET_REQUESTS_PAGE, RequestApi};

use async_trait::async_trait;
use log::{debug, error};
use ospo_core::{
    ApprovedProject, Project, Request, RequestStatus, RequestType, SubmitRequest, SubmitResponse,
};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUBMIT_PROJECT_REQUEST: &str = "submit-project-request";
pub const SUBMIT_PULL_REQUEST_APPROVAL: &str = "submit-pullrequest-approval";
pub const SUBMIT_ACCESS_REQUEST: &str = "submit-access-request";
pub const GET_REQUESTS: &str = "get-requests";
pub const GET_APPROVED_PROJECTS: &str = "get-approved-projects";
pub const GET_AUTHORED_PROJECTS: &str = "get-authored-projects";
pub const GET_CONTRIBUTED_PROJECTS: &str = "get-contributed-projects";

/// JSON-over-HTTP client for the request service.
///
/// Every operation is a `POST {base_url}/api/<operation>` with a camelCase
/// JSON body.
pub struct HttpClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    /// Create a client on top of a preconfigured reqwest client
    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }

    /// POST a JSON body and decode the JSON answer
    async fn api_call<B, R>(&self, endpoint: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(status, &bytes);
            error!("POST {url} failed with {status}: {message}");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Prefer the body's `error` (string or `{message}`), else the status text
fn error_message(status: StatusCode, body: &[u8]) -> String {
    let from_body = serde_json::from_slice::<Value>(body).ok().and_then(|value| {
        let error = value.get("error")?;
        error
            .as_str()
            .or_else(|| error.get("message").and_then(Value::as_str))
            .map(String::from)
    });

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(String::from)
            .unwrap_or_else(|| status.as_str().to_string())
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitProjectBody<'a> {
    title: &'a str,
    project_url: &'a str,
    license: &'a str,
    requester_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitPullRequestBody<'a> {
    title: &'a str,
    project_name: &'a str,
    pr_url: &'a str,
    requester_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitAccessBody<'a> {
    title: &'a str,
    project_name: &'a str,
    role: &'a str,
    requester_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetRequestsBody<'a> {
    user_id: &'a str,
    status: &'a str,
    page: i32,
    limit: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetApprovedProjectsBody {
    active_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserProjectsBody<'a> {
    user_id: &'a str,
}

/// Current servers wrap the list; older ones answer with a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Requests { requests: Vec<T> },
    Projects { projects: Vec<T> },
    ApprovedProjects {
        #[serde(rename = "approvedProjects")]
        approved_projects: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Requests { requests } => requests,
            Self::Projects { projects } => projects,
            Self::ApprovedProjects { approved_projects } => approved_projects,
            Self::Bare(items) => items,
        }
    }
}

#[async_trait]
impl RequestApi for HttpClient {
    async fn submit_request(
        &self,
        data: &SubmitRequest,
        requester_id: &str,
    ) -> ClientResult<SubmitResponse> {
        let title = data.title.as_str();
        let project_name = SubmitRequest::field_or_empty(&data.project_name);
        let project_url = SubmitRequest::field_or_empty(&data.project_url);

        match data.request_type {
            RequestType::Project => {
                let body = SubmitProjectBody {
                    title,
                    project_url,
                    license: SubmitRequest::field_or_empty(&data.license),
                    requester_id,
                };
                self.api_call(SUBMIT_PROJECT_REQUEST, &body).await
            }
            RequestType::PullRequest => {
                let body = SubmitPullRequestBody {
                    title,
                    project_name,
                    pr_url: project_url,
                    requester_id,
                };
                self.api_call(SUBMIT_PULL_REQUEST_APPROVAL, &body).await
            }
            RequestType::Access => {
                let body = SubmitAccessBody {
                    title,
                    project_name,
                    role: SubmitRequest::field_or_empty(&data.role),
                    requester_id,
                };
                self.api_call(SUBMIT_ACCESS_REQUEST, &body).await
            }
        }
    }

    async fn get_requests(
        &self,
        user_id: &str,
        status: Option<RequestStatus>,
    ) -> ClientResult<Vec<Request>> {
        let body = GetRequestsBody {
            user_id,
            status: status.map(|s| s.as_str()).unwrap_or(""),
            page: GET_REQUESTS_PAGE,
            limit: GET_REQUESTS_LIMIT,
        };

        let payload: ListPayload<Request> = self.api_call(GET_REQUESTS, &body).await?;
        Ok(payload.into_items())
    }

    async fn get_approved_projects(&self) -> ClientResult<Vec<ApprovedProject>> {
        let body = GetApprovedProjectsBody { active_only: false };

        let payload: ListPayload<ApprovedProject> =
            self.api_call(GET_APPROVED_PROJECTS, &body).await?;
        Ok(payload.into_items())
    }

    async fn get_authored_projects(&self, user_id: &str) -> ClientResult<Vec<Project>> {
        let body = UserProjectsBody { user_id };

        let payload: ListPayload<Project> = self.api_call(GET_AUTHORED_PROJECTS, &body).await?;
        Ok(payload.into_items())
    }

    async fn get_contributed_projects(&self, user_id: &str) -> ClientResult<Vec<Project>> {
        let body = UserProjectsBody { user_id };

        let payload: ListPayload<Project> =
            self.api_call(GET_CONTRIBUTED_PROJECTS, &body).await?;
        Ok(payload.into_items())
    }
}
