use crate::RequestType;

use serde::{Deserialize, Serialize};

/// Form data for a new request.
///
/// Which optional fields matter depends on `request_type`; that is checked
/// by [`crate::RequestValidator`], not here. For pull-request submissions
/// `project_url` carries the pull request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl SubmitRequest {
    pub fn project(
        title: impl Into<String>,
        project_name: impl Into<String>,
        project_url: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            request_type: RequestType::Project,
            title: title.into(),
            project_name: Some(project_name.into()),
            project_url: Some(project_url.into()),
            license: Some(license.into()),
            role: None,
        }
    }

    pub fn pull_request(
        title: impl Into<String>,
        project_name: impl Into<String>,
        pull_request_url: impl Into<String>,
    ) -> Self {
        Self {
            request_type: RequestType::PullRequest,
            title: title.into(),
            project_name: Some(project_name.into()),
            project_url: Some(pull_request_url.into()),
            license: None,
            role: None,
        }
    }

    pub fn access(
        title: impl Into<String>,
        project_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            request_type: RequestType::Access,
            title: title.into(),
            project_name: Some(project_name.into()),
            project_url: None,
            license: None,
            role: Some(role.into()),
        }
    }

    /// Optional field as sent on the wire (absent becomes "")
    pub fn field_or_empty(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("")
    }
}
