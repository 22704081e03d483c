//! Mapping between the protobuf wire shapes and the domain model.

use crate::{ClientError, ClientResult};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use ospo_core::{
    ApprovedProject, Project, ProjectStatus, Request, RequestStatus, RequestType, SubmitRequest,
};

#[track_caller]
fn parse_timestamp(field: &str, value: &str) -> ClientResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ClientError::invalid_data(format!("{field} '{value}': {e}")))
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

pub(crate) fn request_from_proto(request: ospo_proto::Request) -> ClientResult<Request> {
    Ok(Request {
        request_type: RequestType::from_str(&request.r#type)?,
        status: RequestStatus::from_str(&request.status)?,
        created_at: parse_timestamp("createdAt", &request.created_at)?,
        id: request.id,
        title: request.title,
        project_name: non_empty(request.project_name),
        requester_id: non_empty(request.requester_id),
    })
}

pub(crate) fn approved_project_from_proto(
    project: ospo_proto::ApprovedProject,
) -> ClientResult<ApprovedProject> {
    Ok(ApprovedProject {
        approval_date: parse_timestamp("approvalDate", &project.approval_date)?,
        id: project.id,
        name: project.name,
        description: project.description,
        repository_url: project.repository_url,
        license: project.license,
        contribution_type: project.contribution_type,
        maintainer_contact: project.maintainer_contact,
        is_active: project.is_active,
        allowed_contribution_types: project.allowed_contribution_types,
    })
}

pub(crate) fn project_from_proto(project: ospo_proto::Project) -> ClientResult<Project> {
    Ok(Project {
        status: ProjectStatus::from_str(&project.status)?,
        id: project.id,
        name: project.name,
        description: project.description,
        last_activity: project.last_activity,
    })
}

pub(crate) fn project_request_to_proto(
    data: &SubmitRequest,
    requester_id: &str,
) -> ospo_proto::SubmitProjectRequestRequest {
    ospo_proto::SubmitProjectRequestRequest {
        title: data.title.clone(),
        project_url: SubmitRequest::field_or_empty(&data.project_url).to_string(),
        license: SubmitRequest::field_or_empty(&data.license).to_string(),
        requester_id: requester_id.to_string(),
    }
}

pub(crate) fn pull_request_approval_to_proto(
    data: &SubmitRequest,
    requester_id: &str,
) -> ospo_proto::SubmitPullRequestApprovalRequest {
    ospo_proto::SubmitPullRequestApprovalRequest {
        title: data.title.clone(),
        project_name: SubmitRequest::field_or_empty(&data.project_name).to_string(),
        pr_url: SubmitRequest::field_or_empty(&data.project_url).to_string(),
        requester_id: requester_id.to_string(),
    }
}

pub(crate) fn access_request_to_proto(
    data: &SubmitRequest,
    requester_id: &str,
) -> ospo_proto::SubmitAccessRequestRequest {
    ospo_proto::SubmitAccessRequestRequest {
        title: data.title.clone(),
        project_name: SubmitRequest::field_or_empty(&data.project_name).to_string(),
        role: SubmitRequest::field_or_empty(&data.role).to_string(),
        requester_id: requester_id.to_string(),
    }
}
