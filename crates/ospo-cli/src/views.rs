//! JSON shapes printed by the CLI.

use chrono::{DateTime, Utc};
use ospo_core::display::{self, relative_age};
use ospo_core::{Request, RequestStats, RequestStatus, RequestType, User, ValidationReport};
use serde::Serialize;

/// Requests per page on the dashboard's open-requests card
pub const OPEN_REQUESTS_PAGE_SIZE: usize = 4;

/// One request as listed on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCard {
    pub id: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub type_label: &'static str,
    pub title: String,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub age: String,
}

impl RequestCard {
    pub fn new(request: &Request, now: DateTime<Utc>) -> Self {
        Self {
            id: request.id.clone(),
            request_type: request.request_type,
            type_label: request.request_type.label(),
            title: request.title.clone(),
            status: request.status,
            project_name: request.project_name.clone(),
            age: relative_age(request.created_at, now),
        }
    }
}

pub fn cards(requests: &[Request], now: DateTime<Utc>) -> Vec<RequestCard> {
    requests.iter().map(|r| RequestCard::new(r, now)).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRequestsPage {
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub requests: Vec<RequestCard>,
}

impl OpenRequestsPage {
    pub fn new(open: &[Request], page: usize, now: DateTime<Utc>) -> Self {
        Self {
            page,
            page_count: display::page_count(open.len(), OPEN_REQUESTS_PAGE_SIZE),
            total: open.len(),
            requests: cards(display::page(open, page, OPEN_REQUESTS_PAGE_SIZE), now),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user: User,
    /// Project counts are null when the backend could not supply them
    pub authored_projects: Option<usize>,
    pub contributed_projects: Option<usize>,
    pub approved_projects: Option<usize>,
    pub stats: RequestStats,
    pub open_requests: OpenRequestsPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of `request submit`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<RequestCard>,
}

#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub error: String,
}
