use crate::{Request, RequestStatus, RequestType};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_server_json_when_deserialize_then_fields_mapped() {
    // Given
    let value = json!({
        "id": "req-1",
        "type": "project",
        "title": "Test Project Request",
        "status": "in_review",
        "projectName": "Test Project",
        "createdAt": "2024-01-01T00:00:00Z"
    });

    // When
    let request: Request = serde_json::from_value(value).unwrap();

    // Then
    assert_that!(request.id.as_str(), eq("req-1"));
    assert_that!(request.request_type, eq(RequestType::Project));
    assert_that!(request.status, eq(RequestStatus::InReview));
    assert_that!(request.project_name.as_deref(), some(eq("Test Project")));
    assert_that!(request.created_at.timestamp(), eq(1704067200));
}

#[test]
fn given_empty_project_name_when_deserialize_then_none() {
    // Given
    let value = json!({
        "id": "req-2",
        "type": "project",
        "title": "New Documentation Site",
        "status": "pending",
        "projectName": "",
        "requesterId": "",
        "createdAt": "2025-08-20T10:30:00Z"
    });

    // When
    let request: Request = serde_json::from_value(value).unwrap();

    // Then
    assert_that!(request.project_name.as_deref(), none());
    assert_that!(request.requester_id.as_deref(), none());
}

#[test]
fn given_unknown_status_when_deserialize_then_error() {
    let value = json!({
        "id": "req-3",
        "type": "access",
        "title": "Access",
        "status": "on_hold",
        "createdAt": "2025-08-20T10:30:00Z"
    });

    let result = serde_json::from_value::<Request>(value);

    assert_that!(result, err(anything()));
}

#[test]
fn given_new_submission_when_submitted_then_pending_with_fresh_id() {
    let request = Request::submitted(
        RequestType::Access,
        "Need access".to_string(),
        Some(String::new()),
        "USER001".to_string(),
    );

    assert_that!(request.status, eq(RequestStatus::Pending));
    assert_that!(request.id.len(), eq(36));
    assert_that!(request.project_name.as_deref(), none());
    assert_that!(request.requester_id.as_deref(), some(eq("USER001")));
    assert!(request.is_open());
}
