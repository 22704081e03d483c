use crate::in_memory::{ACCESS_SUBMITTED, PROJECT_SUBMITTED, PULL_REQUEST_SUBMITTED};
use crate::{ClientError, InMemoryApi, RequestApi};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use ospo_core::fixtures::{self, MOCK_USER_ID};
use ospo_core::{RequestStatus, SubmitRequest};

#[tokio::test]
async fn given_seeded_backend_when_listing_then_newest_first() {
    // Given
    let api = InMemoryApi::seeded();

    // When
    let requests = api.get_requests(MOCK_USER_ID, None).await.unwrap();

    // Then
    let ids: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["req-1", "req-3", "req-2"]);
}

#[tokio::test]
async fn given_status_filter_when_listing_then_only_matching() {
    let api = InMemoryApi::seeded();

    let requests = api
        .get_requests(MOCK_USER_ID, Some(RequestStatus::InReview))
        .await
        .unwrap();

    assert_that!(requests.len(), eq(1));
    assert_that!(requests[0].id.as_str(), eq("req-2"));
}

#[tokio::test]
async fn given_other_user_when_listing_then_empty() {
    let api = InMemoryApi::seeded();

    let requests = api.get_requests("USER999", None).await.unwrap();

    assert!(requests.is_empty());
}

#[tokio::test]
async fn given_submission_when_stored_then_pending_with_fresh_id() {
    // Given
    let api = InMemoryApi::new();
    let data = SubmitRequest::access("Need write access", "the muppets", "maintainer");

    // When
    let response = api.submit_request(&data, MOCK_USER_ID).await.unwrap();

    // Then
    assert_that!(response.message.as_str(), eq(ACCESS_SUBMITTED));
    let stored = api.stored_requests();
    assert_that!(stored.len(), eq(1));
    assert_that!(stored[0].id.as_str(), eq(response.request_id.as_str()));
    assert_that!(stored[0].status, eq(RequestStatus::Pending));
    assert_that!(stored[0].project_name.as_deref(), some(eq("the muppets")));
    assert_that!(stored[0].requester_id.as_deref(), some(eq(MOCK_USER_ID)));
}

#[tokio::test]
async fn given_project_submission_when_stored_then_no_project_name() {
    let api = InMemoryApi::new();
    let data = SubmitRequest::project("New tool", "tool", "https://github.com/acme/tool", "MIT");

    let response = api.submit_request(&data, MOCK_USER_ID).await.unwrap();

    assert_that!(response.message.as_str(), eq(PROJECT_SUBMITTED));
    assert_that!(api.stored_requests()[0].project_name.as_deref(), none());
}

#[tokio::test]
async fn given_pull_request_submission_then_type_specific_message() {
    let api = InMemoryApi::new();
    let data = SubmitRequest::pull_request("Fix", "Auth", "https://github.com/acme/auth/pull/1");

    let response = api.submit_request(&data, MOCK_USER_ID).await.unwrap();

    assert_that!(response.message.as_str(), eq(PULL_REQUEST_SUBMITTED));
}

#[tokio::test]
async fn given_fail_next_when_called_then_fails_that_many_times() {
    // Given
    let api = InMemoryApi::seeded();
    api.fail_next(2);

    // When
    let first = api.get_requests(MOCK_USER_ID, None).await;
    let second = api.get_approved_projects().await;
    let third = api.get_requests(MOCK_USER_ID, None).await;

    // Then
    assert!(matches!(first, Err(ClientError::Api { status: 503, .. })));
    assert_that!(second, err(anything()));
    assert_that!(third, ok(anything()));
    assert_that!(api.call_count(), eq(3));
}

#[tokio::test]
async fn given_seeded_backend_then_catalog_matches_fixtures() {
    let api = InMemoryApi::seeded();

    let catalog = api.get_approved_projects().await.unwrap();

    assert_eq!(catalog, fixtures::approved_catalog());
}

#[tokio::test]
async fn given_seeded_backend_then_mock_user_projects_match_fixtures() {
    let api = InMemoryApi::seeded();

    let authored = api.get_authored_projects(MOCK_USER_ID).await.unwrap();
    let contributed = api.get_contributed_projects(MOCK_USER_ID).await.unwrap();

    assert_eq!(authored, fixtures::authored_projects());
    assert_eq!(contributed, fixtures::contributed_projects());
}

#[tokio::test]
async fn given_user_without_projects_then_project_lists_empty() {
    let api = InMemoryApi::seeded();

    assert!(api.get_authored_projects("NEWHIRE42").await.unwrap().is_empty());
    assert!(api.get_contributed_projects("NEWHIRE42").await.unwrap().is_empty());
}

#[test]
fn given_known_id_when_set_status_then_updated() {
    let api = InMemoryApi::seeded();

    assert!(api.set_status("req-1", RequestStatus::Approved));
    assert!(!api.set_status("missing", RequestStatus::Approved));

    let stored = api.stored_requests();
    let updated = stored.iter().find(|r| r.id == "req-1").unwrap();
    assert_that!(updated.status, eq(RequestStatus::Approved));
}
