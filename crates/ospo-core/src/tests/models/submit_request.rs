use crate::{RequestType, SubmitRequest};

#[test]
fn test_pull_request_carries_url_in_project_url() {
    let data = SubmitRequest::pull_request(
        "Fix token refresh",
        "Authentication Service",
        "https://github.com/org/repo/pull/42",
    );

    assert_eq!(data.request_type, RequestType::PullRequest);
    assert_eq!(
        data.project_url.as_deref(),
        Some("https://github.com/org/repo/pull/42")
    );
    assert_eq!(SubmitRequest::field_or_empty(&data.license), "");
}

#[test]
fn test_submit_request_serializes_type_and_camel_case() {
    let data = SubmitRequest::access("Access please", "Kubernetes", "contributor");
    let value = serde_json::to_value(&data).unwrap();

    assert_eq!(value["type"], "access");
    assert_eq!(value["projectName"], "Kubernetes");
    assert!(value.get("projectUrl").is_none());
}
