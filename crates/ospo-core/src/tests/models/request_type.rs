use crate::RequestType;

use std::str::FromStr;

#[test]
fn test_request_type_as_str() {
    assert_eq!(RequestType::Project.as_str(), "project");
    assert_eq!(RequestType::PullRequest.as_str(), "pullrequest");
    assert_eq!(RequestType::Access.as_str(), "access");
}

#[test]
fn test_request_type_from_str() {
    assert_eq!(
        RequestType::from_str("pullrequest").unwrap(),
        RequestType::PullRequest
    );
    assert_eq!(RequestType::from_str("access").unwrap(), RequestType::Access);
    assert!(RequestType::from_str("pull_request").is_err());
    assert!(RequestType::from_str("Project").is_err());
}

#[test]
fn test_request_type_labels() {
    assert_eq!(RequestType::Project.label(), "Project Request");
    assert_eq!(RequestType::PullRequest.label(), "Pull Request");
    assert_eq!(RequestType::Access.label(), "Access Request");
}

#[test]
fn test_request_type_serializes_lowercase() {
    let json = serde_json::to_string(&RequestType::PullRequest).unwrap();
    assert_eq!(json, "\"pullrequest\"");
}
