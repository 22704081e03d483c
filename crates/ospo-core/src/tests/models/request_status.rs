use crate::RequestStatus;

use std::str::FromStr;

#[test]
fn test_request_status_round_trips_through_str() {
    for status in RequestStatus::ALL {
        assert_eq!(RequestStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_request_status_rejects_unknown() {
    assert!(RequestStatus::from_str("in-review").is_err());
    assert!(RequestStatus::from_str("").is_err());
}

#[test]
fn test_request_status_open() {
    assert!(RequestStatus::Pending.is_open());
    assert!(RequestStatus::InReview.is_open());
    assert!(!RequestStatus::Approved.is_open());
    assert!(!RequestStatus::Rejected.is_open());
}

#[test]
fn test_request_status_default() {
    assert_eq!(RequestStatus::default(), RequestStatus::Pending);
}
