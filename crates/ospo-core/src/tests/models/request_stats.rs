use crate::fixtures::pending_requests;
use crate::{RequestStats, RequestStatus};

#[test]
fn test_stats_from_fixture_requests() {
    let stats = RequestStats::from_requests(&pending_requests());

    assert_eq!(stats.pending, 2);
    assert_eq!(stats.in_review, 1);
    assert_eq!(stats.approved, 0);
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.open(), 3);
    assert_eq!(stats.count(RequestStatus::Pending), 2);
}

#[test]
fn test_stats_empty() {
    assert_eq!(RequestStats::from_requests(&[]), RequestStats::default());
}
