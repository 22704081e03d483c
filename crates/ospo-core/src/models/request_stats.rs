use crate::{Request, RequestStatus};

use serde::Serialize;

/// Per-status request counts for one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestStats {
    pub pending: usize,
    pub in_review: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

impl RequestStats {
    pub fn from_requests(requests: &[Request]) -> Self {
        requests.iter().fold(Self::default(), |mut stats, request| {
            match request.status {
                RequestStatus::Pending => stats.pending += 1,
                RequestStatus::InReview => stats.in_review += 1,
                RequestStatus::Approved => stats.approved += 1,
                RequestStatus::Rejected => stats.rejected += 1,
            }
            stats.total += 1;
            stats
        })
    }

    pub fn count(&self, status: RequestStatus) -> usize {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::InReview => self.in_review,
            RequestStatus::Approved => self.approved,
            RequestStatus::Rejected => self.rejected,
        }
    }

    /// Requests still awaiting a decision
    pub fn open(&self) -> usize {
        self.pending + self.in_review
    }
}
