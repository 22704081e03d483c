//! A request filed by an employee and tracked by the backend.

use crate::{RequestStatus, RequestType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A tracked request as reported by the request service.
///
/// The client never fabricates these: they are created server-side on
/// submission and come back through a list call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub title: String,
    pub status: RequestStatus,
    /// Empty strings on the wire are read as absent
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub requester_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Request {
    /// Build the record a backend stores for a freshly submitted request
    pub fn submitted(
        request_type: RequestType,
        title: String,
        project_name: Option<String>,
        requester_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            request_type,
            title,
            status: RequestStatus::Pending,
            project_name: project_name.filter(|name| !name.is_empty()),
            requester_id: Some(requester_id),
            created_at: Utc::now(),
        }
    }

    /// Pending or in review
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
