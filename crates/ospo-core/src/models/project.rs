use crate::ProjectStatus;

use serde::{Deserialize, Serialize};

/// A project card on the dashboard (authored, contributed or approved)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Free-form, e.g. "2 days ago"
    pub last_activity: String,
}
