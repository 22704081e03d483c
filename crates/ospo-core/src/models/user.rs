use crate::UserRole;

use serde::{Deserialize, Serialize};

/// The signed-in employee. Loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Request-ownership key
    pub corporate_id: String,
    pub github_username: String,
    pub name: String,
    pub department: String,
    pub role: UserRole,
}
