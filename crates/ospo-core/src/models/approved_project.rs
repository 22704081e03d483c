use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An upstream project pre-cleared for employee contribution.
/// Read-only reference data used to populate project pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub repository_url: String,
    pub license: String,
    /// CLA or DCO
    #[serde(default)]
    pub contribution_type: String,
    #[serde(default)]
    pub maintainer_contact: String,
    pub approval_date: DateTime<Utc>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub allowed_contribution_types: Vec<String>,
}

impl ApprovedProject {
    pub fn allows(&self, contribution_type: &str) -> bool {
        self.allowed_contribution_types
            .iter()
            .any(|allowed| allowed == contribution_type)
    }
}
