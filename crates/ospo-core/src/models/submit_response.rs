use serde::{Deserialize, Serialize};

/// Acknowledgement returned by every submit operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Older deployments answer `{ "success": true, "id": ... }`
    #[serde(default, alias = "id")]
    pub request_id: String,
    #[serde(default)]
    pub message: String,
}
