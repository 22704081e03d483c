use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The three kinds of request an employee can file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Publish a new open-source project
    Project,
    /// Approval to contribute a pull request upstream
    PullRequest,
    /// Access to an existing project
    Access,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::PullRequest => "pullrequest",
            Self::Access => "access",
        }
    }

    /// Human-readable label used on request lists
    pub fn label(&self) -> &'static str {
        match self {
            Self::Project => "Project Request",
            Self::PullRequest => "Pull Request",
            Self::Access => "Access Request",
        }
    }
}

impl FromStr for RequestType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "project" => Ok(Self::Project),
            "pullrequest" => Ok(Self::PullRequest),
            "access" => Ok(Self::Access),
            _ => Err(CoreError::InvalidRequestType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
