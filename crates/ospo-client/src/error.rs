use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur talking to the request service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API call failed: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("RPC failed: {message} (grpc-status: {code}) {location}")]
    Rpc {
        code: i32,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("gRPC-Web framing error: {source}")]
    Proto {
        #[source]
        source: ospo_proto::ProtoError,
    },

    #[error("Invalid data from server: {message} {location}")]
    InvalidData {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an RPC status error with location
    #[track_caller]
    pub fn rpc_error(code: i32, message: impl Into<String>) -> Self {
        ClientError::Rpc {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid-data error with location
    #[track_caller]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        ClientError::InvalidData {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message carried by the error, without prefix or location.
    /// Empty when the server failed without saying why.
    pub fn detail(&self) -> String {
        match self {
            ClientError::Http { message, .. }
            | ClientError::Api { message, .. }
            | ClientError::Rpc { message, .. }
            | ClientError::Json { message, .. }
            | ClientError::InvalidData { message, .. } => message.clone(),
            ClientError::Proto { source } => source.to_string(),
        }
    }

    /// Short message for display to the user, without source location
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http { message, .. } => format!("Network error: {message}"),
            ClientError::Api { message, .. } => format!("API call failed: {message}"),
            ClientError::Rpc { message, code, .. } if message.is_empty() => {
                format!("RPC failed with status {code}")
            }
            ClientError::Rpc { message, .. } => format!("RPC failed: {message}"),
            ClientError::Json { message, .. } => format!("Malformed response: {message}"),
            ClientError::Proto { source } => format!("Malformed response: {source}"),
            ClientError::InvalidData { message, .. } => format!("Invalid data: {message}"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ospo_proto::ProtoError> for ClientError {
    fn from(source: ospo_proto::ProtoError) -> Self {
        ClientError::Proto { source }
    }
}

impl From<ospo_core::CoreError> for ClientError {
    #[track_caller]
    fn from(err: ospo_core::CoreError) -> Self {
        ClientError::invalid_data(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
