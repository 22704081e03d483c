use std::str::FromStr;

use serde::Deserialize;

/// Wire binding used to reach the request service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ApiTransport {
    /// JSON over `POST /api/<operation>`
    #[default]
    #[serde(rename = "http", alias = "json")]
    Http,
    /// Protobuf over gRPC-Web
    #[serde(rename = "grpc-web", alias = "grpc")]
    GrpcWeb,
}

impl ApiTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::GrpcWeb => "grpc-web",
        }
    }
}

impl FromStr for ApiTransport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" | "json" => Ok(Self::Http),
            "grpc-web" | "grpc" => Ok(Self::GrpcWeb),
            other => Err(format!("unknown transport: {other}")),
        }
    }
}

impl std::fmt::Display for ApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
