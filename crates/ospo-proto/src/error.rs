use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtoError {
    #[error("Truncated gRPC-Web frame: {message} {location}")]
    TruncatedFrame {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported gRPC-Web frame flag: {flag:#04x} {location}")]
    UnsupportedFlag { flag: u8, location: ErrorLocation },

    #[error("Message too large for a gRPC-Web frame: {len} bytes {location}")]
    FrameTooLarge { len: usize, location: ErrorLocation },

    #[error("Protobuf decode error: {source} {location}")]
    Decode {
        #[source]
        source: prost::DecodeError,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, ProtoError>;
