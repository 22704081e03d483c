//! Client side of the OSPO request service.
//!
//! [`RequestApi`] is the seam: [`HttpClient`] speaks JSON over HTTP,
//! [`GrpcWebClient`] speaks protobuf over gRPC-Web, and [`InMemoryApi`] is a
//! self-contained fake. [`RequestStore`] sits on top of any of them and owns
//! the current user's request list.

pub(crate) mod api;
pub(crate) mod convert;
pub(crate) mod error;
pub(crate) mod grpc_web_client;
pub(crate) mod http_client;
pub(crate) mod in_memory;
pub(crate) mod request_store;

#[cfg(test)]
mod tests;

pub use api::{GET_REQUESTS_LIMIT, GET_REQUESTS_PAGE, RequestApi};
pub use error::{ClientError, Result as ClientResult};
pub use grpc_web_client::GrpcWebClient;
pub use http_client::HttpClient;
pub use in_memory::InMemoryApi;
pub use request_store::{RequestState, RequestStore};
