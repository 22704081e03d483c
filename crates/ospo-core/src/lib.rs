//! Domain model for the OSPO request portal: requests, the approved-project
//! catalog, the session user, and the client-side validation rules applied
//! before a request is dispatched.

pub mod display;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::approved_project::ApprovedProject;
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use models::request::Request;
pub use models::request_stats::RequestStats;
pub use models::request_status::RequestStatus;
pub use models::request_type::RequestType;
pub use models::submit_request::SubmitRequest;
pub use models::submit_response::SubmitResponse;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use validation::field_error::FieldError;
pub use validation::request_validator::RequestValidator;
pub use validation::validation_limits::ValidationLimits;
pub use validation::validation_report::ValidationReport;
