pub mod approved_project;
pub mod project;
pub mod project_status;
pub mod request;
pub mod request_stats;
pub mod request_status;
pub mod request_type;
pub mod submit_request;
pub mod submit_response;
pub mod user;
pub mod user_role;
