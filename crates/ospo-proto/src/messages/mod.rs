pub mod project_service;
pub mod request_service;
