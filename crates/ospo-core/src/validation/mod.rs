pub mod field_error;
pub mod request_validator;
pub mod validation_limits;
pub mod validation_report;
