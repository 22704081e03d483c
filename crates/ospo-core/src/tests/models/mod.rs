mod request;
mod request_stats;
mod request_status;
mod request_type;
mod submit_request;
