pub mod custom_error;
pub mod request_context;
