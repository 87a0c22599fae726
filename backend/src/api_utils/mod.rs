pub mod api_error;
pub mod terminology_api;
