//! Search core of the terminology browser: query translation, pagination and the
//! terminology API client.

pub mod api;
pub mod api_utils;
pub mod filter_table;
pub mod reference_data;
pub mod server_extra;
pub mod settings;
