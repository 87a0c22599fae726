//! Common library exports shared between the backend and its rendering layer.

extern crate serde;


pub mod param_bag;
pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod pagination;
