//! Search API route handlers and module exports.

mod search_for_results;
pub use search_for_results::{SearchContext, search_for_results};

mod search_for_results_hit_count;
pub use search_for_results_hit_count::search_for_results_hit_count;


pub mod search_facets;
pub mod query_translator;
pub mod result_paginator;
