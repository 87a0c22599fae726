pub mod search_pages;
pub use search_pages::{AppState, router};
