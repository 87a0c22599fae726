use thiserror::Error;


#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("Request to {url} failed with status {status}: {body}")]
    RequestFailed { status: u16, url: String, body: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON from terminology API: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
