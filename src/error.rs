use thiserror::Error;

/// CLI統一エラー型
#[derive(Debug, Error)]
pub enum VesperError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Fetch failed: {url} (status: {status})")]
    Fetch { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid registry: {0}")]
    Registry(String),
}

pub type Result<T> = std::result::Result<T, VesperError>;
