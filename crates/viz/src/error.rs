use thiserror::Error;

/// Errors that can occur while rendering the dashboard
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
