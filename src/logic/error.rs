//! Error handling

use thiserror::Error;

pub type RiskResult<T> = Result<T, RiskError>;

#[derive(Debug, Error)]
pub enum RiskError {
    /// Nothing to draw (empty table or top_n == 0)
    #[error("Chart has no rows to render")]
    EmptyChart,

    #[error("Invalid plot config: {0}")]
    InvalidConfig(String),

    /// Backend failure while drawing (font lookup, encoder, ...)
    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RiskError {
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
