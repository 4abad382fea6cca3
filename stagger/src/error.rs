//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("desired column width must be positive and finite, got {0}")]
    InvalidColumnWidth(f32),

    #[error("{field} must be non-negative and finite, got {value}")]
    InvalidSpacing { field: &'static str, value: f32 },

    #[error("padding {side} must be non-negative and finite, got {value}")]
    InvalidPadding { side: &'static str, value: f32 },

    #[error("arrange called before measure")]
    NotMeasured,

    #[error("layout cache is stale: measured at revision {cache}, parameters at revision {current}")]
    StaleCache { cache: u64, current: u64 },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
