use thiserror::Error;

/// Raised when the block tree handed to the layout is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
