use thiserror::Error;

/// Errors raised while building or navigating a [`Presentation`](crate::Presentation).
///
/// A failed operation never touches the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("slide index {index} is out of range (deck has {len} slides)")]
    InvalidIndex { index: i64, len: usize },

    #[error("a presentation needs at least one slide")]
    Empty,

    #[error("duplicate slide id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, PresentationError>;
