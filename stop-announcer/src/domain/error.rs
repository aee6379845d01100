//! Domain error types.

/// Domain-level errors for data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Segment stations do not match the shape its kind requires
    #[error("invalid segment: {0}")]
    InvalidSegment(&'static str),
}
