//! Unified error type for the longan library.
//!
//! Two classes of failure share one enum: configuration errors, raised while
//! a slide is still being composed (before any serializer call for that
//! slide), and serialization errors, raised at the serializer boundary.
use thiserror::Error;

/// Main error type for longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme color name outside the registered palette
    #[error("Unknown theme color: {0}")]
    UnknownColor(String),

    /// A content table that must produce at least one primitive was empty
    #[error("Empty content: {0}")]
    EmptyContent(&'static str),

    /// Parallel content tables disagree in length
    #[error("Mismatched content tables: {left} has {left_len} entries, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// A deck must contain at least one slide
    #[error("Deck contains no slides")]
    EmptyDeck,

    /// Draw or commit call issued after the terminal commit
    #[error("Deck already committed")]
    AlreadyCommitted,

    /// The serializer rejected a draw call's geometry
    #[error("Malformed geometry: {0}")]
    InvalidGeometry(String),

    /// Part generation failed at the serializer boundary
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),
}

impl Error {
    /// Whether this error was detected while composing a slide or deck,
    /// before the serializer was involved.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownColor(_)
                | Error::EmptyContent(_)
                | Error::LengthMismatch { .. }
                | Error::EmptyDeck
                | Error::AlreadyCommitted
        )
    }
}

/// Result type for longan operations.
pub type Result<T> = std::result::Result<T, Error>;
