//! Decode error type.

use drawfile_buffers::CursorError;
use thiserror::Error;

/// Failure raised while decoding a Draw file.
///
/// Every failure is terminal: no partial document is returned. Each variant
/// carries the byte offset at which the violation was detected plus
/// variant-specific context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A primitive read went out of bounds or was misaligned.
    #[error(transparent)]
    Cursor(#[from] CursorError),
    /// A path element carried a tag outside the recognized set.
    #[error("unsupported path tag {tag:x} at offset {position}")]
    UnsupportedTag { position: usize, tag: u32 },
    /// An object record declared a size that cannot cover its own prefix or
    /// that extends past the end of the buffer.
    #[error("object at offset {position} declares invalid size {size}")]
    BadObjectSize { position: usize, size: i32 },
}

impl DecodeError {
    /// Byte offset at which the violation was detected.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::Cursor(err) => err.position(),
            DecodeError::UnsupportedTag { position, .. } => *position,
            DecodeError::BadObjectSize { position, .. } => *position,
        }
    }
}
