//! Checked binary cursor for drawfile.
//!
//! This crate provides [`Cursor`], a position-tracked reader over a byte
//! slice. Unlike a plain slice reader, every read is bounds-checked, and
//! multi-byte and string reads additionally require the cursor to sit on a
//! 4-byte boundary — the word-alignment rule of the file format the
//! `drawfile` crate decodes.
//!
//! # Example
//!
//! ```
//! use drawfile_buffers::Cursor;
//!
//! let data = [0x01, 0x00, 0x00, 0x00, 0x2a];
//! let mut cursor = Cursor::new(&data);
//!
//! assert_eq!(cursor.u32_le().unwrap(), 1);
//! assert_eq!(cursor.byte().unwrap(), 0x2a);
//! ```

mod cursor;

pub use cursor::Cursor;

use thiserror::Error;

/// Failure raised by a [`Cursor`] read.
///
/// Every variant carries the byte offset at which the violation was
/// detected; the cursor is left at that offset and the decode that owns it
/// is expected to abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A read of `wanted` bytes would run past the end of the buffer.
    #[error("reading {wanted} bytes at offset {position} runs off the end of the buffer")]
    OutOfBounds { position: usize, wanted: usize },
    /// A multi-byte or string read began at an offset not divisible by 4.
    /// `field` names the read being attempted, e.g. `"misaligned uint"`.
    #[error("{field} at offset {position}")]
    Misaligned {
        position: usize,
        field: &'static str,
    },
}

impl CursorError {
    /// Byte offset at which the violation was detected.
    pub fn position(&self) -> usize {
        match self {
            CursorError::OutOfBounds { position, .. } => *position,
            CursorError::Misaligned { position, .. } => *position,
        }
    }
}
