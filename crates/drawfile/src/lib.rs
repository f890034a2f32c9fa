//! Decoder for the legacy Draw vector-drawing binary file format.
//!
//! A Draw file is a 40-byte header followed by a flat stream of
//! length-prefixed, self-describing records: vector paths, sprites, groups
//! and document options. This crate decodes such a buffer into a
//! [`Document`] tree. It is a pure decoder — it never writes the format and
//! never renders anything; colour and style values come out as the raw
//! numeric fields found in the file.
//!
//! Records the decoder does not recognize are kept as [`ObjectBody::Unknown`]
//! and skipped via their declared size, so files carrying newer record types
//! still traverse. Structural violations (out-of-bounds reads, misaligned
//! fields, bad path tags, inconsistent record sizes) abort the whole decode
//! with a positioned [`DecodeError`].
//!
//! # Example
//!
//! ```
//! let mut data = Vec::new();
//! data.extend_from_slice(b"Draw");
//! data.extend_from_slice(&201u32.to_le_bytes());
//! data.extend_from_slice(&0u32.to_le_bytes());
//! data.extend_from_slice(b"drawfile\0\0\0\0");
//! for v in [0i32, 0, 1024, 1024] {
//!     data.extend_from_slice(&v.to_le_bytes());
//! }
//!
//! let document = drawfile::decode(&data).unwrap();
//! assert_eq!(document.header.identifier, "Draw");
//! assert_eq!(document.header.program, "drawfile");
//! assert!(document.objects.is_empty());
//! ```

pub mod constants;
mod decoder;
mod error;
mod types;

pub use decoder::Decoder;
pub use drawfile_buffers::{Cursor, CursorError};
pub use error::DecodeError;
pub use types::{
    BoundingBox, Dash, Document, GroupObject, Header, Object, ObjectBody, OptionsObject,
    PathElement, PathObject, PathStyle, Point, SpriteObject,
};

/// Decodes a complete in-memory Draw file buffer into a [`Document`].
///
/// The buffer must be supplied in full; there is no streaming. On any
/// structural violation the whole decode fails and no partial document is
/// returned.
pub fn decode(data: &[u8]) -> Result<Document, DecodeError> {
    Decoder::new(data).decode()
}
