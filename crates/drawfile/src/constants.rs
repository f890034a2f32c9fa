//! Numeric vocabulary of the Draw file format.
//!
//! Callers need these values to interpret the raw fields of decoded
//! documents; the decoder itself only assigns meaning to the object type
//! codes and path element tags.

/// Mitred line join.
pub const JOIN_MITRE: u32 = 0;
/// Round line join.
pub const JOIN_ROUND: u32 = 1;
/// Bevelled line join.
pub const JOIN_BEVEL: u32 = 2;

/// Butt line cap.
pub const CAP_BUTT: u32 = 0;
/// Round line cap.
pub const CAP_ROUND: u32 = 1;
/// Square line cap.
pub const CAP_SQUARE: u32 = 2;
/// Triangular line cap; see the triangle cap width/length style fields.
pub const CAP_TRIANGLE: u32 = 3;

/// Non-zero winding rule.
pub const WINDING_NON_ZERO: u32 = 0;
/// Even-odd winding rule.
pub const WINDING_EVEN_ODD: u32 = 1;

/// Path object type code.
pub const OBJECT_PATH: i32 = 2;
/// Sprite object type code; the pixel payload is not decoded.
pub const OBJECT_SPRITE: i32 = 5;
/// Group object type code.
pub const OBJECT_GROUP: i32 = 6;
/// Document options object type code.
pub const OBJECT_OPTIONS: i32 = 11;

/// Path element tag: end of the path.
pub const TAG_END: u32 = 0;
/// Path element tag: move to a point, starting a new subpath.
pub const TAG_MOVE: u32 = 2;
/// Path element tag: zero-payload marker, skipped without error.
pub const TAG_UNKNOWN: u32 = 4;
/// Path element tag: close the current subpath.
pub const TAG_CLOSE_SUB_PATH: u32 = 5;
/// Path element tag: cubic Bezier curve (two control points and an endpoint).
pub const TAG_BEZIER: u32 = 6;
/// Path element tag: straight line to a point.
pub const TAG_DRAW: u32 = 8;

/// Byte length of the file header (identifier, versions, program name,
/// bounding box).
pub const HEADER_SIZE: usize = 40;

/// Byte length of the type/size prefix every object record starts with.
pub const OBJECT_PREFIX_SIZE: i32 = 8;
