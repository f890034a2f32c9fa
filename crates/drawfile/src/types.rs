//! Decoded document tree.
//!
//! Every type here is built once during a decode pass and never mutated
//! afterwards. Colour and style values are carried as the raw numeric
//! fields found in the file; interpreting them is the caller's business
//! (see the [`constants`](crate::constants) module for the vocabulary).

/// A point in Draw units (signed 32-bit coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned bounding box as stored in the file.
///
/// No ordering is enforced between min and max; a file may carry
/// `min_x > max_x` and the decoder passes it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// Dash pattern attached to a path style when bit 7 of the style word is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dash {
    /// Offset into the pattern at which the dash starts.
    pub offset: i32,
    /// On/off run lengths, in file order.
    pub array: Vec<i32>,
}

/// Stroke style decoded from one 32-bit style word.
///
/// `join`, `cap_end`, `cap_start` and `winding_rule` are the raw bit-field
/// values; match them against the `JOIN_*`, `CAP_*` and `WINDING_*`
/// constants. Bits 8-15 of the style word are reserved and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStyle {
    pub join: u32,
    pub cap_end: u32,
    pub cap_start: u32,
    pub winding_rule: u32,
    pub dash: Option<Dash>,
    /// Width of a triangular cap, in sixteenths of the line width.
    pub triangle_cap_width: u8,
    /// Length of a triangular cap, in sixteenths of the line width.
    pub triangle_cap_length: u8,
}

/// One instruction in a path's drawing sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElement {
    /// End of the path. The element loop is driven by the record's declared
    /// end offset, not by this tag, so a path need not finish with one.
    End,
    /// Start a new subpath at the point.
    Move(Point),
    /// Zero-payload marker present in some files; contributes nothing.
    Unknown,
    /// Close the current subpath.
    CloseSubPath,
    /// Cubic Bezier curve.
    Bezier { c1: Point, c2: Point, end: Point },
    /// Straight line to the point.
    Draw(Point),
}

/// Vector path record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathObject {
    pub bounding_box: BoundingBox,
    pub fill_colour: u32,
    pub outline_colour: u32,
    pub outline_width: u32,
    pub style: PathStyle,
    pub path: Vec<PathElement>,
}

/// Sprite record. The pixel payload is opaque and left undecoded; `start`
/// and `end` are byte offsets into the decoded buffer delimiting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteObject {
    pub bounding_box: BoundingBox,
    pub start: usize,
    pub end: usize,
}

/// Group record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupObject {
    pub bounding_box: BoundingBox,
    /// Group name from a 12-byte NUL-padded field.
    pub name: String,
}

/// Document options record: sixteen raw settings words in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsObject {
    pub bounding_box: BoundingBox,
    pub paper_size: u32,
    pub paper_limits: u32,
    pub grid_spacing1: u32,
    pub grid_spacing2: u32,
    pub grid_division: u32,
    pub grid_type: u32,
    pub grid_auto_adjustment: u32,
    pub grid_shown: u32,
    pub grid_locking: u32,
    pub grid_units: u32,
    pub zoom_multiplier: u32,
    pub zoom_divider: u32,
    pub zoom_locking: u32,
    pub toolbox_present: u32,
    pub entry_mode: u32,
    pub undo_buffer_size_bytes: u32,
}

/// Type-specific body of an object record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBody {
    Path(PathObject),
    Sprite(SpriteObject),
    Group(GroupObject),
    Options(OptionsObject),
    /// Unrecognized type code; no fields decoded, record skipped whole.
    Unknown,
}

/// One record from the object stream, keeping the common type/size prefix.
///
/// `size` is the record's self-declared total byte length and is what the
/// decoder used to advance to the next record, whether or not the body was
/// fully understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub object_type: i32,
    pub size: i32,
    pub body: ObjectBody,
}

/// File header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// 4-character format identifier tag.
    pub identifier: String,
    pub major_version: u32,
    pub minor_version: u32,
    /// Name of the producing program, from a 12-byte NUL-padded field.
    pub program: String,
    pub bounding_box: BoundingBox,
}

/// A fully decoded document: the header and the object stream in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub objects: Vec<Object>,
}
