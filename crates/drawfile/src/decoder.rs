//! Recursive-descent decoder for the Draw object stream.

use drawfile_buffers::Cursor;

use crate::constants::{
    OBJECT_GROUP, OBJECT_OPTIONS, OBJECT_PATH, OBJECT_PREFIX_SIZE, OBJECT_SPRITE, TAG_BEZIER,
    TAG_CLOSE_SUB_PATH, TAG_DRAW, TAG_END, TAG_MOVE, TAG_UNKNOWN,
};
use crate::error::DecodeError;
use crate::types::{
    BoundingBox, Dash, Document, GroupObject, Header, Object, ObjectBody, OptionsObject,
    PathElement, PathObject, PathStyle, Point, SpriteObject,
};

/// One-shot decoder over an in-memory Draw file buffer.
///
/// Holds no state beyond the cursor position, so decodes of different
/// buffers are fully independent. Any failure at any nesting level aborts
/// the whole decode; no partial document is ever returned.
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Decodes the whole buffer: the header, then objects until end of
    /// buffer. Each record's self-declared size drives the jump to the next
    /// record, so unrecognized or partially understood record types do not
    /// break traversal.
    pub fn decode(mut self) -> Result<Document, DecodeError> {
        let header = self.read_header()?;
        let mut objects = Vec::new();
        while self.cursor.position() < self.cursor.len() {
            let start = self.cursor.position();
            let object = self.read_object()?;
            let size = object.size as usize;
            objects.push(object);
            self.cursor.set_position(start + size);
        }
        Ok(Document { header, objects })
    }

    fn read_header(&mut self) -> Result<Header, DecodeError> {
        self.cursor.check_alignment("misaligned header")?;
        Ok(Header {
            identifier: self.cursor.fixed_str(4)?,
            major_version: self.cursor.u32_le()?,
            minor_version: self.cursor.u32_le()?,
            program: self.cursor.fixed_str(12)?,
            bounding_box: self.read_bounding_box()?,
        })
    }

    fn read_object(&mut self) -> Result<Object, DecodeError> {
        self.cursor.check_alignment("misaligned object")?;
        let start = self.cursor.position();
        let object_type = self.cursor.i32_le()?;
        let size = self.cursor.i32_le()?;
        // A size below the prefix length would stall the record loop, and
        // one past the buffer end could only fail lazily somewhere inside
        // the body; reject both here.
        if size < OBJECT_PREFIX_SIZE || start + size as usize > self.cursor.len() {
            return Err(DecodeError::BadObjectSize {
                position: start,
                size,
            });
        }
        let end = start + size as usize;
        let body = match object_type {
            OBJECT_PATH => ObjectBody::Path(self.read_path_object(end)?),
            OBJECT_SPRITE => ObjectBody::Sprite(self.read_sprite_object(end)?),
            OBJECT_GROUP => ObjectBody::Group(self.read_group_object()?),
            OBJECT_OPTIONS => ObjectBody::Options(self.read_options_object()?),
            _ => ObjectBody::Unknown,
        };
        Ok(Object {
            object_type,
            size,
            body,
        })
    }

    fn read_path_object(&mut self, end: usize) -> Result<PathObject, DecodeError> {
        Ok(PathObject {
            bounding_box: self.read_bounding_box()?,
            fill_colour: self.cursor.u32_le()?,
            outline_colour: self.cursor.u32_le()?,
            outline_width: self.cursor.u32_le()?,
            style: self.read_path_style()?,
            path: self.read_path(end)?,
        })
    }

    fn read_sprite_object(&mut self, end: usize) -> Result<SpriteObject, DecodeError> {
        let bounding_box = self.read_bounding_box()?;
        // Pixel data is opaque; record where it lives and let the outer
        // size-based advance skip it.
        let start = self.cursor.position();
        Ok(SpriteObject {
            bounding_box,
            start,
            end,
        })
    }

    fn read_group_object(&mut self) -> Result<GroupObject, DecodeError> {
        Ok(GroupObject {
            bounding_box: self.read_bounding_box()?,
            name: self.cursor.fixed_str(12)?,
        })
    }

    fn read_options_object(&mut self) -> Result<OptionsObject, DecodeError> {
        Ok(OptionsObject {
            bounding_box: self.read_bounding_box()?,
            paper_size: self.cursor.u32_le()?,
            paper_limits: self.cursor.u32_le()?,
            grid_spacing1: self.cursor.u32_le()?,
            grid_spacing2: self.cursor.u32_le()?,
            grid_division: self.cursor.u32_le()?,
            grid_type: self.cursor.u32_le()?,
            grid_auto_adjustment: self.cursor.u32_le()?,
            grid_shown: self.cursor.u32_le()?,
            grid_locking: self.cursor.u32_le()?,
            grid_units: self.cursor.u32_le()?,
            zoom_multiplier: self.cursor.u32_le()?,
            zoom_divider: self.cursor.u32_le()?,
            zoom_locking: self.cursor.u32_le()?,
            toolbox_present: self.cursor.u32_le()?,
            entry_mode: self.cursor.u32_le()?,
            undo_buffer_size_bytes: self.cursor.u32_le()?,
        })
    }

    /// Reads path elements until the cursor reaches the record's declared
    /// end offset. An `End` element does not terminate the loop; files whose
    /// last element is not `End` decode the same as long as offsets agree.
    fn read_path(&mut self, end: usize) -> Result<Vec<PathElement>, DecodeError> {
        self.cursor.check_alignment("misaligned path")?;
        let mut path = Vec::new();
        while self.cursor.position() < end {
            path.push(self.read_path_element()?);
        }
        Ok(path)
    }

    fn read_path_element(&mut self) -> Result<PathElement, DecodeError> {
        let tag = self.cursor.u32_le()?;
        match tag {
            TAG_END => Ok(PathElement::End),
            TAG_MOVE => Ok(PathElement::Move(self.read_point()?)),
            TAG_UNKNOWN => Ok(PathElement::Unknown),
            TAG_CLOSE_SUB_PATH => Ok(PathElement::CloseSubPath),
            TAG_BEZIER => Ok(PathElement::Bezier {
                c1: self.read_point()?,
                c2: self.read_point()?,
                end: self.read_point()?,
            }),
            TAG_DRAW => Ok(PathElement::Draw(self.read_point()?)),
            _ => Err(DecodeError::UnsupportedTag {
                position: self.cursor.position(),
                tag,
            }),
        }
    }

    fn read_path_style(&mut self) -> Result<PathStyle, DecodeError> {
        let word = self.cursor.u32_le()?;
        let dash = if (word >> 7) & 0x1 != 0 {
            Some(self.read_dash()?)
        } else {
            None
        };
        // Bits 8-15 are reserved; pass them by without validation.
        Ok(PathStyle {
            join: word & 0x3,
            cap_end: (word >> 2) & 0x3,
            cap_start: (word >> 4) & 0x3,
            winding_rule: (word >> 6) & 0x1,
            dash,
            triangle_cap_width: ((word >> 16) & 0xff) as u8,
            triangle_cap_length: ((word >> 24) & 0xff) as u8,
        })
    }

    fn read_dash(&mut self) -> Result<Dash, DecodeError> {
        let offset = self.cursor.i32_le()?;
        let count = self.cursor.u32_le()?;
        let mut array = Vec::new();
        for _ in 0..count {
            array.push(self.cursor.i32_le()?);
        }
        Ok(Dash { offset, array })
    }

    fn read_point(&mut self) -> Result<Point, DecodeError> {
        self.cursor.check_alignment("misaligned point")?;
        Ok(Point {
            x: self.cursor.i32_le()?,
            y: self.cursor.i32_le()?,
        })
    }

    fn read_bounding_box(&mut self) -> Result<BoundingBox, DecodeError> {
        self.cursor.check_alignment("misaligned bounding box")?;
        Ok(BoundingBox {
            min_x: self.cursor.i32_le()?,
            min_y: self.cursor.i32_le()?,
            max_x: self.cursor.i32_le()?,
            max_y: self.cursor.i32_le()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[u32]) -> Vec<u8> {
        let mut out = Vec::new();
        for v in values {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }

    #[test]
    fn style_word_bit_fields() {
        // join=round, cap_end=square, cap_start=triangle, even-odd winding,
        // triangle cap 5x7, no dash.
        let word = 1 | (2 << 2) | (3 << 4) | (1 << 6) | (5 << 16) | (7 << 24);
        let data = words(&[word]);
        let style = Decoder::new(&data).read_path_style().unwrap();
        assert_eq!(style.join, 1);
        assert_eq!(style.cap_end, 2);
        assert_eq!(style.cap_start, 3);
        assert_eq!(style.winding_rule, 1);
        assert_eq!(style.dash, None);
        assert_eq!(style.triangle_cap_width, 5);
        assert_eq!(style.triangle_cap_length, 7);
    }

    #[test]
    fn style_reserved_bits_ignored() {
        let word = 0x0000_ff00;
        let data = words(&[word]);
        let style = Decoder::new(&data).read_path_style().unwrap();
        assert_eq!(style.join, 0);
        assert_eq!(style.winding_rule, 0);
        assert_eq!(style.dash, None);
    }

    #[test]
    fn style_dash_flag_pulls_in_a_dash_record() {
        let word = 1 | (1 << 7);
        let data = words(&[word, 2u32, 3u32, 10u32, 20u32, 30u32]);
        let style = Decoder::new(&data).read_path_style().unwrap();
        assert_eq!(style.join, 1);
        assert_eq!(
            style.dash,
            Some(Dash {
                offset: 2,
                array: vec![10, 20, 30],
            })
        );
    }

    #[test]
    fn path_elements_decode_in_order() {
        let data = words(&[
            TAG_MOVE, 0, 0, //
            TAG_DRAW, 10, 0, //
            TAG_BEZIER, 1, 2, 3, 4, 5, 6, //
            TAG_UNKNOWN, //
            TAG_CLOSE_SUB_PATH, //
            TAG_END,
        ]);
        let mut decoder = Decoder::new(&data);
        let path = decoder.read_path(data.len()).unwrap();
        assert_eq!(
            path,
            vec![
                PathElement::Move(Point { x: 0, y: 0 }),
                PathElement::Draw(Point { x: 10, y: 0 }),
                PathElement::Bezier {
                    c1: Point { x: 1, y: 2 },
                    c2: Point { x: 3, y: 4 },
                    end: Point { x: 5, y: 6 },
                },
                PathElement::Unknown,
                PathElement::CloseSubPath,
                PathElement::End,
            ]
        );
    }

    #[test]
    fn path_without_end_tag_stops_at_the_declared_end() {
        let data = words(&[TAG_MOVE, 4, 5, TAG_DRAW, 6, 7]);
        let mut decoder = Decoder::new(&data);
        let path = decoder.read_path(data.len()).unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn unrecognized_path_tag_carries_the_tag() {
        let data = words(&[99]);
        let mut decoder = Decoder::new(&data);
        let err = decoder.read_path_element().unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedTag {
                position: 4,
                tag: 99
            }
        );
        assert!(err.to_string().contains("63"));
    }
}
