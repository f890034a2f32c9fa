//! Byte-slice cursor with bounds and alignment checks.

use crate::CursorError;

/// A position-tracked reader over a byte slice.
///
/// All multi-byte integers are little-endian. Reads either advance the
/// cursor by exactly the bytes consumed or fail leaving the position at the
/// point of failure.
pub struct Cursor<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// The caller is responsible for keeping the offset within the buffer;
    /// the next read reports `OutOfBounds` otherwise.
    pub fn set_position(&mut self, position: usize) {
        self.x = position;
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.x)
    }

    /// Fails with [`CursorError::Misaligned`] unless the cursor sits on a
    /// 4-byte boundary. `field` labels the read being attempted and is
    /// carried in the error.
    pub fn check_alignment(&self, field: &'static str) -> Result<(), CursorError> {
        if self.x % 4 != 0 {
            return Err(CursorError::Misaligned {
                position: self.x,
                field,
            });
        }
        Ok(())
    }

    fn check_size(&self, wanted: usize) -> Result<(), CursorError> {
        if self.remaining() < wanted {
            return Err(CursorError::OutOfBounds {
                position: self.x,
                wanted,
            });
        }
        Ok(())
    }

    /// Reads a single byte. No alignment requirement.
    pub fn byte(&mut self) -> Result<u8, CursorError> {
        self.check_size(1)?;
        let val = self.data[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a little-endian unsigned 32-bit integer at a 4-byte boundary.
    pub fn u32_le(&mut self) -> Result<u32, CursorError> {
        self.check_alignment("misaligned uint")?;
        self.check_size(4)?;
        let val = u32::from_le_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    /// Reads a little-endian signed 32-bit integer at a 4-byte boundary.
    pub fn i32_le(&mut self) -> Result<i32, CursorError> {
        self.check_alignment("misaligned int")?;
        self.check_size(4)?;
        let val = i32::from_le_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    /// Reads a fixed-width NUL-padded string field of `n` bytes.
    ///
    /// The value is every byte before the first NUL; bytes after a NUL are
    /// discarded but still consumed, so the cursor always advances by the
    /// full field width. Bytes map one-to-one to chars (Latin-1 style).
    pub fn fixed_str(&mut self, n: usize) -> Result<String, CursorError> {
        self.check_alignment("misaligned string")?;
        self.check_size(n)?;
        let field = &self.data[self.x..self.x + n];
        self.x += n;
        Ok(field
            .iter()
            .take_while(|b| **b != 0)
            .map(|b| *b as char)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn byte_reads_advance_one_at_a_time() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.byte(), Ok(0x01));
        assert_eq!(cursor.byte(), Ok(0x02));
        assert_eq!(cursor.byte(), Ok(0x03));
        assert_eq!(
            cursor.byte(),
            Err(CursorError::OutOfBounds {
                position: 3,
                wanted: 1
            })
        );
    }

    #[test]
    fn u32_is_little_endian() {
        let data = [0x78, 0x56, 0x34, 0x12];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.u32_le(), Ok(0x1234_5678));
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn i32_reads_negative_values() {
        let data = (-42i32).to_le_bytes();
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.i32_le(), Ok(-42));
    }

    #[test]
    fn multi_byte_reads_require_alignment() {
        let data = [0u8; 8];
        let mut cursor = Cursor::new(&data);
        cursor.byte().unwrap();
        assert_eq!(
            cursor.u32_le(),
            Err(CursorError::Misaligned {
                position: 1,
                field: "misaligned uint"
            })
        );
        assert_eq!(
            cursor.i32_le(),
            Err(CursorError::Misaligned {
                position: 1,
                field: "misaligned int"
            })
        );
        assert_eq!(
            cursor.fixed_str(4),
            Err(CursorError::Misaligned {
                position: 1,
                field: "misaligned string"
            })
        );
    }

    #[test]
    fn truncated_u32_fails_without_partial_read() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            cursor.u32_le(),
            Err(CursorError::OutOfBounds {
                position: 0,
                wanted: 4
            })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn fixed_str_stops_at_first_nul_but_consumes_the_field() {
        let data = *b"AB\0ZEFGH";
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.fixed_str(8).unwrap(), "AB");
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn fixed_str_without_nul_takes_the_whole_field() {
        let data = *b"DrawBody";
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.fixed_str(4).unwrap(), "Draw");
        assert_eq!(cursor.fixed_str(4).unwrap(), "Body");
    }

    #[test]
    fn fixed_str_maps_high_bytes_latin1() {
        let data = [0xA9, b'!', 0, 0];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.fixed_str(4).unwrap(), "\u{a9}!");
    }

    proptest! {
        #[test]
        fn u32_matches_from_le_bytes(data in proptest::collection::vec(any::<u8>(), 4..64)) {
            let mut cursor = Cursor::new(&data);
            let expected = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
            prop_assert_eq!(cursor.u32_le().unwrap(), expected);
            prop_assert_eq!(cursor.position(), 4);
        }

        #[test]
        fn short_buffers_report_out_of_bounds(data in proptest::collection::vec(any::<u8>(), 0..4usize)) {
            let mut cursor = Cursor::new(&data);
            prop_assert_eq!(
                cursor.u32_le(),
                Err(CursorError::OutOfBounds { position: 0, wanted: 4 })
            );
        }

        #[test]
        fn unaligned_positions_are_rejected(offset in 1usize..4) {
            let data = [0u8; 8];
            let mut cursor = Cursor::new(&data);
            cursor.set_position(offset);
            prop_assert_eq!(
                cursor.u32_le(),
                Err(CursorError::Misaligned { position: offset, field: "misaligned uint" })
            );
        }
    }
}
