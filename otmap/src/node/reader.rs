//! Little-endian field reads over a node's payload.
//!
//! All reads advance the node's cursor. A read that needs more bytes than
//! remain fails with [`OtbmError::TruncatedField`] naming the field, and
//! leaves the cursor where it was.

use byteorder::{ReadBytesExt, LE};

use super::Node;
use crate::error::{OtbmError, OtbmResult};
use crate::model::Position;

impl Node {
    /// Number of payload bytes not yet read.
    pub fn remaining(&self) -> usize {
        let len = self.data.get_ref().len() as u64;
        len.saturating_sub(self.data.position()) as usize
    }

    /// Whether the whole payload has been read.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail unless the whole payload has been read.
    pub fn finish(&self, context: &'static str) -> OtbmResult<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(OtbmError::TrailingBytes { context, remaining }),
        }
    }

    pub fn read_u8(&mut self, field: &'static str) -> OtbmResult<u8> {
        self.require(field, 1)?;
        Ok(self.data.read_u8()?)
    }

    pub fn read_u16(&mut self, field: &'static str) -> OtbmResult<u16> {
        self.require(field, 2)?;
        Ok(self.data.read_u16::<LE>()?)
    }

    pub fn read_u32(&mut self, field: &'static str) -> OtbmResult<u32> {
        self.require(field, 4)?;
        Ok(self.data.read_u32::<LE>()?)
    }

    /// Read a `u16` length prefix followed by that many bytes of text.
    ///
    /// Bytes map one-to-one onto chars (Latin-1), so any content survives.
    pub fn read_string(&mut self, field: &'static str) -> OtbmResult<String> {
        let len = usize::from(self.read_u16(field)?);
        self.require(field, len)?;

        let start = self.data.position() as usize;
        let text = self.data.get_ref()[start..start + len]
            .iter()
            .map(|&b| char::from(b))
            .collect();
        self.data.set_position((start + len) as u64);
        Ok(text)
    }

    /// Read `x: u16, y: u16, z: u8`.
    pub fn read_position(&mut self, field: &'static str) -> OtbmResult<Position> {
        self.require(field, Position::ENCODED_LEN)?;
        let x = self.read_u16(field)?;
        let y = self.read_u16(field)?;
        let z = self.read_u8(field)?;
        Ok(Position::new(x, y, z))
    }

    fn require(&self, field: &'static str, needed: usize) -> OtbmResult<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(OtbmError::TruncatedField {
                field,
                needed,
                remaining,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(bytes: &[u8]) -> Node {
        Node::new(bytes.to_vec(), Vec::new())
    }

    #[test]
    fn test_reads_are_little_endian_and_sequential() {
        let mut n = node(&[0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);
        assert_eq!(n.read_u8("a").unwrap(), 0x01);
        assert_eq!(n.read_u16("b").unwrap(), 0x1234);
        assert_eq!(n.read_u32("c").unwrap(), 0x1234_5678);
        assert!(n.is_exhausted());
        assert!(n.finish("test").is_ok());
    }

    #[test]
    fn test_short_read_reports_field_and_keeps_cursor() {
        let mut n = node(&[0xAA, 0xBB, 0xCC]);
        let err = n.read_u32("town.id").unwrap_err();
        assert!(matches!(
            err,
            OtbmError::TruncatedField {
                field: "town.id",
                needed: 4,
                remaining: 3
            }
        ));
        assert_eq!(n.remaining(), 3);
        assert_eq!(n.read_u16("retry").unwrap(), 0xBBAA);
    }

    #[test]
    fn test_read_string() {
        let mut n = node(&[0x05, 0x00, b'T', b'h', b'a', b'i', b's', 0x09]);
        assert_eq!(n.read_string("town.name").unwrap(), "Thais");
        assert_eq!(n.remaining(), 1);
    }

    #[test]
    fn test_read_string_maps_high_bytes_to_latin1() {
        let mut n = node(&[0x02, 0x00, 0xE9, 0xFF]);
        assert_eq!(n.read_string("text").unwrap(), "\u{e9}\u{ff}");
    }

    #[test]
    fn test_read_string_shorter_than_declared() {
        let mut n = node(&[0x0A, 0x00, b'a', b'b']);
        let err = n.read_string("description").unwrap_err();
        assert!(matches!(
            err,
            OtbmError::TruncatedField {
                needed: 10,
                remaining: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_read_position() {
        let mut n = node(&[0xE8, 0x03, 0xF4, 0x01, 0x07]);
        assert_eq!(n.read_position("pos").unwrap(), Position::new(1000, 500, 7));
        assert!(n.is_exhausted());
    }

    #[test]
    fn test_read_position_short() {
        let mut n = node(&[0xE8, 0x03, 0xF4, 0x01]);
        assert!(matches!(
            n.read_position("temple").unwrap_err(),
            OtbmError::TruncatedField { needed: 5, .. }
        ));
    }

    #[test]
    fn test_finish_reports_leftover_bytes() {
        let mut n = node(&[0x01, 0x02, 0x03]);
        n.read_u8("tag").unwrap();
        assert!(matches!(
            n.finish("town"),
            Err(OtbmError::TrailingBytes {
                context: "town",
                remaining: 2
            })
        ));
    }
}
