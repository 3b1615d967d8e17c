//! Absolute map coordinates.

use std::fmt;

/// An absolute map coordinate. `z` is the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub x: u16,
    pub y: u16,
    pub z: u8,
}

impl Position {
    /// Encoded size: `x: u16, y: u16, z: u8`.
    pub const ENCODED_LEN: usize = 5;

    pub const fn new(x: u16, y: u16, z: u8) -> Self {
        Self { x, y, z }
    }

    /// The position `(dx, dy)` tiles from this one on the same floor.
    ///
    /// Tile areas store their tiles as 8-bit offsets from a base position.
    /// Coordinates wrap at the `u16` boundary, as the format's writers do.
    #[inline]
    pub const fn offset(self, dx: u8, dy: u8) -> Self {
        Self {
            x: self.x.wrapping_add(dx as u16),
            y: self.y.wrapping_add(dy as u16),
            z: self.z,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
