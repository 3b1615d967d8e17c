//! Decoded map entities.
//!
//! These are plain data containers produced by [`crate::otbm`]. A decoded
//! [`Map`] owns everything below it; nothing refers back to the node tree.

mod entities;
mod item;
mod map;
mod position;

pub use entities::{House, Tile, Town};
pub use item::{Item, ItemAttribute, DEFAULT_ITEM_COUNT};
pub use map::{HouseTable, Map};
pub use position::Position;
