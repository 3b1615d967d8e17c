//! Tiles, towns and houses.

use super::{Item, Position};

/// One map square and the items on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tile {
    pub position: Position,
    pub flags: u8,
    pub items: Vec<Item>,
    /// Owning house, for tiles stored as house tiles.
    pub house_id: Option<u32>,
}

impl Tile {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// A named town with its temple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Town {
    pub id: u32,
    pub name: String,
    pub temple_position: Position,
}

/// A house and every tile that belongs to it, across all tile areas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    pub id: u32,
    pub tiles: Vec<Tile>,
}

impl House {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            tiles: Vec::new(),
        }
    }

    /// Distinct floors the house occupies, in first-seen order.
    pub fn elevations(&self) -> Vec<u8> {
        let mut levels: Vec<u8> = Vec::new();
        for tile in &self.tiles {
            if !levels.contains(&tile.position.z) {
                levels.push(tile.position.z);
            }
        }
        levels
    }
}
