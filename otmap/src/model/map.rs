//! The decoded map aggregate.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{House, Position, Tile, Town};

/// Houses keyed by id, in the order their first tile was decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseTable {
    houses: IndexMap<u32, House>,
}

impl HouseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tile to house `id`, creating the house on first sight.
    pub fn add_tile(&mut self, id: u32, tile: Tile) {
        self.houses
            .entry(id)
            .or_insert_with(|| House::new(id))
            .tiles
            .push(tile);
    }

    pub fn get(&self, id: u32) -> Option<&House> {
        self.houses.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &House> {
        self.houses.values()
    }

    pub fn len(&self) -> usize {
        self.houses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }
}

/// A fully decoded OTBM map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    pub width: u16,
    pub height: u16,
    pub header_version: u32,
    pub root_property: u8,
    pub items_major_version: u32,
    pub items_minor_version: u32,
    pub description: String,
    pub spawn_file: String,
    pub house_file: String,
    pub towns: Vec<Town>,
    /// Every decoded tile, house tiles included.
    pub tiles: Vec<Tile>,
    pub houses: HouseTable,
}

impl Map {
    pub fn house(&self, id: u32) -> Option<&House> {
        self.houses.get(id)
    }

    pub fn houses(&self) -> impl Iterator<Item = &House> {
        self.houses.iter()
    }

    pub fn town(&self, id: u32) -> Option<&Town> {
        self.towns.iter().find(|town| town.id == id)
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.position == position)
    }

    /// Distinct floors holding at least one tile, ascending.
    pub fn elevations(&self) -> Vec<u8> {
        self.tiles
            .iter()
            .map(|tile| tile.position.z)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
