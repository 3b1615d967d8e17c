//! Items placed on tiles.

use indexmap::IndexMap;

use super::Position;

/// Count given to items whose encoding carries no count attribute.
pub const DEFAULT_ITEM_COUNT: u16 = 1;

/// Value of one item attribute.
///
/// The variant follows the attribute's encoded width; the attribute code
/// itself is the key in [`Item::attributes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAttribute {
    U8(u8),
    U16(u16),
    Text(String),
    Position(Position),
}

/// A game object on a tile, possibly containing other items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u16,
    pub count: u16,
    /// Attributes keyed by attribute code, in encounter order.
    pub attributes: IndexMap<u8, ItemAttribute>,
    /// Container contents, in stream order.
    pub children: Vec<Item>,
}

impl Item {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            count: DEFAULT_ITEM_COUNT,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, code: u8) -> Option<&ItemAttribute> {
        self.attributes.get(&code)
    }

    /// Total number of items in this item's subtree, itself included.
    pub fn total_items(&self) -> usize {
        1 + self.children.iter().map(Item::total_items).sum::<usize>()
    }
}
