//! Walks a parsed node tree and assembles the map.

use tracing::{debug, info};

use super::item::decode_item;
use super::{attr, tag, MAX_HEADER_VERSION, ROOT_PROPERTY};
use crate::config::DecoderConfig;
use crate::error::{AttributeScope, OtbmError, OtbmResult};
use crate::model::{HouseTable, Item, Map, Position, Tile, Town};
use crate::node::Node;

/// Per-call decoding context.
///
/// Owns the map under construction and the house table. Both are created
/// fresh for every decode and handed back together as the finished map.
pub(super) struct MapDecoder<'a> {
    config: &'a DecoderConfig,
    map: Map,
    houses: HouseTable,
}

impl<'a> MapDecoder<'a> {
    pub(super) fn new(config: &'a DecoderConfig) -> Self {
        Self {
            config,
            map: Map::default(),
            houses: HouseTable::new(),
        }
    }

    pub(super) fn decode(mut self, mut root: Node) -> OtbmResult<Map> {
        self.decode_root_header(&mut root)?;

        let mut children = root.take_children().into_iter();
        let map_data = children.next().ok_or(OtbmError::MissingNode {
            context: "map data",
        })?;
        if children.len() > 0 {
            debug!(ignored = children.len(), "Ignoring extra root children");
        }

        self.decode_map_data(map_data)?;

        self.map.houses = self.houses;
        info!(
            width = self.map.width,
            height = self.map.height,
            towns = self.map.towns.len(),
            tiles = self.map.tiles.len(),
            houses = self.map.houses.len(),
            "Decoded OTBM map"
        );
        Ok(self.map)
    }

    fn decode_root_header(&mut self, root: &mut Node) -> OtbmResult<()> {
        let property = root.read_u8("root.property")?;
        if property != ROOT_PROPERTY {
            return Err(OtbmError::InvalidRootProperty(property));
        }
        self.map.root_property = property;

        let version = root.read_u32("root.version")?;
        if version > MAX_HEADER_VERSION {
            return Err(OtbmError::UnsupportedVersion(version));
        }
        self.map.header_version = version;

        self.map.width = root.read_u16("root.width")?;
        self.map.height = root.read_u16("root.height")?;
        self.map.items_major_version = root.read_u32("root.items_major_version")?;
        self.map.items_minor_version = root.read_u32("root.items_minor_version")?;
        root.finish("root")
    }

    fn decode_map_data(&mut self, mut node: Node) -> OtbmResult<()> {
        expect_tag(&mut node, tag::MAP_DATA, "map data")?;

        while !node.is_exhausted() {
            let code = node.read_u8("map data.attribute")?;
            let target = match code {
                attr::DESCRIPTION => &mut self.map.description,
                attr::SPAWN_FILE => &mut self.map.spawn_file,
                attr::HOUSE_FILE => &mut self.map.house_file,
                code => {
                    return Err(OtbmError::UnknownAttributeCode {
                        scope: AttributeScope::MapData,
                        code,
                    })
                }
            };
            let value = node.read_string("map data.value")?;
            target.push_str(&value);
        }

        for mut child in node.take_children() {
            match child.read_u8("map data.child type")? {
                tag::TOWNS => self.decode_towns(child)?,
                tag::TILE_AREA => self.decode_tile_area(child)?,
                other => debug!(node_type = other, "Skipping map data child"),
            }
        }
        Ok(())
    }

    fn decode_towns(&mut self, mut node: Node) -> OtbmResult<()> {
        node.finish("towns")?;

        let children = node.take_children();
        debug!(count = children.len(), "Decoding towns");
        for mut town_node in children {
            expect_tag(&mut town_node, tag::TOWN, "towns")?;
            let town = Town {
                id: town_node.read_u32("town.id")?,
                name: town_node.read_string("town.name")?,
                temple_position: town_node.read_position("town.temple_position")?,
            };
            town_node.finish("town")?;
            self.map.towns.push(town);
        }
        Ok(())
    }

    fn decode_tile_area(&mut self, mut node: Node) -> OtbmResult<()> {
        let base = node.read_position("tile area.base")?;
        node.finish("tile area")?;

        let children = node.take_children();
        debug!(base = %base, tiles = children.len(), "Decoding tile area");
        for tile_node in children {
            self.decode_tile(tile_node, base)?;
        }
        Ok(())
    }

    fn decode_tile(&mut self, mut node: Node, base: Position) -> OtbmResult<()> {
        let node_type = node.read_u8("tile.type")?;
        if node_type != tag::TILE && node_type != tag::HOUSE_TILE {
            return Err(OtbmError::UnexpectedTypeTag {
                context: "tile area",
                expected: tag::TILE,
                found: node_type,
            });
        }

        let dx = node.read_u8("tile.x_offset")?;
        let dy = node.read_u8("tile.y_offset")?;
        let mut tile = Tile::new(base.offset(dx, dy));

        if node_type == tag::HOUSE_TILE {
            tile.house_id = Some(node.read_u32("house tile.house_id")?);
        }

        while !node.is_exhausted() {
            match node.read_u8("tile.attribute")? {
                attr::ITEM => {
                    let id = node.read_u16("tile.item_id")?;
                    if self.config.keep_items {
                        tile.items.push(Item::new(id));
                    }
                }
                attr::TILE_FLAGS => tile.flags = node.read_u8("tile.flags")?,
                code => {
                    return Err(OtbmError::UnknownAttributeCode {
                        scope: AttributeScope::Tile,
                        code,
                    })
                }
            }
        }

        for item_node in node.take_children() {
            let item = decode_item(item_node, "tile")?;
            if self.config.keep_items {
                tile.items.push(item);
            }
        }

        self.store_tile(tile);
        Ok(())
    }

    fn store_tile(&mut self, tile: Tile) {
        let house_id = tile.house_id.filter(|_| self.config.keep_houses);
        match (house_id, self.config.keep_tiles) {
            (Some(id), true) => {
                self.houses.add_tile(id, tile.clone());
                self.map.tiles.push(tile);
            }
            (Some(id), false) => self.houses.add_tile(id, tile),
            (None, true) => self.map.tiles.push(tile),
            (None, false) => {}
        }
    }
}

/// Read a node's type tag and fail unless it is `expected`.
pub(super) fn expect_tag(node: &mut Node, expected: u8, context: &'static str) -> OtbmResult<()> {
    let found = node.read_u8("node type")?;
    if found != expected {
        return Err(OtbmError::UnexpectedTypeTag {
            context,
            expected,
            found,
        });
    }
    Ok(())
}
