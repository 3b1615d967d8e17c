//! Item node decoding.

use super::decoder::expect_tag;
use super::{attr, tag, MAX_ITEM_DEPTH};
use crate::error::{AttributeScope, OtbmError, OtbmResult};
use crate::model::{Item, ItemAttribute};
use crate::node::Node;

/// Decode an ITEM node and, recursively, the items it contains.
///
/// `context` names the parent for tag mismatch errors. Nesting beyond
/// [`MAX_ITEM_DEPTH`] fails with [`OtbmError::ItemNestingTooDeep`].
pub(super) fn decode_item(node: Node, context: &'static str) -> OtbmResult<Item> {
    decode_nested(node, context, 1)
}

fn decode_nested(mut node: Node, context: &'static str, depth: usize) -> OtbmResult<Item> {
    if depth > MAX_ITEM_DEPTH {
        return Err(OtbmError::ItemNestingTooDeep {
            limit: MAX_ITEM_DEPTH,
        });
    }
    expect_tag(&mut node, tag::ITEM, context)?;

    let mut item = Item::new(node.read_u16("item.id")?);
    while !node.is_exhausted() {
        let code = node.read_u8("item.attribute")?;
        decode_attribute(&mut node, code, &mut item)?;
    }

    for child in node.take_children() {
        item.children.push(decode_nested(child, "item contents", depth + 1)?);
    }
    Ok(item)
}

fn decode_attribute(node: &mut Node, code: u8, item: &mut Item) -> OtbmResult<()> {
    let value = match code {
        attr::COUNT => {
            item.count = u16::from(node.read_u8("item.count")?);
            return Ok(());
        }
        attr::RUNE_CHARGES | attr::HOUSE_DOOR_ID => {
            ItemAttribute::U8(node.read_u8("item.attribute_value")?)
        }
        attr::ACTION_ID | attr::UNIQUE_ID | attr::DEPOT_ID | attr::CHARGES => {
            ItemAttribute::U16(node.read_u16("item.attribute_value")?)
        }
        attr::TEXT | attr::DESC => {
            ItemAttribute::Text(node.read_string("item.attribute_value")?)
        }
        attr::TELE_DEST => {
            ItemAttribute::Position(node.read_position("item.teleport_destination")?)
        }
        code => {
            return Err(OtbmError::UnknownAttributeCode {
                scope: AttributeScope::Item,
                code,
            })
        }
    };
    item.attributes.insert(code, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, DEFAULT_ITEM_COUNT};

    fn item_node(data: &[u8], children: Vec<Node>) -> Node {
        let mut payload = vec![tag::ITEM];
        payload.extend_from_slice(data);
        Node::new(payload, children)
    }

    /// A chain of `depth` items, each containing the next.
    fn nested_items(depth: usize) -> Node {
        let mut node = item_node(&[0x01, 0x00], vec![]);
        for _ in 1..depth {
            node = item_node(&[0x01, 0x00], vec![node]);
        }
        node
    }

    #[test]
    fn test_plain_item() {
        let item = decode_item(item_node(&[0x2C, 0x08], vec![]), "tile").unwrap();
        assert_eq!(item.id, 2092);
        assert_eq!(item.count, DEFAULT_ITEM_COUNT);
        assert!(item.attributes.is_empty());
    }

    #[test]
    fn test_wrong_tag() {
        let node = Node::new(vec![tag::TILE, 1, 0], vec![]);
        assert!(matches!(
            decode_item(node, "tile").unwrap_err(),
            OtbmError::UnexpectedTypeTag {
                context: "tile",
                expected: tag::ITEM,
                found: tag::TILE
            }
        ));
    }

    #[test]
    fn test_item_attributes() {
        let data = [
            0x64, 0x08, // id 2148
            attr::COUNT, 37, //
            attr::ACTION_ID, 0xE8, 0x03, //
            attr::TEXT, 2, 0, b'h', b'i', //
            attr::TELE_DEST, 0x10, 0x00, 0x20, 0x00, 8, //
            attr::HOUSE_DOOR_ID, 3,
        ];
        let item = decode_item(item_node(&data, vec![]), "tile").unwrap();
        assert_eq!(item.id, 2148);
        assert_eq!(item.count, 37);
        assert!(item.attribute(attr::COUNT).is_none());
        assert_eq!(item.attribute(attr::ACTION_ID), Some(&ItemAttribute::U16(1000)));
        assert_eq!(
            item.attribute(attr::TEXT),
            Some(&ItemAttribute::Text("hi".to_string()))
        );
        assert_eq!(
            item.attribute(attr::TELE_DEST),
            Some(&ItemAttribute::Position(Position::new(16, 32, 8)))
        );
        assert_eq!(item.attribute(attr::HOUSE_DOOR_ID), Some(&ItemAttribute::U8(3)));
    }

    #[test]
    fn test_unknown_item_attribute() {
        let node = item_node(&[0x01, 0x00, 200], vec![]);
        assert!(matches!(
            decode_item(node, "tile").unwrap_err(),
            OtbmError::UnknownAttributeCode {
                scope: AttributeScope::Item,
                code: 200
            }
        ));
    }

    #[test]
    fn test_truncated_attribute_value() {
        let node = item_node(&[0x01, 0x00, attr::UNIQUE_ID, 0x01], vec![]);
        assert!(matches!(
            decode_item(node, "tile").unwrap_err(),
            OtbmError::TruncatedField { needed: 2, remaining: 1, .. }
        ));
    }

    #[test]
    fn test_container_contents() {
        let coin = item_node(&[0xD7, 0x07, attr::COUNT, 100], vec![]);
        let bag = item_node(&[0xC3, 0x07], vec![coin]);
        let backpack = item_node(&[0xC4, 0x07], vec![bag, item_node(&[0x01, 0x00], vec![])]);

        let item = decode_item(backpack, "tile").unwrap();
        assert_eq!(item.children.len(), 2);
        assert_eq!(item.children[0].children[0].id, 2007);
        assert_eq!(item.children[0].children[0].count, 100);
        assert_eq!(item.total_items(), 4);
    }

    #[test]
    fn test_container_child_must_be_item() {
        let backpack = item_node(&[0xC4, 0x07], vec![Node::new(vec![tag::TOWN], vec![])]);
        assert!(matches!(
            decode_item(backpack, "tile").unwrap_err(),
            OtbmError::UnexpectedTypeTag {
                context: "item contents",
                ..
            }
        ));
    }

    #[test]
    fn test_nesting_up_to_limit_decodes() {
        let item = decode_item(nested_items(MAX_ITEM_DEPTH), "tile").unwrap();
        assert_eq!(item.total_items(), MAX_ITEM_DEPTH);
    }

    #[test]
    fn test_nesting_past_limit_is_rejected() {
        let err = decode_item(nested_items(MAX_ITEM_DEPTH + 1), "tile").unwrap_err();
        assert!(matches!(
            err,
            OtbmError::ItemNestingTooDeep {
                limit: MAX_ITEM_DEPTH
            }
        ));
    }

    #[test]
    fn test_deep_nesting_fails_without_exhausting_stack() {
        let err = decode_item(nested_items(100_000), "tile").unwrap_err();
        assert!(matches!(err, OtbmError::ItemNestingTooDeep { .. }));
    }
}
