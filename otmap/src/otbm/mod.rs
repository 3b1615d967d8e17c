//! OTBM map decoding.
//!
//! An OTBM file is a 4-byte identifier followed by one escaped node tree
//! (see [`crate::node`]). This module walks that tree and builds a
//! [`Map`]:
//!
//! ```text
//! root            property, version, width, height, items version
//! └── MAP_DATA    description / spawn file / house file attributes
//!     ├── TOWNS
//!     │   └── TOWN            id, name, temple position
//!     └── TILE_AREA           base position
//!         ├── TILE            dx, dy, attributes
//!         │   └── ITEM        id, attributes
//!         │       └── ITEM    container contents
//!         └── HOUSE_TILE      dx, dy, house id, attributes
//! ```
//!
//! Every node starts with a one-byte type tag that must match its place in
//! the tree, and every node's payload must be consumed exactly. Any
//! violation aborts the decode.
//!
//! # Example
//!
//! ```no_run
//! use otmap::otbm;
//!
//! let map = otbm::decode_file("world.otbm")?;
//! println!("{}x{}, {} houses", map.width, map.height, map.houses.len());
//! # Ok::<(), otmap::OtbmError>(())
//! ```

mod decoder;
mod item;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::config::DecoderConfig;
use crate::error::{OtbmError, OtbmResult};
use crate::model::Map;
use crate::node::parse_tree;

use decoder::MapDecoder;

/// File identifier written by current map editors.
pub const IDENTIFIER: [u8; 4] = *b"OTBM";

/// File identifier written by older map editors.
pub const IDENTIFIER_LEGACY: [u8; 4] = [0; 4];

/// Highest header version this decoder accepts.
pub const MAX_HEADER_VERSION: u32 = 3;

/// The only valid root property value.
pub const ROOT_PROPERTY: u8 = 0;

/// Deepest item nesting accepted on one tile, the outermost item included.
///
/// Decoded items are ordinary recursive values, so this bounds the stack
/// used to decode, clone and drop them.
pub const MAX_ITEM_DEPTH: usize = 128;

/// Node type tags.
pub mod tag {
    pub const MAP_DATA: u8 = 2;
    pub const TILE_AREA: u8 = 4;
    pub const TILE: u8 = 5;
    pub const ITEM: u8 = 6;
    pub const TOWNS: u8 = 12;
    pub const TOWN: u8 = 13;
    pub const HOUSE_TILE: u8 = 14;
}

/// Attribute codes.
///
/// Map-data scope: `DESCRIPTION`, `SPAWN_FILE`, `HOUSE_FILE`.
/// Tile scope: `TILE_FLAGS`, `ITEM`.
/// Item scope: everything else.
pub mod attr {
    pub const DESCRIPTION: u8 = 1;
    pub const TILE_FLAGS: u8 = 3;
    pub const ACTION_ID: u8 = 4;
    pub const UNIQUE_ID: u8 = 5;
    pub const TEXT: u8 = 6;
    pub const DESC: u8 = 7;
    pub const TELE_DEST: u8 = 8;
    pub const ITEM: u8 = 9;
    pub const DEPOT_ID: u8 = 10;
    pub const SPAWN_FILE: u8 = 11;
    pub const RUNE_CHARGES: u8 = 12;
    pub const HOUSE_FILE: u8 = 13;
    pub const HOUSE_DOOR_ID: u8 = 14;
    pub const COUNT: u8 = 15;
    pub const CHARGES: u8 = 22;
}

/// Decode a map from `reader` with the default configuration.
pub fn decode<R: Read>(reader: R) -> OtbmResult<Map> {
    decode_with(reader, &DecoderConfig::default())
}

/// Decode a map from `reader`.
///
/// The whole node tree is read into memory before domain decoding starts.
///
/// # Errors
///
/// Returns the first format violation encountered; see [`OtbmError`].
pub fn decode_with<R: Read>(reader: R, config: &DecoderConfig) -> OtbmResult<Map> {
    let mut reader = BufReader::new(reader);

    let identifier = read_identifier(&mut reader)?;
    if identifier != IDENTIFIER && identifier != IDENTIFIER_LEGACY {
        return Err(OtbmError::UnsupportedIdentifier(identifier));
    }

    let root = parse_tree(&mut reader)?;
    debug!(
        root_children = root.children().len(),
        "Parsed OTBM node tree"
    );

    MapDecoder::new(config).decode(root)
}

/// Decode a map held in memory.
pub fn decode_bytes(bytes: &[u8]) -> OtbmResult<Map> {
    decode(bytes)
}

/// Open and decode a map file with the default configuration.
pub fn decode_file(path: impl AsRef<Path>) -> OtbmResult<Map> {
    decode_file_with(path, &DecoderConfig::default())
}

/// Open and decode a map file.
pub fn decode_file_with(path: impl AsRef<Path>, config: &DecoderConfig) -> OtbmResult<Map> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Opening map file");
    let file = File::open(path)?;
    decode_with(file, config)
}

fn read_identifier<R: Read>(reader: &mut R) -> OtbmResult<[u8; 4]> {
    let mut identifier = [0u8; 4];
    reader.read_exact(&mut identifier).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => OtbmError::TruncatedStream { depth: 0 },
        _ => OtbmError::Io(e),
    })?;
    Ok(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NODE_END, NODE_START};

    fn minimal_map(identifier: &[u8; 4], version: u8) -> Vec<u8> {
        let mut bytes = identifier.to_vec();
        bytes.push(NODE_START);
        bytes.extend([0, version, 0, 0, 0, 10, 0, 10, 0, 1, 0, 0, 0, 1, 0, 0, 0]);
        bytes.extend([NODE_START, tag::MAP_DATA, NODE_END]);
        bytes.push(NODE_END);
        bytes
    }

    #[test]
    fn test_accepts_both_identifiers() {
        assert!(decode_bytes(&minimal_map(&IDENTIFIER, 1)).is_ok());
        assert!(decode_bytes(&minimal_map(&IDENTIFIER_LEGACY, 1)).is_ok());
    }

    #[test]
    fn test_rejects_unknown_identifier() {
        let err = decode_bytes(&minimal_map(b"OTBX", 1)).unwrap_err();
        assert!(matches!(err, OtbmError::UnsupportedIdentifier(id) if &id == b"OTBX"));
    }

    #[test]
    fn test_short_identifier_is_truncated() {
        let err = decode_bytes(b"OT").unwrap_err();
        assert!(matches!(err, OtbmError::TruncatedStream { .. }));
    }

    #[test]
    fn test_identifier_without_tree() {
        let err = decode_bytes(b"OTBM").unwrap_err();
        assert!(matches!(err, OtbmError::TruncatedStream { depth: 0 }));
    }

    #[test]
    fn test_version_gate() {
        assert!(decode_bytes(&minimal_map(&IDENTIFIER, 3)).is_ok());
        let err = decode_bytes(&minimal_map(&IDENTIFIER, 4)).unwrap_err();
        assert!(matches!(err, OtbmError::UnsupportedVersion(4)));
    }

    #[test]
    fn test_decode_file_missing() {
        let err = decode_file("/nonexistent/world.otbm").unwrap_err();
        assert!(matches!(err, OtbmError::Io(_)));
    }
}
