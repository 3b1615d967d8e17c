//! Error types for OTBM decoding.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type for decoding operations.
pub type OtbmResult<T> = Result<T, OtbmError>;

/// Which attribute block an unknown attribute code was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScope {
    /// The map-data node's own attribute block.
    MapData,
    /// A tile node's attribute block.
    Tile,
    /// An item node's attribute block.
    Item,
}

impl fmt::Display for AttributeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeScope::MapData => write!(f, "map data"),
            AttributeScope::Tile => write!(f, "tile"),
            AttributeScope::Item => write!(f, "item"),
        }
    }
}

/// Errors that can occur while decoding a map.
///
/// Every variant is terminal for the decode call that produced it. There is
/// no partial result.
#[derive(Debug, Error)]
pub enum OtbmError {
    /// Reading the byte source failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The 4-byte file identifier is neither zeroes nor `OTBM`
    #[error("Unsupported file identifier: {0:02x?}")]
    UnsupportedIdentifier([u8; 4]),

    /// The node tree did not begin with a node-start marker
    #[error("Malformed node stream: expected node start, got 0x{found:02x}")]
    MalformedStream { found: u8 },

    /// The source ended before a node's end marker
    #[error("Truncated node stream: source ended inside a node at depth {depth}")]
    TruncatedStream { depth: usize },

    /// A field read needed more bytes than the node buffer holds
    #[error("Truncated field {field}: needed {needed} bytes, {remaining} remaining")]
    TruncatedField {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A node buffer still held unread bytes after its fields were decoded
    #[error("Unread bytes in {context} node: {remaining} left over")]
    TrailingBytes {
        context: &'static str,
        remaining: usize,
    },

    /// A structurally required child node is absent
    #[error("Missing node: {context}")]
    MissingNode { context: &'static str },

    /// A node's type tag does not match its position in the tree
    #[error("Unexpected node type in {context}: expected {expected}, got {found}")]
    UnexpectedTypeTag {
        context: &'static str,
        expected: u8,
        found: u8,
    },

    /// The header version is newer than this decoder understands
    #[error("Unsupported OTBM version {0} (maximum is 3)")]
    UnsupportedVersion(u32),

    /// The root property byte is not zero
    #[error("Invalid OTBM root property {0} (expected 0)")]
    InvalidRootProperty(u8),

    /// An attribute code is not valid in its attribute block
    #[error("Unknown {scope} attribute code {code}")]
    UnknownAttributeCode { scope: AttributeScope, code: u8 },

    /// Item containers are nested deeper than the decoder accepts
    #[error("Item containers nested deeper than {limit} levels")]
    ItemNestingTooDeep { limit: usize },
}
