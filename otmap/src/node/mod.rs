//! Escaped binary node trees.
//!
//! OTBM files (and the OTB item database) store their content as a tree of
//! nodes delimited by reserved marker bytes:
//!
//! ```text
//! FE <payload...> FE <child payload...> FF <payload...> FF
//! ^  start        ^  nested start          ^ child end  ^ node end
//! ```
//!
//! Payload bytes equal to one of the three reserved values are preceded by
//! [`ESCAPE_CHAR`]. This module turns such a stream into an owned [`Node`]
//! tree in which every node holds its own unescaped bytes. It knows nothing
//! about what those bytes mean; see [`crate::otbm`] for that.
//!
//! Field reads over a node's buffer live in [`reader`].

mod reader;

use std::io::{self, Cursor, Read};

use byteorder::ReadBytesExt;

use crate::error::{OtbmError, OtbmResult};

/// Escape marker: the following byte is payload, whatever its value.
pub const ESCAPE_CHAR: u8 = 0xFD;

/// Node start marker.
pub const NODE_START: u8 = 0xFE;

/// Node end marker.
pub const NODE_END: u8 = 0xFF;

/// One node of an escaped tree.
///
/// A node owns its unescaped payload together with a read cursor, and its
/// children in stream order. Reads through the cursor are destructive, so a
/// node's buffer can be decoded exactly once.
#[derive(Debug, Default)]
pub struct Node {
    data: Cursor<Vec<u8>>,
    children: Vec<Node>,
}

impl Node {
    /// Create a node from an already unescaped payload and its children.
    pub fn new(data: Vec<u8>, children: Vec<Node>) -> Self {
        Self {
            data: Cursor::new(data),
            children,
        }
    }

    /// The node's complete payload, independent of the cursor.
    pub fn data(&self) -> &[u8] {
        self.data.get_ref()
    }

    /// Child nodes in stream order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Consume the node, yielding its children.
    pub fn into_children(mut self) -> Vec<Node> {
        self.take_children()
    }

    /// Detach the children, leaving the payload cursor in place.
    pub(crate) fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }
}

// Dropping a deep tree would otherwise recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Accumulates a node's payload while its end marker is pending.
#[derive(Default)]
struct PendingNode {
    data: Vec<u8>,
    children: Vec<Node>,
}

impl PendingNode {
    fn finish(self) -> Node {
        Node::new(self.data, self.children)
    }
}

/// Parse one escaped node tree from `reader`.
///
/// The first byte read must be [`NODE_START`]. Parsing stops at the end
/// marker matching that first start marker; bytes after it are left unread.
///
/// Nesting is tracked with an explicit stack rather than recursion so that
/// deeply nested input cannot exhaust the call stack.
///
/// # Errors
///
/// - [`OtbmError::MalformedStream`] if the first byte is not a start marker
/// - [`OtbmError::TruncatedStream`] if the source ends inside any node
/// - [`OtbmError::Io`] if the underlying read fails
pub fn parse_tree<R: Read + ?Sized>(reader: &mut R) -> OtbmResult<Node> {
    match next_byte(reader, 0)? {
        NODE_START => {}
        found => return Err(OtbmError::MalformedStream { found }),
    }

    let mut current = PendingNode::default();
    let mut parents: Vec<PendingNode> = Vec::new();

    loop {
        let depth = parents.len() + 1;
        match next_byte(reader, depth)? {
            NODE_START => parents.push(std::mem::take(&mut current)),
            NODE_END => match parents.pop() {
                Some(parent) => {
                    let child = std::mem::replace(&mut current, parent);
                    current.children.push(child.finish());
                }
                None => return Ok(current.finish()),
            },
            ESCAPE_CHAR => {
                let escaped = next_byte(reader, depth)?;
                current.data.push(escaped);
            }
            byte => current.data.push(byte),
        }
    }
}

fn next_byte<R: Read + ?Sized>(reader: &mut R, depth: usize) -> OtbmResult<u8> {
    reader.read_u8().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => OtbmError::TruncatedStream { depth },
        _ => OtbmError::Io(e),
    })
}
