//! Builders for OTBM byte streams used by the integration tests.

#![allow(dead_code)]

pub const ESCAPE: u8 = 0xFD;
pub const START: u8 = 0xFE;
pub const END: u8 = 0xFF;

/// A node to be serialised: unescaped payload plus children.
#[derive(Debug, Clone, Default)]
pub struct TestNode {
    pub data: Vec<u8>,
    pub children: Vec<TestNode>,
}

impl TestNode {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.push(START);
        for &b in &self.data {
            if matches!(b, ESCAPE | START | END) {
                out.push(ESCAPE);
            }
            out.push(b);
        }
        for child in &self.children {
            child.write(out);
        }
        out.push(END);
    }
}

/// Field encoder for node payloads.
#[derive(Debug, Default)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.0.push(v);
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.0.extend(v.to_le_bytes());
        self
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.0.extend(v.to_le_bytes());
        self
    }

    pub fn string(self, s: &[u8]) -> Self {
        let mut this = self.u16(s.len() as u16);
        this.0.extend_from_slice(s);
        this
    }

    pub fn position(self, x: u16, y: u16, z: u8) -> Self {
        self.u16(x).u16(y).u8(z)
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}

/// Root payload with property 0 and the given header version.
pub fn root(version: u32, width: u16, height: u16) -> TestNode {
    TestNode::new(
        Payload::new()
            .u8(0)
            .u32(version)
            .u16(width)
            .u16(height)
            .u32(1)
            .u32(1)
            .build(),
    )
}

pub fn map_data(attributes: Vec<u8>) -> TestNode {
    let mut data = vec![2];
    data.extend(attributes);
    TestNode::new(data)
}

pub fn tile_area(x: u16, y: u16, z: u8) -> TestNode {
    TestNode::new(Payload::new().u8(4).position(x, y, z).build())
}

pub fn tile(dx: u8, dy: u8) -> TestNode {
    TestNode::new(vec![5, dx, dy])
}

pub fn house_tile(dx: u8, dy: u8, house_id: u32) -> TestNode {
    TestNode::new(Payload::new().u8(14).u8(dx).u8(dy).u32(house_id).build())
}

pub fn house_tile_with_item(dx: u8, dy: u8, house_id: u32, item_id: u16) -> TestNode {
    TestNode::new(
        Payload::new()
            .u8(14)
            .u8(dx)
            .u8(dy)
            .u32(house_id)
            .u8(9)
            .u16(item_id)
            .build(),
    )
}

pub fn towns(towns: Vec<TestNode>) -> TestNode {
    TestNode {
        data: vec![12],
        children: towns,
    }
}

pub fn town(id: u32, name: &[u8], x: u16, y: u16, z: u8) -> TestNode {
    TestNode::new(
        Payload::new()
            .u8(13)
            .u32(id)
            .string(name)
            .position(x, y, z)
            .build(),
    )
}

/// Serialise a full file: `OTBM` identifier plus the escaped tree.
pub fn encode_map(root: &TestNode) -> Vec<u8> {
    let mut out = b"OTBM".to_vec();
    root.write(&mut out);
    out
}
