//! helpers for building binary test data

/// A little builder for big-endian test buffers.
#[derive(Clone, Debug, Default)]
pub struct BeBuffer(Vec<u8>);

impl BeBuffer {
    pub fn new() -> Self {
        BeBuffer(Vec::new())
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn tag(self, value: &[u8; 4]) -> Self {
        self.bytes(value)
    }

    pub fn bytes(mut self, value: &[u8]) -> Self {
        self.0.extend_from_slice(value);
        self
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.0
    }
}

/// A ttc header: tag, version, per-font directory offsets, and optionally
/// a trailing (tag, length, offset) signature triple.
pub fn ttc_header(
    major: u16,
    minor: u16,
    offsets: &[u32],
    signature: Option<(&[u8; 4], u32, u32)>,
) -> BeBuffer {
    let mut buf = BeBuffer::new()
        .tag(b"ttcf")
        .u16(major)
        .u16(minor)
        .u32(offsets.len() as u32);
    for offset in offsets {
        buf = buf.u32(*offset);
    }
    if let Some((tag, length, offset)) = signature {
        buf = buf.tag(tag).u32(length).u32(offset);
    }
    buf
}
