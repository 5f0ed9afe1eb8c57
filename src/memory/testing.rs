//! Record fixtures for unit tests.

use byteorder::{LittleEndian, WriteBytesExt};

use super::format::{ItemType, RECORD_HEADER_SIZE};

/// Encodes records back to back, the way an upstream producer would.
#[derive(Default)]
pub(crate) struct RecordBuilder {
    data: Vec<u8>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(self, kind: ItemType, payload: &[u8]) -> Self {
        self.push_raw(kind.as_u16(), 0, payload)
    }

    pub fn push_with_flags(self, kind: ItemType, flags: u16, payload: &[u8]) -> Self {
        self.push_raw(kind.as_u16(), flags, payload)
    }

    pub fn push_raw(mut self, item_type: u16, flags: u16, payload: &[u8]) -> Self {
        let size = (RECORD_HEADER_SIZE + payload.len()) as u32;
        self.data.write_u32::<LittleEndian>(size).unwrap();
        self.data.write_u16::<LittleEndian>(item_type).unwrap();
        self.data.write_u16::<LittleEndian>(flags).unwrap();
        self.data.extend_from_slice(payload);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}
