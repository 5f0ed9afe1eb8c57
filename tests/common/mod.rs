//! Shared fixtures for integration tests.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use osm_buffer::memory::{ItemType, RECORD_HEADER_SIZE};

/// Encode one record: header followed by payload.
pub fn write_record(out: &mut Vec<u8>, item_type: u16, flags: u16, payload: &[u8]) {
    let size = (RECORD_HEADER_SIZE + payload.len()) as u32;
    out.write_u32::<LittleEndian>(size).unwrap();
    out.write_u16::<LittleEndian>(item_type).unwrap();
    out.write_u16::<LittleEndian>(flags).unwrap();
    out.extend_from_slice(payload);
}

/// Buffer with one record per `(kind, payload length)` entry. Each payload
/// byte holds the record index so tests can check storage order.
pub fn mixed_records(layout: &[(ItemType, usize)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (index, &(kind, len)) in layout.iter().enumerate() {
        write_record(&mut out, kind.as_u16(), 0, &vec![index as u8; len]);
    }
    out
}
