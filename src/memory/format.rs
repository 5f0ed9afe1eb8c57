//! Record header layout and entity item types.
//!
//! ```text
//! +------------------+
//! | byte_size        |  4 bytes (u32 LE), whole record, header included
//! +------------------+
//! | item_type        |  2 bytes (u16 LE)
//! +------------------+
//! | flags            |  2 bytes (u16 LE)
//! +------------------+
//! | ... payload ...  |  byte_size - 8 bytes
//! +------------------+
//! ```
//!
//! Records follow each other with no padding in between.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

/// Size of the record header in bytes.
pub const RECORD_HEADER_SIZE: usize = 8;

/// Offset of the record size in the header.
pub const SIZE_OFFSET: usize = 0;

/// Offset of the item type in the header.
pub const ITEM_TYPE_OFFSET: usize = 4;

/// Offset of the flags in the header.
pub const FLAGS_OFFSET: usize = 6;

/// Flag bit set on entities that were removed (deleted).
pub const REMOVED_FLAG: u16 = 1 << 0;

/// Bits holding the diff marker.
pub const DIFF_MASK: u16 = 0b110;

const DIFF_SHIFT: u16 = 1;

/// Kind of OSM entity stored in a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ItemType {
    Node = 0x01,
    Way = 0x02,
    Relation = 0x03,
    Area = 0x04,
    Changeset = 0x05,
}

impl ItemType {
    /// All entity kinds in tag order.
    pub const ALL: [ItemType; 5] = [
        Self::Node,
        Self::Way,
        Self::Relation,
        Self::Area,
        Self::Changeset,
    ];

    /// Map a raw tag to an entity kind. Non-entity tags give `None`.
    #[inline]
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x01 => Some(Self::Node),
            0x02 => Some(Self::Way),
            0x03 => Some(Self::Relation),
            0x04 => Some(Self::Area),
            0x05 => Some(Self::Changeset),
            _ => None,
        }
    }

    /// Raw tag value.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
            Self::Area => "area",
            Self::Changeset => "changeset",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of a diff an entity belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiffMarker {
    /// Not part of a diff.
    #[default]
    None,
    /// Only in the old data.
    Left,
    /// Only in the new data.
    Right,
    /// Unchanged, in both.
    Both,
}

impl DiffMarker {
    #[inline]
    pub const fn from_flags(flags: u16) -> Self {
        match (flags & DIFF_MASK) >> DIFF_SHIFT {
            1 => Self::Left,
            2 => Self::Right,
            3 => Self::Both,
            _ => Self::None,
        }
    }

    /// Character used by diff output formats.
    pub const fn as_char(self) -> char {
        match self {
            Self::None => '*',
            Self::Left => '-',
            Self::Right => '+',
            Self::Both => ' ',
        }
    }
}

/// Decoded record header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    /// Total record length in bytes, header included.
    pub byte_size: u32,
    /// Raw discriminant tag.
    pub item_type: u16,
    /// Flag bits.
    pub flags: u16,
}

impl RecordHeader {
    /// Decode a header from the first [`RECORD_HEADER_SIZE`] bytes of `data`.
    pub fn read(data: &[u8]) -> Option<Self> {
        if data.len() < RECORD_HEADER_SIZE {
            return None;
        }
        Some(Self {
            byte_size: LittleEndian::read_u32(&data[SIZE_OFFSET..]),
            item_type: LittleEndian::read_u16(&data[ITEM_TYPE_OFFSET..]),
            flags: LittleEndian::read_u16(&data[FLAGS_OFFSET..]),
        })
    }

    /// Entity kind, if the tag is known.
    #[inline]
    pub fn kind(&self) -> Option<ItemType> {
        ItemType::from_u16(self.item_type)
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.flags & REMOVED_FLAG != 0
    }

    #[inline]
    pub fn diff(&self) -> DiffMarker {
        DiffMarker::from_flags(self.flags)
    }
}
