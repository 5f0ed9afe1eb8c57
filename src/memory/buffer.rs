//! Non-owning entity buffer and its record cursor.

use std::iter::FusedIterator;
use std::ptr;

use super::dispatch::Entities;
use super::format::{DiffMarker, ItemType, RecordHeader, RECORD_HEADER_SIZE};
use crate::util::{Error, Result};

/// A view over externally owned memory holding back-to-back entity records.
///
/// Nothing is copied or parsed on construction; the producer of the bytes is
/// trusted to have written whole, well-formed records. The borrow ties every
/// iterator, record and entity view derived from the buffer to the lifetime
/// of the backing memory.
#[derive(Clone, Copy, Debug)]
pub struct EntityBuffer<'a> {
    data: &'a [u8],
}

impl<'a> EntityBuffer<'a> {
    /// Wrap a byte region.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Length of the buffer in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Cursor at the first record.
    #[inline]
    pub fn begin(&self) -> BufferIterator<'a> {
        BufferIterator { data: self.data, offset: 0 }
    }

    /// Cursor one past the last record. Never dereferenceable.
    #[inline]
    pub fn end(&self) -> BufferIterator<'a> {
        BufferIterator { data: self.data, offset: self.data.len() }
    }

    /// Iterate over raw records without dispatching on their type.
    pub fn records(&self) -> Records<'a> {
        Records::new(self.begin())
    }

    /// Iterate over typed entity views.
    pub fn entities(&self) -> Entities<'a> {
        Entities::new(self.begin())
    }
}

impl<'a> From<&'a [u8]> for EntityBuffer<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> IntoIterator for EntityBuffer<'a> {
    type Item = Result<super::EntityView<'a>>;
    type IntoIter = Entities<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities()
    }
}

/// Forward-only cursor over the records of an [`EntityBuffer`].
///
/// Two cursors are equal when they point into the same buffer at the same
/// offset. A cursor can not be rewound; ask the buffer for a fresh
/// [`begin`](EntityBuffer::begin) instead.
///
/// Using a cursor at [`end`](EntityBuffer::end), or on a record whose header
/// is damaged, returns an error and leaves the cursor where it was.
#[derive(Clone, Debug)]
pub struct BufferIterator<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> BufferIterator<'a> {
    /// Byte offset of the current record.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once all records have been consumed.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// The record at the current position.
    pub fn record(&self) -> Result<Record<'a>> {
        if self.is_end() {
            return Err(Error::PastEnd { offset: self.offset });
        }
        let rest = &self.data[self.offset..];
        let header = RecordHeader::read(rest)
            .ok_or_else(|| Error::truncated(self.offset, RECORD_HEADER_SIZE, rest.len()))?;

        let size = header.byte_size as usize;
        if size < RECORD_HEADER_SIZE || size > rest.len() {
            return Err(Error::InvalidRecordSize {
                size: header.byte_size,
                offset: self.offset,
                len: self.data.len(),
            });
        }

        Ok(Record {
            header,
            offset: self.offset,
            bytes: &rest[..size],
        })
    }

    /// Move past the current record.
    pub fn advance(&mut self) -> Result<()> {
        let record = self.record()?;
        self.offset += record.len();
        Ok(())
    }

    /// Return the current record and move past it; `None` at the end.
    pub fn next_record(&mut self) -> Option<Result<Record<'a>>> {
        if self.is_end() {
            return None;
        }
        Some(self.record().map(|record| {
            self.offset += record.len();
            record
        }))
    }
}

impl PartialEq for BufferIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data.as_ptr(), other.data.as_ptr())
            && self.data.len() == other.data.len()
            && self.offset == other.offset
    }
}

impl Eq for BufferIterator<'_> {}

/// One encoded record inside a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    header: RecordHeader,
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> Record<'a> {
    #[inline]
    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    /// Entity kind, if the tag is known.
    #[inline]
    pub fn kind(&self) -> Option<ItemType> {
        self.header.kind()
    }

    /// Raw discriminant tag.
    #[inline]
    pub fn item_type(&self) -> u16 {
        self.header.item_type
    }

    /// Byte offset of the record inside its buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total length, header included.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The whole record, header included.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Everything after the header.
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[RECORD_HEADER_SIZE..]
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.header.is_removed()
    }

    #[inline]
    pub fn diff(&self) -> DiffMarker {
        self.header.diff()
    }
}

/// Iterator over raw records.
///
/// Stops after the first damaged header, since the next record boundary
/// can not be known.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    iter: BufferIterator<'a>,
    failed: bool,
}

impl<'a> Records<'a> {
    pub fn new(iter: BufferIterator<'a>) -> Self {
        Self { iter, failed: false }
    }

    /// Cursor at the next record to be returned.
    pub fn position(&self) -> &BufferIterator<'a> {
        &self.iter
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.iter.next_record()?;
        self.failed = item.is_err();
        Some(item)
    }
}

impl FusedIterator for Records<'_> {}
