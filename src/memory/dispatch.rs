//! Pull-based dispatch from records to typed entity views.

use std::iter::FusedIterator;

use super::buffer::BufferIterator;
use super::entity::EntityView;
use crate::util::{Error, Result};

/// Pull the next entity from `iter`.
///
/// - `None`: the cursor is at the end, the stream is exhausted.
/// - `Some(Ok(view))`: a typed view over the record just consumed.
/// - `Some(Err(Error::UnknownItemType { .. }))`: the record carries a tag
///   that is not an entity. The record is still consumed, so the following
///   records can be pulled as usual.
/// - `Some(Err(..))` with any other error: the header itself is damaged and
///   the cursor did not move.
pub fn next_entity<'a>(iter: &mut BufferIterator<'a>) -> Option<Result<EntityView<'a>>> {
    let record = match iter.next_record()? {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(offset = iter.offset(), error = %err, "damaged record header");
            return Some(Err(err));
        }
    };

    match record.kind() {
        Some(kind) => {
            tracing::trace!(offset = record.offset(), %kind, size = record.len(), "entity");
            Some(Ok(EntityView::from_record(kind, record)))
        }
        None => {
            tracing::warn!(
                offset = record.offset(),
                item_type = record.item_type(),
                "unknown item type, record skipped"
            );
            Some(Err(Error::UnknownItemType {
                item_type: record.item_type(),
                offset: record.offset(),
            }))
        }
    }
}

/// Iterator yielding one typed view per record, in storage order.
///
/// Unknown item types come out as [`Error::UnknownItemType`] and iteration
/// continues. A damaged header ends the iteration after its error.
#[derive(Clone, Debug)]
pub struct Entities<'a> {
    iter: BufferIterator<'a>,
    done: bool,
}

impl<'a> Entities<'a> {
    /// Dispatch records starting at `iter`.
    pub fn new(iter: BufferIterator<'a>) -> Self {
        Self { iter, done: false }
    }

    /// Cursor at the next record to be dispatched.
    pub fn position(&self) -> &BufferIterator<'a> {
        &self.iter
    }

    /// Byte offset of the next record to be dispatched.
    pub fn offset(&self) -> usize {
        self.iter.offset()
    }
}

impl<'a> Iterator for Entities<'a> {
    type Item = Result<EntityView<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = next_entity(&mut self.iter)?;
        if let Err(err) = &item {
            self.done = !matches!(err, Error::UnknownItemType { .. });
        }
        Some(item)
    }
}

impl FusedIterator for Entities<'_> {}
