//! Typed, zero-copy views of entity records.
//!
//! Each view wraps one [`Record`] and borrows from the buffer, not from the
//! iterator that produced it, so views stay usable after iteration moves on.
//! Field-level decoding (tags, locations, members) belongs to the consumer
//! of the view.

use super::buffer::Record;
use super::format::{DiffMarker, ItemType};

macro_rules! entity_view {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name<'a> {
            record: Record<'a>,
        }

        impl<'a> $name<'a> {
            /// Entity kind of this view.
            pub const KIND: ItemType = $kind;

            /// Underlying record.
            #[inline]
            pub fn record(&self) -> &Record<'a> {
                &self.record
            }

            /// Record bytes after the header.
            #[inline]
            pub fn payload(&self) -> &'a [u8] {
                self.record.payload()
            }

            /// Whole record, header included.
            #[inline]
            pub fn as_bytes(&self) -> &'a [u8] {
                self.record.as_bytes()
            }

            #[inline]
            pub fn byte_size(&self) -> usize {
                self.record.len()
            }

            #[inline]
            pub fn is_removed(&self) -> bool {
                self.record.is_removed()
            }

            #[inline]
            pub fn diff(&self) -> DiffMarker {
                self.record.diff()
            }
        }
    };
}

entity_view!(
    /// A node record.
    NodeView,
    ItemType::Node
);
entity_view!(
    /// A way record.
    WayView,
    ItemType::Way
);
entity_view!(
    /// A relation record.
    RelationView,
    ItemType::Relation
);
entity_view!(
    /// An area record (assembled from a closed way or a multipolygon relation).
    AreaView,
    ItemType::Area
);
entity_view!(
    /// A changeset record.
    ChangesetView,
    ItemType::Changeset
);

/// One entity of any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityView<'a> {
    Node(NodeView<'a>),
    Way(WayView<'a>),
    Relation(RelationView<'a>),
    Area(AreaView<'a>),
    Changeset(ChangesetView<'a>),
}

impl<'a> EntityView<'a> {
    /// Build the view matching `kind` over `record`.
    ///
    /// The caller has already decoded `kind` from the record header.
    pub(crate) fn from_record(kind: ItemType, record: Record<'a>) -> Self {
        match kind {
            ItemType::Node => Self::Node(NodeView { record }),
            ItemType::Way => Self::Way(WayView { record }),
            ItemType::Relation => Self::Relation(RelationView { record }),
            ItemType::Area => Self::Area(AreaView { record }),
            ItemType::Changeset => Self::Changeset(ChangesetView { record }),
        }
    }

    pub fn kind(&self) -> ItemType {
        match self {
            Self::Node(_) => ItemType::Node,
            Self::Way(_) => ItemType::Way,
            Self::Relation(_) => ItemType::Relation,
            Self::Area(_) => ItemType::Area,
            Self::Changeset(_) => ItemType::Changeset,
        }
    }

    /// Underlying record.
    pub fn record(&self) -> &Record<'a> {
        match self {
            Self::Node(v) => v.record(),
            Self::Way(v) => v.record(),
            Self::Relation(v) => v.record(),
            Self::Area(v) => v.record(),
            Self::Changeset(v) => v.record(),
        }
    }

    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        self.record().payload()
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.record().is_removed()
    }

    pub fn as_node(&self) -> Option<&NodeView<'a>> {
        match self {
            Self::Node(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_way(&self) -> Option<&WayView<'a>> {
        match self {
            Self::Way(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&RelationView<'a>> {
        match self {
            Self::Relation(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaView<'a>> {
        match self {
            Self::Area(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_changeset(&self) -> Option<&ChangesetView<'a>> {
        match self {
            Self::Changeset(v) => Some(v),
            _ => None,
        }
    }
}
