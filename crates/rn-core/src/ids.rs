//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! The two IDs mean different things:
//!
//! - [`NodeId`] is the **opaque** identifier handed over by the data source
//!   (an OSM node id, typically).  It is stable across the whole pipeline and
//!   says nothing about storage position.
//! - [`EdgeId`] is the slot of an edge inside one `RoadGraph`.  It stays
//!   valid while the edge is removed and restored, but is meaningless in any
//!   other graph (e.g. after `largest_component` re-packs the edges).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a road-network node as assigned by the data source.
    pub struct NodeId(i64);
}

typed_id! {
    /// Slot of an undirected edge in a `RoadGraph`.
    pub struct EdgeId(u32);
}

impl EdgeId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for EdgeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<EdgeId, Self::Error> {
        u32::try_from(n).map(EdgeId)
    }
}
