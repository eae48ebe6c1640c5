//! # Listener Categories
//!
//! Dispatch-priority tags for registered listeners. The broadcaster notifies
//! model-level listeners before the visual layer: schema containers first,
//! then schema internals, then partition tables and datasets, and only then
//! diagram widgets and the diagrams that own them.
//!
//! The category is supplied by the caller at registration time. Declaration
//! order below IS dispatch order; within one category the order is
//! unspecified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dispatch-priority category of a registered listener.
///
/// Variants are listed in dispatch order. `Ord` is consistent with
/// [`dispatch_rank`](Self::dispatch_rank).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ListenerCategory {
    /// Schema-level containers.
    SchemaContainer,
    /// Components owned by a schema (tables, columns, keys).
    SchemaComponent,
    /// Relations whose owning container is a schema.
    SchemaRelation,
    /// Partition-table containers.
    PartitionTable,
    /// Dataset containers.
    DatasetContainer,
    /// Components owned by a dataset.
    DatasetComponent,
    /// Relations whose owning container is a dataset.
    DatasetRelation,
    /// Widgets drawn inside a visual diagram.
    DiagramComponent,
    /// Visual diagrams themselves.
    Diagram,
    /// Everything else.
    Other,
}

impl ListenerCategory {
    /// All categories, in dispatch order.
    pub const ALL: [Self; 10] = [
        Self::SchemaContainer,
        Self::SchemaComponent,
        Self::SchemaRelation,
        Self::PartitionTable,
        Self::DatasetContainer,
        Self::DatasetComponent,
        Self::DatasetRelation,
        Self::DiagramComponent,
        Self::Diagram,
        Self::Other,
    ];

    /// Position of this category in the dispatch order (0 fires first).
    #[must_use]
    pub fn dispatch_rank(self) -> u8 {
        self as u8
    }

    /// Stable name for logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SchemaContainer => "schema-container",
            Self::SchemaComponent => "schema-component",
            Self::SchemaRelation => "schema-relation",
            Self::PartitionTable => "partition-table",
            Self::DatasetContainer => "dataset-container",
            Self::DatasetComponent => "dataset-component",
            Self::DatasetRelation => "dataset-relation",
            Self::DiagramComponent => "diagram-component",
            Self::Diagram => "diagram",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ListenerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
