/*!
 * Ready Queue
 * Priority-ordered doubly linked list of process records
 */

use crate::core::types::ProcessId;
use crate::process::types::ProcessRecord;
use slotmap::SlotMap;

mod invariants;
mod iter;
mod node;
mod operations;

pub use invariants::InvariantViolation;
pub use iter::{Ascending, Descending};

use iter::{Direction, Links};
use node::{Node, NodeKey};

/// Ready queue ordered by ascending priority
///
/// Records live in an arena and are linked through stable handles, so
/// splicing a node in or out is O(1) once its neighbour has been found.
/// Lookups and the insertion point are found by a linear scan from the
/// head. Equal priorities keep their insertion order.
///
/// The queue owns every record it holds. A deleted record is handed back
/// to the caller by value.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    nodes: SlotMap<NodeKey, Node>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    next_seq: u64,
}

impl ReadyQueue {
    /// Create an empty ready queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ready queue with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            ..Self::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Lowest-priority record (first in ascending order)
    pub fn head(&self) -> Option<&ProcessRecord> {
        self.head.map(|key| &self.nodes[key].record)
    }

    /// Highest-priority record (last in ascending order)
    pub fn tail(&self) -> Option<&ProcessRecord> {
        self.tail.map(|key| &self.nodes[key].record)
    }

    pub fn contains(&self, id: ProcessId) -> bool {
        self.find(id).is_some()
    }

    /// Traverse from head to tail
    pub fn ascending(&self) -> Ascending<'_> {
        Ascending::new(self.links(Direction::Forward))
    }

    /// Traverse from tail to head
    pub fn descending(&self) -> Descending<'_> {
        Descending::new(self.links(Direction::Backward))
    }

    fn links(&self, direction: Direction) -> Links<'_> {
        let start = match direction {
            Direction::Forward => self.head,
            Direction::Backward => self.tail,
        };
        Links::new(&self.nodes, start, direction)
    }
}

impl<'a> IntoIterator for &'a ReadyQueue {
    type Item = &'a ProcessRecord;
    type IntoIter = Ascending<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.ascending()
    }
}
