/*!
 * Ready Queue Nodes
 * Arena entries linking process records into a doubly linked sequence
 */

use crate::process::types::ProcessRecord;
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a node in the ready queue arena
    pub(super) struct NodeKey;
}

/// Arena entry: a record plus its neighbour handles
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub record: ProcessRecord,
    pub prev: Option<NodeKey>,
    pub next: Option<NodeKey>,
    // Insertion sequence number; orders equal priorities
    pub seq: u64,
}

impl Node {
    /// Create a node that is not yet linked to any neighbour
    #[inline]
    pub fn detached(record: ProcessRecord, seq: u64) -> Self {
        Self {
            record,
            prev: None,
            next: None,
            seq,
        }
    }
}
