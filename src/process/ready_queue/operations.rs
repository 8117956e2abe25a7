/*!
 * Ready Queue Operations
 * Insert, delete and lookup with link repair
 */

use super::iter::Direction;
use super::node::{Node, NodeKey};
use super::ReadyQueue;
use crate::core::errors::QueueError;
use crate::core::types::{Priority, ProcessId};
use crate::process::types::ProcessRecord;
use tracing::{debug, instrument};

impl ReadyQueue {
    /// Insert a record in priority order
    ///
    /// The record is placed before the first record with a strictly greater
    /// priority, or appended at the tail. A record whose id is already
    /// present is rejected and the existing record is returned in the error.
    #[instrument(level = "debug", skip_all, fields(id = record.id, priority = record.priority))]
    pub fn insert(&mut self, record: ProcessRecord) -> Result<(), QueueError> {
        if let Some(existing) = self.find(record.id) {
            return Err(QueueError::DuplicateId {
                existing: Box::new(existing.clone()),
            });
        }

        let successor = self.first_above(record.priority);
        let seq = self.next_seq;
        self.next_seq += 1;
        let key = self.nodes.insert(Node::detached(record, seq));

        match successor {
            Some(next) => self.link_before(key, next),
            None => self.link_back(key),
        }

        debug!(len = self.len(), "process inserted");
        self.debug_check();
        Ok(())
    }

    /// Remove the record with `id`, returning it
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: ProcessId) -> Result<ProcessRecord, QueueError> {
        let key = self.find_key(id).ok_or(QueueError::NotFound { id })?;
        let record = self.unlink(key).ok_or(QueueError::NotFound { id })?;

        debug!(len = self.len(), "process deleted");
        self.debug_check();
        Ok(record)
    }

    /// Look up a record by id
    pub fn find(&self, id: ProcessId) -> Option<&ProcessRecord> {
        self.find_key(id).map(|key| &self.nodes[key].record)
    }

    fn find_key(&self, id: ProcessId) -> Option<NodeKey> {
        self.links(Direction::Forward)
            .find(|(_, node)| node.record.id == id)
            .map(|(key, _)| key)
    }

    // First node whose priority is strictly greater than `priority`
    fn first_above(&self, priority: Priority) -> Option<NodeKey> {
        self.links(Direction::Forward)
            .find(|(_, node)| node.record.priority > priority)
            .map(|(key, _)| key)
    }

    fn link_before(&mut self, key: NodeKey, next: NodeKey) {
        let prev = self.nodes[next].prev;

        let node = &mut self.nodes[key];
        node.prev = prev;
        node.next = Some(next);
        self.nodes[next].prev = Some(key);

        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
    }

    fn link_back(&mut self, key: NodeKey) {
        let prev = self.tail;

        let node = &mut self.nodes[key];
        node.prev = prev;
        node.next = None;

        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    fn unlink(&mut self, key: NodeKey) -> Option<ProcessRecord> {
        let node = self.nodes.remove(key)?;

        match (node.prev, node.next) {
            // Sole element
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            // Head
            (None, Some(next)) => {
                self.nodes[next].prev = None;
                self.head = Some(next);
            }
            // Interior
            (Some(prev), Some(next)) => {
                self.nodes[prev].next = Some(next);
                self.nodes[next].prev = Some(prev);
            }
            // Tail
            (Some(prev), None) => {
                self.nodes[prev].next = None;
                self.tail = Some(prev);
            }
        }

        Some(node.record)
    }

    #[inline]
    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("ready queue invariant violated: {violation}");
            }
        }
    }
}
