/*!
 * Ready Queue Invariants
 * Structural checks over the linked sequence
 */

use super::node::NodeKey;
use super::ReadyQueue;
use crate::core::types::{Priority, ProcessId};
use std::collections::HashSet;
use thiserror::Error;

/// A broken ready queue invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("link points at a node that is not in the arena")]
    DanglingLink,

    #[error("head process {id} has a backward link")]
    HeadHasPrev { id: ProcessId },

    #[error("backward link of process {id} does not point to its predecessor")]
    BrokenBackLink { id: ProcessId },

    #[error("process {id} (priority {priority}) follows priority {previous}")]
    OutOfOrder {
        id: ProcessId,
        priority: Priority,
        previous: Priority,
    },

    #[error("process {first} precedes process {second} of equal priority but was inserted after it")]
    TieOrder { first: ProcessId, second: ProcessId },

    #[error("process id {id} appears more than once")]
    DuplicateId { id: ProcessId },

    #[error("forward links form a cycle")]
    Cycle,

    #[error("tail does not denote the last node (last is {last:?})")]
    StaleTail { last: Option<ProcessId> },

    #[error("traversal reached {reached} of {stored} stored nodes")]
    Unreachable { reached: usize, stored: usize },
}

impl ReadyQueue {
    /// Walk the queue from the head and verify every structural invariant
    ///
    /// Checks link symmetry, head/tail endpoints, ascending priority order,
    /// FIFO order among equal priorities, id uniqueness and that every stored
    /// node is reachable. Runs after every mutation in debug builds.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let stored = self.nodes.len();
        let mut seen = HashSet::with_capacity(stored);
        let mut prev: Option<NodeKey> = None;
        let mut cursor = self.head;
        let mut reached = 0usize;

        while let Some(key) = cursor {
            let node = self.nodes.get(key).ok_or(InvariantViolation::DanglingLink)?;
            let id = node.record.id;

            if node.prev != prev {
                return Err(match prev {
                    None => InvariantViolation::HeadHasPrev { id },
                    Some(_) => InvariantViolation::BrokenBackLink { id },
                });
            }

            if let Some(prev_node) = prev.and_then(|p| self.nodes.get(p)) {
                let previous = prev_node.record.priority;
                if previous > node.record.priority {
                    return Err(InvariantViolation::OutOfOrder {
                        id,
                        priority: node.record.priority,
                        previous,
                    });
                }
                if previous == node.record.priority && prev_node.seq > node.seq {
                    return Err(InvariantViolation::TieOrder {
                        first: prev_node.record.id,
                        second: id,
                    });
                }
            }

            if !seen.insert(id) {
                return Err(InvariantViolation::DuplicateId { id });
            }

            reached += 1;
            if reached > stored {
                return Err(InvariantViolation::Cycle);
            }

            prev = Some(key);
            cursor = node.next;
        }

        if self.tail != prev {
            return Err(InvariantViolation::StaleTail {
                last: prev.map(|key| self.nodes[key].record.id),
            });
        }

        if reached != stored {
            return Err(InvariantViolation::Unreachable { reached, stored });
        }

        Ok(())
    }
}
