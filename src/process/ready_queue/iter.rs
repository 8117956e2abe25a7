/*!
 * Ready Queue Traversals
 * Ascending (head to tail) and descending (tail to head) iteration
 */

use super::node::{Node, NodeKey};
use crate::process::types::ProcessRecord;
use slotmap::SlotMap;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    Forward,
    Backward,
}

/// Walks node handles in one direction
#[derive(Debug, Clone)]
pub(super) struct Links<'a> {
    nodes: &'a SlotMap<NodeKey, Node>,
    cursor: Option<NodeKey>,
    direction: Direction,
    remaining: usize,
}

impl<'a> Links<'a> {
    pub fn new(
        nodes: &'a SlotMap<NodeKey, Node>,
        start: Option<NodeKey>,
        direction: Direction,
    ) -> Self {
        Self {
            nodes,
            cursor: start,
            direction,
            remaining: nodes.len(),
        }
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = (NodeKey, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let Some(node) = self.nodes.get(key) else {
            self.cursor = None;
            self.remaining = 0;
            return None;
        };

        self.cursor = match self.direction {
            Direction::Forward => node.next,
            Direction::Backward => node.prev,
        };
        self.remaining = if self.cursor.is_some() {
            self.remaining.saturating_sub(1)
        } else {
            0
        };

        Some((key, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Records from lowest to highest priority
///
/// Created by [`ReadyQueue::ascending`](super::ReadyQueue::ascending).
#[derive(Debug, Clone)]
pub struct Ascending<'a> {
    links: Links<'a>,
}

impl<'a> Ascending<'a> {
    pub(super) fn new(links: Links<'a>) -> Self {
        Self { links }
    }
}

impl<'a> Iterator for Ascending<'a> {
    type Item = &'a ProcessRecord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.links.next().map(|(_, node)| &node.record)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl ExactSizeIterator for Ascending<'_> {}
impl FusedIterator for Ascending<'_> {}

/// Records from highest to lowest priority
///
/// Created by [`ReadyQueue::descending`](super::ReadyQueue::descending).
#[derive(Debug, Clone)]
pub struct Descending<'a> {
    links: Links<'a>,
}

impl<'a> Descending<'a> {
    pub(super) fn new(links: Links<'a>) -> Self {
        Self { links }
    }
}

impl<'a> Iterator for Descending<'a> {
    type Item = &'a ProcessRecord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.links.next().map(|(_, node)| &node.record)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl ExactSizeIterator for Descending<'_> {}
impl FusedIterator for Descending<'_> {}
