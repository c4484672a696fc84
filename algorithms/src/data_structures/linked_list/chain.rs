//! Append-only result accumulator used by merges and splices.
//!
//! Variables:
//!   ends : Option<Segment>  — head and tail of the chain built so far
//!
//! Equations:
//!   push_node(n):    tail.next = n,  n.next = None,  tail' = n        O(1)
//!   push_segment(s): tail.next = s.head,  tail' = s.tail             O(1)

use super::{ListError, NodeArena, NodeId};

/// A detached run of nodes named by its two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub head: NodeId,
    pub tail: NodeId,
}

impl Segment {
    pub fn single(node: NodeId) -> Self {
        Self {
            head: node,
            tail: node,
        }
    }
}

#[derive(Debug, Default)]
pub struct Chain {
    ends: Option<Segment>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.ends.map(|ends| ends.head)
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.ends.map(|ends| ends.tail)
    }

    pub fn segment(&self) -> Option<Segment> {
        self.ends
    }

    /// Detach `node` from whatever followed it and append it.
    pub fn push_node(&mut self, arena: &mut NodeArena, node: NodeId) -> Result<(), ListError> {
        arena.set_next(node, None)?;
        self.push_segment(arena, Segment::single(node))
    }

    /// Append a whole segment; `segment.tail`'s successor is left as is.
    pub fn push_segment(
        &mut self,
        arena: &mut NodeArena,
        segment: Segment,
    ) -> Result<(), ListError> {
        if let Some(ends) = self.ends.as_mut() {
            arena.set_next(ends.tail, Some(segment.head))?;
            ends.tail = segment.tail;
        } else {
            self.ends = Some(segment);
        }
        Ok(())
    }

    pub fn finish(self) -> Option<NodeId> {
        self.head()
    }
}
