//! Slot arena that owns every list node.
//!
//! Variables:
//!   slots : Vec<Slot>   — node storage, slot i addressed by NodeId { index: i, .. }
//!   free  : Vec<usize>  — released slot indices, reused LIFO by alloc()
//!   live  : usize       — number of occupied slots
//!
//! Equations:
//!   alloc(x):    i = free.pop() or slots.len(),  slots[i] = Node(x),  live' = live + 1   O(1)
//!   release(id): slots[id.index].generation += 1,  free.push(id.index), live' = live - 1 O(1)
//!   id valid  <=>  slots[id.index].generation == id.generation  and the slot is occupied
//!
//!   An acyclic chain has at most `live` nodes, so any walk longer than that loops.

use std::fmt;

use tracing::debug;

use super::ListError;
use crate::config::ToolkitConfig;

/// Handle to a node. Equality is node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) value: i64,
    pub(super) next: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Clone)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
    config: ToolkitConfig,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena {
    pub fn new() -> Self {
        Self::with_config(ToolkitConfig::default())
    }

    pub fn with_config(config: ToolkitConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free: Vec::new(),
            live: 0,
            config,
        }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Number of nodes currently allocated.
    pub fn live(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Allocate a detached node holding `value`.
    pub fn alloc(&mut self, value: i64) -> NodeId {
        self.alloc_linked(value, None)
    }

    pub(super) fn alloc_linked(&mut self, value: i64, next: Option<NodeId>) -> NodeId {
        let node = Node { value, next };
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        if self.slots.len() == self.slots.capacity() {
            debug!(capacity = self.slots.capacity(), "node arena growing");
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Free a node and return its value. Every handle to it becomes stale.
    ///
    /// Nodes still linking to `id` are left dangling; callers unlink first.
    pub fn release(&mut self, id: NodeId) -> Result<i64, ListError> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .ok_or(ListError::UnknownNode(id))?;
        let node = slot.node.take().ok_or(ListError::UnknownNode(id))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Ok(node.value)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    pub(super) fn node(&self, id: NodeId) -> Result<&Node, ListError> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(ListError::UnknownNode(id))
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, ListError> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(ListError::UnknownNode(id))
    }

    pub fn value(&self, id: NodeId) -> Result<i64, ListError> {
        Ok(self.node(id)?.value)
    }

    pub fn set_value(&mut self, id: NodeId, value: i64) -> Result<(), ListError> {
        self.node_mut(id)?.value = value;
        Ok(())
    }

    pub fn next(&self, id: NodeId) -> Result<Option<NodeId>, ListError> {
        Ok(self.node(id)?.next)
    }

    /// Relink `id` to `next` and return the successor it had before.
    pub fn set_next(
        &mut self,
        id: NodeId,
        next: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        if let Some(next) = next {
            self.node(next)?;
        }
        Ok(std::mem::replace(&mut self.node_mut(id)?.next, next))
    }

    /// Successor of an optional position; absent stays absent.
    pub(super) fn follow(&self, id: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
        match id {
            Some(id) => self.next(id),
            None => Ok(None),
        }
    }

    /// Build an acyclic chain holding `values` in order and return its head.
    pub fn alloc_values(&mut self, values: &[i64]) -> Option<NodeId> {
        values
            .iter()
            .rev()
            .fold(None, |next, &value| Some(self.alloc_linked(value, next)))
    }

    /// Number of nodes in an acyclic chain. Fails with `Cyclic` if it loops.
    pub fn len(&self, head: Option<NodeId>) -> Result<usize, ListError> {
        let mut count = 0;
        let mut cur = head;
        while let Some(id) = cur {
            count += 1;
            if count > self.live {
                return Err(ListError::Cyclic);
            }
            cur = self.next(id)?;
        }
        Ok(count)
    }

    pub fn values(&self, head: Option<NodeId>) -> Result<Vec<i64>, ListError> {
        let mut out = Vec::new();
        let mut cur = head;
        while let Some(id) = cur {
            if out.len() == self.live {
                return Err(ListError::Cyclic);
            }
            let node = self.node(id)?;
            out.push(node.value);
            cur = node.next;
        }
        Ok(out)
    }

    /// Last node of the acyclic chain starting at `head`.
    pub fn last(&self, head: NodeId) -> Result<NodeId, ListError> {
        let mut cur = head;
        let mut steps = 0;
        while let Some(next) = self.next(cur)? {
            steps += 1;
            if steps >= self.live {
                return Err(ListError::Cyclic);
            }
            cur = next;
        }
        Ok(cur)
    }

    pub fn tail(&self, head: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
        head.map(|head| self.last(head)).transpose()
    }

    /// Node `index` steps after `head`, or absent if the chain is shorter.
    pub fn nth(&self, head: Option<NodeId>, index: usize) -> Result<Option<NodeId>, ListError> {
        let mut cur = head;
        for _ in 0..index {
            cur = self.follow(cur)?;
        }
        Ok(cur)
    }

    pub fn display(&self, head: Option<NodeId>) -> ListView<'_> {
        ListView { arena: self, head }
    }
}

/// Renders a chain as `1 -> 2 -> 3`; a looping chain ends in `-> ...`.
pub struct ListView<'a> {
    arena: &'a NodeArena,
    head: Option<NodeId>,
}

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(head) = self.head else {
            return f.write_str("[]");
        };
        let mut cur = Some(head);
        let mut shown = 0;
        while let Some(id) = cur {
            if shown > 0 {
                f.write_str(" -> ")?;
            }
            if shown == self.arena.live {
                return f.write_str("...");
            }
            match self.arena.node(id) {
                Ok(node) => {
                    write!(f, "{}", node.value)?;
                    cur = node.next;
                }
                Err(_) => return write!(f, "<released {id}>"),
            }
            shown += 1;
        }
        Ok(())
    }
}
