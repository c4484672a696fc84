//! Relinking primitives: reversal, splitting, O(1) insert and delete.

use tracing::trace;

use super::{ListError, NodeArena, NodeId, Segment};

impl NodeArena {
    /// Reverse the chain in place. Returns the new head and the new tail
    /// (the old head), or `None` for an empty chain.
    pub fn reverse(&mut self, head: Option<NodeId>) -> Result<Option<Segment>, ListError> {
        let Some(first) = head else {
            return Ok(None);
        };
        self.len(head)?;
        let (mut prev, mut cur) = (None, Some(first));
        while let Some(id) = cur {
            cur = self.set_next(id, prev)?;
            prev = Some(id);
        }
        Ok(prev.map(|new_head| Segment {
            head: new_head,
            tail: first,
        }))
    }

    /// Cut the chain after its `k`-th node and return both parts.
    pub fn split(
        &mut self,
        head: Option<NodeId>,
        k: usize,
    ) -> Result<(Option<NodeId>, Option<NodeId>), ListError> {
        self.len(head)?;
        self.cut_after(head, k)
    }

    /// `split` for a chain already known to be acyclic.
    pub(super) fn cut_after(
        &mut self,
        head: Option<NodeId>,
        k: usize,
    ) -> Result<(Option<NodeId>, Option<NodeId>), ListError> {
        if k == 0 {
            return Ok((None, head));
        }
        let Some(mut last) = head else {
            return Ok((None, None));
        };
        for _ in 1..k {
            match self.next(last)? {
                Some(next) => last = next,
                None => return Ok((head, None)),
            }
        }
        let rest = self.set_next(last, None)?;
        Ok((head, rest))
    }

    pub fn insert_after(&mut self, node: NodeId, value: i64) -> Result<NodeId, ListError> {
        let after = self.next(node)?;
        let id = self.alloc_linked(value, after);
        self.set_next(node, Some(id))?;
        Ok(id)
    }

    /// Delete a node that is not the tail by pulling its successor's value
    /// forward and unlinking the successor.
    pub fn delete_middle_node(&mut self, node: NodeId) -> Result<(), ListError> {
        let successor = self.next(node)?.ok_or(ListError::MissingSuccessor(node))?;
        if successor == node {
            return Err(ListError::SelfLoop(node));
        }
        let (value, after) = {
            let succ = self.node(successor)?;
            (succ.value, succ.next)
        };
        let target = self.node_mut(node)?;
        target.value = value;
        target.next = after;
        self.release(successor)?;
        Ok(())
    }

    /// Remove the `k`-th node from the end (`k = 1` is the tail) in one pass.
    pub fn delete_kth_from_end(
        &mut self,
        head: Option<NodeId>,
        k: usize,
    ) -> Result<Option<NodeId>, ListError> {
        if k == 0 {
            return Err(ListError::IndexOutOfRange {
                index: k,
                len: self.len(head)?,
            });
        }
        let Some(first) = head else {
            return Err(ListError::IndexOutOfRange { index: k, len: 0 });
        };

        let mut lead = head;
        for walked in 0..k {
            if walked > self.live() {
                return Err(ListError::Cyclic);
            }
            match lead {
                Some(id) => lead = self.next(id)?,
                None => {
                    return Err(ListError::IndexOutOfRange {
                        index: k,
                        len: walked,
                    });
                }
            }
        }

        let Some(mut lead) = lead else {
            trace!(k, "removing head");
            let rest = self.next(first)?;
            self.release(first)?;
            return Ok(rest);
        };

        let mut trail = first;
        let mut steps = k;
        while let Some(next) = self.next(lead)? {
            steps += 1;
            if steps >= self.live() {
                return Err(ListError::Cyclic);
            }
            lead = next;
            trail = self.next(trail)?.ok_or(ListError::MissingSuccessor(trail))?;
        }

        let doomed = self.next(trail)?.ok_or(ListError::MissingSuccessor(trail))?;
        let after = self.next(doomed)?;
        self.set_next(trail, after)?;
        self.release(doomed)?;
        Ok(head)
    }

    /// Run `body` with a throwaway sentinel linked in front of `head` and
    /// return whatever follows the sentinel afterwards.
    pub(super) fn with_sentinel<F>(
        &mut self,
        head: Option<NodeId>,
        body: F,
    ) -> Result<Option<NodeId>, ListError>
    where
        F: FnOnce(&mut Self, NodeId) -> Result<(), ListError>,
    {
        let sentinel = self.alloc_linked(0, head);
        let outcome = body(self, sentinel).and_then(|()| self.next(sentinel));
        self.release(sentinel)?;
        outcome
    }

    /// Release the run `first ..= last`, which must be linked in order.
    pub(super) fn release_run(&mut self, first: NodeId, last: NodeId) -> Result<(), ListError> {
        let mut cur = first;
        loop {
            let next = self.next(cur)?;
            self.release(cur)?;
            if cur == last {
                return Ok(());
            }
            cur = next.ok_or(ListError::MissingSuccessor(cur))?;
        }
    }
}
