//! Insertion into a sorted circular list entered at an arbitrary node.
//!
//! Variables:
//!   entry : NodeId        — any node of the loop
//!   (p, c): (prev, cur)   — adjacent pair visited on the lap from entry
//!
//! Equations:
//!   insert after p  if  p.value <= x <= c.value
//!                   or  p.value > c.value and (x >= p.value or x <= c.value)   (wrap point)
//!   no such pair in one lap  =>  all values equal, insert after entry           O(N)

use tracing::trace;

use super::{ListError, NodeArena, NodeId};

impl NodeArena {
    /// Insert `value` into a sorted circular list entered at any node,
    /// keeping it non-decreasing around the wrap point.
    ///
    /// Returns `entry` unchanged, or a fresh self-looped node when the list
    /// was empty.
    pub fn insert_into_sorted_circular(
        &mut self,
        entry: Option<NodeId>,
        value: i64,
    ) -> Result<NodeId, ListError> {
        let Some(head) = entry else {
            let lone = self.alloc(value);
            self.set_next(lone, Some(lone))?;
            return Ok(lone);
        };
        if self.cycle_predecessor(head)?.is_none() {
            return Err(ListError::NotCircular(head));
        }

        let mut prev = head;
        let mut cur = self.next(head)?.ok_or(ListError::NotCircular(head))?;
        loop {
            let (lo, hi) = (self.value(prev)?, self.value(cur)?);
            if lo <= value && value <= hi {
                break;
            }
            // wrap point: prev holds the max, cur the min
            if lo > hi && (value >= lo || value <= hi) {
                break;
            }
            prev = cur;
            cur = self.next(cur)?.ok_or(ListError::NotCircular(head))?;
            if prev == head {
                // every value equal: no boundary anywhere
                break;
            }
        }
        trace!(after = %prev, value, "inserting into circular list");
        self.insert_after(prev, value)?;
        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circular(arena: &mut NodeArena, values: &[i64]) -> NodeId {
        let head = arena.alloc_values(values);
        let tail = arena.tail(head).unwrap().unwrap();
        arena.set_next(tail, head).unwrap();
        head.unwrap()
    }

    /// One lap of values starting at `head`.
    fn lap(arena: &NodeArena, head: NodeId) -> Vec<i64> {
        let mut out = vec![arena.value(head).unwrap()];
        let mut cur = arena.next(head).unwrap().unwrap();
        while cur != head {
            out.push(arena.value(cur).unwrap());
            cur = arena.next(cur).unwrap().unwrap();
        }
        out
    }

    #[test]
    fn inserts_between_neighbours() {
        let mut arena = NodeArena::new();
        let head = circular(&mut arena, &[1, 3, 5]);
        assert_eq!(arena.insert_into_sorted_circular(Some(head), 4).unwrap(), head);
        assert_eq!(lap(&arena, head), vec![1, 3, 4, 5]);
    }

    #[test]
    fn new_maximum_goes_at_wrap_point() {
        let mut arena = NodeArena::new();
        let head = circular(&mut arena, &[1, 3, 5]);
        arena.insert_into_sorted_circular(Some(head), 6).unwrap();
        assert_eq!(lap(&arena, head), vec![1, 3, 5, 6]);
    }

    #[test]
    fn new_minimum_goes_at_wrap_point() {
        let mut arena = NodeArena::new();
        let head = circular(&mut arena, &[1, 3, 5]);
        let entry = arena.nth(Some(head), 1).unwrap().unwrap();
        arena.insert_into_sorted_circular(Some(entry), 0).unwrap();
        assert_eq!(lap(&arena, head), vec![1, 3, 5, 0]);
        assert_eq!(lap(&arena, entry), vec![3, 5, 0, 1]);
    }

    #[test]
    fn uniform_list_accepts_anything() {
        let mut arena = NodeArena::new();
        let head = circular(&mut arena, &[2, 2, 2]);
        arena.insert_into_sorted_circular(Some(head), 9).unwrap();
        assert_eq!(lap(&arena, head), vec![2, 9, 2, 2]);

        let mut arena = NodeArena::new();
        let lone = circular(&mut arena, &[3]);
        arena.insert_into_sorted_circular(Some(lone), 1).unwrap();
        assert_eq!(lap(&arena, lone), vec![3, 1]);
    }

    #[test]
    fn empty_list_becomes_self_loop() {
        let mut arena = NodeArena::new();
        let lone = arena.insert_into_sorted_circular(None, 4).unwrap();
        assert_eq!(arena.next(lone).unwrap(), Some(lone));
        assert_eq!(arena.value(lone).unwrap(), 4);
    }

    #[test]
    fn rejects_open_chain() {
        let mut arena = NodeArena::new();
        let head = arena.alloc_values(&[1, 2, 3]).unwrap();
        assert_eq!(
            arena.insert_into_sorted_circular(Some(head), 2),
            Err(ListError::NotCircular(head))
        );
        assert_eq!(arena.live(), 3);
    }
}
