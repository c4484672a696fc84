//! Merge and merge sort over relinked nodes.
//!
//! Variables:
//!   n     : list length
//!   limit : ToolkitConfig::recursive_sort_limit
//!
//! Equations:
//!   merge(a, b):   repeatedly detach min(front(a), front(b)), ties to a       O(|a| + |b|)
//!   sort(L), n <= limit:  L = left ++ right at the second middle,
//!                         merge(sort(left), sort(right))       depth O(log n)
//!   sort(L), n >  limit:  width = 1, 2, 4, ...: merge adjacent runs   O(n log n), no recursion

use tracing::{debug, instrument};

use super::{Chain, ListError, NodeArena, NodeId, Segment};

impl NodeArena {
    /// Merge two non-decreasing chains into one. Both inputs are consumed.
    pub fn merge_sorted(
        &mut self,
        a: Option<NodeId>,
        b: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        self.len(a)?;
        self.len(b)?;
        if let Some(shared) = self.get_intersection(a, b)? {
            return Err(ListError::SharedNodes(shared));
        }
        Ok(self.merge_runs(a, b)?.map(|merged| merged.head))
    }

    fn merge_runs(
        &mut self,
        mut a: Option<NodeId>,
        mut b: Option<NodeId>,
    ) -> Result<Option<Segment>, ListError> {
        let mut merged = Chain::new();
        while let (Some(x), Some(y)) = (a, b) {
            if self.value(x)? <= self.value(y)? {
                a = self.next(x)?;
                merged.push_node(self, x)?;
            } else {
                b = self.next(y)?;
                merged.push_node(self, y)?;
            }
        }
        if let Some(rest) = a.or(b) {
            let tail = self.last(rest)?;
            merged.push_segment(self, Segment { head: rest, tail })?;
        }
        Ok(merged.segment())
    }

    /// Stable merge sort. Short lists recurse on midpoints; lists longer
    /// than the configured limit are merged bottom-up.
    #[instrument(level = "trace", skip(self))]
    pub fn merge_sort(&mut self, head: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
        let len = self.len(head)?;
        let limit = self.config().recursive_sort_limit;
        if len > limit {
            debug!(len, limit, "list exceeds recursive sort limit, merging bottom-up");
            return self.sort_bottom_up(head, len);
        }
        self.sort_recursive(head)
    }

    /// Iterative merge sort; same result as `merge_sort` without recursion.
    pub fn merge_sort_bottom_up(
        &mut self,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        let len = self.len(head)?;
        self.sort_bottom_up(head, len)
    }

    fn sort_recursive(&mut self, head: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
        let Some(first) = head else {
            return Ok(None);
        };
        if self.next(first)?.is_none() {
            return Ok(head);
        }
        let right = self.cut_at_middle(first)?;
        let left = self.sort_recursive(head)?;
        let right = self.sort_recursive(right)?;
        Ok(self.merge_runs(left, right)?.map(|merged| merged.head))
    }

    /// Detach and return the back half, which starts at the second middle
    /// node on even lengths.
    fn cut_at_middle(&mut self, head: NodeId) -> Result<Option<NodeId>, ListError> {
        let (mut prev, mut slow, mut fast) = (None, Some(head), Some(head));
        while let Some(hare) = fast {
            let Some(stride) = self.next(hare)? else {
                break;
            };
            prev = slow;
            slow = self.follow(slow)?;
            fast = self.next(stride)?;
        }
        if let Some(prev) = prev {
            self.set_next(prev, None)?;
        }
        Ok(slow)
    }

    fn sort_bottom_up(
        &mut self,
        mut head: Option<NodeId>,
        len: usize,
    ) -> Result<Option<NodeId>, ListError> {
        let mut width = 1;
        while width < len {
            let mut pass = Chain::new();
            let mut rest = head;
            while rest.is_some() {
                let (left, after_left) = self.cut_after(rest, width)?;
                let (right, after_right) = self.cut_after(after_left, width)?;
                if let Some(run) = self.merge_runs(left, right)? {
                    pass.push_segment(self, run)?;
                }
                rest = after_right;
            }
            head = pass.finish();
            width *= 2;
        }
        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolkitConfig;

    #[test]
    fn merge_interleaves() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_values(&[1, 4, 6]);
        let b = arena.alloc_values(&[2, 3, 7, 9]);
        let merged = arena.merge_sorted(a, b).unwrap();
        assert_eq!(arena.values(merged).unwrap(), vec![1, 2, 3, 4, 6, 7, 9]);
        assert_eq!(arena.live(), 7);
    }

    #[test]
    fn merge_ties_prefer_first_list() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_values(&[5]);
        let b = arena.alloc_values(&[5]);
        let merged = arena.merge_sorted(a, b).unwrap();
        assert_eq!(merged, a);
        assert_eq!(arena.next(merged.unwrap()).unwrap(), b);
    }

    #[test]
    fn merge_with_empty_side() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_values(&[1, 2]);
        assert_eq!(arena.merge_sorted(a, None).unwrap(), a);
        assert_eq!(arena.merge_sorted(None, a).unwrap(), a);
        assert_eq!(arena.merge_sorted(None, None).unwrap(), None);
    }

    #[test]
    fn merge_refuses_shared_nodes() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_values(&[1, 2, 3]);
        assert_eq!(arena.merge_sorted(a, a), Err(ListError::SharedNodes(a.unwrap())));
        assert_eq!(arena.values(a).unwrap(), vec![1, 2, 3]);

        let a = arena.alloc_values(&[1, 4, 6]);
        let suffix = arena.nth(a, 1).unwrap();
        assert_eq!(
            arena.merge_sorted(a, suffix),
            Err(ListError::SharedNodes(suffix.unwrap()))
        );
        assert_eq!(arena.values(a).unwrap(), vec![1, 4, 6]);
    }

    #[test]
    fn sorts_small_lists() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.merge_sort(None).unwrap(), None);

        let one = arena.alloc_values(&[3]);
        assert_eq!(arena.merge_sort(one).unwrap(), one);

        let head = arena.alloc_values(&[5, -1, 3, 3, 0, 8, 2]);
        let sorted = arena.merge_sort(head).unwrap();
        assert_eq!(arena.values(sorted).unwrap(), vec![-1, 0, 2, 3, 3, 5, 8]);
    }

    #[test]
    fn midpoint_takes_second_middle() {
        let mut arena = NodeArena::new();
        let head = arena.alloc_values(&[1, 2, 3, 4]).unwrap();
        let back = arena.cut_at_middle(head).unwrap();
        assert_eq!(arena.values(Some(head)).unwrap(), vec![1, 2]);
        assert_eq!(arena.values(back).unwrap(), vec![3, 4]);

        let head = arena.alloc_values(&[1, 2]).unwrap();
        let back = arena.cut_at_middle(head).unwrap();
        assert_eq!(arena.values(Some(head)).unwrap(), vec![1]);
        assert_eq!(arena.values(back).unwrap(), vec![2]);
    }

    #[test]
    fn long_lists_switch_to_bottom_up() {
        let config = ToolkitConfig {
            recursive_sort_limit: 4,
            ..ToolkitConfig::default()
        };
        let mut arena = NodeArena::with_config(config);
        let values: Vec<i64> = (0..37).map(|i| (i * 17) % 23 - 11).collect();
        let head = arena.alloc_values(&values);
        let sorted = arena.merge_sort(head).unwrap();

        let mut expected = values;
        expected.sort();
        assert_eq!(arena.values(sorted).unwrap(), expected);
        assert_eq!(arena.live(), 37);
    }

    #[test]
    fn bottom_up_is_stable() {
        let mut arena = NodeArena::new();
        let head = arena.alloc_values(&[2, 1, 2, 1]);
        let first_two = head;
        let first_one = arena.nth(head, 1).unwrap();
        let sorted = arena.merge_sort_bottom_up(head).unwrap();
        assert_eq!(arena.values(sorted).unwrap(), vec![1, 1, 2, 2]);
        assert_eq!(sorted, first_one);
        assert_eq!(arena.nth(sorted, 2).unwrap(), first_two);
    }

    #[test]
    fn sort_rejects_cycle() {
        let mut arena = NodeArena::new();
        let head = arena.alloc_values(&[3, 1, 2]);
        let tail = arena.tail(head).unwrap().unwrap();
        arena.set_next(tail, head).unwrap();
        assert_eq!(arena.merge_sort(head), Err(ListError::Cyclic));
    }
}
