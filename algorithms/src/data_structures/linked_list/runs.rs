//! Operations that find maximal runs of nodes and splice them out or around.
//! Both walk behind a sentinel so a run starting at the head needs no special case.

use tracing::{instrument, trace};

use super::{ListError, NodeArena, NodeId};

fn is_even(value: i64) -> bool {
    value % 2 == 0
}

impl NodeArena {
    /// Drop every value that occurs more than once in a sorted chain,
    /// keeping no copy of it. `1 -> 1 -> 2 -> 3 -> 3` becomes `2`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_duplicates_sorted(
        &mut self,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        self.len(head)?;
        self.with_sentinel(head, |list, sentinel| {
            let mut prev = sentinel;
            let mut cur = list.next(sentinel)?;
            while let Some(start) = cur {
                let value = list.value(start)?;
                let mut end = start;
                while let Some(next) = list.next(end)? {
                    if list.value(next)? != value {
                        break;
                    }
                    end = next;
                }
                let after = list.next(end)?;
                if end == start {
                    prev = start;
                } else {
                    trace!(value, "dropping repeated value");
                    list.set_next(prev, after)?;
                    list.release_run(start, end)?;
                }
                cur = after;
            }
            Ok(())
        })
    }

    /// Reverse every maximal run of two or more even values in place.
    /// Odd nodes and lone even nodes keep their positions.
    #[instrument(level = "trace", skip(self))]
    pub fn reverse_contiguous_even_runs(
        &mut self,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        self.len(head)?;
        self.with_sentinel(head, |list, sentinel| {
            let mut prev = sentinel;
            let mut cur = list.next(sentinel)?;
            while let Some(start) = cur {
                if !is_even(list.value(start)?) {
                    prev = start;
                    cur = list.next(start)?;
                    continue;
                }
                let (mut end, mut run) = (start, 1);
                while let Some(next) = list.next(end)? {
                    if !is_even(list.value(next)?) {
                        break;
                    }
                    end = next;
                    run += 1;
                }
                if run < 2 {
                    prev = end;
                    cur = list.next(end)?;
                    continue;
                }
                trace!(run, "reversing even run");
                let after = list.set_next(end, None)?;
                list.reverse(Some(start))?;
                list.set_next(prev, Some(end))?;
                list.set_next(start, after)?;
                prev = start;
                cur = after;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type ListOp = fn(&mut NodeArena, Option<NodeId>) -> Result<Option<NodeId>, ListError>;

    fn run(values: &[i64], op: ListOp) -> Vec<i64> {
        let mut arena = NodeArena::new();
        let head = arena.alloc_values(values);
        let out = op(&mut arena, head).unwrap();
        let result = arena.values(out).unwrap();
        assert_eq!(arena.live(), result.len(), "unlinked nodes must be released");
        result
    }

    #[test]
    fn duplicates_vanish_entirely() {
        let dedup = NodeArena::remove_duplicates_sorted;
        assert_eq!(run(&[1, 2, 3, 3, 4, 4, 5], dedup), vec![1, 2, 5]);
        assert_eq!(run(&[1, 1, 1, 2, 3], dedup), vec![2, 3]);
        assert_eq!(run(&[1, 1, 2, 2], dedup), Vec::<i64>::new());
        assert_eq!(run(&[7], dedup), vec![7]);
        assert_eq!(run(&[], dedup), Vec::<i64>::new());
    }

    #[test]
    fn even_runs_reverse() {
        let flip = NodeArena::reverse_contiguous_even_runs;
        assert_eq!(run(&[2, 4, 6, 1, 3, 8, 10], flip), vec![6, 4, 2, 1, 3, 10, 8]);
        assert_eq!(run(&[2, 4, 6, 1, 3, 8, 8, 5], flip), vec![6, 4, 2, 1, 3, 8, 8, 5]);
    }

    #[test]
    fn lone_evens_and_odds_stay_put() {
        let flip = NodeArena::reverse_contiguous_even_runs;
        assert_eq!(run(&[1, 2, 3, 4, 5], flip), vec![1, 2, 3, 4, 5]);
        assert_eq!(run(&[2], flip), vec![2]);
        assert_eq!(run(&[], flip), Vec::<i64>::new());
        assert_eq!(run(&[-4, 0, -3, 6, 2, -2], flip), vec![0, -4, -3, -2, 2, 6]);
    }

    #[test]
    fn even_run_reversal_keeps_node_identity() {
        let mut arena = NodeArena::new();
        let head = arena.alloc_values(&[1, 2, 4]);
        let two = arena.nth(head, 1).unwrap();
        let four = arena.nth(head, 2).unwrap();
        let out = arena.reverse_contiguous_even_runs(head).unwrap();
        assert_eq!(out, head);
        assert_eq!(arena.nth(out, 1).unwrap(), four);
        assert_eq!(arena.nth(out, 2).unwrap(), two);
    }
}
