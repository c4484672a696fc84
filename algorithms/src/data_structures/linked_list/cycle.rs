//! Floyd cycle detection and repair.
//!
//! Variables:
//!   mu     : steps from head to the first node of the cycle
//!   lambda : cycle length
//!
//! Equations:
//!   slow moves 1, fast moves 2; they meet inside the cycle after O(mu + lambda) steps.
//!   From the meeting point, mu more steps land on the cycle start, so one walker
//!   from head and one from the meeting point collide exactly there.

use tracing::{instrument, trace};

use super::{ListError, NodeArena, NodeId};

impl NodeArena {
    /// Tortoise and hare. Returns the node where the two pointers collide,
    /// or `None` when the chain ends.
    pub fn detect_cycle(&self, head: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
        let (mut slow, mut fast) = (head, head);
        loop {
            let Some(hare) = fast else {
                return Ok(None);
            };
            let Some(stride) = self.next(hare)? else {
                return Ok(None);
            };
            fast = self.next(stride)?;
            slow = self.follow(slow)?;
            if fast.is_some() && fast == slow {
                trace!(meeting = ?fast, "pointers collided");
                return Ok(fast);
            }
        }
    }

    /// First node of the cycle, given a meeting point from `detect_cycle`.
    #[instrument(level = "trace", skip(self))]
    pub fn find_cycle_start(&self, head: NodeId, meeting: NodeId) -> Result<NodeId, ListError> {
        if self.cycle_predecessor(meeting)?.is_none() {
            return Err(ListError::NotOnCycle(meeting));
        }
        let (mut from_head, mut from_meeting) = (head, meeting);
        let mut steps = 0;
        while from_head != from_meeting {
            steps += 1;
            if steps > self.live() {
                return Err(ListError::NotOnCycle(meeting));
            }
            from_head = self.next(from_head)?.ok_or(ListError::NotOnCycle(meeting))?;
            from_meeting = self.next(from_meeting)?.ok_or(ListError::NotOnCycle(meeting))?;
        }
        Ok(from_head)
    }

    /// Cut the link that closes the cycle through `cycle_start`.
    pub fn break_cycle(&mut self, cycle_start: Option<NodeId>) -> Result<(), ListError> {
        let Some(start) = cycle_start else {
            return Ok(());
        };
        let last = self
            .cycle_predecessor(start)?
            .ok_or(ListError::NotOnCycle(start))?;
        trace!(%start, %last, "breaking cycle");
        self.set_next(last, None)?;
        Ok(())
    }

    /// Node whose successor is `start` when walking around the loop from
    /// `start`, or `None` if `start` is not on a loop.
    pub(super) fn cycle_predecessor(&self, start: NodeId) -> Result<Option<NodeId>, ListError> {
        let mut cur = start;
        for _ in 0..self.live() {
            match self.next(cur)? {
                Some(next) if next == start => return Ok(Some(cur)),
                Some(next) => cur = next,
                None => return Ok(None),
            }
        }
        Ok(None)
    }
}
