//! Junction of two chains that share a tail.
//!
//! Variables:
//!   m, n : lengths of the two chains
//!
//! Equations:
//!   skip |m - n| nodes on the longer chain, then step both until a == b   O(m + n)
//!   a == b compares handles, so equal values on distinct nodes never match

use super::{ListError, NodeArena, NodeId};

impl NodeArena {
    /// First node shared by two acyclic chains (by identity), if any.
    ///
    /// The longer chain is advanced by the length difference so both walkers
    /// are the same distance from the end; they then meet at the junction.
    pub fn get_intersection(
        &self,
        head_a: Option<NodeId>,
        head_b: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        let (len_a, len_b) = (self.len(head_a)?, self.len(head_b)?);
        let (mut a, mut b) = (head_a, head_b);
        for _ in len_b..len_a {
            a = self.follow(a)?;
        }
        for _ in len_a..len_b {
            b = self.follow(b)?;
        }
        while a != b {
            a = self.follow(a)?;
            b = self.follow(b)?;
        }
        Ok(a)
    }
}
