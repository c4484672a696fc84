//! Singly-linked lists whose nodes live in a [`NodeArena`].
//!
//! Variables:
//!   arena : NodeArena        — owns every node; a list is just a head handle into it
//!   head  : Option<NodeId>   — first node, None for the empty list
//!   N     : usize            — nodes reachable from head
//!
//! Equations:
//!   node.next = Some(id)  links forward;  next may point back (cycles are allowed)
//!   identity:  a == b  <=>  same slot and generation, independent of values
//!   reverse, split, merge, intersection                      O(N)
//!   merge_sort                                               O(N log N)
//!   insert_after, delete_middle_node                         O(1)
//!
//! Every operation returns `Result<_, ListError>`; a violated precondition
//! (stale handle, tail passed where a successor is required, `k` past the end,
//! looping input to an operation that needs an acyclic chain) is reported,
//! never papered over.
//!
//! ```
//! use algorithms::data_structures::linked_list::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let head = arena.alloc_values(&[4, 1, 3]);
//! let sorted = arena.merge_sort(head)?;
//! assert_eq!(arena.values(sorted)?, vec![1, 3, 4]);
//! # Ok::<(), algorithms::data_structures::linked_list::ListError>(())
//! ```

mod arena;
mod chain;
mod circular;
mod cycle;
mod error;
mod intersection;
mod merge;
mod runs;
mod splice;

pub use arena::{ListView, NodeArena, NodeId};
pub use chain::{Chain, Segment};
pub use error::ListError;
