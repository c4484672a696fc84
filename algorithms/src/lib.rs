//! # Algorithms Crate
//!
//! Classic data-structure algorithms, organized by category.
//!
//! ## Modules
//!
//! - `data_structures` – Arena-backed singly-linked lists (reversal, splitting, cycles,
//!   merge sort, circular insert, intersection) and in-place array utilities
//! - `searching` – Closed-interval binary search, rotated-array minimum
//! - `numerical` – Bit manipulation on 64-bit words
//! - `string_algorithms` – Letter frequency and anagram check
//! - `config` – Toolkit tunables (arena sizing, recursive sort limit)
//! - `error` – Crate-wide error type
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::data_structures::linked_list::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let head = arena.alloc_values(&[1, 2, 3, 4, 5]);
//! let head = arena.delete_kth_from_end(head, 2)?;
//! assert_eq!(arena.display(head).to_string(), "1 -> 2 -> 3 -> 5");
//! # Ok::<(), algorithms::Error>(())
//! ```
//!
//! ---
//!
//! Every operation is synchronous and works on caller-owned memory.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod numerical;
pub mod searching;
pub mod string_algorithms;

pub use error::{Error, Result};
