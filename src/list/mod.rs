//! # Singly Linked List Module
//!
//! This module implements the classic singly-linked-list drill set: insertion
//! at either end, search, deletion, in-place reversal, loop tooling (Floyd's
//! tortoise and hare plus a deliberate loop inserter for exercising it),
//! mid-point and nth-from-end queries, duplicate removal, and union of two
//! lists.
//!
//! ## Representation
//!
//! Nodes live in an arena owned by the list: a vector of slots addressed by
//! index, with successor links stored as optional indices. This keeps the
//! structure free of shared or raw pointers while still allowing a chain to
//! be deliberately tied into a loop for `detect_loop`. Slots spliced out by
//! `delete` or `remove_duplicates` simply become unreachable from the head.
//!
//! ## Example
//!
//! ```
//! use chainspect::list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! for value in [1, 2, 3] {
//!     list.insert_at_tail(value);
//! }
//!
//! assert_eq!(list.elements(), "1->2->3->null");
//! assert_eq!(list.find_mid(), 2);
//! assert_eq!(list.find_nth(1), 3);
//! assert!(!list.detect_loop());
//! ```

mod list_impl;

pub use list_impl::SinglyLinkedList;
