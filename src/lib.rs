//! # Chainspect - Linked-List Drills and Cycle Detection
//!
//! Chainspect is a teaching collection of classic singly-linked-list
//! operations paired with a DFS-based directed-graph cycle detector. The
//! list is the core: insertion at either end, search, deletion, in-place
//! reversal, Floyd's tortoise-and-hare loop detection (with a deliberate
//! loop inserter for exercising it), mid-point and nth-from-end queries,
//! duplicate removal, and union of two lists. The graph is a small
//! independent collaborator.
//!
//! ## Main Components
//!
//! - **List**: arena-backed singly linked list with the full drill set
//! - **Graph**: adjacency-list directed graph with an iterative DFS cycle
//!   detector
//! - **Reports**: human-readable and machine-readable run reports
//!
//! ## Usage
//!
//! ### Example: Running the List Drills
//!
//! ```
//! use chainspect::list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! for value in [10, 20, 30] {
//!     list.insert_at_tail(value);
//! }
//!
//! assert_eq!(list.elements(), "10->20->30->null");
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.find_nth(1), 30);
//!
//! assert!(list.delete(20));
//! assert_eq!(list.reverse(), "30->10->null");
//!
//! // Merging consumes the second list: its nodes move into the first.
//! let mut other = SinglyLinkedList::new();
//! other.insert_at_tail(10);
//! other.insert_at_tail(40);
//! assert_eq!(list.union(other), "30->10->40->null");
//! ```
//!
//! ### Example: Loop Tooling
//!
//! ```
//! use chainspect::list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! for value in [1, 2, 3] {
//!     list.insert_at_tail(value);
//! }
//! assert!(!list.detect_loop());
//!
//! // Tie the tail back to the head. After this, traversal-based
//! // operations on the list no longer terminate; only detect_loop is safe.
//! list.insert_loop();
//! assert!(list.detect_loop());
//! ```
//!
//! ### Example: Detecting Graph Cycles
//!
//! ```
//! use chainspect::graph::CycleGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = CycleGraph::new(5);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 3)?;
//! graph.add_edge(3, 1)?;
//! graph.add_edge(3, 4)?;
//!
//! assert!(graph.has_cycle());
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Generating Reports
//!
//! ```
//! use chainspect::commands::walkthrough::run_walkthrough;
//! use chainspect::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let trace = run_walkthrough(&[1, 2, 3]);
//! let report = JsonReportGenerator::new().generate_report(&trace)?;
//! assert!(report.contains("\"title\""));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod graph;
pub mod list;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
