//! # Directed Graph Cycle Detection Module
//!
//! A small adjacency-list directed graph with a DFS-based cycle detector.
//!
//! ## Algorithm
//!
//! Depth-first search tracking two per-vertex marks: `visited` and
//! `on_stack`, the latter active only while a vertex's exploration is
//! unfinished. An edge into an on-stack vertex is a back edge and signals a
//! cycle. Every unvisited vertex is used as a DFS root, so disconnected
//! graphs are handled. The search runs on an explicit stack of
//! (vertex, neighbor-position) frames rather than recursion, so deep graphs
//! cannot overflow the call stack. O(V + E).
//!
//! ## Example
//!
//! ```
//! use chainspect::graph::CycleGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = CycleGraph::new(3);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 0)?;
//!
//! assert!(graph.has_cycle());
//! # Ok(())
//! # }
//! ```

mod cycle;

pub use cycle::CycleGraph;
