#![allow(non_snake_case)]

//!
//! A small library of depth-first reachability queries over directed
//! graphs. Two representations are provided: [nodegraph::NodeGraph], an
//! arena of payload-carrying nodes addressed by integer identifiers, and
//! [adjacency::AdjacencyGraph], a map from a value to the ordered list of
//! its neighbour values. Both may contain cycles, self-loops, parallel
//! arcs and dangling references; every query is guarded by a per-call
//! seen-set and visits each reachable vertex exactly once.
//!
//! ```rust
//! use graphquery::graph::*;
//! use graphquery::nodegraph::NodeGraph;
//! use graphquery::queries::ReachQueries;
//!
//! fn main() {
//!     let graph = NodeGraph::chain(vec!["hi", "world", "a"]);
//!
//!     assert_eq!(graph.short_words(&0, 3), vec!["hi", "a"]);
//!     assert_eq!(graph.longest_word(&0), "world");
//!     assert!(graph.can_reach(&0, &2));
//!     assert!(!graph.can_reach(&2, &0));
//! }
//! ```
//!
//! The same queries work over a value-keyed adjacency map:
//!
//! ```rust
//! use graphquery::adjacency::AdjacencyGraph;
//! use graphquery::queries::ReachQueries;
//!
//! fn main() {
//!     let graph = AdjacencyGraph::from_iter([
//!         ("A", vec!["B"]),
//!         ("B", vec![]),
//!         ("C", vec![]),
//!     ]);
//!
//!     assert_eq!(graph.unreachable(&"A"), ["C"].iter().cloned().collect());
//! }
//! ```

pub mod graph;
pub mod nodegraph;
pub mod adjacency;
pub mod iterators;
pub mod queries;
