//! # Multigraph
//!
//! An in-memory undirected graph of vertices named `0` through `V-1`, stored
//! as one resizing-array bag of neighbor identifiers per vertex.
//!
//! This crate provides:
//! - A [`bag::Bag`] container with amortized O(1) append and restartable,
//!   read-only iteration.
//! - A [`graph::Graph`] built on per-vertex bags, supporting incremental edge
//!   insertion, random construction with an injected generator, and reading
//!   from a whitespace-token stream. Parallel edges and self-loops are
//!   permitted.
//!
//! ## Quick Start
//!
//! ```
//! use multigraph::graph::Graph;
//!
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//! g.add_edge(2, 2); // self-loop
//!
//! assert_eq!(g.vertex_count(), 4);
//! assert_eq!(g.edge_count(), 3);
//! assert_eq!(g.adjacent(1).collect::<Vec<_>>(), [0, 2]);
//! ```
//!
//! ## Reading from a Token Stream
//!
//! ```
//! use multigraph::graph::Graph;
//!
//! let input = "3 2\n0 1\n1 2\n";
//! let g = Graph::from_reader(input.as_bytes()).unwrap();
//! assert_eq!(g.edge_count(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`bag`]: Append-only multiset backed by a doubling array.
//! - [`graph`]: The graph type, its constructors, and the stream reader.
//!
//! ## Notes
//!
//! - The graph is single-threaded: it relies on Rust's ownership rules rather
//!   than internal synchronization.
//! - Cloning a graph is the sanctioned way to obtain an independent replica;
//!   the clone preserves every adjacency sequence exactly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)] // Vertex names are mathematical
#![allow(clippy::needless_range_loop)] // Often clearer when the index is a vertex name

pub mod bag;
pub mod graph;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::bag::Bag;
    pub use crate::graph::{Graph, GraphReadError};
}
