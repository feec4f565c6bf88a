//! Undirected graph of vertices named `0..V-1`, stored as one [`Bag`] of
//! neighbor identifiers per vertex. Parallel edges and self-loops are allowed.

use crate::bag::{self, Bag};
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// An undirected graph backed by per-vertex adjacency bags.
///
/// Representation:
/// - `adj[v]` is the bag of neighbors of vertex `v`.
/// - An edge `(v, w)` is stored redundantly: `w` appears in `adj[v]` and `v`
///   appears in `adj[w]`. A self-loop `(v, v)` puts `v` into `adj[v]` twice.
/// - `e` counts `add_edge` calls, not adjacency entries (which total `2E`).
///
/// The vertex count is fixed at construction; edges are added incrementally
/// and never removed. Cloning yields an independent deep copy whose adjacency
/// sequences match the original exactly.
#[derive(Clone, Debug)]
pub struct Graph {
    v: usize,
    e: usize,
    adj: Vec<Bag>,
}

impl Graph {
    /// Creates an empty graph with `v` vertices and no edges.
    pub fn new(v: usize) -> Self {
        Self {
            v,
            e: 0,
            adj: (0..v).map(|_| Bag::new()).collect(),
        }
    }

    /// Creates a graph with `v` vertices and `e` edges drawn uniformly at
    /// random, self-loops and parallel edges included.
    ///
    /// The generator is injected so callers control seeding; pass a seeded
    /// generator for reproducible graphs. Expected running time is
    /// proportional to `v + e`.
    ///
    /// # Panics
    /// Panics if `e > 0` and `v == 0`: there are no vertices to connect.
    pub fn with_random_edges<R: Rng>(v: usize, e: usize, rng: &mut R) -> Self {
        assert!(e == 0 || v > 0, "cannot add edges to a graph with no vertices");
        let mut graph = Self::new(v);
        for _ in 0..e {
            let a = rng.random_range(0..v);
            let b = rng.random_range(0..v);
            graph.add_edge(a, b);
        }
        graph
    }

    /// Reads a graph from a stream of whitespace-separated integers:
    /// the vertex count `V`, the edge count `E`, then `E` pairs of endpoints.
    ///
    /// # Errors
    /// Returns an error if reading fails or a token is missing or not a
    /// nonnegative integer.
    ///
    /// # Panics
    /// Panics if an endpoint is out of range, through the same check
    /// [`add_edge`](Self::add_edge) applies to every edge.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GraphReadError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| GraphReadError::Io(e.to_string()))?;

        let mut tokens = text.split_whitespace();
        let v = next_count(&mut tokens, "vertex count")?;
        let e = next_count(&mut tokens, "edge count")?;
        let mut graph = Self::new(v);
        for _ in 0..e {
            let a = next_count(&mut tokens, "edge endpoint")?;
            let b = next_count(&mut tokens, "edge endpoint")?;
            graph.add_edge(a, b);
        }
        Ok(graph)
    }

    /// Reads a graph from a file in the format accepted by
    /// [`from_reader`](Self::from_reader).
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are
    /// malformed.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self, GraphReadError> {
        let file = File::open(filename).map_err(|e| GraphReadError::Io(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the number of vertices in the graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.v
    }

    /// Returns the number of edges in the graph.
    ///
    /// Each `add_edge` call counts as one edge, including self-loops and
    /// repeated parallel edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.e
    }

    /// Adds the undirected edge `(v, w)`, appending `w` to `v`'s bag and `v`
    /// to `w`'s bag. A self-loop appends `v` to its own bag twice but still
    /// counts as a single edge.
    ///
    /// # Panics
    /// Panics unless both `v < vertex_count()` and `w < vertex_count()`.
    /// Nothing is mutated when the check fails.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        self.check_vertex(v);
        self.check_vertex(w);
        self.e += 1;
        self.adj[v].add(w);
        self.adj[w].add(v);
    }

    /// Returns an iterator over the neighbors of `v`, in the order `v`'s bag
    /// holds them. Parallel edges and self-loops appear with their stored
    /// multiplicity.
    ///
    /// # Panics
    /// Panics unless `v < vertex_count()`.
    pub fn adjacent(&self, v: usize) -> bag::Iter<'_> {
        self.check_vertex(v);
        self.adj[v].iter()
    }

    /// Returns the degree of vertex `v`: the number of adjacency entries in
    /// its bag. A self-loop contributes 2.
    ///
    /// # Panics
    /// Panics unless `v < vertex_count()`.
    pub fn degree(&self, v: usize) -> usize {
        self.check_vertex(v);
        self.adj[v].len()
    }

    #[inline]
    fn check_vertex(&self, v: usize) {
        assert!(
            v < self.v,
            "vertex {v} is out of range for a graph of order {}",
            self.v
        );
    }
}

impl fmt::Display for Graph {
    /// Renders the vertex and edge counts followed by one adjacency line per
    /// vertex. Display-only; the format is not meant to be re-parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.v, self.e)?;
        for v in 0..self.v {
            write!(f, "{v}:")?;
            for w in self.adj[v].iter() {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the next token as a nonnegative integer.
fn next_count<'a, I>(tokens: &mut I, expected: &'static str) -> Result<usize, GraphReadError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(GraphReadError::MissingToken { expected })?;
    token.parse().map_err(|_| GraphReadError::InvalidToken {
        token: token.to_string(),
    })
}

/// Errors encountered while reading a graph from a token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphReadError {
    /// The input ended before the expected token.
    MissingToken {
        /// What the missing token would have been.
        expected: &'static str,
    },
    /// A token was not a nonnegative integer.
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// I/O error (file not found, read failure, etc.).
    Io(String),
}

impl fmt::Display for GraphReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphReadError::MissingToken { expected } => {
                write!(f, "unexpected end of input: expected {expected}")
            }
            GraphReadError::InvalidToken { token } => {
                write!(f, "invalid token {token:?}: expected a nonnegative integer")
            }
            GraphReadError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for GraphReadError {}

// ============================================================================
// Tests
// ============================================================================
