use rainbow_core::bits::{bit, bit_test, popcount, SetBits, WORD_BITS};
use rainbow_core::errors::{ErrorInfo, RcError};
use rainbow_core::{normalize_edge, Edge, VertexId};

/// Largest vertex count a [`Graph`] can hold: one adjacency bit per vertex.
pub const MAX_VERTICES: usize = WORD_BITS;

/// Undirected simple graph on at most [`MAX_VERTICES`] vertices.
///
/// Adjacency is one `u64` mask per vertex (bit `j` of `adjacency[i]` is set
/// iff `{i, j}` is an edge). The edge list keeps insertion order and stores
/// every undirected edge once.
///
/// The type is deliberately not `Clone`: algorithms that need a variant of
/// the graph build a fresh one from an edge list.
#[derive(Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<u64>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an edgeless graph on `n` vertices, `1 <= n <= 64`.
    pub fn new(n: usize) -> Result<Self, RcError> {
        if n == 0 {
            return Err(RcError::Graph(ErrorInfo::new(
                "empty-graph",
                "a graph needs at least one vertex",
            )));
        }
        if n > MAX_VERTICES {
            return Err(capacity_error(n));
        }
        Ok(Self {
            adjacency: vec![0; n],
            edges: Vec::new(),
        })
    }

    /// Builds a graph on `n` vertices from an edge list.
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self, RcError> {
        let mut graph = Self::new(n)?;
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Rejects out-of-range endpoints, self-loops and edges that already
    /// exist, so degrees and the edge list always agree with the masks.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), RcError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(RcError::Graph(
                ErrorInfo::new("self-loop", "edge endpoints must differ").with_context("vertex", u),
            ));
        }
        if bit_test(self.adjacency[u], v) {
            return Err(RcError::Graph(
                ErrorInfo::new("duplicate-edge", "edge already present")
                    .with_context("u", u)
                    .with_context("v", v),
            ));
        }
        self.adjacency[u] |= bit(v);
        self.adjacency[v] |= bit(u);
        self.edges.push((u, v));
        Ok(())
    }

    /// Number of neighbours of `v`. Zero for indices outside the graph.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency
            .get(v)
            .map_or(0, |mask| popcount(*mask) as usize)
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order, as they were passed to [`Graph::add_edge`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges in insertion order with the smaller endpoint first.
    pub fn normalized_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|&(u, v)| normalize_edge(u, v))
    }

    /// Adjacency mask of `v`. Zero for indices outside the graph.
    pub fn neighbour_mask(&self, v: VertexId) -> u64 {
        self.adjacency.get(v).copied().unwrap_or(0)
    }

    /// Neighbours of `v` in increasing index order.
    pub fn neighbours(&self, v: VertexId) -> SetBits {
        SetBits::new(self.neighbour_mask(v))
    }

    /// Iterates vertex indices `0..n`.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.adjacency.len()
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<(), RcError> {
        if v < self.adjacency.len() {
            Ok(())
        } else {
            Err(RcError::Graph(
                ErrorInfo::new("vertex-out-of-range", "vertex index outside the graph")
                    .with_context("vertex", v)
                    .with_context("num_vertices", self.adjacency.len()),
            ))
        }
    }
}

/// Returns whether `{u, v}` is an edge of `graph`.
///
/// Kept as a free function so callers never depend on the mask layout.
/// Out-of-range indices are simply not adjacent.
pub fn is_adjacent(graph: &Graph, u: VertexId, v: VertexId) -> bool {
    u < graph.num_vertices() && bit_test(graph.neighbour_mask(u), v)
}

pub(crate) fn capacity_error(n: usize) -> RcError {
    RcError::Graph(
        ErrorInfo::new("vertex-capacity", "graphs are limited to 64 vertices")
            .with_context("requested", n)
            .with_hint("vertex sets are packed into a single 64-bit word"),
    )
}
