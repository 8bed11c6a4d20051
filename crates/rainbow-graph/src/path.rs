//! Path accumulators driven by the backtracking searches.

use std::ops::{Deref, DerefMut};

use rainbow_core::bits::{bit, bit_test, popcount, SetBits};
use rainbow_core::{normalize_edge, Edge, VertexId};
use serde::{Deserialize, Serialize};

/// Capability shared by every path shape a search can fill.
///
/// `discover_vertex` and `backtrack_vertex` behave as a stack: each
/// discovery is undone by exactly one backtrack of the same vertex before
/// the enclosing branch returns. Searches go through [`OnPath`] so the
/// pairing holds on every exit path.
pub trait PathAccumulator: Clone + Default {
    /// Marks `v` as the newest vertex on the path.
    fn discover_vertex(&mut self, v: VertexId);

    /// Removes `v`, which must be the newest vertex on the path.
    fn backtrack_vertex(&mut self, v: VertexId);

    /// Whether `v` currently lies on the path.
    fn contains_vertex(&self, v: VertexId) -> bool;

    /// Path length in edges. Zero for an empty or single-vertex path.
    fn size(&self) -> usize;

    /// Vertices on the path in the accumulator's natural order.
    fn vertices(&self) -> Vec<VertexId>;
}

/// Ordered vertex sequence with a membership mask for O(1) lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgePath {
    visited: u64,
    sequence: Vec<VertexId>,
}

impl EdgePath {
    /// Vertices in discovery order.
    pub fn as_slice(&self) -> &[VertexId] {
        &self.sequence
    }

    /// First vertex, if any.
    pub fn source(&self) -> Option<VertexId> {
        self.sequence.first().copied()
    }

    /// Last vertex, if any.
    pub fn target(&self) -> Option<VertexId> {
        self.sequence.last().copied()
    }

    /// Consecutive vertex pairs, each normalized to `(min, max)`.
    pub fn to_edge_list(&self) -> Vec<Edge> {
        self.sequence
            .windows(2)
            .map(|pair| normalize_edge(pair[0], pair[1]))
            .collect()
    }

    /// Flattened form of [`EdgePath::to_edge_list`]: `[u0, v0, u1, v1, ..]`.
    pub fn to_flat_edge_list(&self) -> Vec<VertexId> {
        self.to_edge_list()
            .into_iter()
            .flat_map(|(u, v)| [u, v])
            .collect()
    }
}

impl PathAccumulator for EdgePath {
    fn discover_vertex(&mut self, v: VertexId) {
        debug_assert!(!bit_test(self.visited, v), "vertex {v} discovered twice");
        self.visited |= bit(v);
        self.sequence.push(v);
    }

    fn backtrack_vertex(&mut self, v: VertexId) {
        debug_assert_eq!(self.sequence.last(), Some(&v));
        self.visited &= !bit(v);
        self.sequence.pop();
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        bit_test(self.visited, v)
    }

    fn size(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.sequence.clone()
    }
}

/// Unordered membership set over the 64 vertex slots.
///
/// Records which vertices take part in a path, not the order they were
/// visited in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexPath {
    members: u64,
}

impl VertexPath {
    /// Raw membership mask.
    pub fn mask(&self) -> u64 {
        self.members
    }

    /// Number of member vertices.
    pub fn len(&self) -> usize {
        popcount(self.members) as usize
    }

    /// Whether no vertex is a member.
    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Members in increasing index order.
    pub fn members(&self) -> SetBits {
        SetBits::new(self.members)
    }

    /// Members other than the endpoints `s` and `t`.
    pub fn internal_vertices(&self, s: VertexId, t: VertexId) -> Vec<VertexId> {
        let mut mask = self.members;
        for endpoint in [s, t] {
            if bit_test(mask, endpoint) {
                mask &= !bit(endpoint);
            }
        }
        SetBits::new(mask).collect()
    }
}

impl PathAccumulator for VertexPath {
    fn discover_vertex(&mut self, v: VertexId) {
        debug_assert!(!bit_test(self.members, v), "vertex {v} discovered twice");
        self.members |= bit(v);
    }

    fn backtrack_vertex(&mut self, v: VertexId) {
        self.members &= !bit(v);
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        bit_test(self.members, v)
    }

    fn size(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.members().collect()
    }
}

/// Scoped "vertex is on the path" marker.
///
/// Discovers the vertex on construction and backtracks it on drop. The
/// guard derefs to the accumulator so the search can recurse through it.
pub struct OnPath<'a, P: PathAccumulator> {
    path: &'a mut P,
    vertex: VertexId,
}

impl<'a, P: PathAccumulator> OnPath<'a, P> {
    /// Discovers `vertex` on `path` until the guard is dropped.
    pub fn enter(path: &'a mut P, vertex: VertexId) -> Self {
        path.discover_vertex(vertex);
        Self { path, vertex }
    }
}

impl<P: PathAccumulator> Deref for OnPath<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.path
    }
}

impl<P: PathAccumulator> DerefMut for OnPath<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.path
    }
}

impl<P: PathAccumulator> Drop for OnPath<'_, P> {
    fn drop(&mut self) {
        self.path.backtrack_vertex(self.vertex);
    }
}
