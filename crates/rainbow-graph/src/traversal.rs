//! Breadth-first distances, connectivity, diameter and bridges.

use std::collections::VecDeque;

use rainbow_core::bits::{bit, bit_test, low_bits, popcount, trailing_zeros};
use rainbow_core::errors::{ErrorInfo, RcError};
use rainbow_core::{normalize_edge, Edge, VertexId};
use tracing::debug;

use crate::graph::Graph;

/// Hop distance produced by [`bfs`].
pub type Distance = i64;

/// Distance assigned to vertices that the search never reached.
pub const UNREACHABLE: Distance = -1;

/// Labels every vertex with its hop distance from `source`.
///
/// `dist` must have exactly one entry per vertex and be all zeros on entry.
/// Afterwards `dist[source] == 0` and vertices in other components hold
/// [`UNREACHABLE`].
pub fn bfs(graph: &Graph, dist: &mut [Distance], source: VertexId) -> Result<(), RcError> {
    let n = graph.num_vertices();
    graph.check_vertex(source)?;
    if dist.len() != n {
        return Err(RcError::Graph(
            ErrorInfo::new("distance-buffer-size", "distance buffer must have one slot per vertex")
                .with_context("expected", n)
                .with_context("actual", dist.len()),
        ));
    }
    if let Some(idx) = dist.iter().position(|&d| d != 0) {
        return Err(RcError::Graph(
            ErrorInfo::new("distance-buffer-dirty", "distance buffer must be zeroed")
                .with_context("index", idx),
        ));
    }

    let mut visited = bit(source);
    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let adjacency = graph.neighbour_mask(v);
        for i in 0..n {
            if bit_test(adjacency, i) && !bit_test(visited, i) {
                dist[i] = dist[v] + 1;
                visited |= bit(i);
                queue.push_back(i);
            }
        }
    }

    for (i, slot) in dist.iter_mut().enumerate() {
        if !bit_test(visited, i) {
            *slot = UNREACHABLE;
        }
    }
    Ok(())
}

/// Allocating wrapper around [`bfs`].
pub fn distances_from(graph: &Graph, source: VertexId) -> Result<Vec<Distance>, RcError> {
    let mut dist = vec![0; graph.num_vertices()];
    bfs(graph, &mut dist, source)?;
    Ok(dist)
}

/// Returns whether every vertex is reachable from vertex `0`.
///
/// The frontier is itself a bitmask: the lowest pending vertex is expanded
/// next.
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    let mut visited: u64 = 1;
    let mut pending: u64 = 1;

    while pending != 0 {
        debug_assert!(popcount(visited) as usize <= n);
        let v = trailing_zeros(pending) as usize;
        let fresh = graph.neighbour_mask(v) & !visited;
        visited |= fresh;
        pending |= fresh;
        pending &= !bit(v);
    }

    visited == low_bits(n)
}

/// Largest finite distance from `v`.
pub fn eccentricity(graph: &Graph, v: VertexId) -> Result<Distance, RcError> {
    let dist = distances_from(graph, v)?;
    Ok(max_finite(&dist).map_or(0, |(_, d)| d))
}

/// Largest finite distance between any two vertices.
pub fn get_diameter(graph: &Graph) -> Result<Distance, RcError> {
    let mut diameter = 0;
    for v in graph.vertices() {
        diameter = diameter.max(eccentricity(graph, v)?);
    }
    Ok(diameter)
}

/// First vertex pair, in source order, whose distance equals the diameter.
///
/// The pair is returned smaller index first. Failing to find one is an
/// internal defect and surfaces as [`RcError::Invariant`].
pub fn get_diametral_pair(graph: &Graph) -> Result<Edge, RcError> {
    let diameter = get_diameter(graph)?;
    for v in graph.vertices() {
        let dist = distances_from(graph, v)?;
        if let Some((far, d)) = max_finite(&dist) {
            if d == diameter {
                return Ok(normalize_edge(v, far));
            }
        }
    }
    Err(RcError::Invariant(
        ErrorInfo::new("diametral-pair-missing", "no vertex attains the diameter")
            .with_context("diameter", diameter)
            .with_context("num_vertices", graph.num_vertices()),
    ))
}

/// Bridges of `graph` in edge-list order, each as `(min, max)`.
///
/// Each candidate edge is tested by building an independent graph from
/// every other edge and checking connectivity. A graph that is already
/// disconnected therefore reports every edge.
pub fn get_bridges(graph: &Graph) -> Result<Vec<Edge>, RcError> {
    let edges = graph.edges();
    let mut bridges = Vec::new();
    for (idx, &candidate) in edges.iter().enumerate() {
        let mut probe = Graph::new(graph.num_vertices())?;
        for (other, &(u, v)) in edges.iter().enumerate() {
            if other != idx {
                probe.add_edge(u, v)?;
            }
        }
        if !is_connected(&probe) {
            let bridge = normalize_edge(candidate.0, candidate.1);
            debug!(u = bridge.0, v = bridge.1, "bridge found");
            bridges.push(bridge);
        }
    }
    Ok(bridges)
}

/// First index holding the maximum finite distance.
fn max_finite(dist: &[Distance]) -> Option<(VertexId, Distance)> {
    let mut best: Option<(VertexId, Distance)> = None;
    for (idx, &d) in dist.iter().enumerate() {
        if d == UNREACHABLE {
            continue;
        }
        match best {
            Some((_, current)) if d <= current => {}
            _ => best = Some((idx, d)),
        }
    }
    best
}
