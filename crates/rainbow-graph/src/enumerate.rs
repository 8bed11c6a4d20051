//! Backtracking enumeration of simple paths between two vertices.
//!
//! Both searches visit neighbours lowest index first, so the output order is
//! fully determined by the graph.

use std::collections::VecDeque;

use rainbow_core::bits::{bit, bit_test};
use rainbow_core::errors::RcError;
use rainbow_core::VertexId;

use crate::graph::Graph;
use crate::path::{EdgePath, OnPath, PathAccumulator};
use crate::traversal::{distances_from, Distance};

/// Length bound that never cuts a search short.
pub const UNBOUNDED: usize = usize::MAX;

/// Every simple path from `s` to `t` with at most `length_bound` edges.
///
/// A path is recorded as soon as it reaches `t` and is never extended past
/// it. Pass [`UNBOUNDED`] for all simple paths; the running time is then
/// exponential in the worst case (cliques).
pub fn list_paths<P: PathAccumulator>(
    graph: &Graph,
    s: VertexId,
    t: VertexId,
    length_bound: usize,
) -> Result<Vec<P>, RcError> {
    graph.check_vertex(s)?;
    graph.check_vertex(t)?;
    let mut paths = Vec::new();
    let mut current = P::default();
    walk_bounded(graph, s, t, length_bound, &mut current, &mut paths);
    Ok(paths)
}

fn walk_bounded<P: PathAccumulator>(
    graph: &Graph,
    current: VertexId,
    t: VertexId,
    length_bound: usize,
    path: &mut P,
    paths: &mut Vec<P>,
) {
    let mut path = OnPath::enter(path, current);
    if current == t {
        paths.push((*path).clone());
        return;
    }
    for next in graph.neighbours(current) {
        // bound first: a full-length path stops expanding even if some
        // neighbours are still unvisited
        if path.size() >= length_bound {
            break;
        }
        if !path.contains_vertex(next) {
            walk_bounded(graph, next, t, length_bound, &mut *path, paths);
        }
    }
}

/// Every shortest path from `s` to `t`.
///
/// Distances are measured from `t`; the search only steps to neighbours
/// strictly closer to `t`, so each recorded path has exactly `dist(s, t)`
/// edges. Returns an empty list when `t` is unreachable from `s`.
pub fn list_shortest_paths<P: PathAccumulator>(
    graph: &Graph,
    s: VertexId,
    t: VertexId,
) -> Result<Vec<P>, RcError> {
    graph.check_vertex(s)?;
    graph.check_vertex(t)?;
    let dist = distances_from(graph, t)?;
    let mut paths = Vec::new();
    let mut current = P::default();
    let mut seeded = OnPath::enter(&mut current, s);
    walk_descending(graph, s, t, &dist, &mut *seeded, &mut paths);
    Ok(paths)
}

fn walk_descending<P: PathAccumulator>(
    graph: &Graph,
    current: VertexId,
    t: VertexId,
    dist: &[Distance],
    path: &mut P,
    paths: &mut Vec<P>,
) {
    if current == t {
        paths.push(path.clone());
    }
    // dist[t] == 0, so nothing is explored past the target
    for next in graph.neighbours(current) {
        if dist[next] < dist[current] {
            let mut guard = OnPath::enter(&mut *path, next);
            walk_descending(graph, next, t, dist, &mut *guard, paths);
        }
    }
}

/// One shortest path from `s` to `t`, or `None` when `t` is unreachable.
///
/// Ties are broken towards the predecessor discovered first, i.e. the
/// lowest-index vertex of the previous BFS layer.
pub fn get_shortest_path(
    graph: &Graph,
    s: VertexId,
    t: VertexId,
) -> Result<Option<EdgePath>, RcError> {
    graph.check_vertex(s)?;
    graph.check_vertex(t)?;
    let n = graph.num_vertices();
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = bit(s);
    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        if v == t {
            break;
        }
        for next in graph.neighbours(v) {
            if !bit_test(visited, next) {
                visited |= bit(next);
                predecessor[next] = Some(v);
                queue.push_back(next);
            }
        }
    }

    if !bit_test(visited, t) {
        return Ok(None);
    }

    let mut reversed = vec![t];
    let mut cursor = t;
    while cursor != s {
        match predecessor[cursor] {
            Some(prev) => {
                reversed.push(prev);
                cursor = prev;
            }
            None => return Ok(None),
        }
    }

    let mut path = EdgePath::default();
    for &v in reversed.iter().rev() {
        path.discover_vertex(v);
    }
    Ok(Some(path))
}
