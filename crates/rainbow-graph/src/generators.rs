use rainbow_core::errors::{ErrorInfo, RcError};
use rainbow_core::rng::RngHandle;
use rand::distributions::{Bernoulli, Distribution};

use crate::graph::{capacity_error, Graph, MAX_VERTICES};

/// Complete graph `K_n`.
pub fn build_clique(n: usize) -> Result<Graph, RcError> {
    let mut graph = Graph::new(n)?;
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(i, j)?;
        }
    }
    Ok(graph)
}

/// Path `0 - 1 - .. - (n-1)`.
pub fn build_path(n: usize) -> Result<Graph, RcError> {
    let mut graph = Graph::new(n)?;
    for i in 1..n {
        graph.add_edge(i - 1, i)?;
    }
    Ok(graph)
}

/// Cycle `C_n` with edges `i - (i+1)` and the closing edge `0 - (n-1)`.
pub fn build_cycle(n: usize) -> Result<Graph, RcError> {
    require_at_least("cycle", n, 3)?;
    let mut graph = build_path(n)?;
    graph.add_edge(0, n - 1)?;
    Ok(graph)
}

/// Star with centre `0` and `leaves` leaves `1..=leaves`.
pub fn build_star(leaves: usize) -> Result<Graph, RcError> {
    let mut graph = Graph::new(checked_order(leaves, 1)?)?;
    for leaf in 1..=leaves {
        graph.add_edge(0, leaf)?;
    }
    Ok(graph)
}

/// Complete bipartite graph `K_{p,q}`; sides are `0..p` and `p..p+q`.
pub fn build_biclique(p: usize, q: usize) -> Result<Graph, RcError> {
    require_at_least("biclique side", p.min(q), 1)?;
    let mut graph = Graph::new(checked_order(p, q)?)?;
    for i in 0..p {
        for j in p..(p + q) {
            graph.add_edge(i, j)?;
        }
    }
    Ok(graph)
}

/// Wheel: hub `0` joined to every vertex of the rim cycle `1..=rim`.
pub fn build_wheel(rim: usize) -> Result<Graph, RcError> {
    require_at_least("wheel rim", rim, 3)?;
    let mut graph = Graph::new(checked_order(rim, 1)?)?;
    for i in 1..=rim {
        graph.add_edge(0, i)?;
    }
    for i in 1..rim {
        graph.add_edge(i, i + 1)?;
    }
    graph.add_edge(1, rim)?;
    Ok(graph)
}

/// Corona product `base ⊙ attached`.
///
/// Base vertices keep their indices. For every base vertex `v` a fresh copy
/// of `attached` is appended and `v` is joined to every vertex of that copy.
pub fn build_corona(base: &Graph, attached: &Graph) -> Result<Graph, RcError> {
    let n = base.num_vertices();
    let h = attached.num_vertices();
    let order = h
        .checked_add(1)
        .and_then(|per_vertex| per_vertex.checked_mul(n))
        .ok_or_else(|| capacity_error(usize::MAX))?;
    let mut graph = Graph::new(order)?;
    for &(u, v) in base.edges() {
        graph.add_edge(u, v)?;
    }
    for v in base.vertices() {
        let offset = n + v * h;
        for &(a, b) in attached.edges() {
            graph.add_edge(offset + a, offset + b)?;
        }
        for w in 0..h {
            graph.add_edge(v, offset + w)?;
        }
    }
    Ok(graph)
}

/// Erdős–Rényi `G(n, p)`: each pair `i < j` becomes an edge with probability `p`.
///
/// Pairs are sampled in lexicographic order, so the output depends only on
/// `n`, `p` and the RNG state.
pub fn build_random_graph(n: usize, p: f64, rng: &mut RngHandle) -> Result<Graph, RcError> {
    require_at_least("random graph", n, 2)?;
    let coin = Bernoulli::new(p).map_err(|err| {
        RcError::Graph(
            ErrorInfo::new("bad-probability", err.to_string()).with_context("p", p),
        )
    })?;
    let mut graph = Graph::new(n)?;
    for i in 0..n {
        for j in (i + 1)..n {
            if coin.sample(rng) {
                graph.add_edge(i, j)?;
            }
        }
    }
    Ok(graph)
}

fn checked_order(a: usize, b: usize) -> Result<usize, RcError> {
    match a.checked_add(b) {
        Some(order) if order <= MAX_VERTICES => Ok(order),
        Some(order) => Err(capacity_error(order)),
        None => Err(capacity_error(usize::MAX)),
    }
}

fn require_at_least(family: &str, value: usize, minimum: usize) -> Result<(), RcError> {
    if value >= minimum {
        return Ok(());
    }
    Err(RcError::Graph(
        ErrorInfo::new("builder-size", format!("{family} needs at least {minimum}"))
            .with_context("requested", value),
    ))
}
