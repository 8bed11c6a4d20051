use sha2::{Digest, Sha256};

use rainbow_core::Edge;

use crate::graph::Graph;

/// Computes the canonical structural hash for the provided graph.
///
/// Insertion order does not matter: edges are normalized and sorted before
/// hashing, so two graphs built from the same edge set hash identically.
pub fn canonical_hash(graph: &Graph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"rainbow-graph:v1");
    hasher.update((graph.num_vertices() as u64).to_le_bytes());

    let mut edges: Vec<Edge> = graph.normalized_edges().collect();
    edges.sort_unstable();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (u, v) in edges {
        hasher.update((u as u64).to_le_bytes());
        hasher.update((v as u64).to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
