#![deny(missing_docs)]

//! Bitmask graphs on at most 64 vertices and the path-enumeration engine
//! behind rainbow-connection constraint models.
//!
//! A [`Graph`] is built once (by a builder, the DIMACS loader or
//! deserialization) and is read-only afterwards. Traversal routines derive
//! distances, connectivity, diameter and bridges from it; the enumeration
//! routines fill [`PathAccumulator`] values for a vertex pair.

mod dimacs;
mod enumerate;
mod generators;
mod graph;
mod hash;
mod path;
mod serialization;
mod traversal;

pub use dimacs::{parse_dimacs, read_dimacs, to_dimacs};
pub use enumerate::{get_shortest_path, list_paths, list_shortest_paths, UNBOUNDED};
pub use generators::{
    build_biclique, build_clique, build_corona, build_cycle, build_path, build_random_graph,
    build_star, build_wheel,
};
pub use graph::{is_adjacent, Graph, MAX_VERTICES};
pub use hash::canonical_hash;
pub use path::{EdgePath, OnPath, PathAccumulator, VertexPath};
pub use traversal::{
    bfs, distances_from, eccentricity, get_bridges, get_diameter, get_diametral_pair,
    is_connected, Distance, UNREACHABLE,
};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
