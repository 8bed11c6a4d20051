#![deny(missing_docs)]
#![doc = "Shared errors, bit utilities, pair enumeration and deterministic RNG for the rainbow path engine."]

pub mod bits;
pub mod errors;
pub mod pairs;
pub mod rng;

pub use bits::{bit_test, popcount, trailing_zeros, SetBits, WORD_BITS};
pub use errors::{ErrorInfo, RcError};
pub use pairs::{nchoosek, next_pair, vertex_pairs, VertexPairs};
pub use rng::{derive_substream_seed, RngHandle, DEFAULT_RANDOM_SEED};

/// Index of a vertex inside a graph. Always below [`WORD_BITS`].
pub type VertexId = usize;

/// Undirected edge as a pair of vertex indices.
pub type Edge = (VertexId, VertexId);

/// Normalizes an undirected edge so the smaller endpoint comes first.
#[inline]
pub fn normalize_edge(u: VertexId, v: VertexId) -> Edge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
