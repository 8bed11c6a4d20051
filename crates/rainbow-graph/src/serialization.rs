use rainbow_core::errors::{ErrorInfo, RcError};
use rainbow_core::Edge;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &Graph) -> Result<Vec<u8>, RcError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| RcError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<Graph, RcError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| RcError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &Graph) -> Result<String, RcError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| RcError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
///
/// The payload is replayed through [`Graph::add_edge`], so a document with
/// self-loops, duplicates or too many vertices is rejected.
pub fn graph_from_json(json: &str) -> Result<Graph, RcError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| RcError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl SerializableGraph {
    fn from_graph(graph: &Graph) -> Self {
        Self {
            num_vertices: graph.num_vertices(),
            edges: graph.edges().to_vec(),
        }
    }

    fn into_graph(self) -> Result<Graph, RcError> {
        Graph::from_edges(self.num_vertices, &self.edges)
    }
}
