#![deny(missing_docs)]

//! Constraint-model writers for rainbow connection problems.
//!
//! Each writer walks the non-adjacent vertex pairs of a graph in canonical
//! order and turns the paths enumerated by `rainbow-graph` into a
//! disjunction of all-different constraints. No solver is invoked here.

mod config;
mod minion;
mod minizinc;
mod writer;

use std::io::Write;

use rainbow_core::errors::RcError;
use rainbow_graph::Graph;

pub use config::{ModelConfig, ModelKind};
pub use minion::MinionModel;
pub use minizinc::{
    alldifferent, edge_var, enforce_path, vertex_var, EdgeModel, StrongModel, VertexModel,
};
pub use writer::{ModelFormat, ModelWriter};

/// Writes the model selected by `config.kind` for `graph` into `out`.
pub fn write_model<W: Write>(graph: &Graph, config: ModelConfig, out: W) -> Result<W, RcError> {
    let kind = config.kind;
    let mut writer = ModelWriter::new(graph, config, out)?;
    match kind {
        ModelKind::Edge => writer.write(&EdgeModel)?,
        ModelKind::Strong => writer.write(&StrongModel)?,
        ModelKind::Vertex => writer.write(&VertexModel)?,
        ModelKind::Minion => writer.write(&MinionModel)?,
    }
    Ok(writer.into_inner())
}

/// [`write_model`] into a `String`.
pub fn model_to_string(graph: &Graph, config: ModelConfig) -> Result<String, RcError> {
    let bytes = write_model(graph, config, Vec::new())?;
    String::from_utf8(bytes).map_err(|err| {
        RcError::Model(rainbow_core::ErrorInfo::new("write-failed", err.to_string()))
    })
}
