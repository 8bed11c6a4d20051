//! Minion 3 rainbow connection model over edge colours.

use std::io::Write;

use rainbow_core::errors::RcError;
use rainbow_core::VertexId;
use rainbow_graph::{list_paths, EdgePath};
use tracing::debug;

use crate::minizinc::{edge_var, sorted_edges};
use crate::writer::{ModelFormat, ModelWriter};

/// Same constraints as [`EdgeModel`](crate::EdgeModel), in Minion's input
/// language: one `watched-or` of `alldiff`s per non-adjacent pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinionModel;

impl ModelFormat for MinionModel {
    fn default_comment(&self) -> &'static str {
        "#"
    }

    fn preprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        writer.add_line("MINION 3")?;
        writer.add_line("")?;
        writer.add_line("**VARIABLES**")?;
        writer.add_line("")?;
        let k = writer.solution_size();
        for edge in sorted_edges(writer) {
            writer.add_line(&format!("DISCRETE {} {{1..{k}}}", edge_var(edge)))?;
        }
        writer.add_line("")?;
        writer.add_line("**CONSTRAINTS**")?;
        writer.add_line("")
    }

    fn process_vertex_pair<W: Write>(
        &self,
        writer: &mut ModelWriter<'_, W>,
        u: VertexId,
        v: VertexId,
    ) -> Result<(), RcError> {
        let paths: Vec<EdgePath> = list_paths(writer.graph(), u, v, writer.solution_size())?;
        debug!(u, v, paths = paths.len(), "vertex pair processed");
        writer.comment(&format!("Vertex pair {u} {v}"))?;
        if paths.is_empty() {
            return writer.add_line("false()");
        }
        let terms: Vec<String> = paths
            .iter()
            .map(|path| {
                let vars: Vec<String> = path.to_edge_list().into_iter().map(edge_var).collect();
                format!("alldiff([{}])", vars.join(","))
            })
            .collect();
        writer.add_line(&format!("watched-or({{{}}})", terms.join(", ")))
    }

    fn postprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        writer.add_line("")?;
        writer.add_line("**EOF**")
    }
}
