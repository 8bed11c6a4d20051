//! MiniZinc models: edge, strong and vertex rainbow connection.

use std::io::Write;

use rainbow_core::errors::RcError;
use rainbow_core::{Edge, VertexId};
use rainbow_graph::{
    distances_from, get_bridges, list_paths, list_shortest_paths, EdgePath, VertexPath,
};
use tracing::debug;

use crate::writer::{ModelFormat, ModelWriter};

const VAR_PREFIX: &str = "x";

/// Name of the colour variable of edge `{u, v}`, `u < v`.
pub fn edge_var((u, v): Edge) -> String {
    format!("{VAR_PREFIX}{u}_{v}")
}

/// Name of the colour variable of vertex `v`.
pub fn vertex_var(v: VertexId) -> String {
    format!("{VAR_PREFIX}{v}")
}

/// `alldifferent([a,b,..])`.
pub fn alldifferent(vars: &[String]) -> String {
    format!("alldifferent([{}])", vars.join(","))
}

/// Rainbow connection: every non-adjacent pair needs a rainbow path of at
/// most `k` edges. Bridges must all receive distinct colours.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeModel;

/// Strong rainbow connection: the rainbow path must be a shortest path.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongModel;

/// Rainbow vertex connection: pairs at distance three or more need a path
/// whose internal vertices carry distinct colours.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexModel;

impl ModelFormat for EdgeModel {
    fn preprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        write_header(writer)?;
        for edge in sorted_edges(writer) {
            writer.add_line(&format!("var 1..k: {};", edge_var(edge)))?;
        }
        Ok(())
    }

    fn process_vertex_pair<W: Write>(
        &self,
        writer: &mut ModelWriter<'_, W>,
        u: VertexId,
        v: VertexId,
    ) -> Result<(), RcError> {
        let paths: Vec<EdgePath> = list_paths(writer.graph(), u, v, writer.solution_size())?;
        write_edge_disjunction(writer, u, v, &paths)
    }

    fn postprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        write_bridge_constraint(writer)?;
        writer.add_line("solve satisfy;")
    }
}

impl ModelFormat for StrongModel {
    fn preprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        EdgeModel.preprocess(writer)
    }

    fn process_vertex_pair<W: Write>(
        &self,
        writer: &mut ModelWriter<'_, W>,
        u: VertexId,
        v: VertexId,
    ) -> Result<(), RcError> {
        let paths: Vec<EdgePath> = list_shortest_paths(writer.graph(), u, v)?;
        write_edge_disjunction(writer, u, v, &paths)
    }

    fn postprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        EdgeModel.postprocess(writer)
    }
}

impl ModelFormat for VertexModel {
    fn preprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        write_header(writer)?;
        for v in writer.graph().vertices() {
            writer.add_line(&format!("var 1..k: {};", vertex_var(v)))?;
        }
        Ok(())
    }

    fn process<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        writer.comment("Paths between vertex pairs")?;
        let graph = writer.graph();
        for u in graph.vertices() {
            let dist = distances_from(graph, u)?;
            // pairs at distance 1 or 2 are connected by any colouring;
            // unreachable pairs have no path at all
            for v in (u + 1)..graph.num_vertices() {
                if dist[v] >= 3 {
                    self.process_vertex_pair(writer, u, v)?;
                }
            }
        }
        Ok(())
    }

    fn process_vertex_pair<W: Write>(
        &self,
        writer: &mut ModelWriter<'_, W>,
        u: VertexId,
        v: VertexId,
    ) -> Result<(), RcError> {
        // k distinct internal colours allow at most k + 1 edges
        let bound = writer.solution_size().saturating_add(1);
        let paths: Vec<VertexPath> = list_paths(writer.graph(), u, v, bound)?;
        debug!(u, v, paths = paths.len(), "vertex pair processed");
        writer.comment(&format!("Vertex pair {u} {v}"))?;
        let terms: Vec<String> = paths
            .iter()
            .map(|path| {
                let vars: Vec<String> = path
                    .internal_vertices(u, v)
                    .into_iter()
                    .map(vertex_var)
                    .collect();
                alldifferent(&vars)
            })
            .collect();
        write_disjunction(writer, &terms)
    }

    fn postprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        writer.add_line("solve satisfy;")
    }
}

/// Fixes the colours along `path`: its edges get `1, 2, ..` in order.
pub fn enforce_path<W: Write>(
    writer: &mut ModelWriter<'_, W>,
    path: &EdgePath,
) -> Result<(), RcError> {
    for (colour, edge) in path.to_edge_list().into_iter().enumerate() {
        writer.add_line(&format!("constraint {} = {};", edge_var(edge), colour + 1))?;
    }
    Ok(())
}

fn write_header<W: Write>(writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
    writer.add_line("include \"alldifferent.mzn\";")?;
    let k = writer.solution_size();
    writer.add_line(&format!("int: k={k};"))
}

/// Edges as `(min, max)` in lexicographic order, one per colour variable.
pub(crate) fn sorted_edges<W: Write>(writer: &ModelWriter<'_, W>) -> Vec<Edge> {
    let mut edges: Vec<Edge> = writer.graph().normalized_edges().collect();
    edges.sort_unstable();
    edges
}

fn write_edge_disjunction<W: Write>(
    writer: &mut ModelWriter<'_, W>,
    u: VertexId,
    v: VertexId,
    paths: &[EdgePath],
) -> Result<(), RcError> {
    debug!(u, v, paths = paths.len(), "vertex pair processed");
    writer.comment(&format!("Vertex pair {u} {v}"))?;
    let terms: Vec<String> = paths
        .iter()
        .map(|path| {
            let vars: Vec<String> = path.to_edge_list().into_iter().map(edge_var).collect();
            alldifferent(&vars)
        })
        .collect();
    write_disjunction(writer, &terms)
}

fn write_disjunction<W: Write>(
    writer: &mut ModelWriter<'_, W>,
    terms: &[String],
) -> Result<(), RcError> {
    if terms.is_empty() {
        // an empty disjunction is unsatisfiable
        return writer.add_line("constraint false;");
    }
    writer.add_line(&format!("constraint ( {} );", terms.join(" \\/ ")))
}

fn write_bridge_constraint<W: Write>(writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
    if !writer.config().bridge_constraints {
        return Ok(());
    }
    let bridges = get_bridges(writer.graph())?;
    if bridges.len() < 2 {
        return Ok(());
    }
    writer.comment("Bridges")?;
    let vars: Vec<String> = bridges.into_iter().map(edge_var).collect();
    writer.add_line(&format!("constraint ( {} );", alldifferent(&vars)))
}
