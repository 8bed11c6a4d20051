use std::fmt;
use std::io::Write;

use rainbow_core::errors::{ErrorInfo, RcError};
use rainbow_core::{vertex_pairs, VertexId};
use rainbow_graph::{is_adjacent, Graph};
use tracing::info;

use crate::config::ModelConfig;

/// Hooks that shape one constraint model.
///
/// [`ModelWriter::write`] calls `preprocess`, `process` and `postprocess` in
/// that order. The default `process` visits every non-adjacent vertex pair
/// in canonical order and hands it to `process_vertex_pair`.
pub trait ModelFormat {
    /// Comment prefix used when the configuration does not set one.
    fn default_comment(&self) -> &'static str {
        "%"
    }

    /// Header and variable declarations.
    fn preprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError>;

    /// Body of the model.
    fn process<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError> {
        writer.comment("Paths between vertex pairs")?;
        let graph = writer.graph();
        for (u, v) in vertex_pairs(graph.num_vertices()) {
            if !is_adjacent(graph, u, v) {
                self.process_vertex_pair(writer, u, v)?;
            }
        }
        Ok(())
    }

    /// Constraint for a single vertex pair.
    fn process_vertex_pair<W: Write>(
        &self,
        writer: &mut ModelWriter<'_, W>,
        u: VertexId,
        v: VertexId,
    ) -> Result<(), RcError>;

    /// Trailer.
    fn postprocess<W: Write>(&self, writer: &mut ModelWriter<'_, W>) -> Result<(), RcError>;
}

/// Output sink plus the graph and configuration a model is written for.
pub struct ModelWriter<'g, W: Write> {
    graph: &'g Graph,
    config: ModelConfig,
    prefix: String,
    out: W,
}

impl<'g, W: Write> ModelWriter<'g, W> {
    /// Creates a writer after validating `config`.
    pub fn new(graph: &'g Graph, config: ModelConfig, out: W) -> Result<Self, RcError> {
        config.validate()?;
        let prefix = config.comment.clone().unwrap_or_else(|| "%".to_string());
        Ok(Self {
            graph,
            config,
            prefix,
            out,
        })
    }

    /// Writes a complete model in the given format.
    pub fn write<F: ModelFormat>(&mut self, format: &F) -> Result<(), RcError> {
        self.prefix = self
            .config
            .comment
            .clone()
            .unwrap_or_else(|| format.default_comment().to_string());
        format.preprocess(self)?;
        format.process(self)?;
        format.postprocess(self)?;
        self.out.flush().map_err(write_failed)?;
        info!(
            vertices = self.graph.num_vertices(),
            edges = self.graph.num_edges(),
            k = self.config.solution_size,
            "model written"
        );
        Ok(())
    }

    /// Graph the model describes.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Active configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Number of colours `k`.
    pub fn solution_size(&self) -> usize {
        self.config.solution_size
    }

    /// Writes `line` followed by a newline.
    pub fn add_line(&mut self, line: &str) -> Result<(), RcError> {
        writeln!(self.out, "{line}").map_err(write_failed)
    }

    /// Writes a comment line using the active prefix.
    pub fn comment(&mut self, text: &str) -> Result<(), RcError> {
        writeln!(self.out, "{} {text}", self.prefix).map_err(write_failed)
    }

    /// Writes preformatted text without adding a newline.
    pub fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<(), RcError> {
        self.out.write_fmt(args).map_err(write_failed)
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_failed(err: std::io::Error) -> RcError {
    RcError::Model(ErrorInfo::new("write-failed", err.to_string()))
}
