use rainbow_core::errors::{ErrorInfo, RcError};
use serde::{Deserialize, Serialize};

/// Which model a [`ModelConfig`] asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// MiniZinc rainbow connection over edge colours and length-bounded paths.
    Edge,
    /// MiniZinc strong rainbow connection over shortest paths only.
    Strong,
    /// MiniZinc rainbow vertex connection over internal vertex colours.
    Vertex,
    /// Minion 3 rainbow connection over edge colours.
    Minion,
}

/// Options shared by every model writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model to emit when going through [`write_model`](crate::write_model).
    pub kind: ModelKind,
    /// Number of colours `k`. Also bounds the length of enumerated paths.
    pub solution_size: usize,
    /// Comment prefix; `None` uses the format's own (`%` or `#`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Whether edge models require all bridges to get distinct colours.
    pub bridge_constraints: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            kind: ModelKind::Edge,
            solution_size: 3,
            comment: None,
            bridge_constraints: true,
        }
    }
}

impl ModelConfig {
    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RcError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| RcError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no model can be written for.
    pub fn validate(&self) -> Result<(), RcError> {
        if self.solution_size == 0 {
            return Err(RcError::Model(
                ErrorInfo::new("bad-config", "solution size must be positive")
                    .with_context("solution_size", self.solution_size),
            ));
        }
        if self.comment.as_deref().is_some_and(|prefix| prefix.contains('\n')) {
            return Err(RcError::Model(ErrorInfo::new(
                "bad-config",
                "comment prefix must fit on one line",
            )));
        }
        Ok(())
    }
}
