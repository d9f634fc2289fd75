//! Configuration types for the solver.

use std::{fmt, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Traversal used to score a built tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationOrder {
    /// Flatten, sort by depth descending, score each node once
    #[default]
    DepthSorted,
    /// Recursive children-then-self walk
    PostOrder,
}

impl fmt::Display for EvaluationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationOrder::DepthSorted => write!(f, "depth-sorted"),
            EvaluationOrder::PostOrder => write!(f, "post-order"),
        }
    }
}

/// How to pick between equally good moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// First optimal move in row-major order
    #[default]
    First,
    /// Uniformly random optimal move
    Random,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::First => write!(f, "first"),
            TieBreak::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a [`Solver`](crate::solver::Solver).
///
/// # Examples
///
/// ```
/// use tictree::app::{EvaluationOrder, SolverConfig, TieBreak};
///
/// let config = SolverConfig::new()
///     .with_order(EvaluationOrder::PostOrder)
///     .with_tie_break(TieBreak::Random)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Evaluation traversal
    pub order: EvaluationOrder,
    /// Tie-breaking between optimal moves
    pub tie_break: TieBreak,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl SolverConfig {
    /// Default configuration: depth-sorted evaluation, first optimal move,
    /// no fixed seed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: EvaluationOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a TOML document such as
    ///
    /// ```toml
    /// order = "post-order"
    /// tie_break = "random"
    /// seed = 7
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid TOML or has unknown keys.
    pub fn from_toml_str(contents: &str) -> crate::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
