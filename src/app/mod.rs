//! Application configuration.
//!
//! Everything that tunes how the solver runs lives here, so the CLI and
//! library callers share one serde-backed configuration type.

pub mod config;

pub use config::{EvaluationOrder, SolverConfig, TieBreak};
