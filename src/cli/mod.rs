//! CLI infrastructure for the tictree solver
//!
//! This module provides the command-line interface for playing against the
//! solver, analysing positions and dumping evaluated trees.

pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;
