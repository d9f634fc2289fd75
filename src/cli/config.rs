//! Shared argument groups for CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::{
    app::{EvaluationOrder, SolverConfig, TieBreak},
    tictactoe::{Board, Player},
};

/// Solver settings; flags override values read from `--config`
#[derive(Args, Debug, Clone, Default)]
pub struct SolverArgs {
    /// TOML file with solver settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Evaluation traversal
    #[arg(long, value_enum)]
    pub order: Option<EvaluationOrder>,

    /// How to choose between equally good moves
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SolverArgs {
    pub fn resolve(&self) -> crate::Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };
        if let Some(order) = self.order {
            config = config.with_order(order);
        }
        if let Some(tie_break) = self.tie_break {
            config = config.with_tie_break(tie_break);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

/// Starting position
#[derive(Args, Debug, Clone, Default)]
pub struct PositionArgs {
    /// Board such as "OXO/X.X/.O." with optional ":X"/":O" turn suffix
    /// (empty board when omitted)
    pub board: Option<String>,

    /// Player to move, overriding the board suffix
    #[arg(long)]
    pub turn: Option<Player>,
}

impl PositionArgs {
    pub fn resolve(&self) -> crate::Result<Board> {
        let board = match &self.board {
            Some(text) => Board::from_string(text)?,
            None => Board::default(),
        };
        Ok(match self.turn {
            Some(turn) => board.with_turn(turn),
            None => board,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn flags_override_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "order = \"post-order\"\ntie_break = \"random\"\nseed = 1").unwrap();

        let args = SolverArgs {
            config: Some(file.path().to_path_buf()),
            tie_break: Some(TieBreak::First),
            seed: Some(5),
            ..SolverArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.order, EvaluationOrder::PostOrder);
        assert_eq!(config.tie_break, TieBreak::First);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn position_defaults_to_empty_board() {
        let board = PositionArgs::default().resolve().unwrap();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn turn_flag_overrides_suffix() {
        let args = PositionArgs {
            board: Some("OXO/X.X/.O.:O".to_string()),
            turn: Some(Player::X),
        };
        assert_eq!(args.resolve().unwrap().turn(), Player::X);
    }
}
