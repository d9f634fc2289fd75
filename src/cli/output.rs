//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{GameOutcome, Score};

/// Create a spinner for long searches
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Human-readable meaning of a minimax value
pub fn describe_score(score: Score) -> &'static str {
    match score {
        Score::MaximizerWin => "X wins with perfect play",
        Score::Draw => "draw with perfect play",
        Score::MinimizerWin => "O wins with perfect play",
    }
}

pub fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins!"),
        GameOutcome::Draw => "It's a draw.".to_string(),
    }
}
