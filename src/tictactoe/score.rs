//! Minimax outcome values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Player;

/// Game-theoretic value of a position under perfect play.
///
/// Variants are declared in ascending order so `Ord`, `max` and `min` follow
/// the numeric values -1 < 0 < 1. Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Score {
    MinimizerWin = -1,
    Draw = 0,
    MaximizerWin = 1,
}

impl Score {
    /// The value of a position won by `player`
    pub fn win_for(player: Player) -> Self {
        if player.is_maximizer() {
            Score::MaximizerWin
        } else {
            Score::MinimizerWin
        }
    }

    /// Best to worst from `player`'s point of view
    pub fn preference_order(player: Player) -> [Score; 3] {
        if player.is_maximizer() {
            [Score::MaximizerWin, Score::Draw, Score::MinimizerWin]
        } else {
            [Score::MinimizerWin, Score::Draw, Score::MaximizerWin]
        }
    }

    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> Self {
        score.as_i8()
    }
}

impl TryFrom<i8> for Score {
    type Error = crate::Error;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Score::MinimizerWin),
            0 => Ok(Score::Draw),
            1 => Ok(Score::MaximizerWin),
            other => Err(crate::Error::InvalidScore { value: other }),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}
