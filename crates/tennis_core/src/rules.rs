//! Scoring thresholds for a single-set match.
//!
//! The defaults are standard tennis: games to 4 points, a set to 6 games,
//! a tie-break at 6-6 played to 7 points, every stage won by 2.
//! Rules can be loaded from TOML; missing keys keep their default.

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Points needed to win a regular game
pub const GAME_POINTS_TO_WIN: u32 = 4;
/// Lead needed to win a regular game
pub const GAME_WIN_MARGIN: u32 = 2;
/// Games needed to win the set outright
pub const SET_GAMES_TO_WIN: u32 = 6;
/// Lead needed to win the set outright
pub const SET_WIN_MARGIN: u32 = 2;
/// Largest set margin that still forces the tie-break score to be reached
pub const MAX_SET_WIN_MARGIN: u32 = 2;
/// Games each at which the tie-break starts
pub const TIEBREAK_AT: u32 = 6;
/// Points needed to win the tie-break
pub const TIEBREAK_POINTS_TO_WIN: u32 = 7;
/// Lead needed to win the tie-break
pub const TIEBREAK_WIN_MARGIN: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub game_points_to_win: u32,
    pub game_win_margin: u32,
    pub set_games_to_win: u32,
    pub set_win_margin: u32,
    pub tiebreak_at: u32,
    pub tiebreak_points_to_win: u32,
    pub tiebreak_win_margin: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            game_points_to_win: GAME_POINTS_TO_WIN,
            game_win_margin: GAME_WIN_MARGIN,
            set_games_to_win: SET_GAMES_TO_WIN,
            set_win_margin: SET_WIN_MARGIN,
            tiebreak_at: TIEBREAK_AT,
            tiebreak_points_to_win: TIEBREAK_POINTS_TO_WIN,
            tiebreak_win_margin: TIEBREAK_WIN_MARGIN,
        }
    }
}

impl ScoringRules {
    /// Parse rules from a TOML document and validate them.
    pub fn from_toml_str(contents: &str) -> Result<Self, ScoreError> {
        let rules: ScoringRules = toml::from_str(contents).map_err(|e| ScoreError::InvalidRules {
            reason: format!("failed to parse: {}", e),
        })?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        let fields = [
            ("game_points_to_win", self.game_points_to_win),
            ("game_win_margin", self.game_win_margin),
            ("set_games_to_win", self.set_games_to_win),
            ("set_win_margin", self.set_win_margin),
            ("tiebreak_at", self.tiebreak_at),
            ("tiebreak_points_to_win", self.tiebreak_points_to_win),
            ("tiebreak_win_margin", self.tiebreak_win_margin),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(ScoreError::InvalidRules {
                reason: format!("{} must be at least 1", name),
            });
        }

        if self.tiebreak_at < self.set_games_to_win {
            return Err(ScoreError::InvalidRules {
                reason: format!(
                    "tiebreak_at ({}) must not be below set_games_to_win ({})",
                    self.tiebreak_at, self.set_games_to_win
                ),
            });
        }

        // A wider margin lets the set jump from one game short of the
        // tie-break straight past it, e.g. 5-5 -> 6-5 -> 7-5 -> 7-6.
        if self.set_win_margin > MAX_SET_WIN_MARGIN {
            return Err(ScoreError::InvalidRules {
                reason: format!(
                    "set_win_margin ({}) must be at most {} so the tie-break is always reached",
                    self.set_win_margin, MAX_SET_WIN_MARGIN
                ),
            });
        }

        Ok(())
    }

    /// Point count at which a level game is called "Deuce" (40-40).
    #[inline]
    pub fn deuce_threshold(&self) -> u32 {
        self.game_points_to_win.saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
