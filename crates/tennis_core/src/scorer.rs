//! Match state machine: points roll up into games, games into the set,
//! and a 6-6 set is settled by a tie-break.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};

use crate::error::ScoreError;
use crate::rules::ScoringRules;
use crate::types::{Phase, Side, Tally, decided, format_tally, leader, point_term};

/// Score keeper for one single-set match between two players.
///
/// Advantage and deuce are never stored; `current_score` derives them from
/// the raw game points each time it is called.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    players: [String; 2],
    rules: ScoringRules,
    game_points: Tally,
    set_games: Tally,
    tiebreak_points: Tally,
    in_tiebreak: bool,
    winner: Option<Side>,
    points_played: u32,
}

/// Point-in-time snapshot of a match, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub players: [String; 2],
    pub set_games: Tally,
    pub game_points: Tally,
    pub tiebreak_points: Tally,
    pub phase: Phase,
    pub winner: Option<String>,
    pub points_played: u32,
    pub score: String,
}

impl MatchScorer {
    /// Start a match with the standard rules.
    pub fn new(player1: &str, player2: &str) -> Result<Self, ScoreError> {
        Self::with_rules(player1, player2, ScoringRules::default())
    }

    pub fn with_rules(
        player1: &str,
        player2: &str,
        rules: ScoringRules,
    ) -> Result<Self, ScoreError> {
        if player1.is_empty() || player2.is_empty() {
            return Err(ScoreError::InvalidPlayers {
                reason: "player names must not be empty".to_string(),
            });
        }
        if player1 == player2 {
            return Err(ScoreError::InvalidPlayers {
                reason: format!("both players are named {}", player1),
            });
        }
        rules.validate()?;

        Ok(Self {
            players: [player1.to_string(), player2.to_string()],
            rules,
            game_points: [0, 0],
            set_games: [0, 0],
            tiebreak_points: [0, 0],
            in_tiebreak: false,
            winner: None,
            points_played: 0,
        })
    }

    /// Gives one point to the named player.
    ///
    /// Fails without touching the score if the name is not one of the two
    /// players, or if the match already has a winner.
    pub fn record_point(&mut self, player: &str) -> Result<(), ScoreError> {
        let Some(side) = self.side_of(player) else {
            warn!(player, "point for unknown player rejected");
            return Err(ScoreError::UnknownPlayer {
                player: player.to_string(),
            });
        };
        self.record_point_for(side)
    }

    /// Gives one point to the player on `side`.
    pub fn record_point_for(&mut self, side: Side) -> Result<(), ScoreError> {
        if let Some(winner) = self.winner {
            warn!(player = %self.player(side), "point after match end rejected");
            return Err(ScoreError::MatchFinished {
                winner: self.player(winner).to_string(),
            });
        }

        self.points_played += 1;
        trace!(player = %self.player(side), points_played = self.points_played, "point won");

        if self.in_tiebreak {
            self.win_tiebreak_point(side);
        } else {
            self.win_game_point(side);
        }
        Ok(())
    }

    fn win_game_point(&mut self, side: Side) {
        self.game_points[side.idx()] += 1;

        let rules = self.rules;
        if let Some(game_winner) = decided(
            self.game_points,
            rules.game_points_to_win,
            rules.game_win_margin,
        ) {
            self.set_games[game_winner.idx()] += 1;
            self.game_points = [0, 0];
            debug!(
                player = %self.player(game_winner),
                set = %format_tally(self.set_games),
                "game won"
            );
            self.update_set_status();
        }
    }

    fn win_tiebreak_point(&mut self, side: Side) {
        self.tiebreak_points[side.idx()] += 1;

        let rules = self.rules;
        if let Some(tiebreak_winner) = decided(
            self.tiebreak_points,
            rules.tiebreak_points_to_win,
            rules.tiebreak_win_margin,
        ) {
            // The tie-break counts as the deciding game of the set
            self.set_games[tiebreak_winner.idx()] += 1;
            self.in_tiebreak = false;
            self.finish(tiebreak_winner);
        }
    }

    fn update_set_status(&mut self) {
        let rules = self.rules;
        if let Some(set_winner) = decided(self.set_games, rules.set_games_to_win, rules.set_win_margin)
        {
            self.finish(set_winner);
            return;
        }

        if self.set_games == [rules.tiebreak_at, rules.tiebreak_at] {
            self.in_tiebreak = true;
            debug!(set = %format_tally(self.set_games), "tie-break started");
        }
    }

    fn finish(&mut self, side: Side) {
        self.winner = Some(side);
        debug!(
            player = %self.player(side),
            set = %format_tally(self.set_games),
            points_played = self.points_played,
            "match won"
        );
    }

    /// Human-readable score, e.g. `"0-0, 15-15"`, `"5-4, Advantage player 1"`,
    /// `"tiebreak, 3-2"` or `"6-4, player 1 won match"`.
    pub fn current_score(&self) -> String {
        if let Some(winner) = self.winner {
            return format!(
                "{}, {} won match",
                format_tally(self.set_games),
                self.player(winner)
            );
        }

        if self.in_tiebreak {
            return format!("tiebreak, {}", format_tally(self.tiebreak_points));
        }

        let set_score = format_tally(self.set_games);
        let game_score = self.game_score();
        [set_score, game_score]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Game part of the score; empty at the start of a game.
    fn game_score(&self) -> String {
        let [p1, p2] = self.game_points;
        let deuce = self.rules.deuce_threshold();

        if p1 == 0 && p2 == 0 {
            return String::new();
        }
        if p1 < deuce || p2 < deuce {
            return format!("{}-{}", point_term(p1), point_term(p2));
        }

        match leader(self.game_points) {
            None => "Deuce".to_string(),
            Some(side) => format!("Advantage {}", self.player(side)),
        }
    }

    /// Set, game and tie-break counters, for debugging.
    pub fn raw_score(&self) -> String {
        format!(
            "{} {} {}",
            format_tally(self.set_games),
            format_tally(self.game_points),
            format_tally(self.tiebreak_points)
        )
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            players: self.players.clone(),
            set_games: self.set_games,
            game_points: self.game_points,
            tiebreak_points: self.tiebreak_points,
            phase: self.phase(),
            winner: self.winner().map(str::to_string),
            points_played: self.points_played,
            score: self.current_score(),
        }
    }

    pub fn side_of(&self, player: &str) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.players[side.idx()] == player)
    }

    pub fn player(&self, side: Side) -> &str {
        &self.players[side.idx()]
    }

    pub fn players(&self) -> [&str; 2] {
        [&self.players[0], &self.players[1]]
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|side| self.player(side))
    }

    pub fn winning_side(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Finished
        } else if self.in_tiebreak {
            Phase::Tiebreak
        } else {
            Phase::Game
        }
    }

    pub fn in_tiebreak(&self) -> bool {
        self.in_tiebreak
    }

    pub fn set_games(&self) -> Tally {
        self.set_games
    }

    pub fn game_points(&self) -> Tally {
        self.game_points
    }

    pub fn tiebreak_points(&self) -> Tally {
        self.tiebreak_points
    }

    pub fn points_played(&self) -> u32 {
        self.points_played
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }
}

impl fmt::Display for MatchScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current_score())
    }
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod scorer_tests;
