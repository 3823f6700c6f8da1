//! Match reports: what happened, point by point

use serde::Serialize;
use tennis_core::{MatchScorer, MatchSummary};

/// Outcome of one driven match
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Where the points came from ("scripted", "random")
    pub source: String,
    /// Final state of the match
    pub summary: MatchSummary,
    /// Debug counters, "<set> <game> <tiebreak>"
    pub raw_score: String,
    /// Displayed score after every recorded point
    pub score_log: Vec<String>,
    /// Whether the match reached a winner
    pub completed: bool,
}

impl MatchReport {
    pub fn new(source: &str, scorer: &MatchScorer, score_log: Vec<String>) -> Self {
        Self {
            source: source.to_string(),
            summary: scorer.summary(),
            raw_score: scorer.raw_score(),
            score_log,
            completed: scorer.is_finished(),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let summary = &self.summary;
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            summary.players[0], summary.players[1]
        ));
        report.push_str(&format!("Source: {}\n", self.source));
        report.push_str(&format!("Points played: {}\n", summary.points_played));
        report.push_str(&format!(
            "{:<20} {:>5} {:>8} {:>9}\n",
            "Player", "Games", "Points", "Tiebreak"
        ));
        report.push_str(&"-".repeat(45));
        report.push('\n');

        for (i, name) in summary.players.iter().enumerate() {
            report.push_str(&format!(
                "{:<20} {:>5} {:>8} {:>9}\n",
                name, summary.set_games[i], summary.game_points[i], summary.tiebreak_points[i]
            ));
        }

        report.push('\n');
        match &summary.winner {
            Some(winner) => report.push_str(&format!("Winner: {}\n", winner)),
            None => report.push_str("Winner: (match unfinished)\n"),
        }
        report.push_str(&format!("Score: {}\n", summary.score));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
