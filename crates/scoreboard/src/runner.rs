//! Match runner for feeding points from a source into a scorer

use tennis_core::{MatchScorer, PointSource, ScoreError, ScoringRules};
use tracing::{debug, info};

use crate::report::MatchReport;
use crate::source::RandomSource;

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Stop after this many points even if the match is undecided
    pub max_points: u32,
    /// Keep pulling points after the match ends, so a source with
    /// leftovers fails with `MatchFinished` instead of being cut short
    pub strict: bool,
    /// Print the score after every point
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_points: 2000,
            strict: false,
            verbose: true,
        }
    }
}

/// Drives a match to completion (or until the source or the point limit runs out)
pub struct MatchRunner {
    config: RunConfig,
}

impl MatchRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Play points from `source` into `scorer`.
    ///
    /// Returns a report of the final state, or the first rejected point.
    pub fn run(
        &self,
        scorer: &mut MatchScorer,
        source: &mut dyn PointSource,
    ) -> Result<MatchReport, ScoreError> {
        let mut score_log = Vec::new();
        debug!(source = source.name(), players = ?scorer.players(), "run started");

        while score_log.len() < self.config.max_points as usize {
            if scorer.is_finished() && !self.config.strict {
                break;
            }

            let Some(side) = source.next_point(scorer) else {
                break;
            };
            scorer.record_point_for(side)?;

            let score = scorer.current_score();
            if self.config.verbose {
                println!(
                    "Point {}: {:<12} {}",
                    score_log.len() + 1,
                    scorer.player(side),
                    score
                );
            }
            score_log.push(score);
        }

        info!(
            source = source.name(),
            points = score_log.len(),
            finished = scorer.is_finished(),
            score = %scorer.current_score(),
            "run ended"
        );
        Ok(MatchReport::new(source.name(), scorer, score_log))
    }
}

/// Quick utility to simulate a whole match with the standard rules
pub fn quick_match(
    player1: &str,
    player2: &str,
    bias: f64,
    seed: Option<u64>,
) -> Result<MatchReport, ScoreError> {
    let mut scorer = MatchScorer::with_rules(player1, player2, ScoringRules::default())?;
    let mut source = RandomSource::new(bias, seed);
    let config = RunConfig {
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run(&mut scorer, &mut source)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
