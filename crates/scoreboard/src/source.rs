//! Point sources: scripted replays and a biased random coin.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tennis_core::{MatchScorer, PointSource, Side};

/// Replays a fixed list of point winners in order.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    points: Vec<Side>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(points: Vec<Side>) -> Self {
        Self { points, cursor: 0 }
    }

    /// Build from tokens that are either `1`/`2` or a player name.
    ///
    /// Returns the first token that names neither player.
    pub fn parse(tokens: &[String], players: [&str; 2]) -> Result<Self, String> {
        let mut points = Vec::with_capacity(tokens.len());
        for token in tokens {
            // Names win over the numeric shorthand, so players called
            // "2" and "1" still get their own points.
            let side = match token.as_str() {
                name if name == players[0] => Side::One,
                name if name == players[1] => Side::Two,
                "1" => Side::One,
                "2" => Side::Two,
                other => return Err(other.to_string()),
            };
            points.push(side);
        }
        Ok(Self::new(points))
    }

    pub fn remaining(&self) -> usize {
        self.points.len() - self.cursor
    }
}

impl PointSource for ScriptedSource {
    fn next_point(&mut self, _scorer: &MatchScorer) -> Option<Side> {
        let side = self.points.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(side)
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Awards each point to player 1 with probability `bias`.
///
/// Runs dry only once the match has a winner.
#[derive(Debug, Clone)]
pub struct RandomSource {
    bias: f64,
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomSource {
    /// `bias` is clamped to 0.0..=1.0 (NaN counts as 0.5). A seed makes the
    /// sequence repeatable.
    pub fn new(bias: f64, seed: Option<u64>) -> Self {
        let bias = if bias.is_nan() { 0.5 } else { bias.clamp(0.0, 1.0) };
        Self {
            bias,
            seed,
            rng: Self::make_rng(seed),
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(0.5, None)
    }
}

impl PointSource for RandomSource {
    fn next_point(&mut self, scorer: &MatchScorer) -> Option<Side> {
        if scorer.is_finished() {
            return None;
        }
        if self.rng.gen_bool(self.bias) {
            Some(Side::One)
        } else {
            Some(Side::Two)
        }
    }

    fn name(&self) -> &str {
        "random"
    }

    fn reset(&mut self) {
        self.rng = Self::make_rng(self.seed);
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
