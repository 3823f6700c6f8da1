pub mod error;
pub mod rules;
pub mod scorer;
pub mod types;

pub use error::ScoreError;
pub use rules::*;
pub use scorer::*;
pub use types::*;

// =============================================================================
// Point source trait: anything that decides who wins the next point
// =============================================================================

/// Supplies point winners to a match, one at a time.
///
/// Implemented by scripted replays and random simulators so the same runner
/// can drive either.
pub trait PointSource {
    /// Who wins the next point, or None when the source has nothing left.
    ///
    /// # Arguments
    /// * `scorer` - The match as it stands before the point
    fn next_point(&mut self, scorer: &MatchScorer) -> Option<Side>;

    /// Short label for logs and reports
    fn name(&self) -> &str;

    /// Rewind to the beginning, if the source supports it.
    fn reset(&mut self) {}
}
