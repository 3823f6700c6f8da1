//! Scoreboard driver for tennis_core
//!
//! This crate provides:
//! - Point sources (scripted replays, biased random simulation)
//! - A runner that feeds a source into a `MatchScorer`
//! - Text and JSON match reports
//!
//! # Usage
//!
//! ```bash
//! # Replay a game point by point
//! cargo run -p scoreboard -- play "player 1" "player 2" 1 2 1 1 2 2 1 1
//!
//! # Simulate a match where player 1 wins 55% of points
//! cargo run -p scoreboard -- simulate --bias 0.55 --seed 7
//! ```

mod report;
mod runner;
mod source;

pub use report::*;
pub use runner::*;
pub use source::*;
