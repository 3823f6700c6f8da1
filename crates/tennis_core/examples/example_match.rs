//! Walks through one game and prints the score along the way.
//!
//! Usage:
//!   cargo run --example example_match -p tennis_core

use tennis_core::{MatchScorer, ScoreError};

fn main() -> Result<(), ScoreError> {
    let mut scorer = MatchScorer::new("player 1", "player 2")?;

    scorer.record_point("player 1")?;
    scorer.record_point("player 2")?;
    println!("{}", scorer.current_score()); // 0-0, 15-15

    scorer.record_point("player 1")?;
    scorer.record_point("player 1")?;
    println!("{}", scorer.current_score()); // 0-0, 40-15

    scorer.record_point("player 2")?;
    scorer.record_point("player 2")?;
    println!("{}", scorer.current_score()); // 0-0, Deuce

    scorer.record_point("player 1")?;
    println!("{}", scorer.current_score()); // 0-0, Advantage player 1

    scorer.record_point("player 1")?;
    println!("{}", scorer.current_score()); // 1-0

    // Play the set out: player 2 takes the next six games
    for _ in 0..6 * 4 {
        scorer.record_point("player 2")?;
    }
    println!("{}", scorer.current_score()); // 1-6, player 2 won match
    println!("raw: {}", scorer.raw_score());

    if let Err(e) = scorer.record_point("player 1") {
        println!("rejected: {}", e);
    }

    Ok(())
}
