//! Full-match score traces
//!
//! Every point is followed by a check of the displayed score:
//! - Single games (straight, deuce, long advantage swings)
//! - Whole sets (6-4, 7-5)
//! - Tie-break at 6-6
//! - Rejected points

use tennis_core::{MatchScorer, ScoreError, Side};

const P1: &str = "player 1";
const P2: &str = "player 2";

/// Plays each (player, expected score) pair in order, asserting after every point.
fn play_trace(scorer: &mut MatchScorer, trace: &[(&str, &str)]) {
    assert_eq!(scorer.current_score(), "0-0");
    for (i, (player, expected)) in trace.iter().enumerate() {
        scorer.record_point(player).unwrap();
        assert_eq!(
            scorer.current_score(),
            *expected,
            "after point {} won by {}",
            i + 1,
            player
        );
    }
}

fn win_games(scorer: &mut MatchScorer, player: &str, games: u32) {
    for _ in 0..games * 4 {
        scorer.record_point(player).unwrap();
    }
}

// =============================================================================
// Single Game Tests
// =============================================================================

#[test]
fn test_example_sequence() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();

    scorer.record_point(P1).unwrap();
    scorer.record_point(P2).unwrap();
    assert_eq!(scorer.current_score(), "0-0, 15-15");

    scorer.record_point(P1).unwrap();
    scorer.record_point(P1).unwrap();
    assert_eq!(scorer.current_score(), "0-0, 40-15");

    scorer.record_point(P2).unwrap();
    scorer.record_point(P2).unwrap();
    assert_eq!(scorer.current_score(), "0-0, Deuce");

    scorer.record_point(P1).unwrap();
    assert_eq!(scorer.current_score(), "0-0, Advantage player 1");

    scorer.record_point(P1).unwrap();
    assert_eq!(scorer.current_score(), "1-0");
}

#[test]
fn test_love_game_to_player_2() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    play_trace(
        &mut scorer,
        &[
            (P2, "0-0, love-15"),
            (P2, "0-0, love-30"),
            (P2, "0-0, love-40"),
            (P2, "0-1"),
        ],
    );
}

#[test]
fn test_game_won_four_two() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    play_trace(
        &mut scorer,
        &[
            (P2, "0-0, love-15"),
            (P2, "0-0, love-30"),
            (P1, "0-0, 15-30"),
            (P1, "0-0, 30-30"),
            (P1, "0-0, 40-30"),
            (P1, "1-0"),
        ],
    );
}

#[test]
fn test_deuce_then_advantage_player_2() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    play_trace(
        &mut scorer,
        &[
            (P1, "0-0, 15-love"),
            (P1, "0-0, 30-love"),
            (P1, "0-0, 40-love"),
            (P2, "0-0, 40-15"),
            (P2, "0-0, 40-30"),
            (P2, "0-0, Deuce"),
            (P2, "0-0, Advantage player 2"),
            (P2, "0-1"),
        ],
    );
}

#[test]
fn test_long_deuce_game() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    play_trace(
        &mut scorer,
        &[
            (P1, "0-0, 15-love"),
            (P1, "0-0, 30-love"),
            (P2, "0-0, 30-15"),
            (P2, "0-0, 30-30"),
            (P1, "0-0, 40-30"),
            (P2, "0-0, Deuce"),
            (P1, "0-0, Advantage player 1"),
            (P2, "0-0, Deuce"),
            (P2, "0-0, Advantage player 2"),
            (P1, "0-0, Deuce"),
            (P1, "0-0, Advantage player 1"),
            (P1, "1-0"),
        ],
    );
}

// =============================================================================
// Whole Match Tests
// =============================================================================

#[test]
fn test_match_won_six_four() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    play_trace(
        &mut scorer,
        &[
            (P1, "0-0, 15-love"),
            (P2, "0-0, 15-15"),
            (P2, "0-0, 15-30"),
            (P2, "0-0, 15-40"),
            (P2, "0-1"),
            (P2, "0-1, love-15"),
            (P2, "0-1, love-30"),
            (P2, "0-1, love-40"),
            (P2, "0-2"),
            (P1, "0-2, 15-love"),
            (P1, "0-2, 30-love"),
            (P1, "0-2, 40-love"),
            (P1, "1-2"),
            (P1, "1-2, 15-love"),
            (P1, "1-2, 30-love"),
            (P2, "1-2, 30-15"),
            (P2, "1-2, 30-30"),
            (P1, "1-2, 40-30"),
            (P2, "1-2, Deuce"),
            (P2, "1-2, Advantage player 2"),
            (P2, "1-3"),
            (P2, "1-3, love-15"),
            (P1, "1-3, 15-15"),
            (P1, "1-3, 30-15"),
            (P1, "1-3, 40-15"),
            (P2, "1-3, 40-30"),
            (P1, "2-3"),
            (P1, "2-3, 15-love"),
            (P1, "2-3, 30-love"),
            (P1, "2-3, 40-love"),
            (P1, "3-3"),
            (P1, "3-3, 15-love"),
            (P1, "3-3, 30-love"),
            (P1, "3-3, 40-love"),
            (P1, "4-3"),
            (P1, "4-3, 15-love"),
            (P1, "4-3, 30-love"),
            (P1, "4-3, 40-love"),
            (P1, "5-3"),
            (P2, "5-3, love-15"),
            (P2, "5-3, love-30"),
            (P2, "5-3, love-40"),
            (P2, "5-4"),
            (P2, "5-4, love-15"),
            (P1, "5-4, 15-15"),
            (P1, "5-4, 30-15"),
            (P1, "5-4, 40-15"),
            (P1, "6-4, player 1 won match"),
        ],
    );
    assert_eq!(scorer.winner(), Some(P1));
}

#[test]
fn test_match_won_seven_five() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();

    win_games(&mut scorer, P1, 5);
    assert_eq!(scorer.current_score(), "5-0");

    win_games(&mut scorer, P2, 5);
    assert_eq!(scorer.current_score(), "5-5");

    win_games(&mut scorer, P1, 1);
    assert_eq!(scorer.current_score(), "6-5");

    win_games(&mut scorer, P1, 1);
    assert_eq!(scorer.current_score(), "7-5, player 1 won match");
}

// =============================================================================
// Tie-break Tests
// =============================================================================

#[test]
fn test_tiebreak_match() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();

    win_games(&mut scorer, P1, 5);
    win_games(&mut scorer, P2, 5);
    assert_eq!(scorer.current_score(), "5-5");

    win_games(&mut scorer, P2, 1);
    assert_eq!(scorer.current_score(), "5-6");

    win_games(&mut scorer, P1, 1);
    assert_eq!(scorer.current_score(), "tiebreak, 0-0");

    scorer.record_point(P1).unwrap();
    assert_eq!(scorer.current_score(), "tiebreak, 1-0");

    scorer.record_point(P2).unwrap();
    assert_eq!(scorer.current_score(), "tiebreak, 1-1");

    for _ in 0..4 {
        scorer.record_point(P1).unwrap();
        scorer.record_point(P2).unwrap();
    }
    assert_eq!(scorer.current_score(), "tiebreak, 5-5");

    scorer.record_point(P2).unwrap();
    assert_eq!(scorer.current_score(), "tiebreak, 5-6");

    scorer.record_point(P2).unwrap();
    assert_eq!(scorer.current_score(), "6-7, player 2 won match");
    assert_eq!(scorer.winner(), Some(P2));
}

#[test]
fn test_tiebreak_four_points_is_not_enough() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    win_games(&mut scorer, P1, 5);
    win_games(&mut scorer, P2, 6);
    win_games(&mut scorer, P1, 1);

    for _ in 0..4 {
        scorer.record_point(P2).unwrap();
    }
    assert_eq!(scorer.current_score(), "tiebreak, 0-4");

    for _ in 0..3 {
        scorer.record_point(P2).unwrap();
    }
    assert_eq!(scorer.current_score(), "6-7, player 2 won match");
}

// =============================================================================
// Rejected Points
// =============================================================================

#[test]
fn test_unknown_player() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    let err = scorer.record_point("player 3").unwrap_err();
    assert!(matches!(err, ScoreError::UnknownPlayer { .. }));
    assert_eq!(err.to_string(), "Player name player 3 does not exist");
    assert_eq!(scorer.current_score(), "0-0");
}

#[test]
fn test_no_points_after_match_end() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    win_games(&mut scorer, P1, 6);
    let final_raw = scorer.raw_score();

    let err = scorer.record_point(P2).unwrap_err();
    assert_eq!(
        err,
        ScoreError::MatchFinished {
            winner: P1.to_string()
        }
    );
    assert!(scorer.record_point_for(Side::One).is_err());
    assert_eq!(scorer.raw_score(), final_raw);
    assert_eq!(scorer.current_score(), "6-0, player 1 won match");
}

#[test]
fn test_unknown_player_reported_before_match_finished() {
    let mut scorer = MatchScorer::new(P1, P2).unwrap();
    win_games(&mut scorer, P2, 6);
    assert!(matches!(
        scorer.record_point("player 3"),
        Err(ScoreError::UnknownPlayer { .. })
    ));
}
