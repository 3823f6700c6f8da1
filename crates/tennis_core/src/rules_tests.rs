use super::*;

#[test]
fn test_default_rules_are_standard_tennis() {
    let rules = ScoringRules::default();
    assert_eq!(rules.game_points_to_win, 4);
    assert_eq!(rules.set_games_to_win, 6);
    assert_eq!(rules.tiebreak_at, 6);
    assert_eq!(rules.tiebreak_points_to_win, 7);
    assert_eq!(rules.deuce_threshold(), 3);
    assert!(rules.validate().is_ok());
}

#[test]
fn test_toml_partial_override_keeps_defaults() {
    let rules = ScoringRules::from_toml_str("tiebreak_points_to_win = 10\n").unwrap();
    assert_eq!(rules.tiebreak_points_to_win, 10);
    assert_eq!(rules.game_points_to_win, GAME_POINTS_TO_WIN);
    assert_eq!(rules.tiebreak_win_margin, TIEBREAK_WIN_MARGIN);
}

#[test]
fn test_empty_toml_is_default() {
    let rules = ScoringRules::from_toml_str("").unwrap();
    assert_eq!(rules, ScoringRules::default());
}

#[test]
fn test_zero_threshold_rejected() {
    let err = ScoringRules::from_toml_str("game_win_margin = 0\n").unwrap_err();
    match err {
        ScoreError::InvalidRules { reason } => assert!(reason.contains("game_win_margin")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_tiebreak_below_set_target_rejected() {
    let rules = ScoringRules {
        tiebreak_at: 4,
        ..Default::default()
    };
    assert!(matches!(
        rules.validate(),
        Err(ScoreError::InvalidRules { .. })
    ));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = ScoringRules::from_toml_str("set_games_to_win = \"six\"").unwrap_err();
    assert!(matches!(err, ScoreError::InvalidRules { .. }));
}

#[test]
fn test_set_margin_that_skips_tiebreak_rejected() {
    // 5-5 -> 6-5 -> 7-5 would never pass through 6-6
    let rules = ScoringRules {
        set_win_margin: 3,
        ..Default::default()
    };
    match rules.validate() {
        Err(ScoreError::InvalidRules { reason }) => assert!(reason.contains("set_win_margin")),
        other => panic!("unexpected result: {other:?}"),
    }

    let late_tiebreak = ScoringRules {
        set_win_margin: 3,
        tiebreak_at: 8,
        ..Default::default()
    };
    assert!(late_tiebreak.validate().is_err());
}

#[test]
fn test_narrow_set_margins_accepted() {
    for set_win_margin in [1, 2] {
        let rules = ScoringRules {
            set_win_margin,
            tiebreak_at: 8,
            ..Default::default()
        };
        assert!(rules.validate().is_ok());
    }
}
