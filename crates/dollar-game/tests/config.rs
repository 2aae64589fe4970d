use dollar_game::{Difficulty, DollarGame, GameConfig};

#[test]
fn empty_json_yields_defaults() {
    let config = GameConfig::from_json("{}").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!((config.min_amount, config.max_amount), (-5, 5));
    assert_eq!(config.difficulty, Difficulty::Challenging);
}

#[test]
fn json_overrides_fields() {
    let config = GameConfig::from_json(
        r#"{
            "min_amount": -3,
            "max_amount": 9,
            "difficulty": "not-always-possible",
            "partition": { "gaussian_bound": 2.5 },
            "seed": 17
        }"#,
    )
    .unwrap();
    assert_eq!(config.min_amount, -3);
    assert_eq!(config.max_amount, 9);
    assert_eq!(config.difficulty, Difficulty::NotAlwaysPossible);
    assert_eq!(config.partition.gaussian_bound, 2.5);
    assert_eq!(config.seed, 17);
}

#[test]
fn inverted_range_is_rejected() {
    let err = GameConfig::from_json(r#"{"min_amount": 4, "max_amount": 1}"#).unwrap_err();
    assert_eq!(err.code(), "invalid-range");

    let mut config = GameConfig::default();
    config.min_amount = 10;
    assert_eq!(DollarGame::new(config).unwrap_err().code(), "invalid-range");
}

#[test]
fn bad_partition_settings_are_rejected() {
    let err = GameConfig::from_json(r#"{"partition": {"gaussian_bound": -1.0}}"#).unwrap_err();
    assert_eq!(err.code(), "invalid-bound");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = GameConfig::from_json("{ not json").unwrap_err();
    assert_eq!(err.code(), "parse-config");
    let err = GameConfig::from_json(r#"{"difficulty": "impossible"}"#).unwrap_err();
    assert_eq!(err.code(), "parse-config");
}

#[test]
fn difficulty_offsets() {
    assert_eq!(Difficulty::VeryEasy.offset(), 2);
    assert_eq!(Difficulty::Easy.offset(), 1);
    assert_eq!(Difficulty::Challenging.offset(), 0);
    assert_eq!(Difficulty::NotAlwaysPossible.offset(), -1);
}

#[test]
fn board_display_shows_amounts() {
    let mut game = DollarGame::new(GameConfig::default()).unwrap();
    let a = game.add_purse(2);
    let b = game.add_purse(-1);
    game.connect(a, b).unwrap();
    assert_eq!(
        game.graph().to_string(),
        "Nodes[2]: (0: $2) (1: $-1)\nEdges[1]: (0, 1: 0)"
    );
}
