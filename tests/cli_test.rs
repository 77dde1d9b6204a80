use clap::Parser;

use tui_match3::cli::Cli;
use tui_match3::core::{BoardConfig, EngineError, GameSession};
use tui_match3::engine::Pacing;

#[test]
fn defaults_match_the_classic_game() {
    let cli = Cli::try_parse_from(["tui-match3"]).unwrap();
    assert_eq!(cli.board_config(), BoardConfig::default());
    assert_eq!(cli.pacing(), Pacing::default());
    assert_eq!(cli.seed, None);
    assert_eq!(cli.log_filter(), "warn");
}

#[test]
fn flags_configure_board_and_pacing() {
    let cli = Cli::try_parse_from([
        "tui-match3",
        "--rows",
        "8",
        "--cols",
        "12",
        "--colors",
        "6",
        "--seed",
        "42",
        "--delay-ms",
        "400",
        "--debug",
    ])
    .unwrap();
    assert_eq!(cli.board_config(), BoardConfig::new(8, 12, 6));
    assert_eq!(cli.resolve_seed(), 42);
    assert_eq!(cli.pacing(), Pacing::from_delay(400));
    assert_eq!(cli.pacing().drop_delay_ms, 200);
    assert_eq!(cli.log_filter(), "debug");
}

#[test]
fn out_of_range_sizes_fail_at_session_creation() {
    let cli = Cli::try_parse_from(["tui-match3", "--colors", "2"]).unwrap();
    assert_eq!(
        GameSession::new(cli.board_config(), 0).err(),
        Some(EngineError::UnsolvableGeneration { palette_size: 2 })
    );

    let cli = Cli::try_parse_from(["tui-match3", "--rows", "27"]).unwrap();
    assert!(matches!(
        GameSession::new(cli.board_config(), 0),
        Err(EngineError::InvalidDimensions { .. })
    ));
}

#[test]
fn negative_numbers_are_parse_errors() {
    assert!(Cli::try_parse_from(["tui-match3", "--rows", "-1"]).is_err());
}
