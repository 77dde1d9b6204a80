//! Property-style checks of the board engine over many seeded boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_match3::core::{
    compact, find_matches, generate, is_compacted, run_cascade, Board, BoardConfig, Cascade,
    CascadeStep, GameSession,
};
use tui_match3::types::{Cell, Color, Pos};

/// Random board with `empty_ratio` of its cells empty. Usually full of matches.
fn random_board(rng: &mut StdRng, rows: usize, cols: usize, colors: usize, empty_ratio: f64) -> Board {
    let cells = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(empty_ratio) {
                        Cell::Empty
                    } else {
                        let idx = rng.random_range(0..colors);
                        Color::from_index(idx).map_or(Cell::Empty, Cell::Token)
                    }
                })
                .collect()
        })
        .collect();
    Board::from_rows(cells).unwrap()
}

fn column_tokens(board: &Board, col: usize) -> Vec<Color> {
    board.column(col).filter_map(|cell| cell.color()).collect()
}

#[test]
fn generated_boards_have_no_latent_matches() {
    for seed in 0..20u64 {
        for &(rows, cols) in &[(3, 3), (10, 10), (5, 17), (26, 26)] {
            for colors in 3..=8 {
                let config = BoardConfig::new(rows, cols, colors);
                let mut rng = StdRng::seed_from_u64(seed);
                let board = generate(&config, &mut rng).unwrap();
                assert_eq!(board.token_count(), rows * cols);
                assert!(
                    find_matches(&board).is_empty(),
                    "seed {seed}, {rows}x{cols}, {colors} colors:\n{board}"
                );
            }
        }
    }
}

#[test]
fn cascade_always_reaches_quiescence() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..300 {
        let rows = rng.random_range(3..=12);
        let cols = rng.random_range(3..=12);
        let mut board = random_board(&mut rng, rows, cols, 3, 0.1);
        let tokens_before = board.token_count();

        let report = run_cascade(&mut board);

        assert!(find_matches(&board).is_empty(), "not quiescent:\n{board}");
        assert!(report.passes <= rows * cols);
        assert_eq!(board.token_count() + report.removed, tokens_before);
        if report.removed > 0 {
            assert!(is_compacted(&board));
        }
    }
}

#[test]
fn removed_total_is_the_sum_of_pass_sizes() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let mut board = random_board(&mut rng, 8, 8, 3, 0.0);
        let mut cascade = Cascade::new();
        let mut sum = 0;
        let mut removal_passes = 0;
        loop {
            match cascade.step(&mut board) {
                CascadeStep::Removed { count, positions } => {
                    assert!(count >= 3);
                    assert_eq!(count, positions.len());
                    sum += count;
                    removal_passes += 1;
                }
                CascadeStep::Compacted { .. } => {}
                CascadeStep::Settled { removed, passes } => {
                    assert_eq!(removed, sum);
                    assert_eq!(passes, removal_passes + 1);
                    break;
                }
            }
        }
    }
}

#[test]
fn compaction_preserves_column_order() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let mut board = random_board(&mut rng, 9, 6, 5, 0.4);
        let before: Vec<Vec<Color>> = (0..6).map(|c| column_tokens(&board, c)).collect();

        compact(&mut board);

        assert!(is_compacted(&board));
        for (col, tokens) in before.iter().enumerate() {
            assert_eq!(&column_tokens(&board, col), tokens);
            let empties = board.column(col).take_while(Cell::is_empty).count();
            assert_eq!(empties, 9 - tokens.len());
        }
    }
}

#[test]
fn rejected_swaps_leave_the_board_unchanged() {
    let mut session = GameSession::new(BoardConfig::default(), 2024).unwrap();
    session.board_mut().set(Pos::new(4, 4), Cell::Empty);
    let before = session.board().clone();

    let refused = [
        (Pos::new(0, 0), Pos::new(0, 2)),
        (Pos::new(0, 0), Pos::new(1, 1)),
        (Pos::new(3, 3), Pos::new(3, 3)),
        (Pos::new(4, 4), Pos::new(4, 5)),
        (Pos::new(3, 4), Pos::new(4, 4)),
        (Pos::new(9, 9), Pos::new(9, 10)),
        (Pos::new(10, 0), Pos::new(9, 0)),
    ];
    for (a, b) in refused {
        let outcome = session.request_swap(a, b);
        assert!(!outcome.accepted, "{a:?} <-> {b:?} was accepted");
        assert!(outcome.rejection.is_some());
        assert_eq!(outcome.removed, 0);
        assert_eq!(session.board(), &before);
    }
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
}

#[test]
fn score_never_decreases_during_play() {
    let mut session = GameSession::new(BoardConfig::default(), 31337).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut last_score = 0;
    let mut total_removed = 0;

    for _ in 0..500 {
        let a = Pos::new(rng.random_range(0..10), rng.random_range(0..10));
        let b = if rng.random_bool(0.5) {
            Pos::new(a.row, a.col + 1)
        } else {
            Pos::new(a.row + 1, a.col)
        };
        let outcome = session.request_swap(a, b);
        total_removed += outcome.removed;

        assert!(session.score() >= last_score);
        assert_eq!(session.score() as usize, total_removed);
        assert!(find_matches(session.board()).is_empty());
        last_score = session.score();
    }
}
