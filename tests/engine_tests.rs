//! Engine tests - board dealing, the flip rule and the win condition

use lights_out::core::{
    activate, initialize, is_won, BoardConfig, BoardEngine, ConfigError, GameRng, GameState, Grid,
};
use lights_out::types::GameStatus;

fn state(rows: Vec<Vec<bool>>) -> GameState {
    GameState::from_grid(Grid::from_rows(rows).unwrap())
}

fn changed_cells(a: &GameState, b: &GameState) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for row in 0..a.rows() {
        for col in 0..a.cols() {
            if a.grid().get(row, col) != b.grid().get(row, col) {
                out.push((row, col));
            }
        }
    }
    out
}

#[test]
fn test_initialize_dimensions() {
    let mut rng = GameRng::new(5);
    for (rows, cols) in [(1, 1), (1, 7), (4, 1), (5, 5), (3, 8)] {
        let s = initialize(rows, cols, 0.5, rng.inner_mut()).unwrap();
        assert_eq!(s.rows(), rows);
        assert_eq!(s.cols(), cols);
        assert_eq!(s.grid().iter_rows().count(), rows);
        assert!(s.grid().iter_rows().all(|r| r.len() == cols));
    }
}

#[test]
fn test_chance_zero_starts_won() {
    let s = initialize(5, 5, 0.0, GameRng::new(1).inner_mut()).unwrap();
    assert!(s.grid().all_unlit());
    assert!(s.won());
    assert_eq!(s.status(), GameStatus::Won);
}

#[test]
fn test_chance_one_starts_all_lit() {
    let s = initialize(5, 5, 1.0, GameRng::new(1).inner_mut()).unwrap();
    assert_eq!(s.grid().lit_count(), 25);
    assert!(!s.won());
    assert_eq!(s.status(), GameStatus::Playing);
}

#[test]
fn test_initialize_rejects_invalid_config() {
    let mut rng = GameRng::new(1);
    assert_eq!(
        initialize(0, 5, 0.3, rng.inner_mut()),
        Err(ConfigError::ZeroRows)
    );
    assert_eq!(
        initialize(5, 0, 0.3, rng.inner_mut()),
        Err(ConfigError::ZeroCols)
    );
    assert!(matches!(
        initialize(5, 5, 1.01, rng.inner_mut()),
        Err(ConfigError::ChanceOutOfRange(_))
    ));
}

#[test]
fn test_one_by_one_scenario() {
    let s = initialize(1, 1, 1.0, GameRng::new(9).inner_mut()).unwrap();
    assert_eq!(s.grid().to_rows(), vec![vec![true]]);
    assert_eq!(s.status(), GameStatus::Playing);

    let next = activate(&s, 0, 0);
    assert_eq!(next.grid().to_rows(), vec![vec![false]]);
    assert_eq!(next.status(), GameStatus::Won);
}

#[test]
fn test_three_by_three_center_scenario() {
    let s = GameState::playing(Grid::new(3, 3));
    assert_eq!(s.status(), GameStatus::Playing);
    let next = activate(&s, 1, 1);

    assert_eq!(
        next.grid().to_rows(),
        vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ]
    );
    assert_eq!(next.status(), GameStatus::Playing);
}

#[test]
fn test_flip_counts_corner_edge_interior() {
    let s = state(vec![vec![true; 5]; 5]);

    assert_eq!(changed_cells(&s, &activate(&s, 0, 0)).len(), 3);
    assert_eq!(changed_cells(&s, &activate(&s, 4, 4)).len(), 3);
    assert_eq!(changed_cells(&s, &activate(&s, 0, 2)).len(), 4);
    assert_eq!(changed_cells(&s, &activate(&s, 2, 4)).len(), 4);
    assert_eq!(changed_cells(&s, &activate(&s, 2, 2)).len(), 5);
}

#[test]
fn test_diagonals_never_change() {
    let s = state(vec![vec![true; 3]; 3]);
    let next = activate(&s, 1, 1);
    for (r, c) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        assert_eq!(next.grid().get(r, c), Some(true));
    }
}

#[test]
fn test_double_activation_restores_grid() {
    let s = state(vec![
        vec![true, false, true, false],
        vec![false, true, true, false],
        vec![true, true, false, true],
    ]);
    for (r, c) in [(0, 0), (1, 2), (2, 3), (1, 1)] {
        let once = activate(&s, r, c);
        assert!(!once.won());
        assert_eq!(activate(&once, r, c), s);
    }
}

#[test]
fn test_win_is_terminal() {
    let s = state(vec![vec![true]]);
    let won = activate(&s, 0, 0);
    assert!(won.won());

    let again = activate(&won, 0, 0);
    assert_eq!(again, won);
    assert!(again.grid().all_unlit());
}

#[test]
fn test_win_from_multi_cell_board() {
    // Pressing the centre of a plus shape clears it.
    let s = state(vec![
        vec![false, true, false],
        vec![true, true, true],
        vec![false, true, false],
    ]);
    let next = activate(&s, 1, 1);
    assert!(next.won());
    assert!(is_won(&next));
}

#[test]
fn test_is_won_agrees_with_flag() {
    let engine = BoardEngine::new(BoardConfig::new(4, 4, 0.5)).unwrap();
    let mut rng = GameRng::new(77);
    let mut s = engine.initialize(rng.inner_mut());
    assert_eq!(BoardEngine::is_won(&s), s.won());

    for i in 0..200usize {
        s = engine.activate(&s, (i * 7) % 4, (i * 3) % 4);
        assert_eq!(BoardEngine::is_won(&s), s.won());
    }
}

#[test]
fn test_initialize_accepts_boards_wider_than_a_terminal() {
    let s = initialize(65, 1, 0.5, GameRng::new(4).inner_mut()).unwrap();
    assert_eq!((s.rows(), s.cols()), (65, 1));
    let s = initialize(3, 200, 1.0, GameRng::new(4).inner_mut()).unwrap();
    assert_eq!(s.grid().lit_count(), 600);
}

#[test]
fn test_activate_keeps_dimensions() {
    let s = state(vec![vec![true, false, true]; 2]);
    let next = activate(&s, 1, 2);
    assert_eq!((next.rows(), next.cols()), (2, 3));
}
