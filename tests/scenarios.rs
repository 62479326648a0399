//! End-to-end scenarios through the public API.

use othello::board::DIRECTIONS;
use othello::{
    Board, Cell, Engine, EngineError, GameState, Player, Pos, SearchConfig, SearchLimit,
    Searcher,
};

fn start_grid() -> [[u8; 8]; 8] {
    let mut grid = [[0u8; 8]; 8];
    grid[3][3] = 2;
    grid[3][4] = 1;
    grid[4][3] = 1;
    grid[4][4] = 2;
    grid
}

#[test]
fn opening_has_four_moves_in_row_major_order() {
    let state = GameState::from_rows(&start_grid(), 0).unwrap();
    assert_eq!(
        state.legal_moves(),
        vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
    );
}

#[test]
fn opening_move_flips_center_tile() {
    let mut state = GameState::from_rows(&start_grid(), 0).unwrap();
    state.pending_move = Some(Pos::new(2, 3));
    state.make_move().expect("legal");

    assert_eq!(state.board.get(Pos::new(2, 3)), Cell::PlayerOne);
    assert_eq!(state.board.get(Pos::new(3, 3)), Cell::PlayerOne);
    assert_eq!(state.tile_count(Player::One), 4);
    assert_eq!(state.board.to_rows()[3][3], 1);
}

#[test]
fn no_legal_move_is_signalled() {
    let mut grid = [[0u8; 8]; 8];
    grid[0][0] = 1;
    grid[7][7] = 2;

    let mut engine = Engine::new();
    let err = engine
        .choose_move_from_rows(&grid, 0, SearchLimit::depth(3))
        .unwrap_err();
    assert_eq!(err, EngineError::NoLegalMove { player: Player::One });

    let err = engine
        .choose_move_from_rows(&grid, 1, SearchLimit::time_secs(0.05).unwrap())
        .unwrap_err();
    assert_eq!(err, EngineError::NoLegalMove { player: Player::Two });
}

#[test]
fn deserialized_off_board_move_is_ignored() {
    let mut state = GameState::initial();
    let before = state.clone();

    let pos: Pos = serde_json::from_str(r#"{"row": 9, "col": 2}"#).unwrap();
    state.pending_move = Some(pos);
    assert!(state.make_move().is_none());
    assert!(!state.is_legal_move(i32::from(pos.row), i32::from(pos.col)));
    assert_eq!(state.board, before.board);
}

#[test]
fn depth_zero_scores_root_statically() {
    let state = GameState::initial();
    let mut searcher = Searcher::new(SearchConfig::default());
    let score = searcher.score_position(&state, 0);
    assert_eq!(score, othello::evaluate(&state, &searcher.config().weights));
}

#[test]
fn invalid_inputs_rejected_before_search() {
    let mut engine = Engine::new();

    let mut grid = start_grid();
    grid[6][1] = 9;
    assert_eq!(
        engine
            .choose_move_from_rows(&grid, 0, SearchLimit::depth(1))
            .unwrap_err(),
        EngineError::InvalidCell { row: 6, col: 1, value: 9 }
    );

    let ragged: Vec<Vec<u8>> = (0..8).map(|r| vec![0; if r == 2 { 9 } else { 8 }]).collect();
    assert_eq!(
        engine
            .choose_move_from_rows(&ragged, 0, SearchLimit::depth(1))
            .unwrap_err(),
        EngineError::InvalidDimensions { rows: 8, cols: 9 }
    );

    assert!(matches!(
        SearchLimit::time_secs(-0.5),
        Err(EngineError::InvalidTimeBudget(_))
    ));
}

#[test]
fn adjacent_empty_cell_never_flips() {
    let state = GameState::initial();
    for r in 0..8u8 {
        for c in 0..8u8 {
            let pos = Pos::new(r, c);
            for &dir in &DIRECTIONS {
                let empty_next = match pos.offset(dir, 1) {
                    None => true,
                    Some(next) => state.board.is_empty(next),
                };
                if empty_next {
                    assert!(!state.has_tile_to_flip(pos, dir), "{:?} {:?}", pos, dir);
                }
            }
        }
    }
}

#[test]
fn engine_plays_a_full_game() {
    let mut engine = Engine::with_config(SearchConfig::with_depth(1));
    let mut state = GameState::initial();
    let mut passes = 0;

    while passes < 2 {
        match engine.choose_move(&state, engine.default_limit()) {
            Ok(result) => {
                passes = 0;
                let before = state.tile_count(state.current_player);
                assert!(state.apply(result.best_move).is_some());
                assert!(state.tile_count(state.current_player) >= before + 2);
            }
            Err(EngineError::NoLegalMove { .. }) => passes += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
        state.switch_player();
    }

    let total = state.tile_count(Player::One) + state.tile_count(Player::Two);
    assert_eq!(total + state.board.empty_count(), 64);
    assert!(!othello::rules::has_legal_move(&state.board, Player::One));
    assert!(!othello::rules::has_legal_move(&state.board, Player::Two));
}

#[test]
fn board_round_trips_through_grid() {
    let board = Board::from_rows(&start_grid()).unwrap();
    assert_eq!(board, Board::initial());
    assert_eq!(board.to_rows(), start_grid());
}
