//! Property tests over positions reached by random legal play.

use othello::eval::{evaluate_breakdown, evaluate_for, EvalWeights};
use othello::rules::{is_legal_move, legal_moves, GameState};
use othello::{Player, Pos};
use proptest::prelude::*;

/// Reach a position by playing `choices` as indices into the legal move list.
fn play_out(choices: &[u16]) -> GameState {
    let mut state = GameState::initial();
    for &choice in choices {
        let mut moves = legal_moves(&state.board, state.current_player);
        if moves.is_empty() {
            state.switch_player();
            moves = legal_moves(&state.board, state.current_player);
            if moves.is_empty() {
                break;
            }
        }
        state.apply(moves[choice as usize % moves.len()]);
        state.switch_player();
    }
    state.pending_move = None;
    state
}

fn arb_position() -> impl Strategy<Value = GameState> {
    prop::collection::vec(any::<u16>(), 0..60).prop_map(|choices| play_out(&choices))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Enumeration agrees with the pointwise check on all 64 cells.
    #[test]
    fn prop_enumeration_matches_pointwise(state in arb_position()) {
        let moves = state.legal_moves();
        for r in 0..8i32 {
            for c in 0..8i32 {
                let listed = moves.contains(&Pos::new(r as u8, c as u8));
                prop_assert_eq!(listed, is_legal_move(&state.board, r, c, state.current_player));
                prop_assert_eq!(listed, state.is_legal_move(r, c));
            }
        }
        prop_assert!(moves.windows(2).all(|w| w[0] < w[1]), "row-major order");
        prop_assert_eq!(state.has_legal_move(), !moves.is_empty());
    }

    /// A legal move adds the placed tile plus at least one flip, and only
    /// recolours opponent tiles.
    #[test]
    fn prop_make_move_gains_tiles(state in arb_position()) {
        let mover = state.current_player;
        for mov in state.legal_moves() {
            let mut child = state.clone();
            child.pending_move = Some(mov);
            let record = child.make_move().expect("listed move is legal");
            let flipped = record.flipped().len() as u32;

            prop_assert!(flipped >= 1);
            prop_assert_eq!(child.tile_count(mover), state.tile_count(mover) + 1 + flipped);
            prop_assert_eq!(
                child.tile_count(mover.opponent()),
                state.tile_count(mover.opponent()) - flipped
            );
            for &pos in record.flipped() {
                prop_assert_eq!(state.board.get(pos), mover.opponent().cell());
            }

            child.undo_move(&record);
            prop_assert_eq!(&child.board, &state.board);
        }
    }

    /// Scoring for the other side negates the score; swapping colours and
    /// sides together leaves it unchanged.
    #[test]
    fn prop_evaluation_antisymmetric(state in arb_position()) {
        let weights = EvalWeights::default();
        let board = &state.board;

        let one = evaluate_for(board, Player::One, &weights);
        let two = evaluate_for(board, Player::Two, &weights);
        prop_assert!((one + two).abs() < 1e-6, "one={} two={}", one, two);

        let swapped = evaluate_for(&board.swap_colors(), Player::Two, &weights);
        prop_assert!((one - swapped).abs() < 1e-6, "one={} swapped={}", one, swapped);

        let b = evaluate_breakdown(board, Player::One);
        for value in [b.parity, b.corners, b.corner_closeness, b.mobility, b.frontier, b.disk_squares] {
            prop_assert!(value.is_finite());
        }
    }

    /// Column-major square listing covers exactly the player's tiles.
    #[test]
    fn prop_squares_cover_tiles(state in arb_position()) {
        for player in [Player::One, Player::Two] {
            let squares = state.squares(player);
            prop_assert_eq!(squares.len() as u32, state.tile_count(player));
            prop_assert!(squares.windows(2).all(|w| (w[0].col, w[0].row) < (w[1].col, w[1].row)));
            for pos in squares {
                prop_assert_eq!(state.board.get(pos), player.cell());
            }
        }
    }
}
