//! Tests for the computer opponent's move selection.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_core::{
    Board, GameError, Marker, Outcome, Tier, evaluate, select_move, winning_move,
};

fn board(cells: &str) -> Board {
    cells.parse().expect("valid board")
}

#[test]
fn test_completes_own_line_over_blocking() {
    let b = board("XX_OO____");
    let mut rng = StdRng::seed_from_u64(0);
    let selection = select_move(&b, Marker::O, Marker::X, &mut rng).unwrap();
    assert_eq!(selection.index(), 5);
}

#[test]
fn test_blocks_when_it_cannot_win() {
    let b = board("XX__O____");
    let mut rng = StdRng::seed_from_u64(0);
    let selection = select_move(&b, Marker::O, Marker::X, &mut rng).unwrap();
    assert_eq!(selection.index(), 2);
}

#[test]
fn test_full_board_refused() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&board("XOXXOOOXO"), Marker::O, Marker::X, &mut rng),
        Err(GameError::BoardFull)
    );
}

#[test]
fn test_markers_can_be_swapped() {
    // Computer playing X wins the left column.
    let b = board("XO_XO____");
    let mut rng = StdRng::seed_from_u64(0);
    let selection = select_move(&b, Marker::X, Marker::O, &mut rng).unwrap();
    assert_eq!(selection.index(), 6);
    assert_eq!(selection.tier, Tier::Win);
}

/// Collects every in-progress position reachable by legal play with O to move.
fn positions_with_o_to_move() -> Vec<Board> {
    fn walk(b: Board, to_move: Marker, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(b) || evaluate(&b) != Outcome::InProgress {
            return;
        }
        if to_move == Marker::O {
            out.push(b);
        }
        for pos in b.empty_positions() {
            walk(b.with(pos, to_move), to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Marker::X, &mut seen, &mut out);
    out
}

#[test]
fn test_heuristic_over_all_reachable_positions() {
    let mut rng = StdRng::seed_from_u64(1234);
    let positions = positions_with_o_to_move();
    assert!(!positions.is_empty());

    for b in positions {
        let before = b;
        let selection = select_move(&b, Marker::O, Marker::X, &mut rng).unwrap();
        assert_eq!(b, before, "board mutated");
        assert!(b.is_empty(selection.position), "occupied square chosen");

        let after = b.with(selection.position, Marker::O);
        if winning_move(&b, Marker::O).is_some() {
            assert_eq!(selection.tier, Tier::Win);
            assert_eq!(evaluate(&after), Outcome::Winner(Marker::O));
        } else if winning_move(&b, Marker::X).is_some() {
            assert_eq!(selection.tier, Tier::Block);
            assert_eq!(
                evaluate(&b.with(selection.position, Marker::X)),
                Outcome::Winner(Marker::X)
            );
        } else {
            assert_eq!(selection.tier, Tier::Random);
        }
    }
}
