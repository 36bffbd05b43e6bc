//! Adversarial search for the computer opponent.
//!
//! The computer is hard-coded to play O, and the value convention
//! encodes that: O is the maximizing side and X the minimizing side.
//! This asymmetry is deliberate and must not be generalized to
//! "current player maximizes" - doing so would silently change which
//! side the empty-board fallback assumes is the computer.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Value of a position X has already won.
const X_WINS: i32 = -1;
/// Value of a position O has already won.
const O_WINS: i32 = 1;
/// Value of a drawn position.
const DRAW: i32 = 0;

/// Exhaustive minimax over the remaining game tree.
///
/// Returns the game-theoretic value of the board with `player` to
/// move, and the move achieving it (`None` on terminal boards).
/// Values stay in `{-1, 0, 1}`: there is no depth shading, so the
/// engine has no preference between a faster and a slower win. When
/// several candidates tie, the first in ascending index order is kept.
///
/// Each branch explores its own clone of the board; nothing visible
/// to a sibling branch is ever mutated.
pub fn best_move(board: &Board, player: Player) -> (i32, Option<Position>) {
    match rules::check_winner(board) {
        Some(Player::X) => return (X_WINS, None),
        Some(Player::O) => return (O_WINS, None),
        None => {}
    }

    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return (DRAW, None);
    }

    let mut best_value = match player {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    };
    let mut best = None;

    for pos in candidates {
        let mut child = board.clone();
        child.set(pos, Square::Occupied(player));
        let (value, _) = best_move(&child, player.opponent());

        let improves = match player {
            Player::O => value > best_value,
            Player::X => value < best_value,
        };
        if improves {
            best_value = value;
            best = Some(pos);
        }
    }

    (best_value, best)
}

/// Chooses the computer's move on the given board.
///
/// On a completely empty board every opening is a draw under optimal
/// opposition, so a uniform-random opening is substituted for variety
/// at zero search cost. This is the only randomness in the hard path.
/// Otherwise the minimax move is returned. `None` only when the board
/// has no legal move.
#[instrument(skip(board))]
pub fn computer_move(board: &Board, player: Player) -> Option<Position> {
    let candidates = board.empty_cells();
    if candidates.len() == 9 {
        let opening = candidates.choose(&mut rand::rng()).copied();
        debug!(?opening, "empty board, random opening");
        return opening;
    }

    let (value, chosen) = best_move(board, player);
    debug!(value, ?chosen, "minimax move");
    chosen
}

/// Uniform-random pick among the empty squares (easy mode).
#[instrument(skip(board))]
pub fn random_move(board: &Board) -> Option<Position> {
    board.empty_cells().choose(&mut rand::rng()).copied()
}
