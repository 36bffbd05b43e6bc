//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for classifying board state.
//! Rules are separated from board storage so the search, the
//! controller, and tests all evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn, or still in progress.
///
/// Pure: never mutates the board and triggers no notification.
/// Reporting a terminal outcome to the UI shell is the controller's
/// responsibility.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = win::check_winner(board) {
        Outcome::Won(winner)
    } else if draw::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        // X O X / X O O / X X O - full board, X wins column 0.
        let mut board = Board::new();
        for (i, player) in [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
        ]
        .iter()
        .enumerate()
        {
            board.set(
                Position::from_index(i).unwrap(),
                Square::Occupied(*player),
            );
        }
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_partial_win_detected() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(evaluate(&board), Outcome::Won(Player::O));
    }
}
