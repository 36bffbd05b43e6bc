//! Tic-tac-toe decision engine.
//!
//! This library is the playable core of a 3x3 tic-tac-toe game with an
//! optional computer opponent. A UI shell (window, clicks, dialogs,
//! pacing delays) is expected to sit on top of it: the shell translates
//! input into [`GameController::play`] calls and renders the returned
//! [`TurnReport`]; everything else lives here.
//!
//! # Architecture
//!
//! - **types / position**: board representation with typed cells,
//!   making illegal marks and out-of-range cells unrepresentable
//! - **rules**: pure outcome classification (win, draw, in progress)
//! - **engine**: exhaustive minimax producing the optimal move for the
//!   computer side, which always plays O
//! - **controller**: turn alternation, the synchronous computer reply,
//!   and structured rejection of stale input
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameController, Mode, Outcome};
//!
//! let mut game = GameController::new(Mode::ComputerHard);
//! // X takes the center; the computer's O reply is applied before
//! // play() returns.
//! let report = game.play(4).expect("center is free");
//! assert_eq!(report.applied.len(), 2);
//! assert_eq!(report.outcome, Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod engine;
mod position;
mod rules;
mod types;

pub use action::{Move, Rejected};
pub use controller::{GameController, TurnReport};
pub use engine::{best_move, computer_move, random_move};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_full};
pub use types::{Board, Mode, Outcome, Player, Square};
