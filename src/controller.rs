//! Turn orchestration between the UI shell and the decision engine.
//!
//! The controller owns the board and the turn state for one game.
//! A new game means a new controller; there is no process-wide
//! session state.

use crate::action::{Move, Rejected};
use crate::engine;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mode, Outcome, Player, Square};
use tracing::{debug, instrument};

/// Controller phase: accepting moves, or latched on a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for the given player's move.
    AwaitingMove(Player),
    /// Game over; every further move request is rejected.
    Terminal(Outcome),
}

/// Everything that happened during one [`GameController::play`] call.
///
/// In the computer modes a single call can apply two moves: the
/// requested human move and the synchronous computer reply. The shell
/// renders from one report instead of polling the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Moves applied during this call, the requested move first.
    pub applied: Vec<Move>,
    /// Outcome after the last applied move.
    pub outcome: Outcome,
}

/// Orchestrates one game: turn alternation, the computer reply, and
/// terminal latching.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    mode: Mode,
    phase: Phase,
    history: Vec<Move>,
}

impl GameController {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            mode,
            phase: Phase::AwaitingMove(Player::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::AwaitingMove(_) => Outcome::InProgress,
            Phase::Terminal(outcome) => outcome,
        }
    }

    /// Returns the player expected to move next, or `None` once the
    /// game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            Phase::Terminal(_) => None,
        }
    }

    /// Requests a move at the given cell index (0-8) for the player
    /// whose turn it is.
    ///
    /// In the computer modes, when the move passes the turn to the
    /// computer side the reply is computed and applied before this
    /// call returns; the shell never has to ask for it.
    ///
    /// # Errors
    ///
    /// Rejects without touching the board when the index is out of
    /// range, the square is occupied, or the game is already over.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) -> Result<TurnReport, Rejected> {
        let player = match self.phase {
            Phase::AwaitingMove(player) => player,
            Phase::Terminal(_) => return Err(Rejected::GameAlreadyTerminal),
        };
        let pos = Position::from_index(cell).ok_or(Rejected::OutOfRange(cell))?;
        if !self.board.is_empty(pos) {
            return Err(Rejected::CellOccupied(pos));
        }

        let mut applied = vec![self.apply(pos, player)];

        if let Phase::AwaitingMove(next) = self.phase
            && self.mode.computer_side() == Some(next)
        {
            let reply = match self.mode {
                Mode::ComputerEasy => engine::random_move(&self.board),
                _ => engine::computer_move(&self.board, next),
            };
            if let Some(reply) = reply {
                debug!(position = %reply, "computer reply");
                applied.push(self.apply(reply, next));
            }
        }

        Ok(TurnReport {
            applied,
            outcome: self.outcome(),
        })
    }

    /// Rebuilds a game by re-applying recorded cell indices with plain
    /// alternation, as captured by [`GameController::history`].
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered, e.g. when the record
    /// continues past a terminal outcome.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, Rejected> {
        let mut controller = Self::new(Mode::TwoPlayer);
        for &cell in cells {
            controller.play(cell)?;
        }
        Ok(controller)
    }

    /// Marks the square, records the move, and advances the phase.
    /// Callers have already validated the position.
    fn apply(&mut self, pos: Position, player: Player) -> Move {
        self.board.set(pos, Square::Occupied(player));
        let mov = Move::new(player, pos);
        self.history.push(mov);

        self.phase = match rules::evaluate(&self.board) {
            Outcome::InProgress => Phase::AwaitingMove(player.opponent()),
            outcome => Phase::Terminal(outcome),
        };
        mov
    }
}
