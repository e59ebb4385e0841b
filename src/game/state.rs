use crate::error::InvalidMove;

use super::board::{CENTER_COL, COLS};
use super::{Board, Player};

/// Final result of a game, as reported to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A Connect Four position: grid, player to move, and whether a winning line
/// has been detected.
///
/// `Copy` on purpose: the search explores branches on independent copies of
/// the state, so sibling subtrees can never alias each other's grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    terminal: bool,
}

impl GameState {
    /// Create the initial game state with Red to move.
    pub fn initial() -> Self {
        Self::with_starting_player(Player::Red)
    }

    /// Create an empty board with the given player to move.
    pub fn with_starting_player(player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: player,
            terminal: false,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a winning line has been detected. A full board with no winner
    /// is a draw, not a terminal state; see [`GameState::outcome`].
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The player who completed four in a row, if any. The current player
    /// already flipped on the winning move, so the winner is whoever is NOT
    /// to move.
    pub fn winner(&self) -> Option<Player> {
        if self.terminal {
            Some(self.current_player.other())
        } else {
            None
        }
    }

    /// Game result for the driver: a winner once terminal, a draw once the
    /// board fills up with no winner, `None` while the game is still live.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Winner(winner))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Columns that can still receive a piece, in ascending order. Not
    /// filtered by the terminal flag; search and driver check
    /// [`GameState::is_terminal`] before expanding moves.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state (pure transform).
    ///
    /// The first piece of a game always goes to the center column, whatever
    /// column was requested; the opening override happens before range
    /// validation, so on an empty board no request can fail.
    pub fn apply_move(&self, column: usize) -> Result<GameState, InvalidMove> {
        if self.terminal {
            return Err(InvalidMove::GameOver);
        }

        let column = if self.board.is_empty() {
            CENTER_COL
        } else {
            column
        };

        let mut board = self.board;
        board.drop_piece(column, self.current_player.to_cell())?;

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            terminal: board.check_win().is_some(),
        })
    }
}
