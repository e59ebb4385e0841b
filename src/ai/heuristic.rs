use crate::game::{GameState, Player, CENTER_COL, COLS, ROWS};

/// Score of a decided game. Saturating stand-in for the infinite terminal
/// values: strictly beyond any sum the windowed scoring can reach, and safe
/// to negate and compare in `i32`.
pub const WIN_SCORE: i32 = 1_000_000;

/// Trait for evaluating a position when the search bottoms out.
pub trait Heuristic: Send {
    fn evaluate(&self, state: &GameState) -> i32;
}

/// Default heuristic: a weighted count over every 4-cell window plus a
/// center-column bonus, scored for the state's player to move.
///
/// Decided games short-circuit to an absolute convention instead: a Red win
/// is always `+WIN_SCORE` and a Yellow win always `-WIN_SCORE`, no matter
/// whose turn it is. The windowed score is mover-relative and the terminal
/// score is Red-relative; the engine depends on that exact pairing.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        let mut score = 0;

        if own == 4 {
            score += 100;
        } else if own == 3 && empty == 1 {
            score += 5;
        } else if own == 2 && empty == 2 {
            score += 2;
        }

        if opp == 3 && empty == 1 {
            score -= 4;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, state: &GameState) -> i32 {
        if let Some(winner) = state.winner() {
            return if winner == Player::Red {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
        }

        let board = state.board();
        let own_cell = state.current_player().to_cell();
        let opp_cell = state.current_player().other().to_cell();
        let mut score = 0;

        // Center column bonus for the mover's pieces
        for row in 0..ROWS {
            if board.get(row, CENTER_COL) == own_cell {
                score += 3;
            }
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row - i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        score
    }
}
