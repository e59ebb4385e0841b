use crate::game::GameState;

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Depth-limited minimax without pruning.
///
/// Returns the extremal value reachable in `depth` plies and the move
/// achieving it. At depth 0 or on a terminal state the heuristic's raw score
/// comes back with no move. Ties keep the first-seen extremal move, i.e. the
/// lowest column, since `legal_moves` enumerates in ascending order.
///
/// `maximizing` is positional: the root caller passes `true` and the flag
/// simply flips every ply. It is never re-derived from whose turn it is, so
/// the root player stays the maximizer for the whole search no matter which
/// color is moving.
pub fn minimax(
    state: &GameState,
    depth: usize,
    maximizing: bool,
    heuristic: &dyn Heuristic,
) -> (i32, Option<usize>) {
    if depth == 0 || state.is_terminal() {
        return (heuristic.evaluate(state), None);
    }

    if maximizing {
        let mut value = i32::MIN;
        let mut best_move = None;
        for column in state.legal_moves() {
            let child = state.apply_move(column).unwrap();
            let (child_value, _) = minimax(&child, depth - 1, false, heuristic);
            if child_value > value {
                value = child_value;
                best_move = Some(column);
            }
        }
        (value, best_move)
    } else {
        let mut value = i32::MAX;
        let mut best_move = None;
        for column in state.legal_moves() {
            let child = state.apply_move(column).unwrap();
            let (child_value, _) = minimax(&child, depth - 1, true, heuristic);
            if child_value < value {
                value = child_value;
                best_move = Some(column);
            }
        }
        (value, best_move)
    }
}

/// Agent driving the unpruned [`minimax`] search to a fixed depth.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let (_, best_move) = minimax(state, self.depth, true, self.heuristic.as_ref());
        best_move
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
