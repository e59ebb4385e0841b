use crate::game::GameState;

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Depth-limited minimax with alpha-beta pruning.
///
/// `alpha` is the best value the maximizer can already guarantee along the
/// current path, `beta` the minimizer's counterpart; once `alpha >= beta`
/// the remaining sibling moves are provably irrelevant and the loop stops.
/// Root values match the unpruned `minimax` search exactly for a given depth
/// and heuristic. The chosen move can differ, but only between
/// moves tied at the optimal value: pruning changes which ties are seen.
///
/// As in the unpruned search, `maximizing` starts `true` at the root and
/// flips positionally every ply.
pub fn alpha_beta(
    state: &GameState,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
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
            let (child_value, _) = alpha_beta(&child, depth - 1, alpha, beta, false, heuristic);
            if child_value > value {
                value = child_value;
                best_move = Some(column);
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        (value, best_move)
    } else {
        let mut value = i32::MAX;
        let mut best_move = None;
        for column in state.legal_moves() {
            let child = state.apply_move(column).unwrap();
            let (child_value, _) = alpha_beta(&child, depth - 1, alpha, beta, true, heuristic);
            if child_value < value {
                value = child_value;
                best_move = Some(column);
            }
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        (value, best_move)
    }
}

/// Agent driving the pruned [`alpha_beta`] search to a fixed depth.
pub struct AlphaBetaAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl AlphaBetaAgent {
    pub fn new(depth: usize) -> Self {
        AlphaBetaAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBetaAgent { depth, heuristic }
    }
}

impl Agent for AlphaBetaAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let (_, best_move) = alpha_beta(
            state,
            self.depth,
            i32::MIN,
            i32::MAX,
            true,
            self.heuristic.as_ref(),
        );
        best_move
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
