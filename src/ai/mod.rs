//! Adversarial search agents: the agent trait, the window-scoring heuristic,
//! plain minimax, the alpha-beta-pruned variant, and a random baseline.

mod agent;
mod alpha_beta;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use alpha_beta::{alpha_beta, AlphaBetaAgent};
pub use heuristic::{Heuristic, WindowHeuristic, WIN_SCORE};
pub use minimax::{minimax, MinimaxAgent};
pub use random::RandomAgent;
