use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves. Baseline
/// opponent for sanity-checking the search agents.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible matches.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_moves();

        for _ in 0..100 {
            let action = agent.select_action(&state).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while state.outcome().is_none() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state).unwrap()
            } else {
                agent2.select_action(&state).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_seeded_agent_is_deterministic() {
        let state = GameState::initial().apply_move(3).unwrap();
        let first: Vec<Option<usize>> = {
            let mut agent = RandomAgent::with_seed(7);
            (0..10).map(|_| agent.select_action(&state)).collect()
        };
        let second: Vec<Option<usize>> = {
            let mut agent = RandomAgent::with_seed(7);
            (0..10).map(|_| agent.select_action(&state)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
