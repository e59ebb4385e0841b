//! Match loop: alternates two agents over a shared game state until the game
//! is decided. Thin collaborator around the engine; all rule enforcement
//! stays in [`GameState`].

use crate::ai::Agent;
use crate::error::InvalidMove;
use crate::game::{GameOutcome, GameState, Player};

/// Failure while running a match between two agents.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{0} agent returned no move for a live position")]
    NoMove(&'static str),

    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),
}

/// A completed match: final position, result, and the columns requested in
/// play order.
#[derive(Debug)]
pub struct MatchRecord {
    pub final_state: GameState,
    pub outcome: GameOutcome,
    pub moves: Vec<usize>,
}

/// Alternates two agents, applying each chosen move and reporting the
/// result. Agents are trusted to pick from `legal_moves`; anything else
/// surfaces as a hard [`MatchError`] rather than a skipped turn.
pub struct MatchDriver {
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
}

impl MatchDriver {
    pub fn new(red: Box<dyn Agent>, yellow: Box<dyn Agent>) -> Self {
        MatchDriver { red, yellow }
    }

    pub fn agent_name(&self, player: Player) -> &str {
        match player {
            Player::Red => self.red.name(),
            Player::Yellow => self.yellow.name(),
        }
    }

    /// Run a match to completion from `state`. `observe` is invoked with the
    /// requested column and the resulting position after every applied move.
    pub fn run(
        &mut self,
        mut state: GameState,
        mut observe: impl FnMut(usize, &GameState),
    ) -> Result<MatchRecord, MatchError> {
        let mut moves = Vec::new();

        loop {
            if let Some(outcome) = state.outcome() {
                return Ok(MatchRecord {
                    final_state: state,
                    outcome,
                    moves,
                });
            }

            let player = state.current_player();
            let agent = match player {
                Player::Red => &mut self.red,
                Player::Yellow => &mut self.yellow,
            };
            let column = agent
                .select_action(&state)
                .ok_or(MatchError::NoMove(player.name()))?;

            state = state.apply_move(column)?;
            moves.push(column);
            observe(column, &state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AlphaBetaAgent, MinimaxAgent, RandomAgent};

    /// Replays a fixed column script; used to steer games into known
    /// endings.
    struct ScriptedAgent {
        script: Vec<usize>,
        next: usize,
    }

    impl ScriptedAgent {
        fn new(script: Vec<usize>) -> Self {
            ScriptedAgent { script, next: 0 }
        }
    }

    impl Agent for ScriptedAgent {
        fn select_action(&mut self, _state: &GameState) -> Option<usize> {
            let column = self.script.get(self.next).copied();
            self.next += 1;
            column
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    // Legal 42-move fill with no four in a row anywhere.
    const DRAW_GAME: [usize; 42] = [
        6, 5, 6, 4, 1, 5, 2, 1, 4, 4, 5, 6, 4, 4, 3, 1, 5, 5, 4, 3, 6, 5, 1, 6, 3, 0, 1, 3, 6, 2,
        6, 1, 0, 0, 0, 0, 0, 3, 2, 2, 2, 2,
    ];

    fn split_script(moves: &[usize]) -> (ScriptedAgent, ScriptedAgent) {
        let red = moves.iter().copied().step_by(2).collect();
        let yellow = moves.iter().copied().skip(1).step_by(2).collect();
        (ScriptedAgent::new(red), ScriptedAgent::new(yellow))
    }

    #[test]
    fn random_match_completes() {
        let mut driver = MatchDriver::new(
            Box::new(RandomAgent::with_seed(1)),
            Box::new(RandomAgent::with_seed(2)),
        );
        let record = driver.run(GameState::initial(), |_, _| {}).unwrap();
        assert_eq!(record.final_state.board().occupied(), record.moves.len());
        assert!(matches!(
            record.outcome,
            GameOutcome::Winner(_) | GameOutcome::Draw
        ));
    }

    #[test]
    fn depth_one_minimax_vs_depth_eight_alpha_beta() {
        let mut driver = MatchDriver::new(
            Box::new(MinimaxAgent::new(1)),
            Box::new(AlphaBetaAgent::new(8)),
        );

        let mut seen = 0usize;
        let record = driver
            .run(GameState::initial(), |_, state| {
                seen += 1;
                // Occupied cells track moves played at every step.
                assert_eq!(state.board().occupied(), seen);
                for col in state.legal_moves() {
                    assert!(!state.board().is_column_full(col));
                }
            })
            .unwrap();

        assert_eq!(record.moves.len(), seen);
        assert!(matches!(
            record.outcome,
            GameOutcome::Winner(_) | GameOutcome::Draw
        ));
    }

    #[test]
    fn scripted_draw_is_reported_as_draw() {
        let (red, yellow) = split_script(&DRAW_GAME);
        let mut driver = MatchDriver::new(Box::new(red), Box::new(yellow));
        let record = driver.run(GameState::initial(), |_, _| {}).unwrap();

        assert_eq!(record.outcome, GameOutcome::Draw);
        assert!(!record.final_state.is_terminal());
        assert!(record.final_state.legal_moves().is_empty());
        assert_eq!(record.final_state.board().occupied(), 42);
    }

    #[test]
    fn agent_running_out_of_script_is_an_error() {
        let mut driver = MatchDriver::new(
            Box::new(ScriptedAgent::new(vec![3])),
            Box::new(ScriptedAgent::new(vec![])),
        );
        let err = driver.run(GameState::initial(), |_, _| {}).unwrap_err();
        assert!(matches!(err, MatchError::NoMove("Yellow")));
    }

    #[test]
    fn search_agent_beats_random_as_red() {
        // Red is the side whose wins the terminal convention rewards, so
        // only Red-side strength is a meaningful yardstick.
        let games = 20;
        let mut search_wins = 0;

        for seed in 0..games {
            let mut driver = MatchDriver::new(
                Box::new(AlphaBetaAgent::new(4)),
                Box::new(RandomAgent::with_seed(seed)),
            );
            let record = driver.run(GameState::initial(), |_, _| {}).unwrap();
            if record.outcome == GameOutcome::Winner(Player::Red) {
                search_wins += 1;
            }
        }

        assert!(
            search_wins * 5 >= games * 4,
            "alpha-beta won only {search_wins}/{games} against random"
        );
    }

    #[test]
    fn agent_names_are_reported_by_color() {
        let driver = MatchDriver::new(
            Box::new(MinimaxAgent::new(1)),
            Box::new(AlphaBetaAgent::new(1)),
        );
        assert_eq!(driver.agent_name(Player::Red), "Minimax");
        assert_eq!(driver.agent_name(Player::Yellow), "AlphaBeta");
    }
}
