use crate::game::GameState;

/// Common interface for move-selecting agents.
pub trait Agent {
    /// Pick a column for the given position, or `None` when the agent has
    /// nothing to offer (terminal or full board). Callers are expected to
    /// consult `legal_moves` before asking.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
