use crate::error::MoveError;
use crate::game::{Coord, GameState};

/// Common interface for automated players.
pub trait Agent {
    /// Choose a move for the current player, or `None` to pass.
    /// Implementations must only return `None` when no legal move exists.
    fn select_action(&mut self, state: &GameState) -> Option<Coord>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Take a full turn: commit the chosen move, or pass the turn when
    /// there is none. Returns the committed coordinate, or `None` for a
    /// pass. Fails with [`MoveError::GameOver`] once the game has ended.
    fn take_turn(&mut self, state: &mut GameState) -> Result<Option<Coord>, MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match self.select_action(state) {
            Some(coord) => {
                state.commit_move(coord)?;
                Ok(Some(coord))
            }
            None => {
                state.voluntary_pass()?;
                Ok(None)
            }
        }
    }
}
