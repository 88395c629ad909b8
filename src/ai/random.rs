use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Coord, GameState};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal moves, and
/// passes when there are none.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn seeded(seed: u64) -> Self {
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
    fn select_action(&mut self, state: &GameState) -> Option<Coord> {
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
    use crate::game::{Board, Cell, Player};

    #[test]
    fn test_selects_legal_move() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_moves();

        for _ in 0..100 {
            let coord = agent.select_action(&state).unwrap();
            assert!(legal.contains(&coord), "move {coord:?} is not legal");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut a = RandomAgent::seeded(7);
        let mut b = RandomAgent::seeded(7);
        let state = GameState::initial();

        for _ in 0..20 {
            assert_eq!(a.select_action(&state), b.select_action(&state));
        }
    }

    #[test]
    fn test_passes_when_moveless() {
        // White has no legal move in this position.
        let mut board = Board::empty();
        board.set((0, 0), Cell::Owned(Player::Black)).unwrap();
        board.set((0, 1), Cell::Owned(Player::White)).unwrap();
        let mut state = GameState::from_position(board, Player::White);

        let mut agent = RandomAgent::seeded(0);
        assert_eq!(agent.select_action(&state), None);
        assert_eq!(agent.take_turn(&mut state), Ok(None));
        assert_eq!(state.current_player(), Player::Black);
    }

    #[test]
    fn test_name() {
        assert_eq!(RandomAgent::new().name(), "Random");
    }
}
