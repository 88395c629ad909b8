use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Coord, GameState};

use super::agent::Agent;

/// Static desirability of each square: corners are decisive, squares next
/// to an open corner are liabilities, edges are moderately good. Purely
/// positional; material is never counted.
const SQUARE_WEIGHTS: [[i32; 8]; 8] = [
    [99, -8, 8, 6, 6, 8, -8, 99],
    [-8, -24, -4, -3, -3, -4, -24, -8],
    [8, -4, 7, 4, 4, 7, -4, 8],
    [6, -3, 4, 0, 0, 4, -3, 6],
    [6, -3, 4, 0, 0, 4, -3, 6],
    [8, -4, 7, 4, 4, 7, -4, 8],
    [-8, -24, -4, -3, -3, -4, -24, -8],
    [99, -8, 8, 6, 6, 8, -8, 99],
];

/// Positional weight of a square.
pub fn square_weight(coord: Coord) -> i32 {
    SQUARE_WEIGHTS[coord.0][coord.1]
}

/// Depth-limited minimax over square weights. A move is worth its square
/// weight minus the opponent's best answer on the branched board, and a
/// forced pass is worth 0. Ties for the best value are broken uniformly at
/// random.
pub struct MinimaxAgent {
    depth: usize,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    /// Deterministic tie-breaking for tests and reproducible games.
    pub fn seeded(depth: usize, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: usize, rng: StdRng) -> Self {
        assert!(depth >= 1, "search depth must be at least 1");
        MinimaxAgent { depth, rng }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Best value and move for the current player, looking `depth` plies
    /// ahead. Returns `(0, None)` when the player has to pass.
    pub fn select_move(&mut self, state: &GameState) -> (i32, Option<Coord>) {
        self.search(state, self.depth)
    }

    fn search(&mut self, state: &GameState, depth: usize) -> (i32, Option<Coord>) {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return (0, None);
        }

        let mut best_value = i32::MIN;
        let mut best_moves: Vec<Coord> = Vec::new();
        for coord in legal {
            let mut value = square_weight(coord);
            if depth > 1 {
                let next = state.branch(coord).expect("legal move must commit");
                let (reply, _) = self.search(&next, depth - 1);
                value -= reply;
            }
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(coord);
            } else if value == best_value {
                best_moves.push(coord);
            }
        }

        let pick = self.rng.random_range(0..best_moves.len());
        (best_value, Some(best_moves[pick]))
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<Coord> {
        self.select_move(state).1
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
