//! Automated players: the agent seam, the weight-table minimax engine, and
//! a uniformly random opponent.

mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{square_weight, MinimaxAgent};
pub use random::RandomAgent;
