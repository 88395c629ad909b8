//! # Reversi Engine
//!
//! An 8x8 Reversi game engine: board state, directional flip propagation,
//! move generation, the turn lifecycle with forced-pass and endgame
//! handling, and a weight-table minimax player with randomized
//! tie-breaking.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, turn state machine
//! - [`ai`] — Agent trait, minimax search, random player
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
