use std::cmp::Ordering;
use std::fmt;

use crate::error::MoveError;

use super::board::{Board, Cell, Coord, BOARD_SIZE};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "{} wins!", player.name()),
            GameOutcome::Draw => write!(f, "It's a tie!"),
        }
    }
}

/// Turn-lifecycle state machine over a [`Board`]: whose move it is, which
/// moves are legal, and whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state, Black to move.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Black,
            outcome: None,
        }
    }

    /// Enter an arbitrary position. Endgame detection runs immediately, so
    /// a position where neither side can move is terminal from the start.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        let mut state = GameState {
            board,
            current_player,
            outcome: None,
        };
        state.check_endgame();
        state
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Piece counts as (black, white).
    pub fn scores(&self) -> (usize, usize) {
        self.board.scores()
    }

    /// Get the cell at `coord`.
    pub fn piece_at(&self, coord: Coord) -> Result<Cell, MoveError> {
        self.board.piece_at(coord)
    }

    /// Legal moves for the current player in row-major order. The list is
    /// recomputed fresh on every call.
    pub fn legal_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if matches!(
                    self.board.captures((row, col), self.current_player),
                    Ok(n) if n > 0
                ) {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Whether `player` has at least one legal move. This is a pure query;
    /// probing the opponent's mobility never changes whose turn it is.
    pub fn has_any_move(&self, player: Player) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if matches!(self.board.captures((row, col), player), Ok(n) if n > 0) {
                    return true;
                }
            }
        }
        false
    }

    /// Hand the turn to the other player unconditionally. This performs no
    /// legality or endgame checks and never touches the outcome;
    /// [`GameState::commit_move`] and [`GameState::voluntary_pass`] are the
    /// checked entry points.
    pub fn advance_player(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Play the current player's piece at `coord`. On success the captured
    /// runs are flipped, the turn advances, and endgame detection runs.
    /// Returns the number of pieces flipped; an illegal move leaves the
    /// state untouched.
    pub fn commit_move(&mut self, coord: Coord) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let flipped = self.board.place(coord, self.current_player)?;
        self.advance_player();
        self.check_endgame();
        Ok(flipped)
    }

    /// Pass the turn without touching the board. Only legal when the
    /// current player has no move.
    pub fn voluntary_pass(&mut self) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.has_any_move(self.current_player) {
            return Err(MoveError::MovesAvailable);
        }
        self.advance_player();
        self.check_endgame();
        Ok(())
    }

    /// Independent copy of this state with `coord` committed, for use by
    /// hypothetical look-ahead. The copy shares no storage with `self`.
    pub fn branch(&self, coord: Coord) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.commit_move(coord)?;
        Ok(next)
    }

    /// The game ends when neither player can move; more discs wins.
    fn check_endgame(&mut self) {
        if self.has_any_move(self.current_player)
            || self.has_any_move(self.current_player.other())
        {
            return;
        }
        let (black, white) = self.board.scores();
        self.outcome = Some(match black.cmp(&white) {
            Ordering::Greater => GameOutcome::Winner(Player::Black),
            Ordering::Less => GameOutcome::Winner(Player::White),
            Ordering::Equal => GameOutcome::Draw,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
