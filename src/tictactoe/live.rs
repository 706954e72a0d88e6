//! The mutable board owned by a running game session

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Cell, CellValue, GameState, Player, ProjectedBoard};

/// A placement made on a live board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub cell: Cell,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a position, `None` while the game is still running
    pub fn of<S: GameState + ?Sized>(state: &S) -> Option<GameOutcome> {
        if let Some(result) = state.winning_line() {
            Some(GameOutcome::Win(result.winner()))
        } else if state.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// Board mutated in place, one placement per move, with its history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveBoard {
    cells: [CellValue; 9],
    x_has_turn: bool,
    placements: Vec<Placement>,
}

impl LiveBoard {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    pub fn new_with_player(first_player: Player) -> Self {
        LiveBoard {
            cells: [CellValue::Empty; 9],
            x_has_turn: first_player.is_x(),
            placements: Vec::new(),
        }
    }

    /// Place the mark of the side to move at `cell`, then pass the turn.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is decided and
    /// [`crate::Error::CellOccupied`] if `cell` already holds a mark.
    pub fn make_placement(&mut self, cell: Cell) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if !self.can_place_at(cell) {
            return Err(crate::Error::CellOccupied {
                cell: cell.to_string(),
            });
        }

        let player = self.to_move();
        self.cells[cell.index()] = player.mark();
        self.x_has_turn = !self.x_has_turn;
        self.placements.push(Placement { cell, player });
        trace!(%cell, %player, "placement");

        if let Some(outcome) = self.outcome() {
            debug!(?outcome, moves = self.placements.len(), "game finished");
        }
        Ok(())
    }

    /// Clear the board for a new game started by `first_player`
    pub fn reset(&mut self, first_player: Player) {
        self.cells = [CellValue::Empty; 9];
        self.x_has_turn = first_player.is_x();
        self.placements.clear();
    }

    /// Placements made since the last reset, oldest first
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(self)
    }
}

impl GameState for LiveBoard {
    fn value_at(&self, cell: Cell) -> CellValue {
        self.cells[cell.index()]
    }

    fn x_has_turn(&self) -> bool {
        self.x_has_turn
    }

    fn snapshot(&self) -> ProjectedBoard {
        ProjectedBoard::from_cells(self.cells, self.to_move())
    }
}

impl Default for LiveBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LiveBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
