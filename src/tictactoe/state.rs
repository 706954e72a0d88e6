//! The board capability shared by the live and projected boards

use super::{Cell, CellValue, GameResult, LineAnalyzer, Player, ProjectedBoard};

/// Read access to a tic-tac-toe position.
///
/// Implementors supply the cell lookup and the turn; every rule query is
/// derived from those two. The search only ever works through this trait,
/// branching via [`GameState::with_set`] into fresh [`ProjectedBoard`]s.
pub trait GameState {
    /// The mark at `cell`
    fn value_at(&self, cell: Cell) -> CellValue;

    /// Whether X is the side to move
    fn x_has_turn(&self) -> bool;

    fn to_move(&self) -> Player {
        Player::from_x_has_turn(self.x_has_turn())
    }

    fn can_place_at(&self, cell: Cell) -> bool {
        self.value_at(cell) == CellValue::Empty
    }

    /// If a player has won, how; `None` while the game continues or on a draw
    fn winning_line(&self) -> Option<GameResult> {
        LineAnalyzer::winning_line(self)
    }

    fn is_full(&self) -> bool {
        Cell::ALL.into_iter().all(|cell| !self.can_place_at(cell))
    }

    fn is_over(&self) -> bool {
        self.winning_line().is_some() || self.is_full()
    }

    fn winner(&self) -> Option<Player> {
        self.winning_line().map(|result| result.winner())
    }

    /// Immutable copy of this position
    fn snapshot(&self) -> ProjectedBoard {
        let mut cells = [CellValue::Empty; 9];
        for cell in Cell::ALL {
            cells[cell.index()] = self.value_at(cell);
        }
        ProjectedBoard::from_cells(cells, self.to_move())
    }

    /// New position equal to this one except that `cell` holds `value`.
    ///
    /// The turn is left unchanged and `self` is not touched.
    #[must_use = "with_set returns a new board; the original is unchanged"]
    fn with_set(&self, cell: Cell, value: CellValue) -> ProjectedBoard {
        self.snapshot().with_set(cell, value)
    }

    /// New position after the side to move places its mark at `cell`
    #[must_use = "with_placement returns a new board; the original is unchanged"]
    fn with_placement(&self, cell: Cell) -> ProjectedBoard {
        let mover = self.to_move();
        self.with_set(cell, mover.mark()).with_turn(mover.opponent())
    }
}
