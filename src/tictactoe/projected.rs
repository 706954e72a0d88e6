//! Immutable board snapshots used inside the search

use std::fmt;

use super::{
    Cell, CellValue, GameState, Player,
    board::{count_pieces, parse_board},
};

/// An immutable board position with the side to move.
///
/// This type implements `Copy` since it's only 10 bytes, so every tree node
/// owns an independent value and no two branches ever share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectedBoard {
    cells: [CellValue; 9],
    x_has_turn: bool,
}

impl ProjectedBoard {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with the given player to move first
    pub fn new_with_player(first_player: Player) -> Self {
        Self::from_cells([CellValue::Empty; 9], first_player)
    }

    /// Board from row-major cells. No consistency checks are made.
    pub fn from_cells(cells: [CellValue; 9], to_move: Player) -> Self {
        ProjectedBoard {
            cells,
            x_has_turn: to_move.is_x(),
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (`.`, `X`, `O`; whitespace
    /// ignored) and may end with `_X` or `_O` to name the player to move.
    /// Without the suffix the player is inferred from the piece counts.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not have exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than 1
    /// - No suffix is given and the counts do not fit X moving first
    ///
    /// # Examples
    ///
    /// ```
    /// use tttree::tictactoe::{GameState, Player, ProjectedBoard};
    ///
    /// let board = ProjectedBoard::from_string("XO. / ... / ...").unwrap();
    /// assert_eq!(board.to_move(), Player::X);
    /// assert_eq!(board.encode(), "XO......._X");
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let (cells, to_move) = parse_board(s)?;
        Ok(Self::from_cells(cells, to_move))
    }

    pub fn cells(&self) -> &[CellValue; 9] {
        &self.cells
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = count_pieces(&self.cells);
        count.x + count.o
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.cells[cell.index()] == CellValue::Empty)
            .collect()
    }

    #[must_use = "with_set returns a new board; the original is unchanged"]
    pub fn with_set(&self, cell: Cell, value: CellValue) -> Self {
        let mut next = *self;
        next.cells[cell.index()] = value;
        next
    }

    #[must_use = "with_turn returns a new board; the original is unchanged"]
    pub fn with_turn(&self, to_move: Player) -> Self {
        let mut next = *self;
        next.x_has_turn = to_move.is_x();
        next
    }

    /// Find the first cell where two boards differ
    pub fn find_changed_cell(&self, other: &ProjectedBoard) -> Option<Cell> {
        Cell::ALL
            .into_iter()
            .find(|cell| self.cells[cell.index()] != other.cells[cell.index()])
    }

    /// Get a string representation for use as a key, e.g. `"XO......._X"`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move()
        )
    }
}

impl GameState for ProjectedBoard {
    fn value_at(&self, cell: Cell) -> CellValue {
        self.cells[cell.index()]
    }

    fn x_has_turn(&self) -> bool {
        self.x_has_turn
    }

    fn snapshot(&self) -> ProjectedBoard {
        *self
    }
}

impl Default for ProjectedBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
