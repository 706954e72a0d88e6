//! Winning line analysis for Tic-Tac-Toe

use serde::Serialize;

use super::{Cell, CellValue, GameState, Player};

/// Three cells that win the game when they all hold the same mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine([Cell; 3]);

impl WinningLine {
    const fn new(a: Cell, b: Cell, c: Cell) -> Self {
        WinningLine([a, b, c])
    }

    pub fn cells(&self) -> &[Cell; 3] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }
}

const fn row_line(row: usize) -> WinningLine {
    WinningLine::new(Cell::at(row, 0), Cell::at(row, 1), Cell::at(row, 2))
}

const fn column_line(column: usize) -> WinningLine {
    WinningLine::new(Cell::at(0, column), Cell::at(1, column), Cell::at(2, column))
}

/// The eight winning lines, in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub static WINNING_LINES: [WinningLine; 8] = [
    row_line(0),
    row_line(1),
    row_line(2),
    column_line(0),
    column_line(1),
    column_line(2),
    WinningLine::new(Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)),
    WinningLine::new(Cell::at(2, 0), Cell::at(1, 1), Cell::at(0, 2)),
];

/// How a finished game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameResult {
    pub winning_line: WinningLine,
    pub winner_is_x: bool,
}

impl GameResult {
    pub fn winner(&self) -> Player {
        Player::from_x_has_turn(self.winner_is_x)
    }
}

/// Utility for analyzing winning lines on any [`GameState`]
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line (in [`WINNING_LINES`] order) held entirely by one mark
    pub fn winning_line<S: GameState + ?Sized>(state: &S) -> Option<GameResult> {
        WINNING_LINES.iter().find_map(|line| {
            let [a, b, c] = *line.cells();
            match state.value_at(a) {
                CellValue::Empty => None,
                mark if mark == state.value_at(b) && mark == state.value_at(c) => {
                    Some(GameResult {
                        winning_line: *line,
                        winner_is_x: mark == CellValue::X,
                    })
                }
                _ => None,
            }
        })
    }
}
