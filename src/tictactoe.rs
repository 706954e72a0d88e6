//! Tic-Tac-Toe game state model

pub mod board;
pub mod lines;
pub mod live;
pub mod projected;
pub mod state;

pub use board::{BOARD_SIZE, Cell, CellValue, Player};
pub use lines::{GameResult, LineAnalyzer, WINNING_LINES, WinningLine};
pub use live::{GameOutcome, LiveBoard, Placement};
pub use projected::ProjectedBoard;
pub use state::GameState;
