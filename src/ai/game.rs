//! Driving a full game between two deciders

use tracing::debug;

use super::DecisionContext;
use crate::{
    Error, Result,
    ports::Decider,
    tictactoe::{GameOutcome, GameState, LiveBoard, Player},
};

/// A finished game: the final board (with its placement history) and outcome
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub board: LiveBoard,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Outcome seen from `player`: 1 for a win, -1 for a loss, 0 for a draw
    pub fn score_for(&self, player: Player) -> i32 {
        match self.outcome {
            GameOutcome::Win(winner) if winner == player => 1,
            GameOutcome::Win(_) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// Play one game on a fresh live board until it is decided.
///
/// Each turn the side to move gets a [`DecisionContext`] snapshot of the
/// live board and its answer is placed on that board.
///
/// # Errors
///
/// Propagates decider failures and rejects placements on occupied cells.
pub fn play_game<'a>(
    first_player: Player,
    x: &'a mut dyn Decider,
    o: &'a mut dyn Decider,
) -> Result<GameRecord> {
    let mut board = LiveBoard::new_with_player(first_player);

    while !board.is_over() {
        let mover = board.to_move();
        let decider = match mover {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let context = DecisionContext::new(mover.is_x(), &board);
        let cell = decider.decide(&context)?;
        debug!(player = %mover, decider = decider.name(), %cell, "move");
        board.make_placement(cell)?;
    }

    let outcome = board.outcome().ok_or(Error::GameOver)?;
    Ok(GameRecord { board, outcome })
}
