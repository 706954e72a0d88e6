//! Decider port - abstraction over move-selection strategies

use crate::{Result, ai::DecisionContext, tictactoe::Cell};

/// Decider trait - unified interface for anything that picks a move
///
/// Implementations are handed a [`DecisionContext`] naming the side they
/// play and an immutable snapshot of the board, and answer with the cell to
/// place on:
/// - [`DecisionTreeAi`](crate::ai::DecisionTreeAi) searches the full game tree
/// - [`RandomAi`](crate::ai::RandomAi) picks uniformly among empty cells
///
/// # Examples
///
/// ```
/// use tttree::{
///     ai::{DecisionContext, DecisionTreeAi},
///     ports::Decider,
///     tictactoe::ProjectedBoard,
/// };
///
/// let board = ProjectedBoard::from_string("XX.OO....").unwrap();
/// let mut ai = DecisionTreeAi::new();
/// let cell = ai.decide(&DecisionContext::new(true, &board)).unwrap();
/// assert_eq!((cell.row(), cell.column()), (0, 2));
/// ```
pub trait Decider {
    /// Select a cell for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoDecisionAvailable`] if the game in the
    /// context is already over.
    fn decide(&mut self, context: &DecisionContext) -> Result<Cell>;

    /// Get the decider's name.
    fn name(&self) -> &str;
}
