//! Tic-tac-toe move selection.
//!
//! [`DecisionTreeAi`] instantiates the generic [`DecisionTree`] engine:
//! states are [`DecisionContext`]s, decisions are [`Cell`]s, and leaves are
//! scored `+1`/`-1`/`0` from the AI's side.

pub mod game;
pub mod random;

use std::fmt;

use tracing::{debug, warn};

pub use game::{GameRecord, play_game};
pub use random::RandomAi;

use crate::{
    Result,
    decision_tree::DecisionTree,
    ports::Decider,
    tictactoe::{Cell, GameState, Player, ProjectedBoard},
};

/// The search state: which side the AI optimizes for, plus the board.
///
/// `ai_plays_x` is fixed for a whole search; only the board changes from
/// node to node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecisionContext {
    pub ai_plays_x: bool,
    pub board: ProjectedBoard,
}

/// Full search tree over tic-tac-toe placements
pub type TttDecisionTree = DecisionTree<Cell, DecisionContext>;

impl DecisionContext {
    /// Context for deciding on `state`, snapshotting it so the search never
    /// aliases the caller's board
    pub fn new<S: GameState + ?Sized>(ai_plays_x: bool, state: &S) -> Self {
        DecisionContext {
            ai_plays_x,
            board: state.snapshot(),
        }
    }

    pub fn ai_mark(&self) -> Player {
        Player::from_x_has_turn(self.ai_plays_x)
    }

    /// Context after the side to move places at `choice`
    #[must_use = "with_choice returns a new context; the original is unchanged"]
    pub fn with_choice(&self, choice: Cell) -> Self {
        DecisionContext {
            ai_plays_x: self.ai_plays_x,
            board: self.board.with_placement(choice),
        }
    }
}

impl fmt::Display for DecisionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Me={}, {}", self.ai_mark(), self.board.encode())
    }
}

/// Every placement available from `context`, in row-major order.
///
/// Empty once a line is complete; on a full board no cell is placeable, so
/// draws expand to nothing as well.
pub fn possible_decisions(context: &DecisionContext) -> Vec<(Cell, DecisionContext)> {
    if context.board.winning_line().is_some() {
        return Vec::new();
    }
    Cell::ALL
        .into_iter()
        .filter(|&cell| context.board.can_place_at(cell))
        .map(|cell| (cell, context.with_choice(cell)))
        .collect()
}

/// Leaf score from the AI's side: `1.0` for its win, `-1.0` for a loss,
/// `0.0` when no line was completed.
pub fn fitness(context: &DecisionContext) -> f64 {
    match context.board.winning_line() {
        None => 0.0,
        Some(result) if result.winner_is_x == context.ai_plays_x => 1.0,
        Some(_) => -1.0,
    }
}

/// Build the complete tree of play below `context`
pub fn create_decision_tree(context: DecisionContext) -> TttDecisionTree {
    DecisionTree::build(context, possible_decisions)
}

/// Exhaustive minimax player
#[derive(Debug, Clone)]
pub struct DecisionTreeAi {
    name: String,
}

impl DecisionTreeAi {
    pub fn new() -> Self {
        Self::with_name("DecisionTree")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        DecisionTreeAi { name: name.into() }
    }

    /// Search the full tree and return the best placement for the AI.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoDecisionAvailable`] if the game is over.
    pub fn choose_cell(&self, context: &DecisionContext) -> Result<Cell> {
        if context.board.to_move() != context.ai_mark() {
            warn!(
                ai = %context.ai_mark(),
                to_move = %context.board.to_move(),
                "deciding for a side that is not to move"
            );
        }

        let tree = create_decision_tree(*context);
        let choice = *tree.choose(fitness)?;
        debug!(%choice, context = %context, "decision tree choice");
        Ok(choice)
    }
}

impl Default for DecisionTreeAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Decider for DecisionTreeAi {
    fn decide(&mut self, context: &DecisionContext) -> Result<Cell> {
        self.choose_cell(context)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
