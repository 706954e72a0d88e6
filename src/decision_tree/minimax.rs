//! Minimax scoring over a built [`DecisionTree`].
//!
//! The side choosing at the root is the *mover*. Fitness is only ever read
//! at leaves and always from the mover's point of view; interior nodes take
//! the minimum (opponent replies) or maximum (mover replies) of their
//! children, alternating by depth.

use tracing::debug;

use super::DecisionTree;
use crate::{Error, Result};

impl<D, S> DecisionTree<D, S> {
    /// Pick the root decision with the best guaranteed fitness for the mover.
    ///
    /// Each root branch is scored with [`DecisionTree::score_for_mover`];
    /// the highest score wins and ties go to the branch enumerated first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDecisionAvailable`] if the root has no branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use tttree::decision_tree::{Branch, DecisionTree};
    ///
    /// let tree = DecisionTree::new(
    ///     0,
    ///     vec![
    ///         Branch { decision: 'a', node: DecisionTree::leaf(-1) },
    ///         Branch { decision: 'b', node: DecisionTree::leaf(1) },
    ///     ],
    /// );
    /// assert_eq!(*tree.choose(|&s| s as f64).unwrap(), 'b');
    /// ```
    pub fn choose<F>(&self, fitness: F) -> Result<&D>
    where
        F: Fn(&S) -> f64,
    {
        let mut best: Option<(&D, f64)> = None;
        for branch in &self.choices {
            let score = branch.node.score_for_mover(&fitness);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((&branch.decision, score));
            }
        }

        let (decision, score) = best.ok_or(Error::NoDecisionAvailable)?;
        debug!(score, branches = self.choices.len(), "chose root decision");
        Ok(decision)
    }

    /// Root decisions paired with the score [`DecisionTree::choose`] ranks them by
    pub fn scored_choices<F>(&self, fitness: F) -> Vec<(&D, f64)>
    where
        F: Fn(&S) -> f64,
    {
        self.choices
            .iter()
            .map(|branch| (&branch.decision, branch.node.score_for_mover(&fitness)))
            .collect()
    }

    /// Score of a node reached by a mover's decision.
    ///
    /// The opponent replies next and is assumed to pick the reply worst for
    /// the mover, so this is the minimum of the children's
    /// [`DecisionTree::score_for_opponent`].
    pub fn score_for_mover<F>(&self, fitness: &F) -> f64
    where
        F: Fn(&S) -> f64,
    {
        if self.choices.is_empty() {
            return fitness(&self.state);
        }
        self.choices
            .iter()
            .map(|branch| branch.node.score_for_opponent(fitness))
            .fold(f64::INFINITY, f64::min)
    }

    /// Score of a node reached by an opponent's decision.
    ///
    /// The opponent expects the mover to answer with their own best reply,
    /// so this is the maximum of the children's
    /// [`DecisionTree::score_for_mover`].
    // The opponent never plays for traps against a mover who might blunder.
    pub fn score_for_opponent<F>(&self, fitness: &F) -> f64
    where
        F: Fn(&S) -> f64,
    {
        if self.choices.is_empty() {
            return fitness(&self.state);
        }
        self.choices
            .iter()
            .map(|branch| branch.node.score_for_mover(fitness))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
