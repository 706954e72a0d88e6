//! Game-agnostic decision trees.
//!
//! A [`DecisionTree`] is built once from a root state and an expansion
//! function, then queried read-only: [`DecisionTree::choose`] folds leaf
//! fitness values up the tree with minimax, and the inspection helpers in
//! [`inspect`] walk it for visualization.

pub mod inspect;
pub mod minimax;

use tracing::debug;

pub use inspect::{ExportedNode, TreeSummary};

/// A node of a fully expanded decision tree.
///
/// Children are owned by their parent and kept in the order the expansion
/// function produced them; a node without children is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<D, S> {
    state: S,
    choices: Vec<Branch<D, S>>,
}

/// One edge of a [`DecisionTree`]: the decision taken and the subtree it leads to
#[derive(Debug, Clone, PartialEq)]
pub struct Branch<D, S> {
    pub decision: D,
    pub node: DecisionTree<D, S>,
}

impl<D, S> DecisionTree<D, S> {
    /// Assemble a node from already built children
    pub fn new(state: S, choices: Vec<Branch<D, S>>) -> Self {
        DecisionTree { state, choices }
    }

    /// A terminal node
    pub fn leaf(state: S) -> Self {
        Self::new(state, Vec::new())
    }

    /// Build the complete tree below `root`.
    ///
    /// `expand` is called once for every node, the root included, and the
    /// engine recurses into each `(decision, state)` pair it returns. A node
    /// for which `expand` yields nothing becomes a leaf. No depth limit is
    /// applied, so `expand` must eventually run dry on every path.
    ///
    /// # Examples
    ///
    /// ```
    /// use tttree::decision_tree::DecisionTree;
    ///
    /// // Count down from 3, subtracting 1 or 2 each move
    /// let tree = DecisionTree::build(3u32, |&n| {
    ///     [1u32, 2]
    ///         .into_iter()
    ///         .filter(move |&take| take <= n)
    ///         .map(move |take| (take, n - take))
    ///         .collect::<Vec<_>>()
    /// });
    /// assert_eq!(tree.choices().len(), 2);
    /// assert_eq!(tree.node_count(), 7);
    /// ```
    pub fn build<F, I>(root: S, mut expand: F) -> Self
    where
        F: FnMut(&S) -> I,
        I: IntoIterator<Item = (D, S)>,
    {
        let tree = Self::build_with(root, &mut expand);
        debug!(
            root_choices = tree.choices.len(),
            nodes = tree.node_count(),
            "built decision tree"
        );
        tree
    }

    fn build_with<F, I>(state: S, expand: &mut F) -> Self
    where
        F: FnMut(&S) -> I,
        I: IntoIterator<Item = (D, S)>,
    {
        let choices = expand(&state)
            .into_iter()
            .map(|(decision, next)| Branch {
                decision,
                node: Self::build_with(next, expand),
            })
            .collect();
        DecisionTree { state, choices }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Outgoing branches in expansion order
    pub fn choices(&self) -> &[Branch<D, S>] {
        &self.choices
    }

    pub fn is_leaf(&self) -> bool {
        self.choices.is_empty()
    }

    /// Subtree reached by the first branch whose decision equals `decision`
    pub fn child(&self, decision: &D) -> Option<&DecisionTree<D, S>>
    where
        D: PartialEq,
    {
        self.choices
            .iter()
            .find(|branch| &branch.decision == decision)
            .map(|branch| &branch.node)
    }
}
