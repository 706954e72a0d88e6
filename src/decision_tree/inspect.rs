//! Read-only traversal of a built tree, for debugging and visualization

use std::fmt::Display;

use serde::Serialize;

use super::DecisionTree;

/// Shape statistics of a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub nodes: usize,
    pub leaves: usize,
    /// Edges on the longest root-to-leaf path
    pub height: usize,
    /// Node count per depth, root first
    pub layer_widths: Vec<usize>,
}

/// Serializable rendering of a (possibly depth-capped) tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedNode {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExportedNode>,
    /// Set when the depth cap cut off this node's children
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl<D, S> DecisionTree<D, S> {
    /// Call `visitor(parent, decision, child)` for every edge within `depth`
    /// levels below this node, in pre-order. A depth of 0 visits nothing.
    pub fn visit_children<F>(&self, depth: usize, mut visitor: F)
    where
        F: FnMut(&S, &D, &S),
    {
        self.visit_with(depth, &mut visitor);
    }

    fn visit_with<F>(&self, depth: usize, visitor: &mut F)
    where
        F: FnMut(&S, &D, &S),
    {
        if depth == 0 {
            return;
        }
        for branch in &self.choices {
            visitor(&self.state, &branch.decision, &branch.node.state);
            branch.node.visit_with(depth - 1, visitor);
        }
    }

    /// States grouped by depth, breadth-first, root layer first
    pub fn layers(&self) -> Vec<Vec<&S>> {
        let mut row = vec![self];
        let mut result = Vec::new();
        while !row.is_empty() {
            result.push(row.iter().map(|&node| &node.state).collect());
            row = row
                .iter()
                .flat_map(|&node| node.choices.iter().map(|branch| &branch.node))
                .collect();
        }
        result
    }

    /// Terminal states in depth-first, expansion order
    pub fn leaves(&self) -> Vec<&S> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a S>) {
        if self.choices.is_empty() {
            out.push(&self.state);
        }
        for branch in &self.choices {
            branch.node.collect_leaves(out);
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .choices
            .iter()
            .map(|branch| branch.node.node_count())
            .sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        if self.choices.is_empty() {
            return 1;
        }
        self.choices
            .iter()
            .map(|branch| branch.node.leaf_count())
            .sum()
    }

    pub fn height(&self) -> usize {
        self.choices
            .iter()
            .map(|branch| branch.node.height() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn summary(&self) -> TreeSummary {
        TreeSummary {
            nodes: self.node_count(),
            leaves: self.leaf_count(),
            height: self.height(),
            layer_widths: self.layers().iter().map(Vec::len).collect(),
        }
    }

    /// Render the tree for serialization, stopping `max_depth` levels down
    pub fn export(&self, max_depth: Option<usize>) -> ExportedNode
    where
        D: Display,
        S: Display,
    {
        self.export_node(None, max_depth)
    }

    fn export_node(&self, decision: Option<String>, remaining: Option<usize>) -> ExportedNode
    where
        D: Display,
        S: Display,
    {
        let truncated = remaining == Some(0) && !self.choices.is_empty();
        let children = if truncated {
            Vec::new()
        } else {
            let next = remaining.map(|depth| depth.saturating_sub(1));
            self.choices
                .iter()
                .map(|branch| {
                    branch
                        .node
                        .export_node(Some(branch.decision.to_string()), next)
                })
                .collect()
        };

        ExportedNode {
            state: self.state.to_string(),
            decision,
            children,
            truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::decision_tree::DecisionTree;

    /// Binary counter: each node `n` below depth 3 branches to `2n` and `2n + 1`
    fn binary(depth: u32) -> DecisionTree<char, u32> {
        DecisionTree::build(1u32, |&n| {
            if n >= 1 << depth {
                vec![]
            } else {
                vec![('l', 2 * n), ('r', 2 * n + 1)]
            }
        })
    }

    #[test]
    fn statistics_of_full_binary_tree() {
        let tree = binary(3);
        let summary = tree.summary();
        assert_eq!(summary.nodes, 15);
        assert_eq!(summary.leaves, 8);
        assert_eq!(summary.height, 3);
        assert_eq!(summary.layer_widths, vec![1, 2, 4, 8]);
    }

    #[test]
    fn visit_children_respects_depth() {
        let tree = binary(3);
        let mut edges = Vec::new();
        tree.visit_children(2, |parent, decision, child| {
            edges.push((*parent, *decision, *child));
        });

        assert_eq!(
            edges,
            vec![
                (1, 'l', 2),
                (2, 'l', 4),
                (2, 'r', 5),
                (1, 'r', 3),
                (3, 'l', 6),
                (3, 'r', 7),
            ]
        );

        let mut count = 0;
        tree.visit_children(0, |_, _, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn layers_are_breadth_first() {
        let tree = binary(2);
        let layers: Vec<Vec<u32>> = tree
            .layers()
            .into_iter()
            .map(|layer| layer.into_iter().copied().collect())
            .collect();
        assert_eq!(layers, vec![vec![1], vec![2, 3], vec![4, 5, 6, 7]]);
        assert_eq!(
            tree.leaves().into_iter().copied().collect::<Vec<_>>(),
            vec![4, 5, 6, 7]
        );
    }

    #[test]
    fn export_marks_truncated_nodes() {
        let tree = binary(3);
        let exported = tree.export(Some(1));

        assert_eq!(exported.state, "1");
        assert_eq!(exported.decision, None);
        assert_eq!(exported.children.len(), 2);
        assert_eq!(exported.children[0].decision.as_deref(), Some("l"));
        assert!(exported.children[0].truncated);
        assert!(exported.children[0].children.is_empty());

        let full = tree.export(None);
        assert!(!full.children[1].children[1].children[0].truncated);
        assert_eq!(full.children[1].children[1].children[0].state, "14");
    }
}
