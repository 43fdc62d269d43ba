//! Per-kind node counts over a whole diff tree.

use crate::node::DiffNode;

/// Counts of each node kind, summed over every nesting level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub nested: usize,
}

impl DiffStats {
    /// Walk `nodes` recursively and count each kind.
    pub fn collect(nodes: &[DiffNode]) -> Self {
        let mut stats = Self::default();
        stats.visit(nodes);
        stats
    }

    fn visit(&mut self, nodes: &[DiffNode]) {
        for node in nodes {
            match node {
                DiffNode::Added { .. } => self.added += 1,
                DiffNode::Removed { .. } => self.removed += 1,
                DiffNode::Updated { .. } => self.updated += 1,
                DiffNode::Unchanged { .. } => self.unchanged += 1,
                DiffNode::Nested { children, .. } => {
                    self.nested += 1;
                    self.visit(children);
                }
            }
        }
    }

    /// Number of leaf changes (added + removed + updated).
    pub fn changes(&self) -> usize {
        self.added + self.removed + self.updated
    }

    /// Returns `true` if no leaf was added, removed or updated.
    pub fn is_clean(&self) -> bool {
        self.changes() == 0
    }
}
