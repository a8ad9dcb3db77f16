//! Counters collected by the complete (anytime) searches.

/// Search statistics, updated as the caller pulls results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the search stack.
    pub nodes_explored: u64,
    /// Nodes discarded because their lower bound could not beat the best.
    pub nodes_pruned: u64,
    /// Children pushed onto the search stack.
    pub nodes_generated: u64,
    /// Strictly improving results handed to the caller.
    pub improvements: u64,
    /// Deepest level reached (numbers placed or merges performed).
    pub max_depth: usize,
}

impl SearchStats {
    #[inline]
    pub(crate) fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_pruned(&mut self) {
        self.nodes_pruned = self.nodes_pruned.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_generated(&mut self, count: usize) {
        self.nodes_generated = self.nodes_generated.saturating_add(count as u64);
    }

    #[inline]
    pub(crate) fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}
