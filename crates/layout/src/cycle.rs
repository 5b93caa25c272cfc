//! `spec.md` §4.1 `CycleRemover`: DFS feedback-arc-set detection, grounded in
//! `dugong::acyclic::dfs_fas` (itself a port of Dagre's `dfsFAS`) — a node is *visiting* while
//! it is on the current DFS stack and *visited* once its whole subtree has returned. A back edge
//! to a *visiting* node is a feedback arc.

use graph::{Graph, NodeId};
use rustc_hash::FxHashSet;

/// Records the feedback arc set `R` found (and, after [`CycleRemover::run`], already reversed
/// in the graph) so the pipeline can flip those edges' polylines back and restore direction at
/// the end (`spec.md` §4.1, §4.7).
#[derive(Debug, Clone, Default)]
pub struct CycleRemover {
    reversed: Vec<(NodeId, NodeId)>,
}

impl CycleRemover {
    /// Finds a feedback arc set via DFS and reverses every edge in it in place. Never fails: in
    /// the worst case every edge is reversed.
    pub fn run(g: &mut Graph) -> Self {
        let mut visited = FxHashSet::default();
        let mut on_stack = FxHashSet::default();
        let mut reversed = Vec::new();

        for v in g.node_ids().collect::<Vec<_>>() {
            if !visited.contains(&v) {
                dfs(g, v, &mut visited, &mut on_stack, &mut reversed);
            }
        }

        for &(u, w) in &reversed {
            if let Some(attrs) = g.remove_edge(u, w) {
                g.restore_edge(w, u, attrs);
            }
        }

        Self { reversed }
    }

    /// Reverses every edge in `R` back to its original direction.
    pub fn restore(&self, g: &mut Graph) {
        for &(u, w) in &self.reversed {
            if let Some(attrs) = g.remove_edge(w, u) {
                g.restore_edge(u, w, attrs);
            }
        }
    }

    pub fn was_reversed(&self, u: NodeId, w: NodeId) -> bool {
        self.reversed.contains(&(u, w))
    }

    pub fn reversed_edges(&self) -> &[(NodeId, NodeId)] {
        &self.reversed
    }
}

fn dfs(
    g: &Graph,
    v: NodeId,
    visited: &mut FxHashSet<NodeId>,
    on_stack: &mut FxHashSet<NodeId>,
    reversed: &mut Vec<(NodeId, NodeId)>,
) {
    visited.insert(v);
    on_stack.insert(v);

    for &w in g.successors(v) {
        if w == v {
            // Self-loops are not cycles that need a feedback edge (spec.md §9 supplemental);
            // the edge router draws them as a small detour instead.
            continue;
        }
        if on_stack.contains(&w) {
            reversed.push((v, w));
        } else if !visited.contains(&w) {
            dfs(g, w, visited, on_stack, reversed);
        }
    }

    on_stack.remove(&v);
}
