//! `spec.md` §4.2 `LayerAssigner`: longest-path layering over a DAG.
//!
//! Grounded in `dugong::rank::util::longest_path`, but driven forward from the sources via
//! Kahn's algorithm rather than `dugong`'s backward DFS from sinks — `spec.md` is explicit that
//! traversal is "BFS from the sources ... each node's layer is raised whenever a predecessor
//! forces it deeper", which is the forward formulation of the same invariant
//! (`layer(v) = 1 + max(layer(u) for predecessors u)`, sources at 0).

use crate::error::Error;
use graph::{Graph, NodeId};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Assigns `layer_of(v) >= 0` to every node of `g`, which must be acyclic (the pipeline runs
/// this strictly after [`crate::cycle::CycleRemover`]).
pub fn assign(g: &Graph) -> FxHashMap<NodeId, usize> {
    let mut layer: FxHashMap<NodeId, usize> = FxHashMap::default();
    let mut indeg: FxHashMap<NodeId, usize> = FxHashMap::default();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for v in g.node_ids() {
        // A self-loop's own in-edge can never be decremented away (that requires dequeuing
        // `v` first, which requires indegree 0 first), so it is excluded here the same way
        // `validate` below skips `from == to` edges.
        let d = g.predecessors(v).iter().filter(|&&p| p != v).count();
        indeg.insert(v, d);
        if d == 0 {
            layer.insert(v, 0);
            queue.push_back(v);
        }
    }

    while let Some(v) = queue.pop_front() {
        let lv = layer[&v];
        for &w in g.successors(v) {
            if w == v {
                continue;
            }
            let candidate = lv + 1;
            let raise = layer.get(&w).is_none_or(|&cur| candidate > cur);
            if raise {
                layer.insert(w, candidate);
            }
            let d = indeg.get_mut(&w).expect("successor was counted in indeg");
            *d -= 1;
            if *d == 0 {
                queue.push_back(w);
            }
        }
    }

    layer
}

/// `spec.md` §4.2's validation step: every edge must point strictly downward. A violation
/// indicates cycle removal left a cycle behind (a programmer error, not a user-facing one).
pub fn validate(g: &Graph, layer: &FxHashMap<NodeId, usize>) -> Result<(), Error> {
    for (from, to) in g.edges() {
        if from == to {
            continue;
        }
        let lf = layer[&from];
        let lt = layer[&to];
        if lf >= lt {
            debug_assert!(false, "layer constraint violated: {from} -> {to}");
            return Err(Error::LayerConstraint { from, to });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::Attrs;

    #[test]
    fn linear_chain_is_compact() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        g.add_edge("b", "c", Attrs::new());
        g.add_edge("c", "d", Attrs::new());
        let layer = assign(&g);
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        let c = g.node_id("c").unwrap();
        let d = g.node_id("d").unwrap();
        assert_eq!(layer[&a], 0);
        assert_eq!(layer[&b], 1);
        assert_eq!(layer[&c], 2);
        assert_eq!(layer[&d], 3);
        assert!(validate(&g, &layer).is_ok());
    }

    #[test]
    fn long_edge_is_not_compressed() {
        // a -> b -> c, plus a direct a -> c: c must sit at layer 2, not 1.
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        g.add_edge("b", "c", Attrs::new());
        g.add_edge("a", "c", Attrs::new());
        let layer = assign(&g);
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        let c = g.node_id("c").unwrap();
        assert_eq!(layer[&a], 0);
        assert_eq!(layer[&b], 1);
        assert_eq!(layer[&c], 2);
    }

    #[test]
    fn isolated_node_sits_at_layer_zero() {
        let mut g = Graph::new();
        g.add_node("solo");
        let layer = assign(&g);
        let solo = g.node_id("solo").unwrap();
        assert_eq!(layer[&solo], 0);
    }

    #[test]
    fn self_loop_does_not_block_layer_assignment() {
        let mut g = Graph::new();
        g.add_edge("a", "a", Attrs::new());
        let layer = assign(&g);
        let a = g.node_id("a").unwrap();
        assert_eq!(layer.get(&a), Some(&0));
    }

    #[test]
    fn self_loop_on_a_node_with_other_edges_is_also_not_blocked() {
        let mut g = Graph::new();
        g.add_edge("a", "a", Attrs::new());
        g.add_edge("a", "b", Attrs::new());
        let layer = assign(&g);
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        assert_eq!(layer[&a], 0);
        assert_eq!(layer[&b], 1);
        assert!(validate(&g, &layer).is_ok());
    }
}
