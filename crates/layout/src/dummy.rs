//! `spec.md` §4.3 `DummyInserter`: build the [`LayeredGraph`] by placing every real node at its
//! assigned layer, then splitting any edge spanning more than one layer into a chain of fresh
//! dummy nodes, one per intervening layer.
//!
//! Grounded in `original_source/layout/layers_levels_assigner.go`'s `AddFakeNodes`, which walks
//! each segment and allocates one fake node per layer strictly between the endpoints, chaining
//! them with fresh segments.

use crate::layered::{Dims, LayeredGraph};
use graph::{Graph, NodeId};
use rustc_hash::FxHashMap;

/// Places every node of `g` into a fresh [`LayeredGraph`] at its assigned layer (`layer_of`,
/// from [`crate::rank::assign`]), then splits every edge spanning `d > 1` layers into `d - 1`
/// dummy nodes at `dummy_w x dummy_h` (`spec.md` §4.3's configurable default 25x25).
pub fn build<F: Fn(NodeId) -> (i64, i64)>(
    g: &Graph,
    layer_of: &FxHashMap<NodeId, usize>,
    dims_of: F,
    dummy_w: i64,
    dummy_h: i64,
) -> LayeredGraph {
    let max_real = g.node_ids().map(NodeId::get).max().unwrap_or(0);
    let mut lg = LayeredGraph::new(max_real);

    for v in g.node_ids() {
        let (w, h) = dims_of(v);
        lg.place(v, layer_of[&v], Dims { w, h });
    }

    for (u, v) in g.edges() {
        if u == v {
            // Self-loops span zero layers; the edge router draws a small detour for them
            // instead of a segment (spec.md §9 supplemental).
            lg.set_dummy_chain((u, v), Vec::new());
            continue;
        }

        let lu = layer_of[&u];
        let lv = layer_of[&v];
        if lv == lu + 1 {
            lg.add_segment(u, v);
            lg.set_dummy_chain((u, v), Vec::new());
            continue;
        }

        let mut chain = Vec::with_capacity(lv - lu - 1);
        let mut prev = u;
        for layer in (lu + 1)..lv {
            let d = lg.fresh_dummy_id();
            lg.place(
                d,
                layer,
                Dims {
                    w: dummy_w,
                    h: dummy_h,
                },
            );
            lg.mark_dummy(d);
            lg.add_segment(prev, d);
            chain.push(d);
            prev = d;
        }
        lg.add_segment(prev, v);
        lg.set_dummy_chain((u, v), chain);
    }

    lg
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::Attrs;

    fn dims(_: NodeId) -> (i64, i64) {
        (40, 20)
    }

    #[test]
    fn short_edge_needs_no_dummy() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        let layer = crate::rank::assign(&g);
        let lg = build(&g, &layer, dims, 25, 25);
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        assert!(lg.is_segment(a, b));
        assert!(lg.dummy_chain((a, b)).is_empty());
    }

    #[test]
    fn two_layer_gap_inserts_one_dummy() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        g.add_edge("b", "c", Attrs::new());
        g.add_edge("a", "c", Attrs::new());
        let layer = crate::rank::assign(&g);
        let lg = build(&g, &layer, dims, 25, 25);
        let a = g.node_id("a").unwrap();
        let c = g.node_id("c").unwrap();
        let chain = lg.dummy_chain((a, c));
        assert_eq!(chain.len(), 1);
        assert!(lg.is_dummy(chain[0]));
        assert_eq!(lg.layer_of(chain[0]), 1);
        assert!(lg.is_segment(a, chain[0]));
        assert!(lg.is_segment(chain[0], c));
    }

    #[test]
    fn self_loop_gets_no_segment() {
        let mut g = Graph::new();
        g.add_edge("a", "a", Attrs::new());
        let layer = crate::rank::assign(&g);
        let lg = build(&g, &layer, dims, 25, 25);
        let a = g.node_id("a").unwrap();
        assert!(lg.dummy_chain((a, a)).is_empty());
        assert!(!lg.is_segment(a, a));
    }
}
