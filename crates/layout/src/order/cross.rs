//! Crossing counting (`spec.md` §4.4): two segments between the same pair of layers cross iff
//! their endpoints are interleaved.
//!
//! Grounded in `original_source/layout/layers_ordering_assigner.go`'s
//! `numCrossingsBetweenLayers`/`numCrossings` (an `O(n^2)` pairwise scan over segments between
//! one pair of layers) — faithful rather than `dugong`'s two-level-index accumulator-tree
//! optimization, since the spec defines crossing count directly on segment pairs.

use crate::layered::LayeredGraph;
use graph::NodeId;

fn segments_between(lg: &LayeredGraph, i: usize) -> Vec<(NodeId, NodeId)> {
    lg.segments()
        .filter(|&(u, _)| lg.layer_of(u) == i)
        .collect()
}

/// Crossing count between layers `i` and `i + 1`.
pub fn between_layers(lg: &LayeredGraph, i: usize) -> usize {
    let segs = segments_between(lg, i);
    let mut count = 0;
    for a in 0..segs.len() {
        let (au, ab) = segs[a];
        for b in (a + 1)..segs.len() {
            let (cu, cd) = segs[b];
            let ou = lg.order_in_layer(au);
            let oc = lg.order_in_layer(cu);
            let ob = lg.order_in_layer(ab);
            let od = lg.order_in_layer(cd);
            let crosses = (ou < oc && ob > od) || (oc < ou && od > ob);
            if crosses {
                count += 1;
            }
        }
    }
    count
}

/// Total crossing count over every adjacent layer pair.
pub fn total(lg: &LayeredGraph) -> usize {
    if lg.layer_count() == 0 {
        return 0;
    }
    (0..lg.layer_count() - 1).map(|i| between_layers(lg, i)).sum()
}
