//! Initial per-layer ordering (`spec.md` §4.4): "either by a BFS walk from the sources, or
//! uniformly at random".

use crate::layered::LayeredGraph;
use graph::NodeId;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Orders every layer by BFS distance from the layer-0 nodes, walking segments (which already
/// include dummy chains) rather than raw graph edges.
pub fn bfs_order(lg: &mut LayeredGraph) {
    if lg.layer_count() == 0 {
        return;
    }

    let mut succs: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
    for (u, v) in lg.segments() {
        succs.entry(u).or_default().push(v);
    }

    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut new_layers: Vec<Vec<NodeId>> = vec![Vec::new(); lg.layer_count()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for &v in lg.layer(0) {
        if visited.insert(v) {
            queue.push_back(v);
        }
    }

    while let Some(v) = queue.pop_front() {
        new_layers[lg.layer_of(v)].push(v);
        if let Some(ws) = succs.get(&v) {
            for &w in ws {
                if visited.insert(w) {
                    queue.push_back(w);
                }
            }
        }
    }

    // Nodes unreachable from a layer-0 source (disconnected components deeper down) keep their
    // existing relative order, appended after the BFS-reached nodes in their layer.
    for (i, layer) in new_layers.iter_mut().enumerate() {
        for &v in lg.layer(i) {
            if visited.insert(v) {
                layer.push(v);
            }
        }
    }

    for (i, layer) in new_layers.into_iter().enumerate() {
        lg.reorder_layer(i, layer);
    }
}

/// Shuffles every layer uniformly at random using the pipeline's seeded generator.
pub fn random_order(lg: &mut LayeredGraph, rng: &mut impl Rng) {
    for i in 0..lg.layer_count() {
        let mut layer = lg.layer(i).to_vec();
        layer.shuffle(rng);
        lg.reorder_layer(i, layer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layered::Dims;

    #[test]
    fn bfs_order_reaches_every_node() {
        let mut lg = LayeredGraph::new(10);
        let dim = Dims { w: 1, h: 1 };
        let a = NodeId::new(1).unwrap();
        let b = NodeId::new(2).unwrap();
        let c = NodeId::new(3).unwrap();
        lg.place(a, 0, dim);
        lg.place(b, 1, dim);
        lg.place(c, 1, dim);
        lg.add_segment(a, b);
        lg.add_segment(a, c);
        bfs_order(&mut lg);
        assert_eq!(lg.layer(1).len(), 2);
    }
}
