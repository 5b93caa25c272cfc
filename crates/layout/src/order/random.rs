//! Random per-layer optimizer (`spec.md` §4.4): propose `T` (default 5) random permutations of a
//! layer, keep the one with minimum local crossing cost against its fixed neighbor layers.

use crate::layered::LayeredGraph;
use graph::NodeId;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

pub const DEFAULT_TRIALS: usize = 5;

fn crossings_among(
    segs: &[(NodeId, NodeId)],
    ord_u: impl Fn(NodeId) -> usize,
    ord_v: impl Fn(NodeId) -> usize,
) -> usize {
    let mut count = 0;
    for a in 0..segs.len() {
        let (au, ab) = segs[a];
        for b in (a + 1)..segs.len() {
            let (cu, cd) = segs[b];
            let ou = ord_u(au);
            let oc = ord_u(cu);
            let ob = ord_v(ab);
            let od = ord_v(cd);
            if (ou < oc && ob > od) || (oc < ou && od > ob) {
                count += 1;
            }
        }
    }
    count
}

/// Local crossing cost of placing `candidate` at `layer`: crossings against the fixed layer above
/// plus crossings against the fixed layer below.
fn local_cost(lg: &LayeredGraph, layer: usize, candidate: &[NodeId]) -> usize {
    let pos: FxHashMap<NodeId, usize> = candidate
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();

    let mut cost = 0;
    if layer > 0 {
        let segs: Vec<(NodeId, NodeId)> = lg
            .segments()
            .filter(|&(u, v)| lg.layer_of(u) == layer - 1 && lg.layer_of(v) == layer)
            .collect();
        cost += crossings_among(&segs, |u| lg.order_in_layer(u), |v| pos[&v]);
    }
    if layer + 1 < lg.layer_count() {
        let segs: Vec<(NodeId, NodeId)> = lg
            .segments()
            .filter(|&(u, v)| lg.layer_of(u) == layer && lg.layer_of(v) == layer + 1)
            .collect();
        cost += crossings_among(&segs, |u| pos[&u], |v| lg.order_in_layer(v));
    }
    cost
}

/// Tries `trials` random permutations of `layer` and keeps whichever minimizes local cost,
/// including the current order itself.
pub fn reorder(lg: &mut LayeredGraph, layer: usize, rng: &mut impl Rng, trials: usize) {
    let current = lg.layer(layer).to_vec();
    let mut best = current.clone();
    let mut best_cost = local_cost(lg, layer, &current);

    for _ in 0..trials {
        let mut candidate = current.clone();
        candidate.shuffle(rng);
        let cost = local_cost(lg, layer, &candidate);
        if cost < best_cost {
            best_cost = cost;
            best = candidate;
        }
    }

    lg.reorder_layer(layer, best);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layered::Dims;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn never_makes_things_worse() {
        let mut lg = LayeredGraph::new(10);
        let dim = Dims { w: 1, h: 1 };
        let a = NodeId::new(1).unwrap();
        let b = NodeId::new(2).unwrap();
        let c = NodeId::new(3).unwrap();
        let d = NodeId::new(4).unwrap();
        lg.place(a, 0, dim);
        lg.place(b, 0, dim);
        lg.place(c, 1, dim);
        lg.place(d, 1, dim);
        lg.add_segment(a, d);
        lg.add_segment(b, c);
        let before = local_cost(&lg, 1, lg.layer(1));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        reorder(&mut lg, 1, &mut rng, DEFAULT_TRIALS);
        let after = local_cost(&lg, 1, lg.layer(1));
        assert!(after <= before);
    }
}
