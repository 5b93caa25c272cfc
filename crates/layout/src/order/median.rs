//! Weighted-median per-layer optimizer (`spec.md` §4.4, Gansner-North-Vo as used in `dot`).

use crate::layered::LayeredGraph;
use graph::NodeId;
use rustc_hash::FxHashMap;

/// The weighted median of a sorted position list, per `spec.md` §4.4's exact four-case formula.
/// Returns `-1.0` for an empty list, meaning "keep the node's current position".
fn weighted_median(p: &[usize]) -> f64 {
    let m = p.len();
    if m == 0 {
        return -1.0;
    }
    if m % 2 == 1 {
        return p[m / 2] as f64;
    }
    if m == 2 {
        return (p[0] + p[1]) as f64 / 2.0;
    }
    let mid = m / 2;
    let left = (p[mid - 1] - p[0]) as f64;
    let right = (p[m - 1] - p[mid]) as f64;
    if left + right == 0.0 {
        return p[mid - 1] as f64;
    }
    (p[mid - 1] as f64 * right + p[mid] as f64 * left) / (left + right)
}

/// Which side of a segment is "fixed" while layer `i` is being reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedSide {
    /// Sweeping down: the upper layer (`i - 1`) is fixed, segments point into it.
    Upper,
    /// Sweeping up: the lower layer (`i + 1`) is fixed, segments point into it.
    Lower,
}

/// Reorders layer `i` of `lg` by each node's weighted median position among its fixed-side
/// neighbors, breaking ties (and "no neighbors" nodes) by keeping the current relative order.
pub fn reorder(lg: &mut LayeredGraph, layer: usize, side: FixedSide) {
    let mut neighbors: FxHashMap<NodeId, Vec<usize>> = FxHashMap::default();
    for (u, v) in lg.segments() {
        match side {
            FixedSide::Upper if lg.layer_of(v) == layer => {
                neighbors.entry(v).or_default().push(lg.order_in_layer(u));
            }
            FixedSide::Lower if lg.layer_of(u) == layer => {
                neighbors.entry(u).or_default().push(lg.order_in_layer(v));
            }
            _ => {}
        }
    }

    let current: Vec<NodeId> = lg.layer(layer).to_vec();
    let mut keyed: Vec<(f64, usize, NodeId)> = current
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let mut p = neighbors.remove(&v).unwrap_or_default();
            p.sort_unstable();
            let med = weighted_median(&p);
            // A -1 median (no fixed-side neighbors) keeps the node at its current position by
            // sorting on the original index instead of the median.
            let key = if med < 0.0 { i as f64 } else { med };
            (key, i, v)
        })
        .collect();

    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap()
            .then_with(|| a.1.cmp(&b.1))
    });

    let new_order = keyed.into_iter().map(|(_, _, v)| v).collect();
    lg.reorder_layer(layer, new_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_empty_is_negative_one() {
        assert_eq!(weighted_median(&[]), -1.0);
    }

    #[test]
    fn median_of_odd_is_middle() {
        assert_eq!(weighted_median(&[1, 5, 9]), 5.0);
    }

    #[test]
    fn median_of_two_is_average() {
        assert_eq!(weighted_median(&[2, 4]), 3.0);
    }

    #[test]
    fn median_of_four_uses_left_right_weighting() {
        // p = [0, 1, 5, 9]; mid = 2; left = p[1]-p[0] = 1; right = p[3]-p[2] = 4.
        // (p[1]*right + p[2]*left) / (left+right) = (1*4 + 5*1) / 5 = 9/5 = 1.8
        assert_eq!(weighted_median(&[0, 1, 5, 9]), 1.8);
    }

    #[test]
    fn reorder_sorts_by_upper_median() {
        use crate::layered::Dims;
        let mut lg = LayeredGraph::new(10);
        let dim = Dims { w: 1, h: 1 };
        let a = NodeId::new(1).unwrap();
        let b = NodeId::new(2).unwrap();
        let c = NodeId::new(3).unwrap();
        let d = NodeId::new(4).unwrap();
        lg.place(a, 0, dim);
        lg.place(b, 0, dim);
        // c wired to b (order 1), d wired to a (order 0): expected new order [d, c].
        lg.place(c, 1, dim);
        lg.place(d, 1, dim);
        lg.add_segment(a, d);
        lg.add_segment(b, c);
        reorder(&mut lg, 1, FixedSide::Upper);
        assert_eq!(lg.layer(1), &[d, c]);
    }
}
