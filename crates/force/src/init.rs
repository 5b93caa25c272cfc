//! Random initial placement, grounded in `original_source/render/layout_grid.go`'s
//! `InitRandom` (called immediately before constructing `ForceGraphLayout`/`EadesGonumLayout` in
//! the web shell, since neither simulation can separate nodes that start coincident).
//!
//! Unlike the Go original's `math/rand` global generator, positions are drawn from the
//! pipeline's seeded [`rand_chacha::ChaCha8Rng`] (`spec.md` §5: "draw from an externally-supplied
//! seeded generator so that runs are reproducible when the seed is fixed").

use graph::{Graph, NodeId};
use layout::LayoutGraph;
use rand::Rng;

/// `original_source/render/layout_gonum.go`'s `getSquareLayoutSize`: side of a square whose area
/// equals the sum of every node's `w * h` (`spec.md` §4.8's MDS normalization reuses the same
/// formula).
pub fn square_layout_size(lg: &LayoutGraph) -> f64 {
    let mut total = 0.0;
    for (_, b) in lg.nodes() {
        total += b.w as f64 * b.h as f64;
    }
    total.sqrt()
}

/// Scatters every node of `g` uniformly at random within `[0, d) x [0, d)`, where `d` is
/// [`square_layout_size`].
pub fn randomize(g: &Graph, lg: &mut LayoutGraph, rng: &mut impl Rng) {
    let d = square_layout_size(lg).max(1.0);
    let ids: Vec<NodeId> = g.node_ids().collect();
    for v in ids {
        if let Some(b) = lg.node_mut(v) {
            b.x = (rng.r#gen::<f64>() * d).round() as i64;
            b.y = (rng.r#gen::<f64>() * d).round() as i64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::Attrs;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn square_size_is_sqrt_of_total_area() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        let mut lg = LayoutGraph::seed(&g, |_| (10, 10));
        let _ = &mut lg;
        assert_eq!(square_layout_size(&lg), (10.0f64 * 10.0 * 2.0).sqrt());
    }

    #[test]
    fn randomize_is_reproducible_for_a_fixed_seed() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        let mut lg1 = LayoutGraph::seed(&g, |_| (10, 10));
        let mut lg2 = LayoutGraph::seed(&g, |_| (10, 10));
        let mut r1 = ChaCha8Rng::seed_from_u64(7);
        let mut r2 = ChaCha8Rng::seed_from_u64(7);
        randomize(&g, &mut lg1, &mut r1);
        randomize(&g, &mut lg2, &mut r2);
        let a = g.node_id("a").unwrap();
        assert_eq!(lg1.node(a), lg2.node(a));
    }
}
