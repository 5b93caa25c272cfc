//! `spec.md` §4.6 `VerticalAssigner`: per-layer maximum height, centered within the layer slot.

use crate::layered::LayeredGraph;
use graph::NodeId;
use rustc_hash::FxHashMap;

/// Assigns `y(v)` (top edge) to every node, stacking layers by their max height plus `margin_y`,
/// and centering shorter nodes within their layer's slot.
pub fn assign(lg: &LayeredGraph, margin_y: i64) -> FxHashMap<NodeId, i64> {
    let mut y = FxHashMap::default();
    let mut top = 0i64;

    for layer in lg.layers() {
        let max_h = layer.iter().map(|&v| lg.dims(v).h).max().unwrap_or(0);
        for &v in layer {
            let h = lg.dims(v).h;
            y.insert(v, top + (max_h - h) / 2);
        }
        top += max_h + margin_y;
    }

    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layered::Dims;

    fn d(v: u64) -> NodeId {
        NodeId::new(v).unwrap()
    }

    #[test]
    fn shorter_node_is_centered_in_its_layer() {
        let mut lg = LayeredGraph::new(10);
        lg.place(d(1), 0, Dims { w: 1, h: 40 });
        lg.place(d(2), 0, Dims { w: 1, h: 20 });
        let y = assign(&lg, 25);
        assert_eq!(y[&d(1)], 0);
        assert_eq!(y[&d(2)], 10);
    }

    #[test]
    fn layers_stack_by_max_height_plus_margin() {
        let mut lg = LayeredGraph::new(10);
        lg.place(d(1), 0, Dims { w: 1, h: 40 });
        lg.place(d(2), 1, Dims { w: 1, h: 30 });
        let y = assign(&lg, 25);
        assert_eq!(y[&d(2)], 40 + 25);
    }
}
