//! `spec.md` §4.7 `EdgeRouter`: turn the layered graph's dummy chains into polylines.
//!
//! Grounded in `original_source/layout/layers_edgepath_assigner.go`'s
//! `StraightEdgePathAssigner`, which walks each original edge's dummy chain and connects
//! node centers directly (no direct-edge/dummy distinction needed once the chain is known).
//! Self-loop detours follow `dugong::self_edges::position_self_edges`'s bulge-to-the-right
//! shape, adapted to integer coordinates and without a dummy "selfedge" node.

use crate::config::Orientation;
use crate::geom::{NodeBox, Point};
use crate::layered::LayeredGraph;
use graph::NodeId;
use rustc_hash::FxHashMap;

/// Builds one polyline per original edge of `lg` (`spec.md` §4.7). `boxes` gives the final
/// `(x, y, w, h)` of every *real* node (dummy boxes are looked up from `lg` itself, which still
/// has them at this point in the pipeline).
pub fn route(
    lg: &LayeredGraph,
    boxes: &FxHashMap<NodeId, NodeBox>,
    dummy_xy: &FxHashMap<NodeId, (i64, i64)>,
    orientation: Orientation,
) -> FxHashMap<(NodeId, NodeId), Vec<Point>> {
    let mut out = FxHashMap::default();

    for &(u, v) in lg.original_edges() {
        if u == v {
            out.insert((u, v), self_loop(boxes[&u], orientation));
            continue;
        }

        let mut path = Vec::new();
        path.push(exit_point(boxes[&u], orientation));
        for &d in lg.dummy_chain((u, v)) {
            let (x, y) = dummy_xy[&d];
            path.push(Point::new(x, y));
        }
        path.push(entry_point(boxes[&v], orientation));
        out.insert((u, v), path);
    }

    out
}

fn exit_point(b: NodeBox, orientation: Orientation) -> Point {
    match orientation {
        Orientation::TopToBottom => b.bottom_center(),
        Orientation::LeftToRight => b.right_center(),
    }
}

fn entry_point(b: NodeBox, orientation: Orientation) -> Point {
    match orientation {
        Orientation::TopToBottom => b.top_center(),
        Orientation::LeftToRight => b.left_center(),
    }
}

/// A small rectangular-ish bulge off the right (or bottom) side of `b`, for a self-loop edge
/// (`spec.md` §3 allows `(v, v)`; §9 supplemental — not degenerate zero-length polyline).
fn self_loop(b: NodeBox, orientation: Orientation) -> Vec<Point> {
    let bulge = (b.w.max(b.h) / 2).max(10);
    match orientation {
        Orientation::TopToBottom => {
            let Point { x: rx, y: ry } = b.right_center();
            vec![
                Point::new(rx, ry - b.h / 4),
                Point::new(rx + bulge, ry - b.h / 4),
                Point::new(rx + bulge, ry + b.h / 4),
                Point::new(rx, ry + b.h / 4),
            ]
        }
        Orientation::LeftToRight => {
            let Point { x: tx, y: ty } = b.top_center();
            vec![
                Point::new(tx - b.w / 4, ty),
                Point::new(tx - b.w / 4, ty + bulge),
                Point::new(tx + b.w / 4, ty + bulge),
                Point::new(tx + b.w / 4, ty),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layered::Dims;

    fn d(v: u64) -> NodeId {
        NodeId::new(v).unwrap()
    }

    fn boxes(entries: &[(NodeId, NodeBox)]) -> FxHashMap<NodeId, NodeBox> {
        entries.iter().copied().collect()
    }

    #[test]
    fn short_edge_is_two_points() {
        let mut lg = LayeredGraph::new(10);
        let dim = Dims { w: 40, h: 20 };
        lg.place(d(1), 0, dim);
        lg.place(d(2), 1, dim);
        lg.add_segment(d(1), d(2));
        lg.set_dummy_chain((d(1), d(2)), Vec::new());

        let b = boxes(&[
            (d(1), NodeBox { x: 0, y: 0, w: 40, h: 20 }),
            (d(2), NodeBox { x: 0, y: 45, w: 40, h: 20 }),
        ]);
        let paths = route(&lg, &b, &FxHashMap::default(), Orientation::TopToBottom);
        let path = &paths[&(d(1), d(2))];
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], b[&d(1)].bottom_center());
        assert_eq!(path[1], b[&d(2)].top_center());
    }

    #[test]
    fn long_edge_passes_through_dummy_center() {
        let mut lg = LayeredGraph::new(10);
        let dim = Dims { w: 40, h: 20 };
        lg.place(d(1), 0, dim);
        lg.place(d(99), 1, Dims { w: 25, h: 25 });
        lg.place(d(2), 2, dim);
        lg.mark_dummy(d(99));
        lg.add_segment(d(1), d(99));
        lg.add_segment(d(99), d(2));
        lg.set_dummy_chain((d(1), d(2)), vec![d(99)]);

        let b = boxes(&[
            (d(1), NodeBox { x: 0, y: 0, w: 40, h: 20 }),
            (d(2), NodeBox { x: 0, y: 90, w: 40, h: 20 }),
        ]);
        let mut dummy_xy = FxHashMap::default();
        dummy_xy.insert(d(99), (20, 45));
        let paths = route(&lg, &b, &dummy_xy, Orientation::TopToBottom);
        let path = &paths[&(d(1), d(2))];
        assert_eq!(path.len(), 3);
        assert_eq!(path[1], Point::new(20, 45));
    }

    #[test]
    fn self_loop_produces_a_detour_not_a_degenerate_point() {
        let lg = LayeredGraph::new(10);
        let b = boxes(&[(d(1), NodeBox { x: 0, y: 0, w: 40, h: 20 })]);
        let path = self_loop(b[&d(1)], Orientation::TopToBottom);
        assert!(path.len() >= 2);
        assert!(path.iter().any(|p| p.x != path[0].x || p.y != path[0].y));
    }
}
