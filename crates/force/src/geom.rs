//! Straight-line edge routing shared by [`crate::force`], [`crate::eades`], and [`crate::mds`]
//! (`spec.md` §4.8: "edges are routed as straight two-point polylines").
//!
//! `original_source/render/edge.go`'s `DirectEdge` connects box *centers*; our [`LayoutGraph`]
//! carries the stricter invariant from `spec.md` §3 that a polyline must start/end on the node's
//! *boundary*, so we clip the center-to-center segment to each box's edge instead.

use graph::{Graph, NodeId};
use layout::{LayoutGraph, NodeBox, Point};

/// The point where the segment from `from`'s center toward `to_center` crosses `from`'s
/// boundary. Falls back to the center itself for a degenerate (zero-size or coincident) box.
fn clip(from: NodeBox, to_center: Point) -> Point {
    let c = from.center();
    let dx = (to_center.x - c.x) as f64;
    let dy = (to_center.y - c.y) as f64;
    let half_w = from.w as f64 / 2.0;
    let half_h = from.h as f64 / 2.0;
    if dx == 0.0 && dy == 0.0 {
        return c;
    }
    let tx = if dx != 0.0 { half_w / dx.abs() } else { f64::INFINITY };
    let ty = if dy != 0.0 { half_h / dy.abs() } else { f64::INFINITY };
    let t = tx.min(ty);
    Point::new(c.x + (dx * t).round() as i64, c.y + (dy * t).round() as i64)
}

/// A small rectangular bulge off the right side of `b`, for a self-loop edge (`spec.md` §3
/// allows `(v, v)`; mirrors `crate::route`'s non-degenerate self-loop detour in the sibling
/// `layout` crate).
fn self_loop(b: NodeBox) -> Vec<Point> {
    let bulge = (b.w.max(b.h) / 2).max(10);
    let c = b.center();
    let top = Point::new(c.x + b.w / 2, c.y + b.h / 4);
    let bottom = Point::new(c.x + b.w / 2, c.y - b.h / 4);
    vec![
        bottom,
        Point::new(bottom.x + bulge, bottom.y),
        Point::new(top.x + bulge, top.y),
        top,
    ]
}

/// Routes every edge of `g` as a straight two-point polyline between the current boxes in `lg`
/// (or a small detour for a self-loop), overwriting whatever paths `lg` already carried.
pub fn route_straight(g: &Graph, lg: &mut LayoutGraph) {
    let paths: Vec<(NodeId, NodeId, Vec<Point>)> = g
        .edges()
        .map(|(from, to)| {
            let a = lg.node(from).unwrap_or(NodeBox { x: 0, y: 0, w: 0, h: 0 });
            if from == to {
                return (from, to, self_loop(a));
            }
            let b = lg.node(to).unwrap_or(NodeBox { x: 0, y: 0, w: 0, h: 0 });
            let path = vec![clip(a, b.center()), clip(b, a.center())];
            (from, to, path)
        })
        .collect();
    for (from, to, path) in paths {
        lg.set_edge(from, to, path);
    }
}
