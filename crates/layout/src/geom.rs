//! The positioned output graph (`spec.md` §3 `LayoutGraph`).

use graph::{Graph, NodeId};
use rustc_hash::FxHashMap;

/// An integer point on an edge polyline (`spec.md` §3: "ordered sequence of >= 2 integer
/// points").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A positioned node box: `(x, y)` is the lower-left corner, matching the Go original's
/// `Node{XY, W, H}` (`original_source/layout/graph.go`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBox {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl NodeBox {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h)
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y)
    }

    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.h / 2)
    }

    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h / 2)
    }
}

/// The layout engine's output (`spec.md` §3): a box per node and a polyline per edge.
///
/// Invariant upheld by every [`crate::Layout`] implementation: for every input graph edge there
/// is exactly one polyline, and no dummy node ids appear among `nodes`.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    nodes: FxHashMap<NodeId, NodeBox>,
    edges: FxHashMap<(NodeId, NodeId), Vec<Point>>,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a fresh `LayoutGraph` with every node of `g` at the origin, carrying its `(w, h)`
    /// from `dims_of`, and an empty placeholder path per edge. This is the shape every
    /// [`crate::pipeline::Layout`] implementation receives as its starting point (`spec.md` §3:
    /// "each node acquires width/height ... computed by the external renderer from label text").
    pub fn seed(g: &Graph, dims_of: impl Fn(NodeId) -> (i64, i64)) -> Self {
        let mut lg = Self::new();
        for v in g.node_ids() {
            let (w, h) = dims_of(v);
            lg.set_node(v, NodeBox { x: 0, y: 0, w, h });
        }
        for (from, to) in g.edges() {
            lg.set_edge(from, to, Vec::new());
        }
        lg
    }

    pub fn set_node(&mut self, id: NodeId, b: NodeBox) {
        self.nodes.insert(id, b);
    }

    pub fn node(&self, id: NodeId) -> Option<NodeBox> {
        self.nodes.get(&id).copied()
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeBox> {
        self.nodes.get_mut(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, NodeBox)> + '_ {
        self.nodes.iter().map(|(&id, &b)| (id, b))
    }

    pub fn set_edge(&mut self, from: NodeId, to: NodeId, path: Vec<Point>) {
        self.edges.insert((from, to), path);
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&[Point]> {
        self.edges.get(&(from, to)).map(Vec::as_slice)
    }

    pub fn edge_mut(&mut self, from: NodeId, to: NodeId) -> Option<&mut Vec<Point>> {
        self.edges.get_mut(&(from, to))
    }

    pub fn edges(&self) -> impl Iterator<Item = ((NodeId, NodeId), &[Point])> + '_ {
        self.edges.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
