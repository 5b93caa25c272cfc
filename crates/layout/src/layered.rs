//! The intermediate `LayeredGraph` (`spec.md` §3): per-node `(layer, order_in_layer)`, the
//! segment set, and the dummy-node bookkeeping dummy insertion and edge routing share.
//!
//! Grounded in `original_source/layout/layers_levels_assigner.go`'s `LayeredGraph` (a
//! `NodeYX: map[uint64][2]int` plus a `Segments`/`Dummy` set) — we keep the same three-part
//! shape but store layers as dense `Vec<Vec<NodeId>>` rather than recomputing them from a flat
//! map on every call, since `spec.md` requires `order_in_layer` to be dense and the ordering
//! phase re-sorts a whole layer at a time.

use graph::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub w: i64,
    pub h: i64,
}

/// Intermediate layered-graph state owned exclusively by the pipeline between dummy insertion
/// and edge routing (`spec.md` §3's lifecycle note).
#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    layers: Vec<Vec<NodeId>>,
    layer_of: FxHashMap<NodeId, usize>,
    order_of: FxHashMap<NodeId, usize>,
    dummy: FxHashSet<NodeId>,
    dims: FxHashMap<NodeId, Dims>,
    /// Segments, i.e. directed pairs spanning exactly one layer — both real one-layer edges and
    /// split pieces of longer edges (`spec.md` §3).
    segments: FxHashSet<(NodeId, NodeId)>,
    /// For each *original* graph edge, the ordered dummy chain inserted between its endpoints
    /// (empty if the edge already spans one layer).
    original_of: FxHashMap<(NodeId, NodeId), Vec<NodeId>>,
    next_dummy: u64,
}

impl LayeredGraph {
    pub fn new(max_real_id: u64) -> Self {
        Self {
            next_dummy: max_real_id + 1,
            ..Default::default()
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Vec<NodeId>] {
        &self.layers
    }

    pub fn layer(&self, i: usize) -> &[NodeId] {
        self.layers.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn layer_of(&self, v: NodeId) -> usize {
        self.layer_of[&v]
    }

    pub fn order_in_layer(&self, v: NodeId) -> usize {
        self.order_of[&v]
    }

    pub fn is_dummy(&self, v: NodeId) -> bool {
        self.dummy.contains(&v)
    }

    pub fn dims(&self, v: NodeId) -> Dims {
        self.dims
            .get(&v)
            .copied()
            .unwrap_or(Dims { w: 0, h: 0 })
    }

    pub fn segments(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.segments.iter().copied()
    }

    pub fn is_segment(&self, u: NodeId, v: NodeId) -> bool {
        self.segments.contains(&(u, v))
    }

    /// Both endpoints are dummy nodes (`spec.md` glossary: "inner segment").
    pub fn is_inner_segment(&self, u: NodeId, v: NodeId) -> bool {
        self.is_dummy(u) && self.is_dummy(v)
    }

    pub fn original_edges(&self) -> impl Iterator<Item = &(NodeId, NodeId)> + '_ {
        self.original_of.keys()
    }

    pub fn dummy_chain(&self, edge: (NodeId, NodeId)) -> &[NodeId] {
        self.original_of.get(&edge).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Places `v` into a (layer, order) slot, appending at the end of that layer's order unless
    /// `order` is given explicitly.
    pub fn place(&mut self, v: NodeId, layer: usize, dims: Dims) {
        if self.layers.len() <= layer {
            self.layers.resize_with(layer + 1, Vec::new);
        }
        let order = self.layers[layer].len();
        self.layers[layer].push(v);
        self.layer_of.insert(v, layer);
        self.order_of.insert(v, order);
        self.dims.insert(v, dims);
    }

    pub fn mark_dummy(&mut self, v: NodeId) {
        self.dummy.insert(v);
    }

    pub fn add_segment(&mut self, u: NodeId, v: NodeId) {
        self.segments.insert((u, v));
    }

    pub fn set_dummy_chain(&mut self, edge: (NodeId, NodeId), chain: Vec<NodeId>) {
        self.original_of.insert(edge, chain);
    }

    pub fn fresh_dummy_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_dummy).expect("next_dummy is always nonzero");
        self.next_dummy += 1;
        id
    }

    /// Overwrites the order-in-layer permutation for `layer` to `new_order` (same node set, new
    /// sequence). Used by the ordering optimizer between sweeps.
    pub fn reorder_layer(&mut self, layer: usize, new_order: Vec<NodeId>) {
        debug_assert_eq!(new_order.len(), self.layers[layer].len());
        for (i, &v) in new_order.iter().enumerate() {
            self.order_of.insert(v, i);
        }
        self.layers[layer] = new_order;
    }

    /// Validates `spec.md` §3's segment invariant: every segment goes strictly one layer down.
    /// A violation here means cycle removal or layer assignment is broken (§4.2's
    /// `LayerConstraintViolation`).
    pub fn validate(&self) -> Result<(), (NodeId, NodeId)> {
        for &(u, v) in &self.segments {
            let lu = self.layer_of[&u];
            let lv = self.layer_of[&v];
            if lv != lu + 1 {
                return Err((u, v));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_assigns_dense_orders() {
        let mut lg = LayeredGraph::new(10);
        let a = NodeId::new(1).unwrap();
        let b = NodeId::new(2).unwrap();
        lg.place(a, 0, Dims { w: 10, h: 10 });
        lg.place(b, 0, Dims { w: 10, h: 10 });
        assert_eq!(lg.order_in_layer(a), 0);
        assert_eq!(lg.order_in_layer(b), 1);
        assert_eq!(lg.layer(0), &[a, b]);
    }

    #[test]
    fn validate_rejects_non_downward_segment() {
        let mut lg = LayeredGraph::new(10);
        let a = NodeId::new(1).unwrap();
        let b = NodeId::new(2).unwrap();
        lg.place(a, 0, Dims { w: 1, h: 1 });
        lg.place(b, 0, Dims { w: 1, h: 1 });
        lg.add_segment(a, b);
        assert!(lg.validate().is_err());
    }

    #[test]
    fn fresh_dummy_ids_start_above_max_real() {
        let mut lg = LayeredGraph::new(5);
        let d1 = lg.fresh_dummy_id();
        let d2 = lg.fresh_dummy_id();
        assert_eq!(d1.get(), 6);
        assert_eq!(d2.get(), 7);
    }
}
