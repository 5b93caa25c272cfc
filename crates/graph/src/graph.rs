//! The in-memory directed graph (`spec.md` §3).
//!
//! Unlike `dugong_graphlib::Graph<N, E, G>` (generic over node/edge/graph labels to support
//! Dagre's compound-graph machinery), this `Graph` is concrete: node and edge payloads are both
//! an [`Attrs`] map, and there is no subgraph/multigraph support, because the spec does not call
//! for either. The input graph is append-only — nodes and edges are added but never removed —
//! which lets adjacency be maintained incrementally on insert rather than rebuilt from a
//! generation-tagged cache the way `dugong_graphlib::graph::adj_cache` does for a mutable graph.

use crate::id::{Interner, NodeId};
use crate::value::Attrs;

#[derive(Debug, Clone, Default)]
struct NodeEntry {
    attrs: Attrs,
}

/// A directed graph: nodes carry an opaque attribute map, edges are keyed by the ordered pair
/// `(from, to)` with at most one edge per pair (`spec.md` §3's "at most one edge per pair").
#[derive(Debug, Clone, Default)]
pub struct Graph {
    interner: Interner,
    nodes: Vec<NodeEntry>,
    out_adj: Vec<Vec<NodeId>>,
    in_adj: Vec<Vec<NodeId>>,
    edges: rustc_hash::FxHashMap<(NodeId, NodeId), Attrs>,
    // Preserves edge insertion order, which several phases (initial ordering, cross counting)
    // rely on for deterministic tie-breaking.
    edge_order: Vec<(NodeId, NodeId)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_slot(&mut self, id: NodeId) {
        let idx = id.get() as usize - 1;
        if self.nodes.len() <= idx {
            self.nodes.resize_with(idx + 1, NodeEntry::default);
            self.out_adj.resize_with(idx + 1, Vec::new);
            self.in_adj.resize_with(idx + 1, Vec::new);
        }
    }

    /// Interns `key` if new and returns its id, creating an empty node.
    pub fn add_node(&mut self, key: &str) -> NodeId {
        let id = self.interner.intern(key);
        self.ensure_slot(id);
        id
    }

    pub fn set_node_attrs(&mut self, key: &str, attrs: Attrs) -> NodeId {
        let id = self.add_node(key);
        self.nodes[id.get() as usize - 1].attrs = attrs;
        id
    }

    /// Adds a directed edge `from -> to`, implicitly creating either endpoint if unseen
    /// (`spec.md` §3's "adding an edge with an unknown endpoint implicitly creates an empty
    /// node for it"). A second call for the same ordered pair replaces the attribute payload
    /// rather than creating a parallel edge.
    pub fn add_edge(&mut self, from: &str, to: &str, attrs: Attrs) -> (NodeId, NodeId) {
        let v = self.add_node(from);
        let w = self.add_node(to);
        if self.edges.insert((v, w), attrs).is_none() {
            self.out_adj[v.get() as usize - 1].push(w);
            self.in_adj[w.get() as usize - 1].push(v);
            self.edge_order.push((v, w));
        }
        (v, w)
    }

    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.interner.lookup(key)
    }

    pub fn node_key(&self, id: NodeId) -> &str {
        self.interner.key(id)
    }

    pub fn node_attrs(&self, id: NodeId) -> &Attrs {
        &self.nodes[id.get() as usize - 1].attrs
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains_key(&(from, to))
    }

    pub fn edge_attrs(&self, from: NodeId, to: NodeId) -> Option<&Attrs> {
        self.edges.get(&(from, to))
    }

    /// All node ids, in first-seen (insertion) order. Stable ordering here is what makes
    /// insertion-order tie-breaks elsewhere in the pipeline reproducible.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..=self.nodes.len() as u64).map(|n| NodeId::from_index(n))
    }

    /// All edges as `(from, to)` pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edge_order.iter().copied()
    }

    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.out_adj[id.get() as usize - 1]
    }

    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        &self.in_adj[id.get() as usize - 1]
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.in_adj[id.get() as usize - 1].len()
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.out_adj[id.get() as usize - 1].len()
    }

    /// Removes `(from, to)` if present, returning its attribute payload. Used only by the
    /// cycle remover to temporarily reverse edges; the input graph is otherwise append-only.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Option<Attrs> {
        let attrs = self.edges.remove(&(from, to))?;
        self.out_adj[from.get() as usize - 1].retain(|&w| w != to);
        self.in_adj[to.get() as usize - 1].retain(|&v| v != from);
        self.edge_order.retain(|&e| e != (from, to));
        Some(attrs)
    }

    /// Re-adds `(from, to)` at the end of edge-insertion order. Used by the cycle remover to
    /// restore edges it had reversed.
    pub fn restore_edge(&mut self, from: NodeId, to: NodeId, attrs: Attrs) {
        self.out_adj[from.get() as usize - 1].push(to);
        self.in_adj[to.get() as usize - 1].push(from);
        self.edge_order.push((from, to));
        self.edges.insert((from, to), attrs);
    }
}

impl NodeId {
    fn from_index(n: u64) -> Self {
        // SAFETY-free: `n` ranges over `1..=node_count`, which is always nonzero by construction.
        Self::new(n).expect("index is 1-based and therefore nonzero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_node_creation_on_edge_insert() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        assert_eq!(g.node_count(), 2);
        assert!(g.node_id("a").is_some());
        assert!(g.node_id("b").is_some());
    }

    #[test]
    fn at_most_one_edge_per_ordered_pair() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        g.add_edge("a", "b", Attrs::new());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn reversed_direction_is_a_distinct_edge() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        g.add_edge("b", "a", Attrs::new());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn successors_and_predecessors_track_insert_order() {
        let mut g = Graph::new();
        g.add_edge("a", "b", Attrs::new());
        g.add_edge("a", "c", Attrs::new());
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        let c = g.node_id("c").unwrap();
        assert_eq!(g.successors(a), &[b, c]);
        assert_eq!(g.predecessors(b), &[a]);
        assert_eq!(g.predecessors(c), &[a]);
    }

    #[test]
    fn remove_and_restore_edge_round_trips() {
        let mut g = Graph::new();
        let mut attrs = Attrs::new();
        attrs.insert("label".into(), crate::value::Value::Str("x".into()));
        g.add_edge("a", "b", attrs.clone());
        let a = g.node_id("a").unwrap();
        let b = g.node_id("b").unwrap();
        let removed = g.remove_edge(a, b).unwrap();
        assert_eq!(removed, attrs);
        assert!(!g.has_edge(a, b));
        g.restore_edge(a, b, removed);
        assert!(g.has_edge(a, b));
        assert_eq!(g.edge_attrs(a, b).unwrap(), &attrs);
    }
}
