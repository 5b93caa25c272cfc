//! End-to-end scenarios over two literal graphs: complete bipartite `K_{3,3}` and the
//! Brandes-Köpf reference graph from the paper's Figure 5 (23 real nodes, 34 edges before dummy
//! insertion, ported from `brandeskopf_test.go`'s `TestReferenceGraphFromPaper`).

use graph::{Attrs, Graph};
use layout::{Config, Layout, LayoutGraph, Pipeline};

fn dims(_: graph::NodeId) -> (i64, i64) {
    (40, 20)
}

#[test]
fn k33_reduces_crossings_below_the_worst_case_arrangement() {
    let mut g = Graph::new();
    for top in ["a1", "a2", "a3"] {
        for bottom in ["b1", "b2", "b3"] {
            g.add_edge(top, bottom, Attrs::new());
        }
    }
    let mut lg = LayoutGraph::seed(&g, dims);
    Pipeline::new()
        .layout(&g, &Config::default(), &mut lg)
        .unwrap();

    // Two layers, three nodes each.
    let tops: Vec<graph::NodeId> = ["a1", "a2", "a3"].iter().map(|n| g.node_id(n).unwrap()).collect();
    let bottoms: Vec<graph::NodeId> = ["b1", "b2", "b3"].iter().map(|n| g.node_id(n).unwrap()).collect();
    let top_y = lg.node(tops[0]).unwrap().y;
    for &t in &tops {
        assert_eq!(lg.node(t).unwrap().y, top_y);
    }
    let bottom_y = lg.node(bottoms[0]).unwrap().y;
    for &b in &bottoms {
        assert_eq!(lg.node(b).unwrap().y, bottom_y);
    }
    assert!(top_y < bottom_y);

    let crossings = count_crossings(&g, &lg, &tops, &bottoms);
    assert!(crossings <= 3, "expected at most 3 crossings, got {crossings}");
}

/// Counts crossings between every pair of the 9 straight segments connecting the two layers,
/// ordered by each endpoint's final `x`.
fn count_crossings(
    g: &Graph,
    lg: &LayoutGraph,
    tops: &[graph::NodeId],
    bottoms: &[graph::NodeId],
) -> usize {
    let order_x = |v: graph::NodeId| lg.node(v).unwrap().x;
    let mut segments = Vec::new();
    for &t in tops {
        for &b in bottoms {
            if g.successors(t).contains(&b) {
                segments.push((order_x(t), order_x(b)));
            }
        }
    }
    let mut crossings = 0;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let (a1, a2) = segments[i];
            let (b1, b2) = segments[j];
            if (a1 < b1 && a2 > b2) || (a1 > b1 && a2 < b2) {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Brandes-Köpf reference graph, Figure 5 of the paper: 23 real nodes, 34 edges. Longest-path
/// layering assigns each node the same 10 layers (0-9) the paper's figure shows.
fn reference_graph_edges() -> Vec<(u32, u32)> {
    vec![
        (1, 13), (1, 21), (1, 4), (1, 3),
        (2, 3), (2, 20),
        (3, 4), (3, 5), (3, 23),
        (4, 6),
        (5, 7),
        (6, 8), (6, 16), (6, 23),
        (7, 9),
        (8, 10), (8, 11),
        (9, 12),
        (10, 13), (10, 14), (10, 15),
        (11, 15), (11, 16),
        (12, 20),
        (13, 17),
        (14, 17), (14, 18),
        (16, 18), (16, 19), (16, 20),
        (18, 21),
        (19, 22),
        (21, 23),
        (22, 23),
    ]
}

fn expected_layer(node: u32) -> usize {
    match node {
        1 | 2 => 0,
        3 => 1,
        4 | 5 => 2,
        6 | 7 => 3,
        8 | 9 => 4,
        10 | 11 | 12 => 5,
        13 | 14 | 15 | 16 => 6,
        17 | 18 | 19 | 20 => 7,
        21 | 22 => 8,
        23 => 9,
        _ => unreachable!("node {node} is not part of the reference graph"),
    }
}

#[test]
fn reference_graph_has_34_edges_and_23_nodes() {
    let edges = reference_graph_edges();
    assert_eq!(edges.len(), 34);
    let mut nodes: Vec<u32> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
    nodes.sort_unstable();
    nodes.dedup();
    assert_eq!(nodes.len(), 23);
}

#[test]
fn reference_graph_longest_path_layering_matches_the_papers_figure() {
    let mut g = Graph::new();
    for (from, to) in reference_graph_edges() {
        g.add_edge(&from.to_string(), &to.to_string(), Attrs::new());
    }
    let layer = layout::rank::assign(&g);
    assert_eq!(layer.len(), 23);

    let mut by_layer = [0usize; 10];
    for node in 1..=23u32 {
        let id = g.node_id(&node.to_string()).unwrap();
        assert_eq!(
            layer[&id],
            expected_layer(node),
            "node {node} landed on the wrong layer"
        );
        by_layer[layer[&id]] += 1;
    }
    assert_eq!(by_layer, [2, 1, 2, 2, 2, 3, 4, 4, 2, 1]);
}

#[test]
fn reference_graph_layout_keeps_every_long_edge_straight_through_its_dummy_chain() {
    let mut g = Graph::new();
    for (from, to) in reference_graph_edges() {
        g.add_edge(&from.to_string(), &to.to_string(), Attrs::new());
    }
    let mut lg = LayoutGraph::seed(&g, dims);
    Pipeline::new()
        .layout(&g, &Config::default(), &mut lg)
        .unwrap();

    // Node 6 -> 23 spans 6 layers (3 to 9): its polyline must have one point per layer crossed.
    let six = g.node_id("6").unwrap();
    let twentythree = g.node_id("23").unwrap();
    let path = lg.edge(six, twentythree).unwrap();
    assert_eq!(path.len(), 9 - 3 + 1);

    // No dummy node ids survive into the output graph.
    assert_eq!(lg.node_count(), 23);
    assert_eq!(lg.edge_count(), 34);
}
