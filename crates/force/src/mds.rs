//! `spec.md` §4.8 "MDS / Spring-embedder": classical multidimensional scaling over
//! graph-geodesic distances (what `original_source/render/layout_gonum.go`'s
//! `IsomapR2GonumLayout` calls into gonum's `graph/layout.IsomapR2` for).
//!
//! Isomap reduces to classical MDS once the neighborhood graph is already given (no k-NN
//! construction needed, since the input *is* the graph): compute all-pairs shortest-path
//! distances over the undirected graph, double-center the squared-distance matrix, and take the
//! top two eigenvectors scaled by the square root of their eigenvalues. Implemented directly
//! with `nalgebra::SymmetricEigen` rather than depending on gonum.

use crate::geom::route_straight;
use crate::init;
use graph::{Graph, NodeId};
use layout::{Config, Error, Layout, LayoutGraph};
use nalgebra::{DMatrix, SymmetricEigen};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Post-layout uniform scale (`spec.md` §4.8: "coordinates ... normalized to fit a square whose
/// side is `sqrt(total-node-width x total-node-height) x scale`").
pub struct MdsLayout {
    pub scale: f64,
}

impl Default for MdsLayout {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// BFS shortest-path distances from `src` over the undirected view of `g` (unreachable nodes
/// get `node_ids.len()` as a finite stand-in "infinity", matching
/// `original_source/algo/fcose/spectral.rs`'s `INFINITY_HOPS` sentinel in spirit, scaled down to
/// stay well-conditioned for a graph this small).
fn bfs_distances(g: &Graph, ids: &[NodeId], index_of: &FxHashMap<NodeId, usize>, src: NodeId) -> Vec<f64> {
    let n = ids.len();
    let mut dist = vec![f64::INFINITY; n];
    dist[index_of[&src]] = 0.0;
    let mut queue = VecDeque::new();
    queue.push_back(src);
    while let Some(v) = queue.pop_front() {
        let dv = dist[index_of[&v]];
        for &w in g.successors(v).iter().chain(g.predecessors(v).iter()) {
            if w == v {
                continue;
            }
            let iw = index_of[&w];
            if dist[iw].is_infinite() {
                dist[iw] = dv + 1.0;
                queue.push_back(w);
            }
        }
    }
    let fallback = n as f64;
    for d in &mut dist {
        if d.is_infinite() {
            *d = fallback;
        }
    }
    dist
}

/// Classical MDS: double-center the squared-distance matrix, eigendecompose, project onto the
/// top two eigenvectors scaled by `sqrt(eigenvalue)`.
fn classical_scaling(ids: &[NodeId], index_of: &FxHashMap<NodeId, usize>, g: &Graph) -> Vec<(f64, f64)> {
    let n = ids.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![(0.0, 0.0)];
    }

    let mut d2 = DMatrix::<f64>::zeros(n, n);
    for &v in ids {
        let row = bfs_distances(g, ids, index_of, v);
        let i = index_of[&v];
        for (j, &d) in row.iter().enumerate() {
            d2[(i, j)] = d * d;
        }
    }

    // Double centering: B = -1/2 J D2 J, J = I - (1/n) * ones(n, n).
    let row_means: Vec<f64> = (0..n).map(|i| d2.row(i).sum() / n as f64).collect();
    let grand_mean: f64 = row_means.iter().sum::<f64>() / n as f64;
    let mut b = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            b[(i, j)] = -0.5 * (d2[(i, j)] - row_means[i] - row_means[j] + grand_mean);
        }
    }

    let eig = SymmetricEigen::new(b);
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &c| eig.eigenvalues[c].partial_cmp(&eig.eigenvalues[a]).unwrap());

    let mut coords = vec![(0.0, 0.0); n];
    for (rank, &axis) in order.iter().take(2).enumerate() {
        let lambda = eig.eigenvalues[axis].max(0.0).sqrt();
        for i in 0..n {
            let value = eig.eigenvectors[(i, axis)] * lambda;
            if rank == 0 {
                coords[i].0 = value;
            } else {
                coords[i].1 = value;
            }
        }
    }
    coords
}

impl MdsLayout {
    /// Rejects an out-of-range `scale` (`spec.md` §7 `ConfigError`): it multiplies the
    /// normalization side length, so it must stay positive and finite.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(crate::error::Error::Config {
                reason: format!("scale must be a positive finite number, got {}", self.scale),
            });
        }
        Ok(())
    }
}

impl Layout for MdsLayout {
    fn layout(&self, g: &Graph, _config: &Config, lg: &mut LayoutGraph) -> Result<(), Error> {
        self.validate()?;
        let ids: Vec<NodeId> = g.node_ids().collect();
        if ids.is_empty() {
            return Ok(());
        }
        let index_of: FxHashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let coords = classical_scaling(&ids, &index_of, g);

        let (mut min_x, mut max_x, mut min_y, mut max_y) =
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &coords {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let raw_w = (max_x - min_x).max(1e-9);
        let raw_h = (max_y - min_y).max(1e-9);

        let side = init::square_layout_size(lg).max(1.0) * self.scale;
        let (scale_x, scale_y) = (side / raw_w, side / raw_h);

        for (i, &v) in ids.iter().enumerate() {
            let (x, y) = coords[i];
            if let Some(b) = lg.node_mut(v) {
                b.x = ((x - min_x) * scale_x).round() as i64;
                b.y = ((y - min_y) * scale_y).round() as i64;
            }
        }

        route_straight(g, lg);
        Ok(())
    }
}
