//! `spec.md` §4.9 `LayoutPipeline`: cycle removal -> layering -> validation -> dummy insertion ->
//! ordering -> horizontal -> vertical -> edge routing -> cycle restoration.
//!
//! Grounded in `original_source/layout/layers_sugiyama.go`'s
//! `SugiyamaLayersStrategyGraphLayout`, which wires the same four assigners
//! (`LevelsAssigner`, `OrderingAssigner`, `XAssigner`, `EdgePathAssigner`) behind one
//! `UpdateGraphLayout` call; we add the cycle-removal bookend the Go variant leaves to a
//! separate, not-always-invoked preprocessing step (`spec.md` §4.1 requires it unconditionally).

use crate::config::{Config, Orientation};
use crate::cycle::CycleRemover;
use crate::error::Error;
use crate::geom::{LayoutGraph, NodeBox, Point};
use crate::{dummy, order, position, rank, route};
use graph::{Graph, NodeId};
use rustc_hash::FxHashMap;

/// The common layout interface `spec.md` §1 refers to: every top-level algorithm (the Sugiyama
/// [`Pipeline`] here, `force::ForceLayout`/`force::EadesLayout`/`force::MdsLayout` in the
/// sibling crate) lays out `g` into `lg`. `lg` arrives already seeded with every node of `g` at
/// `(0, 0)` with its real `(w, h)` (see [`LayoutGraph::seed`]) and a placeholder empty path per
/// edge; a `Layout` is free to ignore that seed (as `Pipeline` does) or treat it as its starting
/// point (as `force::ForceLayout` does, to support [`crate::composite::CompositeLayout`]
/// chaining one layout after another).
pub trait Layout {
    fn layout(&self, g: &Graph, config: &Config, lg: &mut LayoutGraph) -> Result<(), Error>;
}

/// The Sugiyama hierarchical layout (`spec.md` §1, §4, §4.9).
#[derive(Debug, Clone, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for Pipeline {
    fn layout(&self, g: &Graph, config: &Config, lg: &mut LayoutGraph) -> Result<(), Error> {
        config.validate()?;

        // Snapshot the seeded (w, h) up front: `lg` itself gets rebuilt below, so nothing may
        // hold a live borrow of it across that rebuild.
        let seed_dims: FxHashMap<NodeId, (i64, i64)> = g
            .node_ids()
            .map(|v| (v, lg.node(v).map(|b| (b.w, b.h)).unwrap_or((0, 0))))
            .collect();
        let dims_of = |v: NodeId| seed_dims.get(&v).copied().unwrap_or((0, 0));

        // The pipeline owns a mutable working copy so cycle removal can reverse edges without
        // disturbing the caller's graph (`spec.md` §3's lifecycle note).
        let mut work = g.clone();
        let remover = CycleRemover::run(&mut work);

        let layer_of = rank::assign(&work);
        rank::validate(&work, &layer_of)?;

        // In left-to-right orientation, layers stack along x instead of y: swap (w, h) before
        // dummy insertion so `VerticalAssigner`'s per-layer thickness (read off `dims(v).h`)
        // reflects the stacking axis. Real node boxes below still use the caller's true (w, h).
        let layered_dims_of = |v: NodeId| {
            let (w, h) = dims_of(v);
            match config.orientation {
                Orientation::TopToBottom => (w, h),
                Orientation::LeftToRight => (h, w),
            }
        };
        let mut layered = dummy::build(
            &work,
            &layer_of,
            layered_dims_of,
            config.dummy_w,
            config.dummy_h,
        );
        layered
            .validate()
            .map_err(|(from, to)| Error::LayerConstraint { from, to })?;

        order::optimize(&mut layered, config);

        let (layer_gap, order_gap) = match config.orientation {
            Orientation::TopToBottom => (config.margin_y, config.horizontal_delta),
            Orientation::LeftToRight => (config.margin_x, config.horizontal_delta),
        };
        let along_order = position::bk::assign(&layered, order_gap);
        let along_layer = position::vertical::assign(&layered, layer_gap);

        let to_xy = |v: NodeId| -> (i64, i64) {
            match config.orientation {
                Orientation::TopToBottom => (along_order[&v], along_layer[&v]),
                Orientation::LeftToRight => (along_layer[&v], along_order[&v]),
            }
        };

        let mut boxes = FxHashMap::default();
        for v in work.node_ids() {
            let (x, y) = to_xy(v);
            let (w, h) = dims_of(v);
            boxes.insert(v, NodeBox { x, y, w, h });
        }
        let dummy_xy: FxHashMap<NodeId, (i64, i64)> = layered
            .layers()
            .iter()
            .flatten()
            .filter(|&&v| layered.is_dummy(v))
            .map(|&v| (v, to_xy(v)))
            .collect();

        let paths = route::route(&layered, &boxes, &dummy_xy, config.orientation);

        *lg = LayoutGraph::new();
        for v in g.node_ids() {
            lg.set_node(v, boxes[&v]);
        }
        for (from, to) in g.edges() {
            let path = if remover.was_reversed(from, to) {
                // (from, to) was reversed to (to, from) for layering; the segment/dummy chain
                // was recorded under (to, from), so flip its polyline back (`spec.md` §4.1,
                // §4.7).
                let mut p = paths[&(to, from)].clone();
                p.reverse();
                p
            } else {
                paths[&(from, to)].clone()
            };
            lg.set_edge(from, to, path);
        }

        remover.restore(&mut work);
        apply_scale(lg, config.scale);
        Ok(())
    }
}

/// `spec.md` §6's post-layout uniform `scale` knob, applied once at the end of every
/// top-level layout (not baked into any individual phase).
pub fn apply_scale(lg: &mut LayoutGraph, scale: f64) {
    if (scale - 1.0).abs() < f64::EPSILON {
        return;
    }
    let ids: Vec<NodeId> = lg.nodes().map(|(id, _)| id).collect();
    for id in ids {
        if let Some(b) = lg.node_mut(id) {
            b.x = (b.x as f64 * scale).round() as i64;
            b.y = (b.y as f64 * scale).round() as i64;
        }
    }
    let edges: Vec<(NodeId, NodeId)> = lg.edges().map(|(k, _)| k).collect();
    for (from, to) in edges {
        if let Some(path) = lg.edge_mut(from, to) {
            for p in path.iter_mut() {
                *p = Point::new(
                    (p.x as f64 * scale).round() as i64,
                    (p.y as f64 * scale).round() as i64,
                );
            }
        }
    }
}
