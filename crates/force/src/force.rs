//! `spec.md` §4.8 `ForceLayout`: iterative force simulation (gravity + spring).
//!
//! Grounded directly in `original_source/render/layout_force.go` (`ForceGraphLayout`'s step
//! loop: accumulate every `Force`, drop forces under `Epsilon`, early-stop once none remain,
//! otherwise move every node by `Delta * force`) and its two `Force` implementations,
//! `layout_force_gravity.go` (`GravityForce`) and `layout_force_spring.go` (`SpringForce`).

use crate::geom::route_straight;
use crate::init;
use graph::{Graph, NodeId};
use layout::{Config, Error, Layout, LayoutGraph};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

/// A force contributing to every node's per-step displacement (`spec.md` §4.8's `Force`
/// interface).
pub trait Force {
    /// Adds this force's `(fx, fy)` contribution for every node of `g`, given the current
    /// `positions`.
    fn add_force(
        &self,
        g: &Graph,
        positions: &FxHashMap<NodeId, (f64, f64)>,
        fx: &mut FxHashMap<NodeId, f64>,
        fy: &mut FxHashMap<NodeId, f64>,
    );
}

fn interacting_nodes(g: &Graph, v: NodeId, edges_only: bool) -> Vec<NodeId> {
    if edges_only {
        g.successors(v).to_vec()
    } else {
        g.node_ids().filter(|&w| w != v).collect()
    }
}

/// `f = K / d` along the direction between two nodes; attractive when `K > 0` (`spec.md` §4.8).
#[derive(Debug, Clone, Copy)]
pub struct GravityForce {
    pub k: f64,
    pub edges_only: bool,
}

impl Force for GravityForce {
    fn add_force(
        &self,
        g: &Graph,
        positions: &FxHashMap<NodeId, (f64, f64)>,
        fx: &mut FxHashMap<NodeId, f64>,
        fy: &mut FxHashMap<NodeId, f64>,
    ) {
        for v in g.node_ids() {
            let (xi, yi) = positions[&v];
            let (mut sx, mut sy) = (0.0, 0.0);
            for w in interacting_nodes(g, v, self.edges_only) {
                let (xj, yj) = positions[&w];
                let d = (xi - xj).hypot(yi - yj);
                if d > 1.0 {
                    let f = self.k / d;
                    sx += f * (xj - xi) / d;
                    sy += f * (yj - yi) / d;
                }
            }
            *fx.entry(v).or_insert(0.0) += sx;
            *fy.entry(v).or_insert(0.0) += sy;
        }
    }
}

/// `f = (d - L) * K` along the direction between two nodes; attractive when stretched past `L`,
/// repulsive when shrunk below it (`spec.md` §4.8).
#[derive(Debug, Clone, Copy)]
pub struct SpringForce {
    pub k: f64,
    pub l: f64,
    pub edges_only: bool,
}

impl Force for SpringForce {
    fn add_force(
        &self,
        g: &Graph,
        positions: &FxHashMap<NodeId, (f64, f64)>,
        fx: &mut FxHashMap<NodeId, f64>,
        fy: &mut FxHashMap<NodeId, f64>,
    ) {
        for v in g.node_ids() {
            let (xi, yi) = positions[&v];
            let (mut sx, mut sy) = (0.0, 0.0);
            for w in interacting_nodes(g, v, self.edges_only) {
                let (xj, yj) = positions[&w];
                let d = (xi - xj).hypot(yi - yj);
                if d > 1.0 {
                    let f = (d - self.l) * self.k;
                    sx += f * (xj - xi) / d;
                    sy += f * (yj - yi) / d;
                }
            }
            *fx.entry(v).or_insert(0.0) += sx;
            *fy.entry(v).or_insert(0.0) += sy;
        }
    }
}

/// `spec.md` §4.8 `ForceLayout`: moves each node by `delta * (sum of forces)` per step, for up
/// to `max_steps` iterations, stopping early once every node's total force drops below
/// `epsilon` in L2 norm.
pub struct ForceLayout {
    pub delta: f64,
    pub max_steps: usize,
    pub epsilon: f64,
    pub forces: Vec<Box<dyn Force>>,
    /// Scatter nodes uniformly at random before the first step
    /// (`original_source/render/layout_grid.go`'s `InitRandom`, invoked just before
    /// `ForceGraphLayout` in the web shell). Set to `false` when chaining after a layout whose
    /// positions should be refined in place rather than discarded
    /// (`spec.md` §9's `CompositeLayout` re-architecture note).
    pub randomize_init: bool,
}

impl Default for ForceLayout {
    /// Matches `web/app/layout.go`'s `ForcesLayoutOption` construction.
    fn default() -> Self {
        Self {
            delta: 1.0,
            max_steps: 5000,
            epsilon: 1.5,
            forces: vec![
                Box::new(GravityForce { k: -50.0, edges_only: false }),
                Box::new(SpringForce { k: 0.2, l: 200.0, edges_only: true }),
            ],
            randomize_init: true,
        }
    }
}

impl ForceLayout {
    /// Rejects out-of-range knobs (`spec.md` §7 `ConfigError`): a non-positive `delta` can't
    /// make progress, a negative `epsilon` can never be satisfied. `max_steps == 0` is a
    /// legitimate no-op (see `disabling_randomize_init_refines_existing_positions` below), not
    /// an error.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(crate::error::Error::Config {
                reason: format!("delta must be a positive finite number, got {}", self.delta),
            });
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(crate::error::Error::Config {
                reason: format!("epsilon must be non-negative, got {}", self.epsilon),
            });
        }
        Ok(())
    }
}

impl Layout for ForceLayout {
    fn layout(&self, g: &Graph, config: &Config, lg: &mut LayoutGraph) -> Result<(), Error> {
        self.validate()?;
        let mut positions: FxHashMap<NodeId, (f64, f64)> = g
            .node_ids()
            .map(|v| {
                let b = lg.node(v);
                (v, b.map(|b| (b.x as f64, b.y as f64)).unwrap_or((0.0, 0.0)))
            })
            .collect();

        if self.randomize_init {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            init::randomize(g, lg, &mut rng);
            for v in g.node_ids() {
                let b = lg.node(v).expect("just randomized");
                positions.insert(v, (b.x as f64, b.y as f64));
            }
        }

        for _ in 0..self.max_steps {
            let mut fx = FxHashMap::default();
            let mut fy = FxHashMap::default();
            for force in &self.forces {
                force.add_force(g, &positions, &mut fx, &mut fy);
            }

            // Drop negligible forces (spec.md §4.8) then early-stop once none remain.
            fx.retain(|v, x| x.hypot(fy.get(v).copied().unwrap_or(0.0)) >= self.epsilon);
            fy.retain(|v, _| fx.contains_key(v));
            if fx.is_empty() {
                break;
            }

            for (&v, &dx) in &fx {
                let dy = fy.get(&v).copied().unwrap_or(0.0);
                let (x, y) = positions[&v];
                positions.insert(v, (x + dx * self.delta, y + dy * self.delta));
            }
        }

        for v in g.node_ids() {
            let (x, y) = positions[&v];
            if let Some(b) = lg.node_mut(v) {
                b.x = x.round() as i64;
                b.y = y.round() as i64;
            }
        }

        route_straight(g, lg);
        layout::apply_scale(lg, config.scale);
        Ok(())
    }
}
