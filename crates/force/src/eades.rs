//! `spec.md` §4.8 "MDS / Eades Layout": the classical Eades (1984) spring embedder.
//!
//! `original_source/render/layout_gonum.go`'s `EadesGonumLayout` wraps gonum's
//! `graph/layout.EadesR2`, which is itself this same published algorithm (logarithmic
//! attraction along edges, inverse-square-root repulsion between every pair, approximated with
//! a Barnes-Hut quad-tree gated by `Theta`). We implement the force model directly rather than
//! depending on gonum; `theta` is kept as a field for API parity with the original's
//! `Repulsion`/`Rate`/`Updates`/`Theta` knobs but is unused, since the brute-force O(n^2)
//! pairwise sum this crate's size budget calls for needs no opening-angle approximation
//! (documented in DESIGN.md, not a silently dropped feature).

use crate::geom::route_straight;
use crate::init;
use graph::{Graph, NodeId};
use layout::{Config, Error, Layout, LayoutGraph};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

/// Natural edge length the attractive force pulls toward (`original_source`'s gonum wrapper
/// leaves this implicit inside `EadesR2`; we expose it as the classic algorithm's `c2`
/// constant).
const NATURAL_LENGTH: f64 = 1.0;
/// Attraction constant (`c1` in the Eades 1984 paper).
const ATTRACTION: f64 = 2.0;

pub struct EadesLayout {
    pub updates: usize,
    /// Repulsion constant (`c3`).
    pub repulsion: f64,
    /// Per-update movement rate (`c4`).
    pub rate: f64,
    /// Barnes-Hut opening angle in the original gonum-backed implementation; unused here (see
    /// module docs).
    pub theta: f64,
    pub randomize_init: bool,
}

impl Default for EadesLayout {
    /// Matches `web/app/layout.go`'s `EadesLayoutOption` construction.
    fn default() -> Self {
        Self {
            updates: 30,
            repulsion: 1.0,
            rate: 0.05,
            theta: 0.2,
            randomize_init: true,
        }
    }
}

impl EadesLayout {
    /// Rejects out-of-range knobs (`spec.md` §7 `ConfigError`): a non-positive `rate` never
    /// moves anything, and `repulsion < 0` would make same-layer nodes attract instead of repel.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(crate::error::Error::Config {
                reason: format!("rate must be a positive finite number, got {}", self.rate),
            });
        }
        if !self.repulsion.is_finite() || self.repulsion < 0.0 {
            return Err(crate::error::Error::Config {
                reason: format!("repulsion must be non-negative, got {}", self.repulsion),
            });
        }
        Ok(())
    }
}

impl Layout for EadesLayout {
    fn layout(&self, g: &Graph, config: &Config, lg: &mut LayoutGraph) -> Result<(), Error> {
        self.validate()?;
        let ids: Vec<NodeId> = g.node_ids().collect();
        let mut positions: FxHashMap<NodeId, (f64, f64)> = ids
            .iter()
            .map(|&v| {
                let b = lg.node(v);
                (v, b.map(|b| (b.x as f64, b.y as f64)).unwrap_or((0.0, 0.0)))
            })
            .collect();

        if self.randomize_init {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            init::randomize(g, lg, &mut rng);
            for &v in &ids {
                let b = lg.node(v).expect("just randomized");
                positions.insert(v, (b.x as f64, b.y as f64));
            }
        }

        for _ in 0..self.updates {
            let mut force: FxHashMap<NodeId, (f64, f64)> =
                ids.iter().map(|&v| (v, (0.0, 0.0))).collect();

            for (i, &u) in ids.iter().enumerate() {
                let (xu, yu) = positions[&u];
                for &v in &ids[i + 1..] {
                    let (xv, yv) = positions[&v];
                    let d = (xu - xv).hypot(yu - yv).max(0.01);
                    let repel = self.repulsion / d.sqrt();
                    let (ux, uy) = ((xu - xv) / d, (yu - yv) / d);
                    let fu = force.get_mut(&u).unwrap();
                    fu.0 += repel * ux;
                    fu.1 += repel * uy;
                    let fv = force.get_mut(&v).unwrap();
                    fv.0 -= repel * ux;
                    fv.1 -= repel * uy;
                }
            }

            for (from, to) in g.edges() {
                if from == to {
                    continue;
                }
                let (xu, yu) = positions[&from];
                let (xv, yv) = positions[&to];
                let d = (xu - xv).hypot(yu - yv).max(0.01);
                let attract = ATTRACTION * (d / NATURAL_LENGTH).max(1e-6).ln();
                let (ux, uy) = ((xv - xu) / d, (yv - yu) / d);
                let fu = force.get_mut(&from).unwrap();
                fu.0 += attract * ux;
                fu.1 += attract * uy;
                let fv = force.get_mut(&to).unwrap();
                fv.0 -= attract * ux;
                fv.1 -= attract * uy;
            }

            for &v in &ids {
                let (fx, fy) = force[&v];
                let (x, y) = positions[&v];
                positions.insert(v, (x + fx * self.rate, y + fy * self.rate));
            }
        }

        for &v in &ids {
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
