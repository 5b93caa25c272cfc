//! `spec.md` §4.4 `OrderingOptimizer`: layer-by-layer sweep driver plus its two pluggable
//! per-layer optimizers and the initial-ordering step.

pub mod cross;
pub mod init;
pub mod median;
pub mod random;

use crate::config::{Config, OrderingStrategy};
use crate::layered::LayeredGraph;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs the full sweep (`spec.md` §4.4): seed the initial order, then for `ordering_epochs`
/// epochs alternate sweep direction, reordering one layer at a time with the configured per-layer
/// optimizer, keeping the best (lowest total-crossing) arrangement seen across all epochs.
///
/// Crossing count is non-increasing across the returned result by construction: every epoch's
/// arrangement is compared against the best-so-far and only adopted if it does not lose.
pub fn optimize(lg: &mut LayeredGraph, config: &Config) {
    if lg.layer_count() < 2 {
        return;
    }

    init::bfs_order(lg);

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut best = snapshot(lg);
    let mut best_cost = cross::total(lg);

    for epoch in 0..config.ordering_epochs {
        let sweep_down = epoch % 2 == 0;
        let layers: Vec<usize> = if sweep_down {
            (1..lg.layer_count()).collect()
        } else {
            (0..lg.layer_count() - 1).rev().collect()
        };

        for &layer in &layers {
            let side = if sweep_down {
                median::FixedSide::Upper
            } else {
                median::FixedSide::Lower
            };
            match config.ordering_strategy {
                OrderingStrategy::WeightedMedian => median::reorder(lg, layer, side),
                OrderingStrategy::Random => {
                    reorder_random(lg, layer, &mut rng, config.ordering_inner_epochs as usize)
                }
            }
        }

        let cost = cross::total(lg);
        if cost <= best_cost {
            best_cost = cost;
            best = snapshot(lg);
        }
    }

    restore(lg, &best);
}

fn reorder_random(lg: &mut LayeredGraph, layer: usize, rng: &mut ChaCha8Rng, trials: usize) {
    random::reorder(lg, layer, rng, trials.max(1));
}

fn snapshot(lg: &LayeredGraph) -> Vec<Vec<graph::NodeId>> {
    lg.layers().to_vec()
}

fn restore(lg: &mut LayeredGraph, snapshot: &[Vec<graph::NodeId>]) {
    for (i, layer) in snapshot.iter().enumerate() {
        lg.reorder_layer(i, layer.clone());
    }
}
