//! `spec.md` §7 error kinds that belong to the layout domain.

use graph::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// §7 `LayerConstraintViolation`: the validation phase found an edge that does not point
    /// strictly downward. Only reachable if cycle removal left a cycle behind — a programmer
    /// error, `debug_assert!`-checked in `debug` builds and returned here in `release`.
    #[error("layer constraint violated: edge {from} -> {to} does not strictly increase layer")]
    LayerConstraint { from: NodeId, to: NodeId },

    /// §7 `ConfigError`: an out-of-range configuration value.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}
