//! `spec.md` §7 error kinds that belong to the non-Sugiyama layouts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// §7 `ConfigError`, scoped to a [`crate::force::ForceLayout`]/[`crate::eades::EadesLayout`]
    /// knob (e.g. zero `max_steps`, non-positive `updates`).
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl From<Error> for layout::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Config { reason } => layout::Error::Config { reason },
        }
    }
}
