use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },
}
