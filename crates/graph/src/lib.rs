//! Directed graph data model and JSONL ingestion for the layout engine (`spec.md` §3, §6).
//!
//! This crate owns only the *input* side: node identity, opaque attribute payloads, and
//! parsing. It knows nothing about layers, coordinates, or dummy nodes — that's `layout`'s job.

pub mod alg;
pub mod error;
pub mod id;
pub mod jsonl;
pub mod value;

pub use error::Error;
pub use graph::Graph;
pub use id::{Interner, NodeId};
pub use value::{Attrs, Value};

mod graph;
