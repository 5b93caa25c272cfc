//! The Sugiyama hierarchical graph layout engine (`spec.md` §1, §4) plus the `Layout` trait
//! shared with the sibling `force` crate's non-Sugiyama layouts.
//!
//! The pipeline is a multi-phase state machine: [`cycle`] removes a feedback arc set,
//! [`rank`] assigns layers, [`dummy`] splits long edges, [`order`] minimizes crossings,
//! [`position`] assigns coordinates (Brandes-Köpf horizontally, max-height vertically), and
//! [`route`] turns dummy chains into polylines. [`pipeline::Pipeline`] drives all of this
//! behind the single [`pipeline::Layout`] trait method other layout strategies also implement.

pub mod composite;
pub mod config;
pub mod cycle;
pub mod dummy;
pub mod error;
pub mod geom;
pub mod layered;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;
pub mod route;

pub use composite::{CompositeLayout, ScalerLayout};
pub use config::{Config, LayoutKind, Orientation, OrderingStrategy};
pub use error::Error;
pub use geom::{LayoutGraph, NodeBox, Point};
pub use layered::LayeredGraph;
pub use pipeline::{Layout, Pipeline, apply_scale};
