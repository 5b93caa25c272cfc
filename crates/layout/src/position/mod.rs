//! `spec.md` §4.5-4.6: horizontal (Brandes-Köpf) and vertical coordinate assignment.

pub mod bk;
pub mod vertical;
