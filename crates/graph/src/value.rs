//! Opaque per-node / per-edge attribute payloads.
//!
//! The layout core never interprets these beyond reading `width`/`height` off a node (and that
//! read happens in `layout`, not here) — everything else just rides along for the renderer.

use std::collections::BTreeMap;

/// A single attribute value. Mirrors the three JSON scalar kinds `spec.md` §3 allows (plus
/// `Bool`, which JSON also allows and the original Go payload map carried as `interface{}`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    I64(i64),
    F64(f64),
    Bool(bool),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(v) => Some(*v),
            Value::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else {
                    Value::F64(n.as_f64().unwrap_or(0.0))
                }
            }
            // Nested arrays/objects/null have no scalar meaning to the layout core; fold them
            // to their string rendering so no payload is silently dropped.
            other => Value::Str(other.to_string()),
        }
    }
}

/// An unordered key -> value map. `BTreeMap` over `HashMap` here buys deterministic iteration
/// order for free, which matters when a caller serializes a node's full payload back out.
pub type Attrs = BTreeMap<String, Value>;
