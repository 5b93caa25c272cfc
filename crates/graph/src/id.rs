//! Node identity.
//!
//! External callers name nodes with strings (`spec.md` §3); internally every phase of the
//! layout pipeline indexes by a small dense integer instead. [`Interner`] is the bridge.

use rustc_hash::FxHashMap;
use std::num::NonZeroU64;

/// An interned node identifier. `0` is unrepresentable, which gives us "id 0 means absent" for
/// free via `Option<NodeId>` rather than a runtime sentinel check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    /// Constructs a `NodeId` from a raw integer. Returns `None` for `0` ("absent", per
    /// `spec.md` §3). Exposed so downstream crates (e.g. `layout`'s dummy-node allocator) can
    /// mint fresh ids above the interned range without depending on `Interner` internals.
    pub fn new(n: u64) -> Option<Self> {
        NonZeroU64::new(n).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// String &lt;-&gt; [`NodeId`] interning table.
///
/// Ids are assigned in first-seen order starting at 1, so re-running ingestion on the same
/// input in the same order reproduces the same ids (important for the byte-identical replay
/// property in `spec.md` §8).
#[derive(Debug, Clone, Default)]
pub struct Interner {
    by_key: FxHashMap<String, NodeId>,
    keys: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `key`, interning it if this is the first time it's seen.
    pub fn intern(&mut self, key: &str) -> NodeId {
        if let Some(&id) = self.by_key.get(key) {
            return id;
        }
        let id = NodeId(NonZeroU64::new((self.keys.len() + 1) as u64).expect("nonzero by construction"));
        self.keys.push(key.to_string());
        self.by_key.insert(key.to_string(), id);
        id
    }

    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    pub fn key(&self, id: NodeId) -> &str {
        &self.keys[id.get() as usize - 1]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_first_seen_order() {
        let mut interner = Interner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let a_again = interner.intern("a");
        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(interner.key(a), "a");
        assert_eq!(interner.key(b), "b");
    }
}
