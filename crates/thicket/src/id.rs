use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Source of fresh node identifiers for the whole process.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a component.
///
/// Every [`NodeState`](crate::node::NodeState) draws a fresh id when it is
/// created, so two distinct component objects never compare equal even if
/// their contents do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a new, never-before-seen identifier.
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, useful in logs and debug output.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = NodeId::next();
        let b = NodeId::next();
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(format!("{a}"), format!("#{}", a.as_u64()));
    }
}
