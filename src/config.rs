//! Tree configuration
//!
//! The tree is a pure in-memory value, so its only knob is how insertion treats
//! a value that compares equal to one already stored. It is fixed at
//! construction via [`RedBlackTree::with_policy`](crate::RedBlackTree::with_policy).

use std::fmt;

/// What `insert` does when it meets an element that compares `Equal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Leave the tree untouched; `insert` returns `false`.
    #[default]
    Reject,
    /// Overwrite the stored element in place; `insert` returns `false`.
    ///
    /// Useful when `Ord` only looks at a key and the rest is payload.
    Replace,
    /// Store the element as a separate node in the right subtree of the equal
    /// node. `len` then counts every insert call.
    Allow,
}

impl DuplicatePolicy {
    /// Whether equal elements may appear next to each other in-order.
    pub fn allows_duplicates(self) -> bool {
        matches!(self, DuplicatePolicy::Allow)
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Replace => "replace",
            DuplicatePolicy::Allow => "allow",
        };
        write!(f, "{}", name)
    }
}
