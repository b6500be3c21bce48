//! Insertion of elements that compare equal to a stored one

use std::cmp::Ordering;

use redblack::util::testing;
use redblack::{DuplicatePolicy, RedBlackTree};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Ordered by `key` only, so two entries can be equal yet carry different payloads.
#[derive(Debug, Clone)]
struct Entry {
    key: u32,
    payload: &'static str,
}

impl Entry {
    fn new(key: u32, payload: &'static str) -> Self {
        Self { key, payload }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

// ============================================================
// Reject
// ============================================================

#[test]
fn given_default_policy_when_inserting_duplicate_then_rejected() {
    let mut tree = RedBlackTree::new();
    assert_eq!(tree.policy(), DuplicatePolicy::Reject);

    assert!(tree.insert(Entry::new(1, "first")));
    assert!(!tree.insert(Entry::new(1, "second")));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(&Entry::new(1, "")).map(|e| e.payload), Some("first"));
}

// ============================================================
// Replace
// ============================================================

#[test]
fn given_replace_policy_when_inserting_duplicate_then_payload_updated_in_place() {
    let mut tree = RedBlackTree::with_policy(DuplicatePolicy::Replace);
    for (key, payload) in [(5, "a"), (3, "b"), (8, "c")] {
        tree.insert(Entry::new(key, payload));
    }
    let root_before = tree.root().map(|n| n.value().key);

    assert!(!tree.insert(Entry::new(3, "updated")));

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(&Entry::new(3, "")).map(|e| e.payload), Some("updated"));
    assert_eq!(tree.root().map(|n| n.value().key), root_before);
    assert!(tree.validate().is_ok());
}

// ============================================================
// Allow
// ============================================================

#[test]
fn given_allow_policy_when_inserting_duplicates_then_kept_as_separate_nodes() {
    let mut tree = RedBlackTree::with_policy(DuplicatePolicy::Allow);
    for payload in ["x", "y", "z"] {
        assert!(tree.insert(Entry::new(7, payload)));
    }

    assert_eq!(tree.len(), 3);
    assert!(tree.contains(&Entry::new(7, "")));
    // equal elements keep insertion order in-order
    let payloads: Vec<&str> = tree.iter().map(|e| e.payload).collect();
    assert_eq!(payloads, vec!["x", "y", "z"]);
    assert!(tree.validate().is_ok());
}

#[rstest]
#[case(DuplicatePolicy::Reject, 3)]
#[case(DuplicatePolicy::Replace, 3)]
#[case(DuplicatePolicy::Allow, 6)]
fn given_policy_when_inserting_each_value_twice_then_len_follows_policy(
    #[case] policy: DuplicatePolicy,
    #[case] expected_len: usize,
) {
    let mut tree = RedBlackTree::with_policy(policy);
    for value in [2, 1, 3, 2, 1, 3] {
        tree.insert(value);
    }

    assert_eq!(tree.len(), expected_len);
    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&3));
    assert!(tree.validate().is_ok());
}
