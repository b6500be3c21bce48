use generational_arena::{Arena, Index};
use std::iter::FusedIterator;

use super::node::Node;

/// In-order iterator over a [`RedBlackTree`](super::RedBlackTree).
///
/// Keeps the pending left spine on an explicit stack instead of recursing, so
/// the walk is lazy and each iterator is independent of any other.
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<Node<T>>, root: Option<Index>, len: usize) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut cursor: Option<Index>) {
        while let Some(index) = cursor {
            self.stack.push(index);
            cursor = self.arena[index].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[index];
        self.descend(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
