//! Arena node and the read-only cursor handed out to callers

use generational_arena::Index;
use std::fmt;

use super::arena::RedBlackTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Side of a parent a child hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Tree node stored in the arena.
///
/// Links are arena indices; `parent` is only used for walking upwards and
/// always mirrors the parent's `left`/`right`.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: Color,
    /// Index of parent node in the arena, None for the root
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<T> Node<T> {
    /// Fresh red leaf hanging under `parent`.
    pub(crate) fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, dir: Direction) -> Option<Index> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, dir: Direction, child: Option<Index>) {
        match dir {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Borrowed view of one node, for walking the tree shape from the outside.
pub struct NodeRef<'a, T> {
    tree: &'a RedBlackTree<T>,
    index: Index,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>, index: Index) -> Self {
        Self { tree, index }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.node(self.index)
    }

    fn neighbour(&self, link: Option<Index>) -> Option<NodeRef<'a, T>> {
        link.map(|index| NodeRef::new(self.tree, index))
    }

    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }

    pub fn is_black(&self) -> bool {
        !self.is_red()
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.neighbour(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.neighbour(self.node().right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.neighbour(self.node().parent)
    }

    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// Which side of its parent this node hangs on; `None` for the root.
    pub fn direction(&self) -> Option<Direction> {
        self.node()
            .parent
            .map(|parent| self.tree.side_of(parent, self.index))
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}
