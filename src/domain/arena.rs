use generational_arena::{Arena, Index};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, instrument, trace};

use super::iter::Iter;
use super::node::{Color, Direction, Node, NodeRef};
use crate::config::DuplicatePolicy;
use crate::errors::{TreeError, TreeResult};

/// Arena-based red-black tree.
///
/// Nodes live in a generational arena and refer to each other by index, so
/// parent back-references never own anything. Nodes are only ever added,
/// which keeps the arena's live count equal to the number of nodes reachable
/// from the root.
#[derive(Clone)]
pub struct RedBlackTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<Node<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    policy: DuplicatePolicy,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RedBlackTree<T> {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|index| NodeRef::new(self, index))
    }

    /// Ascending traversal; every call starts a fresh, independent walk.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root, self.len())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn min(&self) -> TreeResult<&T> {
        self.extreme(Direction::Left)
            .map(|index| &self.node(index).value)
            .ok_or(TreeError::EmptyTree("minimum"))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn max(&self) -> TreeResult<&T> {
        self.extreme(Direction::Right)
            .map(|index| &self.node(index).value)
            .ok_or(TreeError::EmptyTree("maximum"))
    }

    /// Number of nodes on the longest root-to-node path, 0 for empty trees.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_height(root))
    }

    fn calculate_height(&self, index: Index) -> usize {
        let node = self.node(index);
        1 + [node.left, node.right]
            .into_iter()
            .flatten()
            .map(|child| self.calculate_height(child))
            .max()
            .unwrap_or(0)
    }

    fn extreme(&self, dir: Direction) -> Option<Index> {
        let mut current = self.root?;
        while let Some(next) = self.node(current).child(dir) {
            current = next;
        }
        Some(current)
    }

    pub(crate) fn node(&self, index: Index) -> &Node<T> {
        &self.arena[index]
    }

    pub(crate) fn node_mut(&mut self, index: Index) -> &mut Node<T> {
        &mut self.arena[index]
    }

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }

    /// Side of `parent` that `child` hangs on, by index identity.
    pub(crate) fn side_of(&self, parent: Index, child: Index) -> Direction {
        let parent = self.node(parent);
        if parent.left == Some(child) {
            Direction::Left
        } else {
            debug_assert_eq!(parent.right, Some(child), "child is not linked from its parent");
            Direction::Right
        }
    }

    pub(crate) fn is_red(&self, index: Option<Index>) -> bool {
        index.is_some_and(|index| self.node(index).is_red())
    }

    fn sibling(&self, index: Index) -> Option<Index> {
        let parent = self.node(index).parent?;
        let side = self.side_of(parent, index);
        self.node(parent).child(side.opposite())
    }

    /// First red child, left before right.
    fn red_child(&self, index: Index) -> Option<(Direction, Index)> {
        let node = self.node(index);
        [Direction::Left, Direction::Right]
            .into_iter()
            .find_map(|dir| {
                node.child(dir)
                    .filter(|&child| self.node(child).is_red())
                    .map(|child| (dir, child))
            })
    }

    /// Restores the red-black rules after `start` may have gained a red child.
    ///
    /// Walks upwards until the current node is black, has no red child, or is
    /// the root. The root itself is repainted by `insert`.
    #[instrument(level = "trace", skip(self))]
    fn check(&mut self, start: Index) {
        let mut current = Some(start);
        while let Some(node) = current {
            if !self.node(node).is_red() {
                break;
            }
            let Some((red_side, child)) = self.red_child(node) else {
                break;
            };
            let Some(parent) = self.node(node).parent else {
                break;
            };

            if let Some(uncle) = self.sibling(node).filter(|&uncle| self.node(uncle).is_red()) {
                trace!("recolor: red uncle");
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(node).color = Color::Black;
                self.node_mut(parent).color = Color::Red;
                current = self.node(parent).parent;
                continue;
            }

            let top = match (red_side, self.side_of(parent, node)) {
                (Direction::Left, Direction::Right) => {
                    self.rotate_left_child_right_parent(node, child, parent)
                }
                (Direction::Left, Direction::Left) => self.rotate_left_child_left_parent(node, parent),
                (Direction::Right, Direction::Right) => {
                    self.rotate_right_child_right_parent(node, parent)
                }
                (Direction::Right, Direction::Left) => {
                    self.rotate_right_child_left_parent(node, child, parent)
                }
            };
            current = self.node(top).parent;
        }
    }

    /// Red left child under a node that is itself a right child: the child
    /// rises twice and becomes the local root.
    fn rotate_left_child_right_parent(&mut self, node: Index, child: Index, parent: Index) -> Index {
        trace!("rotate: left child, right parent");
        self.rotate(node, Direction::Right);
        self.rotate(parent, Direction::Left);
        self.fix_colors(child, parent)
    }

    fn rotate_left_child_left_parent(&mut self, node: Index, parent: Index) -> Index {
        trace!("rotate: left child, left parent");
        self.rotate(parent, Direction::Right);
        self.fix_colors(node, parent)
    }

    fn rotate_right_child_right_parent(&mut self, node: Index, parent: Index) -> Index {
        trace!("rotate: right child, right parent");
        self.rotate(parent, Direction::Left);
        self.fix_colors(node, parent)
    }

    /// Mirror of `rotate_left_child_right_parent`.
    fn rotate_right_child_left_parent(&mut self, node: Index, child: Index, parent: Index) -> Index {
        trace!("rotate: right child, left parent");
        self.rotate(node, Direction::Left);
        self.rotate(parent, Direction::Right);
        self.fix_colors(child, parent)
    }

    /// Paints the new local root black and the node it displaced red.
    fn fix_colors(&mut self, top: Index, demoted: Index) -> Index {
        self.node_mut(top).color = Color::Black;
        self.node_mut(demoted).color = Color::Red;
        debug_assert!(self.red_child(demoted).is_none(), "demoted node kept a red child");
        top
    }

    /// Sinks `pivot` towards `dir`; its child on the other side takes its
    /// place (a left rotation for `Direction::Left`). Returns the risen node.
    fn rotate(&mut self, pivot: Index, dir: Direction) -> Index {
        let Some(heir) = self.node(pivot).child(dir.opposite()) else {
            unreachable!("rotation needs a child on the rising side");
        };
        let inner = self.node(heir).child(dir);
        let parent = self.node(pivot).parent;

        // the inner subtree crosses over to the pivot
        self.node_mut(pivot).set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        self.node_mut(heir).parent = parent;
        match parent {
            Some(parent) => {
                let side = self.side_of(parent, pivot);
                self.node_mut(parent).set_child(side, Some(heir));
            }
            None => self.root = Some(heir),
        }

        self.node_mut(heir).set_child(dir, Some(pivot));
        self.node_mut(pivot).parent = Some(heir);
        heir
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Inserts `value`, rebalancing on the way back up.
    ///
    /// Returns `true` if a new node was created. Equal elements are handled
    /// according to the tree's [`DuplicatePolicy`].
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool {
        let Some(root) = self.root else {
            let index = self.arena.insert(Node::new(value, None));
            self.node_mut(index).color = Color::Black;
            self.root = Some(index);
            debug!("planted root");
            return true;
        };

        let mut current = root;
        let side = loop {
            let side = match value.cmp(&self.node(current).value) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => match self.policy {
                    DuplicatePolicy::Reject => {
                        trace!("duplicate rejected");
                        return false;
                    }
                    DuplicatePolicy::Replace => {
                        trace!("duplicate replaced in place");
                        self.node_mut(current).value = value;
                        return false;
                    }
                    DuplicatePolicy::Allow => Direction::Right,
                },
            };
            match self.node(current).child(side) {
                Some(next) => current = next,
                None => break side,
            }
        };

        let index = self.arena.insert(Node::new(value, Some(current)));
        self.node_mut(current).set_child(side, Some(index));

        self.check(current);
        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
        true
    }

    #[instrument(level = "trace", skip_all)]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).map(|index| &self.node(index).value)
    }

    fn find(&self, value: &T) -> Option<Index> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = self.node(index);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tree_of(values: &[i32]) -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    fn shape(tree: &RedBlackTree<i32>) -> (i32, Color, Option<i32>, Option<i32>) {
        let root = tree.root().expect("tree has a root");
        (
            *root.value(),
            root.color(),
            root.left().map(|n| *n.value()),
            root.right().map(|n| *n.value()),
        )
    }

    #[rstest]
    #[case::left_child_left_parent(&[30, 20, 10])]
    #[case::right_child_left_parent(&[30, 10, 20])]
    #[case::right_child_right_parent(&[10, 20, 30])]
    #[case::left_child_right_parent(&[10, 30, 20])]
    fn test_three_node_rotations_balance(#[case] values: &[i32]) {
        let tree = tree_of(values);

        assert_eq!(shape(&tree), (20, Color::Black, Some(10), Some(30)));
        let root = tree.root().unwrap();
        assert!(root.left().unwrap().is_red());
        assert!(root.right().unwrap().is_red());
        assert_eq!(*root.left().unwrap().parent().unwrap().value(), 20);
        assert_eq!(*root.right().unwrap().parent().unwrap().value(), 20);
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_red_uncle_recolors_without_rotation() {
        let tree = tree_of(&[20, 10, 30, 5]);

        assert_eq!(shape(&tree), (20, Color::Black, Some(10), Some(30)));
        let root = tree.root().unwrap();
        assert!(root.left().unwrap().is_black());
        assert!(root.right().unwrap().is_black());
        assert!(root.left().unwrap().left().unwrap().is_red());
    }

    #[test]
    fn test_rotation_moves_inner_subtree() {
        // inserting 8 recolors up to 4, then rotates left at the root;
        // 4's old left child 3 crosses over to 2
        let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let root = tree.root().unwrap();

        assert_eq!(*root.value(), 4);
        let left = root.left().unwrap();
        assert_eq!(*left.value(), 2);
        assert!(left.is_red());
        let moved = left.right().unwrap();
        assert_eq!(*moved.value(), 3);
        assert_eq!(*moved.parent().unwrap().value(), 2);
        assert_eq!(*root.right().unwrap().value(), 6);
        assert_eq!(tree.validate(), Ok(2));
    }

    #[test]
    fn test_rotate_at_root_updates_root_index() {
        let mut tree = tree_of(&[1, 2]);
        let old_root = tree.root_index().unwrap();

        let risen = tree.rotate(old_root, Direction::Left);

        assert_eq!(tree.root_index(), Some(risen));
        assert_eq!(tree.node(risen).value, 2);
        assert_eq!(tree.node(risen).left, Some(old_root));
        assert_eq!(tree.node(old_root).parent, Some(risen));
        assert_eq!(tree.node(old_root).right, None);
    }

    #[test]
    fn test_side_of_uses_identity() {
        let mut tree = RedBlackTree::with_policy(DuplicatePolicy::Allow);
        tree.insert(5);
        tree.insert(5);
        let root = tree.root_index().unwrap();
        let child = tree.node(root).right.unwrap();

        assert_eq!(tree.side_of(root, child), Direction::Right);
        assert_eq!(tree.sibling(child), None);
    }

    #[test]
    fn test_insert_reports_new_nodes() {
        let mut tree = RedBlackTree::new();
        assert!(tree.insert(3));
        assert!(tree.insert(1));
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_min_max_on_empty_tree() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.min(), Err(TreeError::EmptyTree("minimum")));
        assert_eq!(tree.max(), Err(TreeError::EmptyTree("maximum")));
    }

    #[test]
    fn test_height_of_small_trees() {
        assert_eq!(tree_of(&[]).height(), 0);
        assert_eq!(tree_of(&[1]).height(), 1);
        assert_eq!(tree_of(&[1, 2, 3]).height(), 2);
    }

    #[test]
    fn test_debug_lists_values_in_order() {
        let tree = tree_of(&[3, 1, 2]);
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }
}
