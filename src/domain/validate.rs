//! Structural self-check of a tree

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use super::arena::RedBlackTree;
use crate::errors::{TreeError, TreeResult};

impl<T: Ord> RedBlackTree<T> {
    /// Checks every red-black and linkage rule, returning the black height.
    ///
    /// The black height counts black nodes from the root down to any absent
    /// child; an empty tree has black height 0.
    ///
    /// # Errors
    ///
    /// The first violation found: a red root, a red node with a red child,
    /// unequal black heights, a parent link that does not mirror its child
    /// link, a node count that disagrees with the reachable nodes, or
    /// elements out of order.
    #[instrument(level = "debug", skip(self))]
    pub fn validate(&self) -> TreeResult<usize> {
        if self.is_red(self.root_index()) {
            return Err(TreeError::RedRoot);
        }

        let mut reachable = 0;
        let black_height = self.walk(self.root_index(), None, &mut reachable)?;

        if reachable != self.len() {
            return Err(TreeError::CountMismatch {
                reported: self.len(),
                reachable,
            });
        }

        let allow_equal = self.policy().allows_duplicates();
        let out_of_order = self
            .iter()
            .tuple_windows()
            .position(|(a, b)| if allow_equal { a > b } else { a >= b });
        if let Some(position) = out_of_order {
            return Err(TreeError::OrderViolation {
                position: position + 1,
            });
        }

        Ok(black_height)
    }

    /// `next_position` is the in-order position of the next node visited.
    fn walk(&self, index: Option<Index>, parent: Option<Index>, next_position: &mut usize) -> TreeResult<usize> {
        let Some(index) = index else {
            return Ok(0);
        };
        let node = self.node(index);

        let left_height = self.walk(node.left, Some(index), next_position)?;

        let position = *next_position;
        *next_position += 1;
        if node.parent != parent {
            return Err(TreeError::BrokenParentLink { position });
        }
        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(TreeError::RedViolation { position });
        }

        let right_height = self.walk(node.right, Some(index), next_position)?;
        if left_height != right_height {
            return Err(TreeError::BlackHeightMismatch {
                position,
                expected: left_height,
                found: right_height,
            });
        }

        Ok(left_height + usize::from(!node.is_red()))
    }
}
