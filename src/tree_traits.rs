use std::fmt::Display;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeRef, RedBlackTree};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

// Labels read `value [R]` / `value [B]`; children carry an `L:` or `R:` prefix
// since a lone child would otherwise not show its side.
impl<T: Display> TreeNodeConvert for RedBlackTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => build_tree(root, ""),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

fn build_tree<T: Display>(node: NodeRef<'_, T>, prefix: &str) -> Tree<String> {
    let color = if node.is_red() { "R" } else { "B" };
    let leaves = [(node.left(), "L: "), (node.right(), "R: ")]
        .into_iter()
        .filter_map(|(child, side)| child.map(|child| build_tree(child, side)));

    Tree::new(format!("{}{} [{}]", prefix, node.value(), color)).with_leaves(leaves)
}
