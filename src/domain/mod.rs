//! Domain layer: the tree, its nodes and the balancing rules
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod iter;
pub mod node;
mod validate;

pub use arena::RedBlackTree;
pub use iter::Iter;
pub use node::{Color, Direction, NodeRef};
