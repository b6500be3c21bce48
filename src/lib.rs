//! Arena-backed red-black tree.
//!
//! [`RedBlackTree`] is an ordered set over any `T: Ord`. Insertion rebalances
//! with recoloring and the four rotation cases, so lookups, `min`/`max` and
//! in-order iteration stay logarithmic even for sorted input.
//!
//! ```
//! use redblack::{RedBlackTree, TreeError};
//!
//! let mut tree = RedBlackTree::new();
//! for value in [10, 25, 7] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.contains(&25));
//! assert!(!tree.contains(&2));
//! assert_eq!(tree.min(), Ok(&7));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![7, 10, 25]);
//!
//! let empty: RedBlackTree<i32> = RedBlackTree::new();
//! assert_eq!(empty.max(), Err(TreeError::EmptyTree("maximum")));
//! ```
//!
//! The tree does no locking. Shared references may be read from many threads
//! at once; insertion needs `&mut`, so concurrent writers have to go through
//! a lock such as `std::sync::RwLock`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod tree_traits;
pub mod util;

pub use config::DuplicatePolicy;
pub use domain::{Color, Direction, Iter, NodeRef, RedBlackTree};
pub use errors::{TreeError, TreeResult};
