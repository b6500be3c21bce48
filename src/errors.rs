use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Cannot determine {0} value of an empty tree")]
    EmptyTree(&'static str),

    #[error("Root node is red")]
    RedRoot,

    #[error("Red node at in-order position {position} has a red child")]
    RedViolation { position: usize },

    #[error("Black height mismatch below in-order position {position}: expected {expected}, found {found}")]
    BlackHeightMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("Parent link of node at in-order position {position} does not point back to its parent")]
    BrokenParentLink { position: usize },

    #[error("Values out of order at in-order position {position}")]
    OrderViolation { position: usize },

    #[error("Node count mismatch: tree reports {reported}, {reachable} reachable from root")]
    CountMismatch { reported: usize, reachable: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
