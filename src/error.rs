//! Errors reported when a tree fails its structural checks.

use std::result;
use thiserror::Error;

/// A violation of one of the left-leaning red-black tree invariants.
///
/// These are only produced by `validate`. A tree built exclusively through the public API never
/// reports one, so seeing any of them means the rebalancing logic has a defect.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The root node is colored red.
    #[error("root node is red")]
    RedRoot,

    /// A node has a red right child.
    #[error("red link leans right at depth {depth}")]
    RightLeaningRed { depth: usize },

    /// A red node has a red child.
    #[error("consecutive red links at depth {depth}")]
    ConsecutiveReds { depth: usize },

    /// Two sibling subtrees have a different number of black links.
    #[error("unbalanced black links: left has {left}, right has {right}")]
    UnbalancedBlacks { left: usize, right: usize },

    /// A key is on the wrong side of its parent.
    #[error("keys out of order at depth {depth}")]
    OutOfOrder { depth: usize },

    /// The number of reachable nodes differs from the recorded length.
    #[error("tree holds {actual} nodes but its length is {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Convenience alias used by the structural checks.
pub type Result<T> = result::Result<T, Error>;
