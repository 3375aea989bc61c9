//! Self-balancing binary search tree that encodes a 2-3 tree with red links that always lean
//! left. Insertions and removals are repaired bottom-up with rotations and color flips.

mod map;
mod node;
mod tree;
mod walk;

pub use self::map::{LlrbMap, LlrbMapIntoIter, LlrbMapIter, LlrbMapIterMut};
pub use self::node::Color;
pub use self::tree::Stats;
pub use self::walk::{LevelOrder, RightSpine};
