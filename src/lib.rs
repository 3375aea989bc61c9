//! An ordered map backed by a left-leaning red-black tree.
//!
//! A left-leaning red-black tree encodes a 2-3 tree as a binary search tree whose links are
//! colored red or black. Red links glue two binary nodes into one logical 3-node and always lean
//! left, so every insertion and removal is repaired with only three local rewrites: rotating left,
//! rotating right, and flipping colors.
//!
//! # Examples
//!
//! ```
//! use llrb_map::llrb::LlrbMap;
//!
//! let mut map = LlrbMap::new();
//! for key in 1..=7 {
//!     map.insert(key, key * 10);
//! }
//!
//! assert_eq!(map.get(&4), Some(&40));
//! assert_eq!(
//!     map.level_order().map(|(key, _, _)| *key).collect::<Vec<u32>>(),
//!     vec![4, 2, 6, 1, 3, 5, 7],
//! );
//! assert!(map.validate().is_ok());
//! ```

mod entry;
pub mod error;
pub mod llrb;
pub mod ordered_tree;
pub mod queue;
