// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! An in-memory adaptive radix tree: an ordered associative index keyed by byte strings.
//!
//! [`AdaptiveRadixTree`] is a radix trie whose internal nodes adapt their representation to
//! their fan-out, switching between four capacity tiers (4, 16, 48 and 256 child slots) as
//! children are added and removed. Runs of key bytes shared by every key under a node are
//! factored out into a compressed prefix, so sparse key spaces stay shallow. Point operations
//! run in `O(key length)`, and traversal yields stored keys in lexicographic order, which makes
//! the tree suitable as the ordered index of a larger data engine whose working set fits in
//! RAM.
//!
//! # Key normalization
//!
//! Keys are arbitrary byte strings. Internally each key is normalized by appending a `0x00`
//! terminator unless the key already ends with one; the terminator keeps every stored key
//! prefix-free so that ordered traversal works. Two consequences are part of the contract:
//!
//! - A key ending in `0x00` normalizes to the same bytes as the key without that terminator,
//!   so `b"k"` and `b"k\0"` name the same entry (and the empty key names the same entry as
//!   `b"\0"`).
//! - Keys with an interior `0x00` byte are **not supported**: the first `0x00` acts as an
//!   effective terminator and such keys degrade to truncation collisions. No operation panics
//!   on them, but lookups and ordering are only meaningful for interior-`0x00`-free keys.
//!
//! # Example
//!
//! ```
//! use art::AdaptiveRadixTree;
//!
//! let mut tree = AdaptiveRadixTree::new();
//! assert_eq!(tree.insert(b"api.routes", 1), None);
//! assert_eq!(tree.insert(b"api.routes", 2), Some(1));
//! assert_eq!(tree.get(b"api.routes"), Some(&2));
//!
//! tree.insert(b"api.health", 3);
//! let keys: Vec<&[u8]> = tree.entries().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec![&b"api.health"[..], &b"api.routes"[..]]);
//!
//! assert_eq!(tree.remove(b"api.health"), Some(3));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! The tree is single-threaded and performs no synchronization; callers that share one across
//! threads wrap it in a lock of their choosing.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod iterator;
pub mod node_type;
pub mod tree;


pub use iterator::{Entries, NodeIter};
pub use node_type::{InternalNode, LeafNode, Node, NodeKind, MAX_PREFIX_LEN};
pub use tree::AdaptiveRadixTree;
