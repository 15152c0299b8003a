// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! This module implements [`NodeIter`], a lazy pre-order traversal over an
//! [`AdaptiveRadixTree`](crate::AdaptiveRadixTree). The iterator yields every node, internal
//! and leaf, by performing a depth first walk on an explicit stack; each node is emitted before
//! its children, and children are visited in ascending key-byte order, so the leaf subsequence
//! arrives in lexicographic key order.

use alloc::vec::Vec;

use crate::node_type::Node;

/// `NodeVisitInfo` keeps track of the status of a node during the iteration process: whether
/// the node itself has been emitted yet, and which of its children to visit next.
#[derive(Debug)]
struct NodeVisitInfo<'a, V> {
    /// The node itself.
    node: &'a Node<V>,

    /// Whether the node has already been returned by `next`. Pushing a frame schedules the
    /// node for emission first, then its children.
    emitted: bool,

    /// The smallest key byte still to be considered when visiting children. Ranges over
    /// `0..=256`; 256 means every byte has been passed.
    next_child: u16,
}

impl<'a, V> NodeVisitInfo<'a, V> {
    fn new(node: &'a Node<V>) -> Self {
        Self {
            node,
            emitted: false,
            next_child: 0,
        }
    }
}

/// An iterator over all nodes of an [`AdaptiveRadixTree`](crate::AdaptiveRadixTree) in
/// pre-order. Obtained from [`AdaptiveRadixTree::iter`].
#[derive(Debug)]
pub struct NodeIter<'a, V> {
    /// The stack used for depth first traversal.
    stack: Vec<NodeVisitInfo<'a, V>>,
}

impl<'a, V> NodeIter<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>) -> Self {
        let stack = match root {
            Some(root) => alloc::vec![NodeVisitInfo::new(root)],
            None => Vec::new(),
        };
        Self { stack }
    }
}

impl<'a, V> Iterator for NodeIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let info = self.stack.last_mut()?;
            if !info.emitted {
                info.emitted = true;
                return Some(info.node);
            }
            let node = info.node;
            let cursor = info.next_child;
            let next_child = match node {
                Node::Leaf(_) => None,
                Node::Internal(inner) => inner.next_child_from(cursor),
            };
            match next_child {
                Some((byte, child)) => {
                    info.next_child = u16::from(byte) + 1;
                    self.stack.push(NodeVisitInfo::new(child));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// An iterator over the stored `(key, value)` entries of an
/// [`AdaptiveRadixTree`](crate::AdaptiveRadixTree), in lexicographic key order. Obtained from
/// [`AdaptiveRadixTree::entries`].
#[derive(Debug)]
pub struct Entries<'a, V> {
    inner: NodeIter<'a, V>,
}

impl<'a, V> Entries<'a, V> {
    pub(crate) fn new(inner: NodeIter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|node| node.entry())
    }
}
