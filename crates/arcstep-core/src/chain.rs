#![forbid(unsafe_code)]

//! Fixed, doubly linked chain of step nodes.
//!
//! Nodes live in one arena and link to each other by index. The topology is
//! built once and never changes: node `i` links forward to `i + 1` and back
//! to `i - 1`, with the first node missing `prev` and the last missing `next`.

use crate::scale::NODES;
use crate::state::NodeState;

/// One step position in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    index: usize,
    next: Option<usize>,
    prev: Option<usize>,
    /// Animation state owned by this node.
    pub state: NodeState,
}

impl Node {
    /// Position in the chain, `0..NODES`.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Index of the following node, if any.
    #[inline]
    pub const fn next(&self) -> Option<usize> {
        self.next
    }

    /// Index of the preceding node, if any.
    #[inline]
    pub const fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Neighbor in traversal direction `dir`: forward for `1`, backward otherwise.
    #[inline]
    pub const fn neighbor(&self, dir: i32) -> Option<usize> {
        if dir == 1 { self.next } else { self.prev }
    }
}

/// Arena holding the [`NODES`] chained nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    /// Build the chain with every node idle.
    pub fn new() -> Self {
        let nodes = (0..NODES)
            .map(|index| Node {
                index,
                next: (index + 1 < NODES).then_some(index + 1),
                prev: index.checked_sub(1),
                state: NodeState::new(),
            })
            .collect();
        Self { nodes }
    }

    /// Index of the head node.
    #[inline]
    pub const fn head(&self) -> usize {
        0
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; the chain is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NODES`. Indices only come from the chain's own links.
    #[inline]
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Mutable node at `index`.
    #[inline]
    pub fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Neighbor of `index` in direction `dir`.
    #[inline]
    pub fn neighbor(&self, index: usize, dir: i32) -> Option<usize> {
        self.nodes.get(index).and_then(|node| node.neighbor(dir))
    }

    /// Walk the chain front to back by following `next` links.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: Some(self.head()),
        }
    }
}

impl Default for NodeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a NodeChain {
    type Item = &'a Node;
    type IntoIter = ChainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`NodeChain`].
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    chain: &'a NodeChain,
    cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fixed_length() {
        let chain = NodeChain::new();
        assert_eq!(chain.len(), NODES);
        assert!(!chain.is_empty());
    }

    #[test]
    fn links_are_symmetric() {
        let chain = NodeChain::new();
        for node in &chain {
            if let Some(next) = node.next() {
                assert_eq!(chain.node(next).prev(), Some(node.index()));
            }
            if let Some(prev) = node.prev() {
                assert_eq!(chain.node(prev).next(), Some(node.index()));
            }
        }
    }

    #[test]
    fn ends_are_one_sided() {
        let chain = NodeChain::new();
        assert_eq!(chain.node(0).prev(), None);
        assert_eq!(chain.node(0).next(), Some(1));
        assert_eq!(chain.node(NODES - 1).next(), None);
        assert_eq!(chain.node(NODES - 1).prev(), Some(NODES - 2));
    }

    #[test]
    fn neighbor_follows_direction() {
        let chain = NodeChain::new();
        assert_eq!(chain.neighbor(2, 1), Some(3));
        assert_eq!(chain.neighbor(2, -1), Some(1));
        assert_eq!(chain.neighbor(0, -1), None);
        assert_eq!(chain.neighbor(NODES - 1, 1), None);
        assert_eq!(chain.neighbor(NODES, 1), None);
    }

    #[test]
    fn iter_is_front_to_back() {
        let chain = NodeChain::new();
        let order: Vec<usize> = chain.iter().map(Node::index).collect();
        assert_eq!(order, (0..NODES).collect::<Vec<_>>());
    }

    #[test]
    fn nodes_start_idle() {
        let chain = NodeChain::new();
        assert!(chain.iter().all(|n| !n.state.is_animating()));
    }
}
