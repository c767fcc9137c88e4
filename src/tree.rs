use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{CodecError, Result};
use crate::frequency::FrequencyMap;
use crate::Symbol;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(symbol: Symbol, weight: usize) -> Self {
        TreeNode::Leaf { symbol, weight }
    }

    pub fn merge(left: TreeNode, right: TreeNode) -> Self {
        TreeNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            TreeNode::Leaf { weight, .. } | TreeNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the lightest node first,
/// and the earliest inserted one among equal weights.
struct QueueEntry {
    sequence: usize,
    node: TreeNode,
}

impl QueueEntry {
    fn key(&self) -> (usize, usize) {
        (self.node.weight(), self.sequence)
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Builds a Huffman tree by repeatedly merging the two lightest nodes.
///
/// Symbols with a zero count never become leaves. A map with a single
/// symbol yields a bare leaf.
pub fn build_tree(frequencies: &FrequencyMap) -> Result<TreeNode> {
    let mut queue = frequencies
        .iter()
        .filter(|&(_, &weight)| weight > 0)
        .enumerate()
        .map(|(sequence, (&symbol, &weight))| QueueEntry {
            sequence,
            node: TreeNode::leaf(symbol, weight),
        })
        .collect::<BinaryHeap<_>>();

    let mut sequence = queue.len();
    loop {
        let first = match queue.pop() {
            None => return Err(CodecError::EmptyInput),
            Some(entry) => entry.node,
        };
        let second = match queue.pop() {
            None => return Ok(first),
            Some(entry) => entry.node,
        };

        queue.push(QueueEntry {
            sequence,
            node: TreeNode::merge(first, second),
        });
        sequence += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(pairs: &[(u8, usize)]) -> FrequencyMap {
        pairs.iter().map(|&(s, w)| (s as Symbol, w)).collect()
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            build_tree(&FrequencyMap::new()),
            Err(CodecError::EmptyInput)
        ));
        assert!(matches!(
            build_tree(&frequencies(&[(b'a', 0)])),
            Err(CodecError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_symbol() {
        let tree = build_tree(&frequencies(&[(b'x', 5)])).unwrap();
        assert_eq!(tree, TreeNode::leaf(b'x' as Symbol, 5));
    }

    #[test]
    fn test_two_symbols() {
        let tree = build_tree(&frequencies(&[(b'a', 3), (b'b', 1)])).unwrap();
        match tree {
            TreeNode::Internal {
                weight,
                left,
                right,
            } => {
                assert_eq!(weight, 4);
                assert_eq!(*left, TreeNode::leaf(b'b' as Symbol, 1));
                assert_eq!(*right, TreeNode::leaf(b'a' as Symbol, 3));
            }
            leaf => panic!("expected an internal node, got {leaf:?}"),
        }
    }

    #[test]
    fn test_root_weight_is_total() {
        let input = frequencies(&[
            (b'a', 45),
            (b'b', 13),
            (b'c', 12),
            (b'd', 16),
            (b'e', 9),
            (b'f', 5),
        ]);
        let tree = build_tree(&input).unwrap();
        assert_eq!(tree.weight(), 100);
        assert_eq!(tree.leaf_count(), 6);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_zero_weights_skipped() {
        let tree = build_tree(&frequencies(&[(b'a', 2), (b'b', 0), (b'c', 1)])).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.weight(), 3);
    }
}
