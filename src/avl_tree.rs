//! Height-balanced binary search tree (AVL)
//!
//! Every node caches the height of its subtree (an empty subtree has height
//! 0, a leaf height 1). After any structural change the heights on the path
//! back to the root are recomputed and each node is checked for
//! `|height(left) - height(right)| <= 1`. A violation is repaired with one of
//! four rotation cases:
//!
//! | balance | heavy child's balance | repair                          |
//! |---------|-----------------------|---------------------------------|
//! | > 1     | >= 0 (left-left)      | rotate right                    |
//! | > 1     | < 0 (left-right)      | rotate child left, then right   |
//! | < -1    | <= 0 (right-right)    | rotate left                     |
//! | < -1    | > 0 (right-left)      | rotate child right, then left   |
//!
//! Case selection looks at the heavy child rather than at the key that was
//! inserted or removed. After an insertion the heavy child is never perfectly
//! balanced, so this picks the same case as comparing the new key against the
//! child's key; after a deletion it also covers a heavy child with balance 0,
//! which only deletions produce.
//!
//! Children are exclusively owned (`Option<Box<Node>>`), so there are no
//! parent pointers, no shared subtrees and no cycles. Insert and delete
//! recurse down the tree, which is fine because the height is O(log n).
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `delete`  | O(log n)   |
//! | `search`  | O(log n)   |
//! | `height`  | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use classic_algos::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [20, 4, 15, 70, 50, 100, 10] {
//!     tree.insert(key);
//! }
//! assert!(tree.height() <= 5);
//! assert_eq!(tree.in_order_traversal(), vec![4, 10, 15, 20, 50, 70, 100]);
//!
//! tree.delete(&15);
//! assert!(!tree.search(&15));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::trace;

type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
    height: usize,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_of<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Rotate `y` clockwise; its left child becomes the subtree root
fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    trace!("rotated right");
    x
}

/// Rotate `x` counterclockwise; its right child becomes the subtree root
fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    trace!("rotated left");
    y
}

/// Recompute the height of `node` and repair a balance violation at it
fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if balance_of(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if balance_of(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn insert_node<K: Ord>(link: Link<K>, key: K, inserted: &mut bool) -> Box<Node<K>> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *inserted = true;
            return Box::new(Node::leaf(key));
        }
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), key, inserted)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), key, inserted)),
        // Duplicate keys are ignored
        Ordering::Equal => return node,
    }

    rebalance(node)
}

fn delete_node<K, Q>(link: Link<K>, key: &Q, removed: &mut bool) -> Link<K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = link?;

    match key.cmp(node.key.borrow()) {
        Ordering::Less => node.left = delete_node(node.left.take(), key, removed),
        Ordering::Greater => node.right = delete_node(node.right.take(), key, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => return child,
                (left, Some(right)) => {
                    // Two children: the in-order successor takes this position
                    let (rest, successor) = take_min(right);
                    node.key = successor;
                    node.left = left;
                    node.right = rest;
                }
            }
        }
    }

    Some(rebalance(node))
}

/// Detach the leftmost node of a subtree, rebalancing on the way back up
fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// An ordered set of unique keys kept height-balanced
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord> AvlTree<K> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key`, returning false if it was already present
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        self.root = Some(insert_node(self.root.take(), key, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `key`, returning true if it was present
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut removed = false;
        self.root = delete_node(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if `key` is in the tree
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Checks the cached heights, the balance bound and the key order of every node
    pub fn is_balanced(&self) -> bool {
        fn check<K: Ord>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            if lower.is_some_and(|lo| node.key <= *lo) || upper.is_some_and(|hi| node.key >= *hi) {
                return None;
            }
            let left = check(&node.left, lower, Some(&node.key))?;
            let right = check(&node.right, Some(&node.key), upper)?;
            let expected = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == expected).then_some(expected)
        }

        check(&self.root, None, None).is_some()
    }
}

impl<K> AvlTree<K> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Iterates over the keys in ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Returns the keys in ascending order
    pub fn in_order_traversal(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// In-order iterator over an [`AvlTree`]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(!tree.search(&1));
        assert!(tree.in_order_traversal().is_empty());
        assert_eq!(tree.min(), None);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_single_rotations() {
        // Ascending keys force left rotations
        let mut tree = AvlTree::new();
        for key in [1, 2, 3] {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(2));

        // Descending keys force right rotations
        let mut tree = AvlTree::new();
        for key in [3, 2, 1] {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(2));
    }

    #[test]
    fn test_double_rotations() {
        // left-right
        let tree: AvlTree<i32> = [30, 10, 20].into_iter().collect();
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(20));
        assert!(tree.is_balanced());

        // right-left
        let tree: AvlTree<i32> = [10, 30, 20].into_iter().collect();
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(20));
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_double_rotations_with_subtrees() {
        fn shape(tree: &AvlTree<i32>) -> (Option<i32>, Option<i32>, Option<i32>) {
            let root = tree.root.as_deref();
            (
                root.map(|n| n.key),
                root.and_then(|n| n.left.as_deref()).map(|n| n.key),
                root.and_then(|n| n.right.as_deref()).map(|n| n.key),
            )
        }

        // 25 lands right of the left child 20, whose balance turns negative
        let tree: AvlTree<i32> = [50, 20, 70, 10, 30, 25].into_iter().collect();
        assert_eq!(shape(&tree), (Some(30), Some(20), Some(50)));
        assert!(tree.is_balanced());

        // 75 lands left of the right child 80, whose balance turns positive
        let tree: AvlTree<i32> = [50, 30, 80, 90, 70, 75].into_iter().collect();
        assert_eq!(shape(&tree), (Some(70), Some(50), Some(80)));
        assert!(tree.is_balanced());
        assert_eq!(tree.in_order_traversal(), vec![30, 50, 70, 75, 80, 90]);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(5));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.in_order_traversal(), vec![5]);
    }

    #[test]
    fn test_known_sequence_height() {
        let tree: AvlTree<i32> = [20, 4, 15, 70, 50, 100, 10].into_iter().collect();
        assert!(tree.height() <= 5);
        assert!(tree.is_balanced());
        assert_eq!(tree.in_order_traversal(), vec![4, 10, 15, 20, 50, 70, 100]);
    }

    #[test]
    fn test_delete_cases() {
        let mut tree: AvlTree<i32> = (1..=15).collect();

        // leaf
        assert!(tree.delete(&1));
        // node with two children
        assert!(tree.delete(&8));
        // node that now has one child
        assert!(tree.delete(&2));
        // missing key
        assert!(!tree.delete(&42));

        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 12);
        assert_eq!(
            tree.in_order_traversal(),
            vec![3, 4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_delete_with_balanced_pivot_child() {
        // Removing 4 then 3 leaves the root right-heavy over a right child of balance 0
        let mut tree: AvlTree<i32> = [5, 3, 8, 4, 7, 9].into_iter().collect();
        assert!(tree.delete(&4));
        assert!(tree.delete(&3));
        assert!(tree.is_balanced());
        assert_eq!(tree.root.as_ref().map(|n| n.key), Some(8));
        assert_eq!(tree.in_order_traversal(), vec![5, 7, 8, 9]);
    }

    #[test]
    fn test_delete_until_empty() {
        let mut tree: AvlTree<i32> = (0..64).collect();
        for key in (0..64).rev().step_by(3) {
            assert!(tree.delete(&key));
            assert!(tree.is_balanced());
        }
        for key in 0..64 {
            tree.delete(&key);
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut tree = AvlTree::new();
        tree.insert(String::from("pear"));
        tree.insert(String::from("apple"));
        assert!(tree.search("apple"));
        assert!(tree.delete("pear"));
        assert_eq!(tree.max().map(String::as_str), Some("apple"));
    }
}
