use std::cmp::Ordering;

/// Unbalanced binary search tree without duplicates.
///
/// Every node owns its two subtrees. Inserting a key that is already present does nothing.
/// There is no removal.
pub struct Bst<T> {
    root: Tree<T>,
    len: usize,
}

type Tree<T> = Option<Box<TreeNode<T>>>;

struct TreeNode<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,
}

/// In-order iterator. Each call to [Bst::iter] starts a fresh walk.
pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<T> Bst<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        let mut pending = Vec::from_iter(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: vec![] };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T: Ord> Bst<T> {
    /// Returns false when `value` was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, value: &T) -> bool {
        search(self.root.as_deref(), value)
    }

    pub fn search(&self, value: &T) -> bool {
        self.contains(value)
    }
}

fn insert<T: Ord>(tree: &mut Tree<T>, value: T) -> bool {
    let mut cursor = tree;
    while let Some(node) = cursor {
        cursor = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *cursor = Some(Box::new(TreeNode {
        value,
        left: None,
        right: None,
    }));
    true
}

fn search<T: Ord>(mut node: Option<&TreeNode<T>>, value: &T) -> bool {
    while let Some(n) = node {
        node = match value.cmp(&n.value) {
            Ordering::Less => n.left.as_deref(),
            Ordering::Greater => n.right.as_deref(),
            Ordering::Equal => return true,
        };
    }
    false
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Bst<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Drop for Bst<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for Bst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bst<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Bst;

    #[test]
    fn in_order_is_ascending() {
        let tree: Bst<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        let walk = tree.iter().copied().collect::<Vec<_>>();
        assert_eq!(walk, vec![20, 30, 40, 50, 60, 70, 80]);
        // Restartable: a second walk sees the same sequence.
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), walk);
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = Bst::new();
        assert!(tree.insert("m"));
        assert!(tree.insert("c"));
        assert!(!tree.insert("m"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().count(), 2);
    }

    #[test]
    fn search() {
        let tree: Bst<_> = (0..20).map(|n| (n * 7) % 20).collect();
        assert!((0..20).all(|n| tree.contains(&n)));
        assert!(!tree.search(&20));
        assert!(!tree.contains(&-1));
        assert!(Bst::<u8>::new().iter().next().is_none());
    }

    #[test]
    fn clear_releases_a_degenerate_chain() {
        let mut tree: Bst<_> = (0..20_000).collect();
        assert_eq!(tree.len(), 20_000);
        assert!(tree.contains(&19_999));
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.min(), None);
    }

    #[test]
    fn sorted_chain_on_a_small_stack() {
        // A chain of depth 10,000 needs far more than 128 KiB if a walk recurses per level.
        let walk = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let mut tree: Bst<u32> = (0..10_000).rev().collect();
                assert!(!tree.insert(0));
                assert!(tree.insert(10_000));
                assert!(tree.search(&0) && tree.contains(&10_000) && !tree.contains(&10_001));
                assert_eq!(tree.max(), Some(&10_000));
                tree.len()
            })
            .unwrap();
        assert_eq!(walk.join().unwrap(), 10_001);
    }
}
