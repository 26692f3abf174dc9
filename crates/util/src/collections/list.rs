use crate::error::{Error, Result};

/// Singly linked list that owns every node in its chain.
///
/// No tail pointer is kept: [LinkedList::insert_front] is O(1) while
/// [LinkedList::insert_end] walks the whole chain.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn insert_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn insert_end(&mut self, value: T) {
        let len = self.len;
        *self.link_mut(len) = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.iter().nth(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.iter_mut()
            .nth(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// The first element that `same` pairs with `value`, or `value` itself appended at the end
    /// when there is none. `same` is called as `same(existing, &value)`.
    pub fn find_or_insert_end(
        &mut self,
        value: T,
        mut same: impl FnMut(&T, &T) -> bool,
    ) -> &mut T {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !same(&node.value, &value)) {
            let Some(node) = cursor else { break };
            cursor = &mut node.next;
        }
        if cursor.is_none() {
            self.len += 1;
        }
        &mut cursor.get_or_insert_with(|| Box::new(Node { value, next: None })).value
    }

    /// Unlink and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let link = self.link_mut(index);
        let mut node = link.take().ok_or(Error::OutOfRange { index, len })?;
        *link = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Release every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    // The link that holds the node at `index`, or the trailing `None` when `index == len`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Remove the first element equal to `value`. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.position(|v| v == value) else {
            return false;
        };
        self.remove_at(index).is_ok()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut tail = self.link_mut(len);
        let mut added = 0;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        Some(&mut node.value)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedList;
    use crate::Error;

    fn values<T: Copy>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn front_and_end_insertion() {
        let mut list = LinkedList::new();
        list.insert_end(2);
        list.insert_front(1);
        list.insert_end(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
    }

    #[test]
    fn remove_first_match_only() {
        let mut list: LinkedList<_> = [4, 7, 4, 9].into_iter().collect();
        assert!(list.remove(&4));
        assert_eq!(values(&list), vec![7, 4, 9]);
        assert!(list.remove(&9));
        assert!(!list.remove(&100));
        assert_eq!(values(&list), vec![7, 4]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_at_bounds() {
        let mut list: LinkedList<_> = "abc".chars().collect();
        assert_eq!(list.remove_at(1), Ok('b'));
        assert_eq!(list.remove_at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(list.remove_at(0), Ok('a'));
        assert_eq!(list.remove_at(0), Ok('c'));
        assert!(list.is_empty());
        assert_eq!(list.remove_at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn indexed_access() {
        let mut list: LinkedList<_> = (0..4).collect();
        assert_eq!(list.get(3), Ok(&3));
        assert!(list.get(4).is_err());
        *list.get_mut(0).unwrap() = 10;
        assert_eq!(list.front(), Some(&10));
    }

    #[test]
    fn clone_is_deep() {
        let original: LinkedList<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.get_mut(0).unwrap().push('!');
        copy.insert_end("z".into());
        assert_eq!(original.get(0).map(String::as_str), Ok("x"));
        assert_eq!(original.len(), 2);
        assert_ne!(copy, original);
    }

    #[test]
    fn extend_appends_after_existing() {
        let mut list: LinkedList<_> = (0..2).collect();
        list.extend(2..5);
        list.insert_end(5);
        assert_eq!(values(&list), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 6);
        assert_eq!(list.into_iter().count(), 6);
    }

    #[test]
    fn find_or_insert_end_reuses_or_appends() {
        let mut list: LinkedList<_> = [4, 8, 15].into_iter().collect();
        *list.find_or_insert_end(8, |a, b| a == b) += 1;
        assert_eq!(values(&list), vec![4, 9, 15]);
        assert_eq!(list.len(), 3);

        *list.find_or_insert_end(16, |a, b| a == b) += 7;
        assert_eq!(values(&list), vec![4, 9, 15, 23]);
        assert_eq!(list.len(), 4);

        let mut empty = LinkedList::new();
        assert_eq!(*empty.find_or_insert_end('x', |_, _| true), 'x');
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn clear_and_drop_long_chain() {
        let mut list: LinkedList<_> = (0..200_000).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        let long: LinkedList<_> = (0..200_000).collect();
        drop(long);
    }
}
