use crate::error::{Error, Result};
use std::ops::{Deref, DerefMut};

/// Contiguous growable storage holding `len` live elements from index 0.
///
/// `len <= capacity` always holds. When an append finds the storage full the capacity is
/// doubled, so appends are amortized O(1). Indexing with `[]` goes through the slice and is
/// not range-checked beyond the slice's own panic; [DynamicArray::get] is the checked form.
pub struct DynamicArray<T> {
    inner: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append to the end, doubling the capacity first if needed.
    pub fn add(&mut self, value: T) {
        if self.inner.len() == self.capacity {
            self.grow();
        }
        self.inner.push(value);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.inner.get(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.inner.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, value))
    }

    /// Remove the element at `index`, shifting everything after it left by one.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.inner.remove(index))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Drop every element. The capacity is retained.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Exchange storage, capacity and length with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn grow(&mut self) {
        let capacity = (self.capacity * 2).max(1);
        self.inner.reserve_exact(capacity - self.inner.len());
        self.capacity = capacity;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut inner = Vec::with_capacity(self.capacity);
        inner.extend_from_slice(&self.inner);
        Self {
            inner,
            capacity: self.capacity,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(value: Vec<T>) -> Self {
        let capacity = value.capacity();
        Self {
            inner: value,
            capacity,
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}
