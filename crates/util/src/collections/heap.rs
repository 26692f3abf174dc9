use crate::error::{Error, Result};

/// Fixed-capacity binary min-heap stored in an array.
///
/// The parent of slot `i` is `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`. The
/// storage never grows: inserting into a full heap is rejected and leaves it unchanged.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    inner: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MinHeap<T> {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, "heap is full, insert rejected");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.inner.push(value);
        self.sift_up(self.inner.len() - 1);
        Ok(())
    }

    /// Remove the smallest element. The last slot moves into the root and sinks.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.inner.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let min = self.inner.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    pub fn get_min(&self) -> Result<&T> {
        self.inner.first().ok_or(Error::EmptyCollection)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Elements in storage (level) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.inner[parent] <= self.inner[index] {
                break;
            }
            self.inner.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.inner.len();
        loop {
            let (left, right) = (2 * index + 1, 2 * index + 2);
            let mut smallest = index;
            if left < len && self.inner[left] < self.inner[smallest] {
                smallest = left;
            }
            if right < len && self.inner[right] < self.inner[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.inner.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
