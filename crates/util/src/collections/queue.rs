use crate::{
    collections::{list, LinkedList},
    error::{Error, Result},
};

/// FIFO adapter over [LinkedList].
///
/// Enqueue appends at the end of the chain and therefore costs O(n); dequeue takes the head
/// in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
    inner: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            inner: LinkedList::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.inner.insert_end(value);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.inner.pop_front().ok_or(Error::EmptyCollection)
    }

    pub fn front(&self) -> Result<&T> {
        self.inner.front().ok_or(Error::EmptyCollection)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Front to back.
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.inner.iter()
    }
}
