use crate::{
    collections::{list, LinkedList},
    error::{Error, Result},
};

/// LIFO adapter over [LinkedList]. Push and pop both work on the head in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    inner: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            inner: LinkedList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.inner.insert_front(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.inner.pop_front().ok_or(Error::EmptyCollection)
    }

    pub fn peek(&self) -> Result<&T> {
        self.inner.front().ok_or(Error::EmptyCollection)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.inner.front_mut().ok_or(Error::EmptyCollection)
    }

    pub fn top(&self) -> Result<&T> {
        self.peek()
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

    /// Top to bottom.
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.inner.iter()
    }
}
