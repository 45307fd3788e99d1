use std::slice::Iter;

use tracing::trace;

use crate::error::{Result, StackError};
use crate::stack::StackBackend;

/// Growable stack body. Bounded only by memory.
pub struct VecStack<T>(Vec<T>);

impl<T> VecStack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn top(&self) -> Result<&T> {
        self.0.last().ok_or_else(underflow)
    }

    pub fn push(&mut self, elem: T) {
        self.0.push(elem)
    }

    pub fn pop(&mut self) -> Result<T> {
        self.0.pop().ok_or_else(underflow)
    }

    /// Bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

fn underflow() -> StackError {
    trace!(backend = "vector", "rejected access to empty stack");
    StackError::Underflow
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackBackend<T> for VecStack<T> {
    fn push(&mut self, elem: T) -> Result<()> {
        VecStack::push(self, elem);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        VecStack::pop(self)
    }

    fn top(&self) -> Result<&T> {
        VecStack::top(self)
    }

    fn len(&self) -> usize {
        VecStack::len(self)
    }

    fn is_empty(&self) -> bool {
        VecStack::is_empty(self)
    }
}
