use crate::error::Result;
use crate::stack::{ArrayStack, VecStack};

/// Storage body behind a stack facade.
///
/// Every implementation must give the same observable results for any
/// sequence of calls that neither underflows nor overflows.
pub trait StackBackend<T> {
    /// Pushes `elem` as the new top.
    fn push(&mut self, elem: T) -> Result<()>;

    /// Removes and returns the top.
    fn pop(&mut self) -> Result<T>;

    /// Borrows the top without removing it.
    fn top(&self) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, B: StackBackend<T> + ?Sized> StackBackend<T> for Box<B> {
    fn push(&mut self, elem: T) -> Result<()> {
        (**self).push(elem)
    }

    fn pop(&mut self) -> Result<T> {
        (**self).pop()
    }

    fn top(&self) -> Result<&T> {
        (**self).top()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// Runtime choice of storage body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Fixed block of `capacity` slots.
    Array { capacity: usize },
    /// Growable vector.
    Vector,
}

impl BackendKind {
    pub fn build<T: 'static>(self) -> Box<dyn StackBackend<T>> {
        match self {
            BackendKind::Array { capacity } => Box::new(ArrayStack::with_capacity(capacity)),
            BackendKind::Vector => Box::new(VecStack::new()),
        }
    }
}
