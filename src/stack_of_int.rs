use std::fmt;

use crate::error::Result;
use crate::stack::{BackendKind, StackBackend};

/// Storage body bound when the crate is built.
#[cfg(not(feature = "array-backend"))]
pub type DefaultBackend = crate::stack::VecStack<i32>;

/// Storage body bound when the crate is built.
#[cfg(feature = "array-backend")]
pub type DefaultBackend = crate::stack::ArrayStack<i32>;

/// Integer stack whose storage is hidden behind the interface.
///
/// Callers see only `push`, `pop`, `top` and `is_empty`; swapping `B` never
/// changes their code. Instances are not synchronized.
///
/// ```
/// use stack_of_int::{StackError, StackOfInt};
///
/// let mut stack = <StackOfInt>::new();
/// stack.push(1).unwrap();
/// assert_eq!(stack.top(), Ok(1));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(StackError::Underflow));
/// ```
pub struct StackOfInt<B: StackBackend<i32> = DefaultBackend> {
    cat: B,
}

impl<B: StackBackend<i32> + Default> StackOfInt<B> {
    pub fn new() -> Self {
        Self { cat: B::default() }
    }
}

impl StackOfInt<Box<dyn StackBackend<i32>>> {
    /// Binds the storage body at runtime.
    pub fn from_kind(kind: BackendKind) -> Self {
        Self { cat: kind.build() }
    }
}

impl<B: StackBackend<i32>> StackOfInt<B> {
    /// Fails with `Overflow` when a fixed-capacity body is full.
    pub fn push(&mut self, n: i32) -> Result<()> {
        self.cat.push(n)
    }

    /// Fails with `Underflow` when empty.
    pub fn pop(&mut self) -> Result<i32> {
        self.cat.pop()
    }

    /// Fails with `Underflow` when empty.
    pub fn top(&self) -> Result<i32> {
        self.cat.top().map(|n| *n)
    }

    pub fn is_empty(&self) -> bool {
        self.cat.is_empty()
    }
}

impl<B: StackBackend<i32> + Default> Default for StackOfInt<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: StackBackend<i32>> fmt::Debug for StackOfInt<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackOfInt").finish_non_exhaustive()
    }
}
