use crate::error::{Result, StackError};
use crate::raw::RawArray;
use crate::stack::StackBackend;

use std::ptr::drop_in_place;

use tracing::trace;

/// Slot count used by [`ArrayStack::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity stack body over one preallocated block.
pub struct ArrayStack<T> {
    raw: RawArray<T>,
    len: usize,
    // invariant: len <= raw.cap; slots [0, len) are initialized
}

unsafe impl<T: Send> Send for ArrayStack<T> {}
unsafe impl<T: Sync> Sync for ArrayStack<T> {}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let raw = RawArray::alloc(capacity);
        Self { raw, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.raw.cap
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.raw.cap
    }

    pub fn push(&mut self, elem: T) -> Result<()> {
        if self.is_full() {
            trace!(backend = "array", capacity = self.raw.cap, "rejected push on full stack");
            return Err(StackError::Overflow {
                capacity: self.raw.cap,
            });
        }

        unsafe { self.raw.offset(self.len).write(elem) };
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(underflow());
        }

        self.len -= 1;
        Ok(unsafe { self.raw.offset(self.len).read() })
    }

    pub fn top(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(underflow());
        }

        Ok(unsafe { &*self.raw.offset(self.len - 1) })
    }

    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe { drop_in_place(std::slice::from_raw_parts_mut(self.raw.arr.as_ptr(), len)) };
    }
}

fn underflow() -> StackError {
    trace!(backend = "array", "rejected access to empty stack");
    StackError::Underflow
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayStack<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe { self.raw.dealloc() }
    }
}

impl<T> StackBackend<T> for ArrayStack<T> {
    fn push(&mut self, elem: T) -> Result<()> {
        ArrayStack::push(self, elem)
    }

    fn pop(&mut self) -> Result<T> {
        ArrayStack::pop(self)
    }

    fn top(&self) -> Result<&T> {
        ArrayStack::top(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }
}
