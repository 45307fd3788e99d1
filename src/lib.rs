//! An integer stack behind one stable interface, with two interchangeable
//! storage bodies: a fixed-capacity array and a growable vector.

pub mod error;
pub mod raw;
pub mod stack;

mod stack_of_int;

pub use crate::error::{Result, StackError};
pub use crate::stack::{ArrayStack, BackendKind, StackBackend, VecStack, DEFAULT_CAPACITY};
pub use crate::stack_of_int::{DefaultBackend, StackOfInt};
