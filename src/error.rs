use thiserror::Error;

/// Failure of a stack operation.
///
/// Both backends report through this type; neither panics on misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `top` on an empty stack.
    #[error("stack underflow: the stack is empty")]
    Underflow,

    /// `push` on a fixed-capacity stack that is already full.
    #[error("stack overflow: capacity {capacity} exhausted")]
    Overflow { capacity: usize },
}

pub type Result<T> = std::result::Result<T, StackError>;
