mod array_stack;
mod backend;
mod vec_stack;

pub use self::array_stack::{ArrayStack, DEFAULT_CAPACITY};
pub use self::backend::{BackendKind, StackBackend};
pub use self::vec_stack::VecStack;
