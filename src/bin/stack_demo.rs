use stack_of_int::{ArrayStack, StackBackend, StackOfInt, VecStack};

use tracing::info;
use tracing_subscriber::EnvFilter;

fn run<B: StackBackend<i32> + Default>(name: &str) -> stack_of_int::Result<()> {
    let mut stack = StackOfInt::<B>::new();

    for n in 1..=3 {
        stack.push(n)?;
    }
    info!(backend = name, top = stack.top()?, "pushed 1, 2, 3");

    stack.pop()?;
    info!(backend = name, top = stack.top()?, empty = stack.is_empty(), "popped once");

    stack.pop()?;
    stack.pop()?;
    info!(backend = name, empty = stack.is_empty(), "popped twice more");

    if let Err(e) = stack.pop() {
        info!(backend = name, error = %e, "pop on empty stack");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for result in [
        run::<ArrayStack<i32>>("array"),
        run::<VecStack<i32>>("vector"),
    ] {
        if let Err(e) = result {
            eprintln!("demo failed: {}", e);
            std::process::exit(1);
        }
    }
}
