use stack_of_int::{ArrayStack, StackBackend, StackError, StackOfInt, VecStack, DEFAULT_CAPACITY};

fn scenario<B: StackBackend<i32> + Default>() {
    let mut stack = StackOfInt::<B>::new();
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    stack.push(3).unwrap();
    assert_eq!(stack.top(), Ok(3));

    stack.pop().unwrap();
    assert_eq!(stack.top(), Ok(2));
    assert!(!stack.is_empty());

    stack.pop().unwrap();
    stack.pop().unwrap();
    assert!(stack.is_empty());
}

fn underflow<B: StackBackend<i32> + Default>() {
    let mut stack = StackOfInt::<B>::new();
    assert_eq!(stack.top(), Err(StackError::Underflow));
    assert_eq!(stack.pop(), Err(StackError::Underflow));
    assert!(stack.is_empty());
}

fn balanced<B: StackBackend<i32> + Default>(n: i32) {
    let mut stack = StackOfInt::<B>::new();
    for i in 0..n {
        stack.push(i).unwrap();
    }
    for i in (0..n).rev() {
        assert_eq!(stack.pop(), Ok(i));
    }
    assert!(stack.is_empty());
}

#[test]
fn test_scenario_array() {
    scenario::<ArrayStack<i32>>();
}

#[test]
fn test_scenario_vector() {
    scenario::<VecStack<i32>>();
}

#[test]
fn test_underflow() {
    underflow::<ArrayStack<i32>>();
    underflow::<VecStack<i32>>();
}

#[test]
fn test_balanced() {
    balanced::<ArrayStack<i32>>(DEFAULT_CAPACITY as i32);
    balanced::<VecStack<i32>>(10_000);
}

#[test]
fn test_overflow() {
    let mut stack = StackOfInt::<ArrayStack<i32>>::new();
    for i in 0..DEFAULT_CAPACITY as i32 {
        assert_eq!(stack.push(i), Ok(()));
    }
    assert_eq!(
        stack.push(-1),
        Err(StackError::Overflow {
            capacity: DEFAULT_CAPACITY
        })
    );
    // the rejected push leaves the stack untouched
    assert_eq!(stack.top(), Ok(DEFAULT_CAPACITY as i32 - 1));

    let mut stack = StackOfInt::<VecStack<i32>>::new();
    for i in 0..=DEFAULT_CAPACITY as i32 {
        assert_eq!(stack.push(i), Ok(()));
    }
}
