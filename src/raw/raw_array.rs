use std::alloc::Layout;
use std::mem::size_of;
use std::ptr::NonNull;

use tracing::debug;

/// An uninitialized block of `cap` slots of `T`.
///
/// The block neither tracks which slots are live nor drops them; the owner does.
pub struct RawArray<T> {
    pub arr: NonNull<T>,
    pub cap: usize,
}

impl<T> RawArray<T> {
    /// Allocates room for exactly `capacity` elements.
    ///
    /// Zero capacity and zero-sized `T` allocate nothing.
    /// Aborts through `handle_alloc_error` if the allocator fails.
    pub fn alloc(capacity: usize) -> Self {
        if capacity == 0 || size_of::<T>() == 0 {
            return Self {
                arr: NonNull::dangling(),
                cap: capacity,
            };
        }

        let layout = Self::layout(capacity);
        debug!(capacity, bytes = layout.size(), "allocating fixed stack block");

        let arr = unsafe {
            let ptr = std::alloc::alloc(layout) as *mut T;
            match NonNull::new(ptr) {
                Some(arr) => arr,
                None => std::alloc::handle_alloc_error(layout),
            }
        };

        Self { arr, cap: capacity }
    }

    /// Releases the block. Live elements must already have been dropped.
    ///
    /// # Safety
    /// Must be called at most once, and no slot may be accessed afterwards.
    pub unsafe fn dealloc(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            let layout = Self::layout(self.cap);
            std::alloc::dealloc(self.arr.as_ptr() as *mut u8, layout);
        }
        self.arr = NonNull::dangling();
        self.cap = 0;
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    /// `index` must be less than `cap`.
    pub unsafe fn offset(&self, index: usize) -> *mut T {
        debug_assert!(index < self.cap);
        self.arr.as_ptr().add(index)
    }

    fn layout(capacity: usize) -> Layout {
        match Layout::array::<T>(capacity) {
            Ok(layout) if layout.size() <= isize::MAX as usize => layout,
            _ => panic!("capacity overflow"),
        }
    }
}
