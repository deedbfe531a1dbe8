use std::fmt;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// Heap storage for a value derived from a secret whose type has no [Zeroize] implementation of
/// its own, such as the keyed state of a third party MAC.
///
/// The value is dropped normally, then every byte it occupied is overwritten with zeros before
/// the allocation is released. Being boxed, the value stays at one address while in use.
///
/// ```
/// use ikeprf_secret_memory::Scrubbed;
///
/// let mut state = Scrubbed::new([0x36u8; 64]);
/// state[0] ^= 0x36;
/// assert_eq!(state[0], 0);
/// assert_eq!(format!("{state:?}"), "<SECRET>");
/// ```
pub struct Scrubbed<T> {
    storage: Box<MaybeUninit<T>>,
}

impl<T> Scrubbed<T> {
    /// Moves `value` to the heap
    pub fn new(value: T) -> Self {
        Self {
            storage: Box::new(MaybeUninit::new(value)),
        }
    }
}

impl<T> Deref for Scrubbed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Safety: initialized in `new` and only uninitialized in `drop`
        unsafe { self.storage.assume_init_ref() }
    }
}

impl<T> DerefMut for Scrubbed<T> {
    fn deref_mut(&mut self) -> &mut T {
        // Safety: initialized in `new` and only uninitialized in `drop`
        unsafe { self.storage.assume_init_mut() }
    }
}

impl<T> Drop for Scrubbed<T> {
    fn drop(&mut self) {
        // Safety: the value is initialized and is never accessed again
        unsafe { self.storage.assume_init_drop() };
        self.storage.zeroize();
    }
}

/// The Debug implementation of [Scrubbed] does not reveal the contained value,
/// instead a placeholder `<SECRET>` is used
impl<T> fmt::Debug for Scrubbed<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("<SECRET>")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountDrops(Rc<Cell<usize>>);

    impl Drop for CountDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn value_is_usable_in_place() {
        let mut state = Scrubbed::new([1u32, 2, 3]);
        let addr = state.as_ptr();
        state[1] = 7;
        assert_eq!(*state, [1, 7, 3]);
        assert_eq!(addr, state.as_ptr());
    }

    #[test]
    fn inner_value_is_dropped_once() {
        let drops = Rc::new(Cell::new(0));
        let state = Scrubbed::new(CountDrops(drops.clone()));
        assert_eq!(drops.get(), 0);
        drop(state);
        assert_eq!(drops.get(), 1);
    }
}
