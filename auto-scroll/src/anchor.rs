use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// A single-slot handle to the element an auto-scroll effect should bring into view.
///
/// The slot is either empty (element not mounted yet, or already unmounted) or holds exactly one
/// element. The host writes it on mount/unmount via [`Anchor::bind`]/[`Anchor::clear`]; the
/// effect only reads it.
///
/// Cloning is cheap and yields another handle to the *same* slot, so the caller can hand one
/// clone to the element's mount point while the effect keeps another. Anchors are created per
/// component instance by an [`crate::AnchorProvider`] and are not meant to be shared across
/// instances.
pub struct Anchor<E> {
    slot: Rc<RefCell<Option<E>>>,
}

impl<E> Anchor<E> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Binds an element, returning the previously bound one (if any).
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`Anchor::with`] on the same slot.
    pub fn bind(&self, element: E) -> Option<E> {
        self.slot.borrow_mut().replace(element)
    }

    /// Empties the slot, returning the element that was bound.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`Anchor::with`] on the same slot.
    pub fn clear(&self) -> Option<E> {
        self.slot.borrow_mut().take()
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Runs `f` against the bound element. Returns `None` when the slot is empty.
    pub fn with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(f)
    }

    /// Returns `true` if both handles refer to the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<E: Clone> Anchor<E> {
    pub fn get(&self) -> Option<E> {
        self.slot.borrow().clone()
    }
}

impl<E> Clone for Anchor<E> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<E> Default for Anchor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Anchor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anchor")
            .field("bound", &self.is_bound())
            .finish()
    }
}
