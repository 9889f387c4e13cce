use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use auto_scroll::{ScrollIntoView, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{ElementBounds, ScrollContainer};

/// An element laid out inside a shared [`ScrollContainer`].
///
/// Clones share both the container and the bounds, so layout updates made through
/// [`ElementHandle::set_bounds`] are seen by every clone, including the one bound to an
/// [`auto_scroll::Anchor`].
///
/// Only the block axis is modeled; `inline` alignment is ignored. A `block` of `None` aligns to
/// the start, like the DOM does.
#[derive(Clone)]
pub struct ElementHandle {
    container: Rc<RefCell<ScrollContainer>>,
    bounds: Rc<Cell<ElementBounds>>,
}

impl ElementHandle {
    pub fn new(container: &Rc<RefCell<ScrollContainer>>, bounds: ElementBounds) -> Self {
        Self {
            container: Rc::clone(container),
            bounds: Rc::new(Cell::new(bounds)),
        }
    }

    pub fn bounds(&self) -> ElementBounds {
        self.bounds.get()
    }

    pub fn set_bounds(&self, bounds: ElementBounds) {
        self.bounds.set(bounds);
    }

    pub fn container(&self) -> &Rc<RefCell<ScrollContainer>> {
        &self.container
    }
}

impl ScrollIntoView for ElementHandle {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions) {
        let Ok(mut container) = self.container.try_borrow_mut() else {
            awarn!("ElementHandle: container is busy; dropping scroll request");
            return;
        };
        let bounds = self.bounds.get();
        let align = options.block.unwrap_or(ScrollLogicalPosition::Start);
        let target = container.target_offset_for(bounds, align);
        container.scroll_to_offset(target, options.behavior);
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHandle")
            .field("bounds", &self.bounds.get())
            .finish_non_exhaustive()
    }
}
