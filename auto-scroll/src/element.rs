use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::ScrollIntoViewOptions;

/// The host's "scroll this element into view" primitive.
///
/// Implemented by whatever an [`crate::Anchor`] points at: a DOM node wrapper, a widget id in a
/// retained-mode toolkit, or the headless element handles in `auto-scroll-adapter`.
///
/// The call is fire-and-forget. Implementations must not panic when the element can't be
/// scrolled; they simply don't scroll.
pub trait ScrollIntoView {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions);
}

impl<T: ScrollIntoView + ?Sized> ScrollIntoView for &T {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions) {
        (**self).scroll_into_view(options);
    }
}

impl<T: ScrollIntoView + ?Sized> ScrollIntoView for Rc<T> {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions) {
        (**self).scroll_into_view(options);
    }
}

impl<T: ScrollIntoView + ?Sized> ScrollIntoView for Box<T> {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions) {
        (**self).scroll_into_view(options);
    }
}
