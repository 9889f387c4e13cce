use crate::{Anchor, AutoScrollOptions, ScrollIntoView};

/// The action an auto-scroll hook registers with its host.
///
/// The host decides *when* to run it (after a render in which the dependencies changed); the
/// effect only decides *whether* there is something to scroll.
#[derive(Debug)]
pub struct AutoScrollEffect<E> {
    anchor: Anchor<E>,
    options: AutoScrollOptions,
}

impl<E: ScrollIntoView> AutoScrollEffect<E> {
    pub fn new(anchor: Anchor<E>, options: AutoScrollOptions) -> Self {
        Self { anchor, options }
    }

    pub fn anchor(&self) -> &Anchor<E> {
        &self.anchor
    }

    pub fn options(&self) -> &AutoScrollOptions {
        &self.options
    }

    /// Requests a scroll of the anchored element into view.
    ///
    /// Returns `true` if a request was issued. An empty anchor (not mounted yet, or unmounted)
    /// or a disabled effect is a silent no-op.
    pub fn run(&self) -> bool {
        if !self.options.enabled {
            atrace!("auto-scroll disabled; skipping");
            return false;
        }
        let scroll = self.options.scroll_options();
        let issued = self
            .anchor
            .with(|element| element.scroll_into_view(scroll))
            .is_some();
        atrace!(issued, behavior = ?scroll.behavior, "auto-scroll effect ran");
        issued
    }
}

impl<E> Clone for AutoScrollEffect<E> {
    fn clone(&self) -> Self {
        Self {
            anchor: self.anchor.clone(),
            options: self.options,
        }
    }
}
