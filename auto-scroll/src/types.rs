/// How a scroll request moves the viewport.
///
/// Mirrors the DOM `ScrollBehavior` enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Defer to the scroll container's configured default.
    #[default]
    Auto,
    /// Jump to the target offset in a single step.
    Instant,
    /// Animate toward the target offset.
    Smooth,
}

/// Where an element lands inside the viewport along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollLogicalPosition {
    Start,
    Center,
    End,
    /// Scroll the minimum distance needed to make the element visible (no-op if it already is).
    Nearest,
}

/// Options passed to [`crate::ScrollIntoView::scroll_into_view`].
///
/// `block`/`inline` set to `None` means "use the host's default alignment".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: Option<ScrollLogicalPosition>,
    pub inline: Option<ScrollLogicalPosition>,
}

impl ScrollIntoViewOptions {
    /// Smooth scrolling with host-default alignment.
    pub const fn smooth() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: None,
            inline: None,
        }
    }

    pub const fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub const fn with_block(mut self, block: Option<ScrollLogicalPosition>) -> Self {
        self.block = block;
        self
    }

    pub const fn with_inline(mut self, inline: Option<ScrollLogicalPosition>) -> Self {
        self.inline = inline;
        self
    }

    pub fn is_smooth(&self) -> bool {
        self.behavior == ScrollBehavior::Smooth
    }
}
