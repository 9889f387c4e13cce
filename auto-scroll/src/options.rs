use crate::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Configuration for [`crate::AutoScrollEffect`] and [`crate::use_auto_scroll_with`].
///
/// The defaults reproduce the classic chat-log behavior: smooth scrolling, host-default
/// alignment, always enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScrollOptions {
    pub behavior: ScrollBehavior,
    /// Block-axis alignment. `None` leaves it to the host.
    pub block: Option<ScrollLogicalPosition>,
    /// Inline-axis alignment. `None` leaves it to the host.
    pub inline: Option<ScrollLogicalPosition>,
    /// When disabled, the effect still runs on dependency changes but never scrolls.
    pub enabled: bool,
}

impl AutoScrollOptions {
    pub const fn new() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: None,
            inline: None,
            enabled: true,
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

    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn scroll_options(&self) -> ScrollIntoViewOptions {
        ScrollIntoViewOptions {
            behavior: self.behavior,
            block: self.block,
            inline: self.inline,
        }
    }
}

impl Default for AutoScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}
