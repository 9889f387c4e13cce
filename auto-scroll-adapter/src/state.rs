/// A lightweight, serializable snapshot of a [`crate::ScrollContainer`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Animations are not
/// captured; restoring a snapshot lands on `scroll_offset` directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerState {
    pub viewport_size: u32,
    pub content_size: u64,
    pub scroll_offset: u64,
}

/// Position and size of an element along the container's scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementBounds {
    pub start: u64,
    pub size: u32,
}

impl ElementBounds {
    pub fn new(start: u64, size: u32) -> Self {
        Self { start, size }
    }

    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
