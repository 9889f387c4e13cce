use auto_scroll::{ScrollBehavior, ScrollLogicalPosition};

use crate::{ContainerState, ElementBounds, Easing, Tween};

/// A headless, single-axis scroll container.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_viewport_size` / `set_content_size` when layout changes
/// - `on_scroll` when the user scrolls (wheel/drag/keys)
/// - `tick(now_ms)` each frame/timer tick, which advances smooth scrolling
///
/// Smooth scroll requests start animating on the next `tick`.
#[derive(Clone, Debug)]
pub struct ScrollContainer {
    viewport_size: u32,
    content_size: u64,
    scroll_offset: u64,
    now_ms: u64,
    tween: Option<Tween>,
    smooth_duration_ms: u64,
    easing: Easing,
    default_behavior: ScrollBehavior,
}

impl ScrollContainer {
    pub fn new(viewport_size: u32, content_size: u64) -> Self {
        Self {
            viewport_size,
            content_size,
            scroll_offset: 0,
            now_ms: 0,
            tween: None,
            smooth_duration_ms: 300,
            easing: Easing::default(),
            default_behavior: ScrollBehavior::Instant,
        }
    }

    pub fn with_smooth_duration_ms(mut self, duration_ms: u64) -> Self {
        self.smooth_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// What `ScrollBehavior::Auto` resolves to (CSS `scroll-behavior`). Defaults to `Instant`.
    pub fn with_default_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.default_behavior = behavior;
        self
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn content_size(&self) -> u64 {
        self.content_size
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        self.viewport_size = size;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn set_content_size(&mut self, size: u64) {
        self.content_size = size;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.content_size.saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset the active animation is heading to.
    pub fn animation_target(&self) -> Option<u64> {
        self.tween.map(|t| t.to)
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Call this when the UI reports a user scroll.
    ///
    /// This cancels any active animation.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        self.advance_clock(now_ms);
        self.cancel_animation();
        self.scroll_offset = self.clamp_scroll_offset(scroll_offset);
    }

    pub fn resolve_behavior(&self, behavior: ScrollBehavior) -> ScrollBehavior {
        match (behavior, self.default_behavior) {
            (ScrollBehavior::Auto, ScrollBehavior::Smooth) => ScrollBehavior::Smooth,
            (ScrollBehavior::Auto, _) => ScrollBehavior::Instant,
            (b, _) => b,
        }
    }

    /// Computes the offset that brings `bounds` to `align` within the viewport.
    ///
    /// The result is clamped to the scrollable range.
    pub fn target_offset_for(&self, bounds: ElementBounds, align: ScrollLogicalPosition) -> u64 {
        let view = self.viewport_size as u64;
        let target = match align {
            ScrollLogicalPosition::Start => bounds.start,
            ScrollLogicalPosition::End => bounds.end().saturating_sub(view),
            ScrollLogicalPosition::Center => {
                let center = bounds.start.saturating_add(bounds.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            ScrollLogicalPosition::Nearest => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                let inside = bounds.start >= cur && bounds.end() <= cur_end;
                let covers = bounds.start <= cur && bounds.end() >= cur_end;
                if inside || covers {
                    cur
                } else {
                    let to_start = bounds.start;
                    let to_end = bounds.end().saturating_sub(view);
                    if to_start.abs_diff(cur) <= to_end.abs_diff(cur) {
                        to_start
                    } else {
                        to_end
                    }
                }
            }
        };
        self.clamp_scroll_offset(target)
    }

    /// Scrolls to `offset`, either in one step or by starting (or retargeting) an animation.
    ///
    /// Returns the clamped target offset.
    pub fn scroll_to_offset(&mut self, offset: u64, behavior: ScrollBehavior) -> u64 {
        let to = self.clamp_scroll_offset(offset);
        let behavior = self.resolve_behavior(behavior);
        adebug!(from = self.scroll_offset, to, ?behavior, "scroll_to_offset");

        if behavior != ScrollBehavior::Smooth {
            self.cancel_animation();
            self.scroll_offset = to;
            return to;
        }

        match self.tween.as_mut() {
            Some(tween) => {
                if tween.to != to {
                    tween.retarget(self.scroll_offset, to, self.smooth_duration_ms);
                }
            }
            None if to == self.scroll_offset => {}
            None => {
                self.tween = Some(Tween::new(
                    self.scroll_offset,
                    to,
                    self.smooth_duration_ms,
                    self.easing,
                ));
            }
        }
        to
    }

    /// Advances the container clock.
    ///
    /// - If an animation is active, updates `scroll_offset` and returns the new offset. A freshly
    ///   requested animation starts its clock here, so an idle gap before the request doesn't
    ///   eat into its duration.
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.advance_clock(now_ms);
        let mut tween = self.tween?;
        tween.start(self.now_ms);

        let off = self.clamp_scroll_offset(tween.sample(self.now_ms));
        atrace!(now_ms = self.now_ms, off, "tick");
        self.scroll_offset = off;

        self.tween = (!tween.is_done(self.now_ms)).then_some(tween);
        Some(off)
    }

    pub fn state(&self) -> ContainerState {
        ContainerState {
            viewport_size: self.viewport_size,
            content_size: self.content_size,
            scroll_offset: self.scroll_offset,
        }
    }

    /// Restores a snapshot. Cancels any active animation.
    pub fn restore_state(&mut self, state: ContainerState) {
        self.cancel_animation();
        self.viewport_size = state.viewport_size;
        self.content_size = state.content_size;
        self.scroll_offset = self.clamp_scroll_offset(state.scroll_offset);
    }
}
