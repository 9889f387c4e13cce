/// Scroll animation from one offset to another.
///
/// A tween is created *unstarted*: scroll requests carry no timestamp, so the clock starts on the
/// first [`Tween::start`], which [`crate::ScrollContainer::tick`] calls with the frame time.
/// Until then it stays parked at `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    /// `None` until the first frame.
    pub start_ms: Option<u64>,
    /// Never zero.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn starting_at(mut self, now_ms: u64) -> Self {
        self.start(now_ms);
        self
    }

    /// Pins the start time. Later calls are ignored.
    pub fn start(&mut self, now_ms: u64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
    }

    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }

    fn elapsed(&self, now_ms: u64) -> u64 {
        self.start_ms.map_or(0, |start| now_ms.saturating_sub(start))
    }

    /// Time progress in `[0, 1]`, before easing.
    pub fn progress(&self, now_ms: u64) -> f64 {
        (self.elapsed(now_ms) as f64 / self.duration_ms as f64).min(1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.is_started() && self.elapsed(now_ms) >= self.duration_ms
    }

    /// Offset at `now_ms`. Lands exactly on `to` once done.
    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms));
        let delta = (self.to as f64 - self.from as f64) * eased;
        (self.from as f64 + delta).max(0.0) as u64
    }

    /// Heads somewhere else from `from`, with a fresh (unstarted) clock.
    pub fn retarget(&mut self, from: u64, to: u64, duration_ms: u64) {
        *self = Self::new(from, to, duration_ms, self.easing);
    }
}

/// Easing curve applied to tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Roughly what browsers do for `behavior: "smooth"`.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps `t` (clamped to `[0, 1]`) onto the curve. Both endpoints are fixed.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let rest = 1.0 - t;
                1.0 - 4.0 * rest * rest * rest
            }
        }
    }
}
