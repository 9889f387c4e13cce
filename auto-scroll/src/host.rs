use crate::Anchor;

/// A dependency value compared by the host between runs.
///
/// Anything `PartialEq + 'static` qualifies. Tuples and arrays compare element-wise, which gives
/// the usual "ordered dependency list" semantics; `()` is the empty list (the effect runs once).
///
/// Equality is plain `PartialEq`, not identity. A value that is never equal to itself, such as
/// `f64::NAN`, counts as changed on every render, so the effect re-runs each time. Wrap such
/// values (e.g. compare `f64::to_bits`) if that isn't wanted.
pub trait Deps: PartialEq + 'static {}
impl<T: PartialEq + 'static> Deps for T {}

/// Allocates per-instance anchors.
///
/// Calling `use_anchor` at the same hook position on every render of one component instance
/// must return a handle to the same slot.
pub trait AnchorProvider {
    fn use_anchor<E: 'static>(&mut self) -> Anchor<E>;
}

/// Schedules effects that run after a render when their dependencies changed.
///
/// The host compares `deps` with the value passed at the same hook position on the previous
/// render. On the first render, or when they differ, `effect` runs once after the render
/// commits. Otherwise it is dropped without running.
pub trait EffectScheduler {
    fn use_effect<D: Deps>(&mut self, deps: D, effect: impl FnOnce() + 'static);
}

/// A host UI framework instance, as seen by the auto-scroll hooks.
pub trait Host: AnchorProvider + EffectScheduler {}
impl<T: AnchorProvider + EffectScheduler + ?Sized> Host for T {}
