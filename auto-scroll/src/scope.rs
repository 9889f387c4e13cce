use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, type_name};
use core::fmt;

use crate::{Anchor, AnchorProvider, Deps, EffectScheduler};

type PendingEffect = Box<dyn FnOnce()>;
type Detach = Box<dyn Fn()>;

struct EffectDeps<D>(Option<D>);

/// A minimal hook host for one component instance.
///
/// Hooks are slots addressed by call order, as in React or Dioxus: every render must call the
/// same hooks in the same order. Effects whose dependencies changed are queued during
/// [`Scope::render`] and run, in registration order, once the render body returns.
///
/// This is enough to drive [`crate::use_auto_scroll`] from a headless app or a test. Real UI
/// frameworks implement [`AnchorProvider`] and [`EffectScheduler`] on their own scope types.
pub struct Scope {
    hooks: Vec<Box<dyn Any>>,
    cursor: usize,
    pending: Vec<PendingEffect>,
    // One per anchor handed out; empties it on unmount.
    detach: Vec<Detach>,
    render_count: u64,
    effects_run: u64,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            cursor: 0,
            pending: Vec::new(),
            detach: Vec::new(),
            render_count: 0,
            effects_run: 0,
        }
    }

    /// Runs one render of the component body, then commits its effects.
    pub fn render<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.cursor = 0;
        let out = body(self);
        if self.render_count > 0 && self.cursor != self.hooks.len() {
            awarn!(
                called = self.cursor,
                expected = self.hooks.len(),
                "Scope: render called a different number of hooks than the previous render"
            );
        }
        self.render_count = self.render_count.saturating_add(1);
        self.commit();
        out
    }

    fn commit(&mut self) {
        let pending = core::mem::take(&mut self.pending);
        adebug!(
            render = self.render_count,
            effects = pending.len(),
            "Scope: commit"
        );
        for effect in pending {
            effect();
            self.effects_run = self.effects_run.saturating_add(1);
        }
    }

    /// Returns the state stored at the current hook position, creating it with `init` on the
    /// first render.
    ///
    /// # Panics
    ///
    /// Panics if the slot holds a different type, which means hooks were called in a different
    /// order than on the previous render.
    pub fn use_hook<T: 'static>(&mut self, init: impl FnOnce() -> T) -> &mut T {
        let index = self.cursor;
        self.cursor += 1;

        if index == self.hooks.len() {
            atrace!(index, hook = type_name::<T>(), "Scope: new hook");
            self.hooks.push(Box::new(init()));
        }

        match self.hooks[index].downcast_mut::<T>() {
            Some(state) => state,
            None => panic!(
                "Scope: hook #{index} is not a `{}`; hooks must be called in the same order on every render",
                type_name::<T>()
            ),
        }
    }

    /// Tears the instance down: empties every anchor it handed out, then drops all hook state
    /// and any effects not yet run.
    pub fn unmount(&mut self) {
        adebug!(
            hooks = self.hooks.len(),
            anchors = self.detach.len(),
            "Scope: unmount"
        );
        for detach in self.detach.drain(..) {
            detach();
        }
        self.hooks.clear();
        self.pending.clear();
        self.cursor = 0;
        self.render_count = 0;
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Total number of effects run by this scope.
    pub fn effects_run(&self) -> u64 {
        self.effects_run
    }
}

impl AnchorProvider for Scope {
    fn use_anchor<E: 'static>(&mut self) -> Anchor<E> {
        let fresh = self.cursor == self.hooks.len();
        let anchor = self.use_hook(Anchor::<E>::new).clone();
        if fresh {
            let slot = anchor.clone();
            self.detach.push(Box::new(move || {
                slot.clear();
            }));
        }
        anchor
    }
}

impl EffectScheduler for Scope {
    fn use_effect<D: Deps>(&mut self, deps: D, effect: impl FnOnce() + 'static) {
        let slot = self.use_hook(|| EffectDeps::<D>(None));
        if slot.0.as_ref() == Some(&deps) {
            return;
        }
        slot.0 = Some(deps);
        self.pending.push(Box::new(effect));
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("hooks", &self.hooks.len())
            .field("pending_effects", &self.pending.len())
            .field("render_count", &self.render_count)
            .field("effects_run", &self.effects_run)
            .finish()
    }
}
