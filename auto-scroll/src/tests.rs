use crate::*;

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

#[derive(Clone, Default)]
struct Recorder {
    calls: Rc<RefCell<Vec<ScrollIntoViewOptions>>>,
}

impl Recorder {
    fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn last(&self) -> Option<ScrollIntoViewOptions> {
        self.calls.borrow().last().copied()
    }
}

impl ScrollIntoView for Recorder {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions) {
        self.calls.borrow_mut().push(options);
    }
}

// Renders a "chat log" whose sentinel element is mounted during the render, before effects run.
fn render_log<D: Deps>(scope: &mut Scope, el: &Recorder, deps: D) -> Anchor<Recorder> {
    scope.render(|s| {
        let anchor = use_auto_scroll(s, deps);
        if !anchor.is_bound() {
            anchor.bind(el.clone());
        }
        anchor
    })
}

#[test]
fn effect_on_empty_anchor_is_a_noop() {
    let effect = AutoScrollEffect::new(Anchor::<Recorder>::new(), AutoScrollOptions::default());
    assert!(!effect.run());
    assert!(!effect.anchor().is_bound());
}

#[test]
fn effect_on_bound_anchor_issues_one_smooth_request() {
    let el = Recorder::default();
    let anchor = Anchor::new();
    anchor.bind(el.clone());

    let effect = AutoScrollEffect::new(anchor, AutoScrollOptions::default());
    assert!(effect.run());
    assert_eq!(el.count(), 1);
    assert_eq!(el.last(), Some(ScrollIntoViewOptions::smooth()));
    assert!(el.last().unwrap().is_smooth());
}

#[test]
fn disabled_effect_never_scrolls() {
    let el = Recorder::default();
    let anchor = Anchor::new();
    anchor.bind(el.clone());

    let effect = AutoScrollEffect::new(anchor, AutoScrollOptions::new().with_enabled(false));
    assert!(!effect.run());
    assert_eq!(el.count(), 0);
}

#[test]
fn options_are_forwarded_to_the_element() {
    let el = Recorder::default();
    let mut scope = Scope::new();
    scope.render(|s| {
        let anchor = use_auto_scroll_with(
            s,
            1u32,
            AutoScrollOptions::new()
                .with_behavior(ScrollBehavior::Instant)
                .with_block(Some(ScrollLogicalPosition::End)),
        );
        anchor.bind(el.clone());
    });

    assert_eq!(
        el.last(),
        Some(ScrollIntoViewOptions {
            behavior: ScrollBehavior::Instant,
            block: Some(ScrollLogicalPosition::End),
            inline: None,
        })
    );
}

#[test]
fn unchanged_deps_do_not_scroll_again() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    render_log(&mut scope, &el, 3usize);
    assert_eq!(el.count(), 1);

    render_log(&mut scope, &el, 3usize);
    render_log(&mut scope, &el, 3usize);
    assert_eq!(el.count(), 1);

    render_log(&mut scope, &el, 4usize);
    assert_eq!(el.count(), 2);
}

#[test]
fn empty_deps_fire_exactly_once() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    for _ in 0..5 {
        scope.render(|s| {
            let anchor = use_auto_scroll_once::<_, Recorder>(s);
            if !anchor.is_bound() {
                anchor.bind(el.clone());
            }
        });
    }

    assert_eq!(scope.render_count(), 5);
    assert_eq!(el.count(), 1);
    assert_eq!(scope.effects_run(), 1);
}

#[test]
fn distinct_deps_scroll_once_per_activation() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    for n in 0..8u64 {
        render_log(&mut scope, &el, n);
    }
    assert_eq!(el.count(), 8);
}

#[test]
fn tuple_deps_compare_element_wise() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    render_log(&mut scope, &el, (1u32, "general"));
    render_log(&mut scope, &el, (1u32, "general"));
    assert_eq!(el.count(), 1);

    render_log(&mut scope, &el, (1u32, "random"));
    assert_eq!(el.count(), 2);

    render_log(&mut scope, &el, (2u32, "random"));
    assert_eq!(el.count(), 3);
}

#[test]
fn vec_deps_detect_appended_items() {
    let el = Recorder::default();
    let mut scope = Scope::new();
    let mut messages = vec!["hi"];

    render_log(&mut scope, &el, messages.clone());
    render_log(&mut scope, &el, messages.clone());
    assert_eq!(el.count(), 1);

    messages.push("how are you?");
    render_log(&mut scope, &el, messages.clone());
    assert_eq!(el.count(), 2);
}

#[test]
fn unbound_anchor_on_first_render_is_tolerated() {
    let mut scope = Scope::new();
    let anchor = scope.render(|s| use_auto_scroll::<_, Recorder, _>(s, 0u8));
    assert!(!anchor.is_bound());
    assert_eq!(scope.effects_run(), 1);

    // Mounting later does not retroactively scroll; the next change does.
    let el = Recorder::default();
    anchor.bind(el.clone());
    scope.render(|s| use_auto_scroll::<_, Recorder, _>(s, 0u8));
    assert_eq!(el.count(), 0);
    scope.render(|s| use_auto_scroll::<_, Recorder, _>(s, 1u8));
    assert_eq!(el.count(), 1);
}

#[test]
fn detached_element_is_ignored() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    let anchor = render_log(&mut scope, &el, 1u32);
    assert_eq!(el.count(), 1);

    assert!(anchor.clear().is_some());
    scope.render(|s| use_auto_scroll::<_, Recorder, _>(s, 2u32));
    assert_eq!(el.count(), 1);
    assert_eq!(scope.effects_run(), 2);
}

#[test]
fn anchor_is_stable_across_renders() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    let a = render_log(&mut scope, &el, 1u32);
    let b = render_log(&mut scope, &el, 2u32);
    assert!(a.ptr_eq(&b));
    assert_eq!(scope.hook_count(), 2);
}

#[test]
fn separate_scopes_get_separate_anchors() {
    let el = Recorder::default();
    let mut left = Scope::new();
    let mut right = Scope::new();

    let a = render_log(&mut left, &el, 1u32);
    let b = render_log(&mut right, &el, 1u32);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn anchor_bind_replaces_the_previous_element() {
    let anchor = Anchor::new();
    assert_eq!(anchor.bind(1u32), None);
    assert_eq!(anchor.bind(2u32), Some(1));
    assert_eq!(anchor.get(), Some(2));
    assert_eq!(anchor.with(|v| v * 10), Some(20));
    assert_eq!(anchor.clear(), Some(2));
    assert_eq!(anchor.get(), None);
    assert_eq!(anchor.clear(), None);
}

#[test]
fn unmount_detaches_elements_from_held_anchors() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    let anchor = render_log(&mut scope, &el, 1u32);
    let held = AutoScrollEffect::new(anchor.clone(), AutoScrollOptions::default());
    scope.unmount();

    assert!(anchor.get().is_none());
    assert!(!held.run());
    assert_eq!(el.count(), 1);
}

#[test]
fn nan_deps_rerun_every_render() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    render_log(&mut scope, &el, f64::NAN);
    render_log(&mut scope, &el, f64::NAN);
    assert_eq!(el.count(), 2);

    let mut bits = Scope::new();
    render_log(&mut bits, &el, f64::NAN.to_bits());
    render_log(&mut bits, &el, f64::NAN.to_bits());
    assert_eq!(el.count(), 3);
}

#[test]
fn effects_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scope = Scope::new();

    scope.render(|s| {
        let first = Rc::clone(&log);
        s.use_effect((), move || first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        s.use_effect((), move || second.borrow_mut().push("second"));
    });

    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn unmount_resets_the_instance() {
    let el = Recorder::default();
    let mut scope = Scope::new();

    let before = render_log(&mut scope, &el, 1u32);
    assert!(before.is_bound());
    scope.unmount();
    assert_eq!(scope.hook_count(), 0);
    assert!(!before.is_bound());

    let after = render_log(&mut scope, &el, 1u32);
    assert!(!before.ptr_eq(&after));
    assert_eq!(el.count(), 2);
}

#[test]
#[should_panic(expected = "same order")]
fn hook_order_mismatch_panics() {
    let mut scope = Scope::new();
    scope.render(|s| {
        s.use_hook(|| 0u32);
    });
    scope.render(|s| {
        s.use_hook(|| "not a number");
    });
}

fn request_smooth(target: impl ScrollIntoView) {
    target.scroll_into_view(ScrollIntoViewOptions::smooth());
}

#[test]
fn scroll_into_view_forwards_through_smart_pointers() {
    let el = Recorder::default();
    let boxed: alloc::boxed::Box<dyn ScrollIntoView> = alloc::boxed::Box::new(el.clone());
    let shared = Rc::new(el.clone());

    boxed.scroll_into_view(ScrollIntoViewOptions::default());
    shared.scroll_into_view(ScrollIntoViewOptions::smooth());
    request_smooth(&el);
    assert_eq!(el.count(), 3);
}
