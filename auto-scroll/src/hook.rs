use crate::{Anchor, AutoScrollEffect, AutoScrollOptions, Deps, Host, ScrollIntoView};

/// Returns an anchor whose element is smoothly scrolled into view every time `deps` changes,
/// and once on the first render.
///
/// Bind the returned anchor to the element that should stay in view (typically an empty
/// sentinel after the last message of a chat log).
pub fn use_auto_scroll<H, E, D>(host: &mut H, deps: D) -> Anchor<E>
where
    H: Host,
    E: ScrollIntoView + 'static,
    D: Deps,
{
    use_auto_scroll_with(host, deps, AutoScrollOptions::default())
}

/// [`use_auto_scroll`] with an empty dependency list: scrolls once, after the first render.
pub fn use_auto_scroll_once<H, E>(host: &mut H) -> Anchor<E>
where
    H: Host,
    E: ScrollIntoView + 'static,
{
    use_auto_scroll(host, ())
}

pub fn use_auto_scroll_with<H, E, D>(
    host: &mut H,
    deps: D,
    options: AutoScrollOptions,
) -> Anchor<E>
where
    H: Host,
    E: ScrollIntoView + 'static,
    D: Deps,
{
    let anchor = host.use_anchor::<E>();
    let effect = AutoScrollEffect::new(anchor.clone(), options);
    host.use_effect(deps, move || {
        effect.run();
    });
    anchor
}
