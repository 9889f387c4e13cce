use std::cell::RefCell;
use std::rc::Rc;

use auto_scroll::{Scope, use_auto_scroll};
use auto_scroll_adapter::{ElementBounds, ElementHandle, ScrollContainer};

const ROW: u64 = 3;

fn main() {
    // Example: a chat log that smoothly follows new messages.
    //
    // An adapter would:
    // - update the container's content size after layout
    // - render the component; the auto-scroll effect requests a smooth scroll to the sentinel
    // - call tick(now_ms) in a frame loop and apply the returned offset to the real widget
    let container = Rc::new(RefCell::new(
        ScrollContainer::new(12, 0).with_smooth_duration_ms(240),
    ));
    let sentinel = ElementHandle::new(&container, ElementBounds::default());
    let mut scope = Scope::new();
    let mut messages: Vec<String> = Vec::new();
    let mut now_ms = 0u64;

    for i in 0..8 {
        messages.push(format!("message #{i}"));
        let content = messages.len() as u64 * ROW;
        container.borrow_mut().set_content_size(content);
        sentinel.set_bounds(ElementBounds::new(content, 0));

        scope.render(|s| {
            let anchor = use_auto_scroll(s, messages.len());
            if !anchor.is_bound() {
                anchor.bind(sentinel.clone());
            }
        });

        while let Some(off) = container.borrow_mut().tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} off={off}");
            }
            now_ms += 16;
        }
        println!(
            "{} -> offset={} (max={})",
            messages[i],
            container.borrow().scroll_offset(),
            container.borrow().max_scroll_offset()
        );
    }
}
