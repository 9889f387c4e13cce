use std::cell::Cell;
use std::rc::Rc;

use auto_scroll::{Scope, ScrollIntoView, ScrollIntoViewOptions, use_auto_scroll};

// Stands in for a DOM node: it only reports the requests it receives.
struct Sentinel {
    requests: Cell<u32>,
}

impl ScrollIntoView for Sentinel {
    fn scroll_into_view(&self, options: ScrollIntoViewOptions) {
        self.requests.set(self.requests.get() + 1);
        println!("scroll_into_view({options:?})");
    }
}

fn main() {
    let sentinel = Rc::new(Sentinel {
        requests: Cell::new(0),
    });
    let mut scope = Scope::new();

    // Re-rendering with the same message count doesn't scroll; a new message does.
    for messages in [1usize, 1, 2, 3, 3] {
        scope.render(|s| {
            let anchor = use_auto_scroll(s, messages);
            if !anchor.is_bound() {
                anchor.bind(Rc::clone(&sentinel));
            }
        });
    }

    println!(
        "renders={} effects={} scroll_requests={}",
        scope.render_count(),
        scope.effects_run(),
        sentinel.requests.get()
    );
}
