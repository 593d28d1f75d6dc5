use keyboard_inset::{Bounds, Dom, KeyboardEvent, KeyboardOptions, Platform, Selection};
use keyboard_inset_adapter::{Host, ListenerKind, Session};

// A one-input page: html > ion-content > input.
const ROOT: usize = 0;
const CONTENT: usize = 1;
const INPUT: usize = 2;

struct Page {
    scroll_top: f64,
    transform: Option<f64>,
    focused: bool,
}

impl Page {
    fn content_dy(&self) -> f64 {
        self.transform.unwrap_or(0.0)
    }
}

impl Dom for Page {
    type Node = usize;

    fn parent(&self, node: usize) -> Option<usize> {
        match node {
            INPUT => Some(CONTENT),
            CONTENT => Some(ROOT),
            _ => None,
        }
    }

    fn tag_name(&self, node: usize) -> &str {
        match node {
            INPUT => "input",
            CONTENT => "ion-content",
            _ => "html",
        }
    }

    fn attribute(&self, node: usize, name: &str) -> Option<&str> {
        (node == INPUT && name == "type").then_some("email")
    }

    fn bounding_rect(&self, node: usize) -> Bounds {
        match node {
            INPUT => Bounds::new(600.0, 640.0).shifted(self.content_dy() - self.scroll_top),
            CONTENT => Bounds::new(0.0, 800.0).shifted(self.content_dy()),
            _ => Bounds::new(0.0, 800.0),
        }
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn active_element(&self) -> Option<usize> {
        self.focused.then_some(INPUT)
    }

    fn scroll_top(&self, node: usize) -> f64 {
        if node == CONTENT { self.scroll_top } else { 0.0 }
    }

    fn selection_range(&self, node: usize) -> Option<Selection> {
        (node == INPUT).then_some(Selection::caret(4))
    }
}

impl Host for Page {
    type Listener = ListenerKind;

    fn is_native_platform(&self) -> bool {
        true
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerKind {
        println!("listen {kind:?}");
        kind
    }

    fn remove_listener(&mut self, listener: ListenerKind) {
        println!("unlisten {listener:?}");
    }

    fn set_transform(&mut self, _node: usize, offset: Option<f64>, transition: &str) {
        println!("transform {offset:?} ({transition})");
        self.transform = offset;
    }

    fn set_scroll_top(&mut self, _node: usize, top: f64) {
        self.scroll_top = top;
    }

    fn focus(&mut self, _node: usize) {
        println!("focus");
        self.focused = true;
    }

    fn blur(&mut self, _node: usize) {
        println!("blur");
        self.focused = false;
    }

    fn set_selection_range(&mut self, _node: usize, selection: Selection) {
        println!("selection {selection:?}");
    }
}

fn main() {
    // Example: an adapter wiring webview keyboard events into a scroll-based session.
    //
    // An adapter would:
    // - call ensure_input_visibility once the webview is ready
    // - forward keyboard/focus notifications through dispatch(event, now_ms)
    // - call tick(now_ms) from a frame loop / timer while the session is busy
    let mut page = Page {
        scroll_top: 0.0,
        transform: None,
        focused: true,
    };
    let mut session = Session::scroll(Platform::Ios);
    let options = KeyboardOptions::new().with_margin(12.0);
    session.ensure_input_visibility(&mut page, Some(&options));

    session.dispatch(&mut page, KeyboardEvent::WillShow { height: 320.0 }, 0);

    let mut now_ms = 0u64;
    while session.tick(&mut page, now_ms) {
        if session.is_animating() && now_ms % 64 == 0 {
            println!("t={now_ms} scroll_top={:.1}", page.scroll_top);
        }
        now_ms += 16;
    }
    println!(
        "settled: scroll_top={} input={:?} offset={}",
        page.scroll_top,
        page.bounding_rect(INPUT),
        session.controller().offset()
    );

    session.dispatch(&mut page, KeyboardEvent::DidHide, now_ms);
    session.remove_listeners(&mut page);
}
