use crate::*;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use keyboard_inset::{Bounds, Dom, KeyboardEvent, KeyboardOptions, Platform, Selection};

#[derive(Clone, Debug)]
struct Node {
    parent: Option<usize>,
    tag: &'static str,
    rect: Bounds,
    transform: Option<(f64, String)>,
    scroll_top: f64,
    selection: Option<Selection>,
}

/// A webview stand-in that records every call the session makes.
#[derive(Debug)]
struct MockHost {
    native: bool,
    nodes: Vec<Node>,
    viewport_height: f64,
    active: Option<usize>,
    next_listener: u32,
    added: Vec<ListenerKind>,
    removed: Vec<u32>,
    focus_calls: Vec<usize>,
    blur_calls: Vec<usize>,
    scroll_writes: Vec<(usize, f64)>,
}

impl MockHost {
    /// html > ion-content (0..800) > input (500..550), focused.
    fn page(native: bool) -> (Self, usize, usize) {
        let mut host = Self {
            native,
            nodes: Vec::new(),
            viewport_height: 800.0,
            active: None,
            next_listener: 0,
            added: Vec::new(),
            removed: Vec::new(),
            focus_calls: Vec::new(),
            blur_calls: Vec::new(),
            scroll_writes: Vec::new(),
        };
        let root = host.add(None, "html", 0.0, 800.0);
        let content = host.add(Some(root), "ion-content", 0.0, 800.0);
        let input = host.add(Some(content), "textarea", 500.0, 550.0);
        host.nodes[input].selection = Some(Selection::new(2, 5));
        host.active = Some(input);
        (host, content, input)
    }

    fn add(&mut self, parent: Option<usize>, tag: &'static str, top: f64, bottom: f64) -> usize {
        self.nodes.push(Node {
            parent,
            tag,
            rect: Bounds::new(top, bottom),
            transform: None,
            scroll_top: 0.0,
            selection: None,
        });
        self.nodes.len() - 1
    }

    fn offset_of(&self, node: usize) -> f64 {
        self.nodes[node].transform.as_ref().map_or(0.0, |(dy, _)| *dy)
    }
}

impl Dom for MockHost {
    type Node = usize;

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn tag_name(&self, node: usize) -> &str {
        self.nodes[node].tag
    }

    fn attribute(&self, _node: usize, _name: &str) -> Option<&str> {
        None
    }

    fn bounding_rect(&self, node: usize) -> Bounds {
        let mut dy = self.offset_of(node);
        let mut cur = self.nodes[node].parent;
        while let Some(p) = cur {
            dy += self.offset_of(p) - self.nodes[p].scroll_top;
            cur = self.nodes[p].parent;
        }
        self.nodes[node].rect.shifted(dy)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn active_element(&self) -> Option<usize> {
        self.active
    }

    fn scroll_top(&self, node: usize) -> f64 {
        self.nodes[node].scroll_top
    }

    fn selection_range(&self, node: usize) -> Option<Selection> {
        self.nodes[node].selection
    }
}

impl Host for MockHost {
    type Listener = u32;

    fn is_native_platform(&self) -> bool {
        self.native
    }

    fn add_listener(&mut self, kind: ListenerKind) -> u32 {
        self.added.push(kind);
        self.next_listener += 1;
        self.next_listener
    }

    fn remove_listener(&mut self, listener: u32) {
        self.removed.push(listener);
    }

    fn set_transform(&mut self, node: usize, offset: Option<f64>, transition: &str) {
        self.nodes[node].transform = offset.map(|dy| (dy, String::from(transition)));
    }

    fn set_scroll_top(&mut self, node: usize, top: f64) {
        self.nodes[node].scroll_top = top;
        self.scroll_writes.push((node, top));
    }

    fn focus(&mut self, node: usize) {
        self.active = Some(node);
        self.focus_calls.push(node);
    }

    fn blur(&mut self, node: usize) {
        if self.active == Some(node) {
            self.active = None;
        }
        self.blur_calls.push(node);
    }

    fn set_selection_range(&mut self, node: usize, selection: Selection) {
        self.nodes[node].selection = Some(selection);
    }
}

const SHOW: KeyboardEvent<usize> = KeyboardEvent::WillShow { height: 300.0 };

fn margin(px: f64) -> KeyboardOptions {
    KeyboardOptions::new().with_margin(px)
}

#[test]
fn ensure_registers_listeners_exactly_once() {
    let (mut host, _, _) = MockHost::page(true);
    let mut s = Session::transform(Platform::Ios);

    for _ in 0..3 {
        assert!(s.ensure_input_visibility(&mut host, None));
    }
    assert!(s.is_listening());
    assert_eq!(
        host.added,
        vec![
            ListenerKind::KeyboardWillShow,
            ListenerKind::KeyboardWillHide,
            ListenerKind::FocusIn,
        ]
    );
}

#[test]
fn scroll_session_listens_for_did_hide() {
    let (mut host, _, _) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Android);
    s.ensure_input_visibility(&mut host, None);
    assert_eq!(host.added[1], ListenerKind::KeyboardDidHide);
}

#[test]
fn ensure_applies_options_on_every_call() {
    let (mut host, _, _) = MockHost::page(true);
    let mut s = Session::transform(Platform::Ios);
    s.ensure_input_visibility(&mut host, Some(&margin(4.0)));
    assert_eq!(s.controller().config().margin, 4.0);
    s.ensure_input_visibility(&mut host, Some(&margin(30.0)));
    assert_eq!(s.controller().config().margin, 30.0);
    s.ensure_input_visibility(&mut host, None);
    assert_eq!(s.controller().config().margin, 30.0);
    assert_eq!(host.added.len(), 3);
}

#[test]
fn non_native_host_is_left_alone() {
    let (mut host, content, _) = MockHost::page(false);
    let mut s = Session::transform(Platform::Android);

    assert!(!s.ensure_input_visibility(&mut host, Some(&margin(50.0))));
    assert!(!s.is_listening());
    assert!(host.added.is_empty());
    assert_ne!(s.controller().config().margin, 50.0);

    s.dispatch(&mut host, SHOW, 0);
    assert_eq!(host.nodes[content].transform, None);
    assert_eq!(s.controller().keyboard_height(), 0.0);
}

#[test]
fn remove_listeners_is_safe_and_complete() {
    let (mut host, content, _) = MockHost::page(true);
    let mut s = Session::transform(Platform::Android);

    s.remove_listeners(&mut host);
    assert!(host.removed.is_empty());

    s.ensure_input_visibility(&mut host, None);
    s.remove_listeners(&mut host);
    assert_eq!(host.removed, vec![1, 2, 3]);
    assert!(!s.is_listening());
    s.remove_listeners(&mut host);
    assert_eq!(host.removed.len(), 3);

    // Events no longer reach the controller.
    s.dispatch(&mut host, SHOW, 0);
    assert_eq!(host.nodes[content].transform, None);

    // Setting up again registers a fresh set.
    s.ensure_input_visibility(&mut host, None);
    assert_eq!(host.added.len(), 6);
}

#[test]
fn transform_session_shifts_and_restores_content() {
    let (mut host, content, input) = MockHost::page(true);
    let mut s = Session::transform(Platform::Android);
    s.ensure_input_visibility(
        &mut host,
        Some(&margin(8.0).with_transition("transform 100ms linear")),
    );

    s.dispatch(&mut host, SHOW, 0);
    assert_eq!(
        host.nodes[content].transform,
        Some((-58.0, String::from("transform 100ms linear")))
    );
    assert_eq!(host.bounding_rect(input), Bounds::new(442.0, 492.0));
    // Nothing is deferred with a transform.
    assert!(!s.is_busy());

    s.dispatch(&mut host, KeyboardEvent::WillHide, 10);
    assert_eq!(host.nodes[content].transform, None);
    assert_eq!(s.controller().offset(), 0.0);
    assert_eq!(s.controller().target(), None);
    assert!(host.blur_calls.is_empty());
}

#[test]
fn scroll_session_animates_and_refocuses() {
    let (mut host, content, input) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Android);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));

    s.dispatch(&mut host, SHOW, 0);
    assert!(s.is_busy());
    assert_eq!(s.next_timer_ms(), Some(0));

    assert!(s.tick(&mut host, 0));
    assert!(s.is_animating());
    assert_eq!(host.nodes[content].scroll_top, 0.0);

    s.tick(&mut host, 75);
    let mid = host.nodes[content].scroll_top;
    assert!(mid > 0.0 && mid < 58.0, "mid={mid}");

    s.tick(&mut host, 150);
    assert_eq!(host.nodes[content].scroll_top, 58.0);
    assert!(!s.is_animating());
    assert_eq!(s.next_timer_ms(), Some(200));
    assert_eq!(host.bounding_rect(input), Bounds::new(442.0, 492.0));

    // The caret moves while the animation runs; the saved selection wins.
    host.nodes[input].selection = Some(Selection::caret(0));
    assert!(!s.tick(&mut host, 200));
    assert_eq!(host.focus_calls, vec![input]);
    assert_eq!(host.nodes[input].selection, Some(Selection::new(2, 5)));

    let writes = host.scroll_writes.len();
    assert!(!s.tick(&mut host, 1_000));
    assert_eq!(host.scroll_writes.len(), writes);
}

#[test]
fn scroll_session_waits_for_ios_settle_delay() {
    let (mut host, content, _) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Ios);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));

    s.dispatch(&mut host, SHOW, 1_000);
    assert_eq!(s.next_timer_ms(), Some(1_350));
    s.tick(&mut host, 1_349);
    assert!(!s.is_animating());
    assert!(host.scroll_writes.is_empty());

    s.tick(&mut host, 1_350);
    assert!(s.is_animating());
    s.tick(&mut host, 2_000);
    assert_eq!(host.nodes[content].scroll_top, 58.0);
}

#[test]
fn scroll_session_hide_blurs_and_drops_pending_work() {
    let (mut host, content, input) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Ios);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));

    s.dispatch(&mut host, SHOW, 0);
    s.dispatch(&mut host, KeyboardEvent::DidHide, 100);
    assert_eq!(host.blur_calls, vec![input]);
    assert_eq!(host.active_element(), None);

    // The settle timer still fires but finds a stale task.
    assert!(!s.tick(&mut host, 400));
    assert!(host.scroll_writes.is_empty());
    assert_eq!(host.nodes[content].scroll_top, 0.0);
    assert_eq!(s.controller().offset(), 0.0);
}

#[test]
fn scroll_session_hide_stops_running_animation() {
    let (mut host, content, _) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Android).with_easing(Easing::Linear);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));

    s.dispatch(&mut host, SHOW, 0);
    s.tick(&mut host, 0);
    s.tick(&mut host, 20);
    assert!(s.is_animating());
    let partial = host.nodes[content].scroll_top;
    assert!(partial > 0.0 && partial < 58.0, "partial={partial}");

    s.dispatch(&mut host, KeyboardEvent::DidHide, 30);
    let writes = host.scroll_writes.len();
    assert!(!s.tick(&mut host, 40));
    assert!(!s.is_animating());
    assert!(!s.tick(&mut host, 150));
    assert_eq!(host.scroll_writes.len(), writes);
    assert_eq!(host.nodes[content].scroll_top, partial);
    assert!(host.focus_calls.is_empty());
}

#[test]
fn remove_listeners_drops_pending_work() {
    let (mut host, _, _) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Ios);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));

    s.dispatch(&mut host, SHOW, 0);
    assert_eq!(s.next_timer_ms(), Some(350));
    s.remove_listeners(&mut host);
    assert!(!s.is_busy());
    assert_eq!(s.next_timer_ms(), None);

    let (mut host, content, _) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Android);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));
    s.dispatch(&mut host, SHOW, 0);
    s.tick(&mut host, 0);
    s.tick(&mut host, 20);
    assert!(s.is_animating());
    s.remove_listeners(&mut host);
    assert!(!s.is_animating());
    let writes = host.scroll_writes.len();
    assert!(!s.tick(&mut host, 150));
    assert_eq!(host.scroll_writes.len(), writes);
    assert!(host.nodes[content].scroll_top < 58.0);
}

#[test]
fn scroll_session_skips_refocus_after_focus_moved() {
    let (mut host, _, input) = MockHost::page(true);
    let mut s = Session::scroll(Platform::Android).with_easing(Easing::Linear);
    s.ensure_input_visibility(&mut host, Some(&margin(8.0)));

    s.dispatch(&mut host, SHOW, 0);
    s.tick(&mut host, 0);
    s.tick(&mut host, 150);
    host.active = None;
    s.tick(&mut host, 200);
    assert!(host.focus_calls.is_empty());
    assert_ne!(host.active_element(), Some(input));
}

#[test]
fn tween_samples_endpoints_and_is_monotonic() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        let tween = Tween::new(10.0, 110.0, 100, 200, easing);
        assert_eq!(tween.sample(0), 10.0);
        assert_eq!(tween.sample(100), 10.0);
        assert_eq!(tween.sample(300), 110.0);
        assert_eq!(tween.sample(1_000), 110.0);
        assert_eq!(tween.end_ms(), 300);

        let mut last = tween.sample(100);
        for now in (100..=300).step_by(10) {
            let v = tween.sample(now);
            assert!(v >= last, "{easing:?} at {now}");
            last = v;
        }
        assert!(!tween.is_done(299));
        assert!(tween.is_done(300));
    }

    // Zero duration is bumped to a single millisecond.
    let instant = Tween::new(0.0, 5.0, 0, 0, Easing::Linear);
    assert_eq!(instant.duration_ms, 1);
    assert_eq!(instant.sample(1), 5.0);

    let down = Tween::new(58.0, 0.0, 0, 100, Easing::Linear);
    assert_eq!(down.sample(50), 29.0);
}

#[test]
fn timers_fire_in_due_then_schedule_order() {
    use keyboard_inset::Task;

    let refocus = |element| Task::Refocus {
        generation: 1,
        element,
        selection: None,
    };
    let mut timers = Timers::new();
    timers.schedule(50, refocus(1usize));
    timers.schedule(10, refocus(2));
    timers.schedule(50, refocus(3));
    assert_eq!(timers.len(), 3);
    assert_eq!(timers.next_due_ms(), Some(10));

    assert_eq!(timers.pop_due(9), None);
    assert_eq!(timers.pop_due(10), Some(refocus(2)));
    assert_eq!(timers.pop_due(49), None);
    assert_eq!(timers.pop_due(60), Some(refocus(1)));
    assert_eq!(timers.pop_due(60), Some(refocus(3)));
    assert!(timers.is_empty());
    assert_eq!(timers.pop_due(u64::MAX), None);
}
