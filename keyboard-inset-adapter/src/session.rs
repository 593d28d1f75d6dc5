use alloc::vec::Vec;

use keyboard_inset::{
    Command, Controller, KeyboardEvent, KeyboardOptions, Platform, Strategy, Task,
};

use crate::{Easing, Host, ListenerKind, Timers, Tween};

struct Listeners<L> {
    show: L,
    hide: L,
    focus_in: L,
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation<N> {
    container: N,
    tween: Tween,
    then: Task<N>,
    then_delay_ms: u64,
}

/// A framework-neutral runtime around [`Controller`].
///
/// The session owns the listener handles, the timer queue and the running scroll animation, and
/// executes controller commands against a [`Host`]. It does not hold the host itself. Adapters
/// drive it by calling:
/// - `ensure_input_visibility` once at startup (repeat calls only update options)
/// - `dispatch(event, now_ms)` when a registered listener fires
/// - `tick(now_ms)` each frame/timer tick while `is_busy()` (for delays and the scroll tween)
pub struct Session<H: Host> {
    controller: Controller<H::Node>,
    listeners: Option<Listeners<H::Listener>>,
    timers: Timers<H::Node>,
    animation: Option<ScrollAnimation<H::Node>>,
    easing: Easing,
}

impl<H: Host> Session<H> {
    pub fn new(platform: Platform, strategy: Strategy) -> Self {
        Self {
            controller: Controller::new(platform, strategy),
            listeners: None,
            timers: Timers::new(),
            animation: None,
            easing: Easing::default(),
        }
    }

    /// Shifts content with a CSS transform.
    pub fn transform(platform: Platform) -> Self {
        Self::new(platform, Strategy::Transform)
    }

    /// Animates the container's native scroll position.
    pub fn scroll(platform: Platform) -> Self {
        Self::new(platform, Strategy::Scroll)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn controller(&self) -> &Controller<H::Node> {
        &self.controller
    }

    pub fn is_listening(&self) -> bool {
        self.listeners.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether timers or an animation still need `tick` calls.
    pub fn is_busy(&self) -> bool {
        self.animation.is_some() || !self.timers.is_empty()
    }

    /// The earliest time a pending timer wants to run.
    pub fn next_timer_ms(&self) -> Option<u64> {
        self.timers.next_due_ms()
    }

    /// Sets up keyboard handling.
    ///
    /// Registers the keyboard-show, keyboard-hide and focus-in listeners the first time it is
    /// called; later calls only apply `options`. Does nothing at all on a non-native host.
    ///
    /// Returns `true` when the listeners are registered.
    pub fn ensure_input_visibility(
        &mut self,
        host: &mut H,
        options: Option<&KeyboardOptions>,
    ) -> bool {
        if !host.is_native_platform() {
            kdebug!("ensure_input_visibility: not a native platform");
            return false;
        }
        if let Some(options) = options {
            self.set_options(options);
        }
        if self.listeners.is_none() {
            let hide = ListenerKind::hide_for(self.controller.strategy());
            self.listeners = Some(Listeners {
                show: host.add_listener(ListenerKind::KeyboardWillShow),
                hide: host.add_listener(hide),
                focus_in: host.add_listener(ListenerKind::FocusIn),
            });
            kdebug!(?hide, "listeners registered");
        }
        true
    }

    /// Unregisters every listener and drops pending timers and any running animation. Safe to
    /// call when nothing was registered.
    pub fn remove_listeners(&mut self, host: &mut H) {
        let Some(listeners) = self.listeners.take() else {
            return;
        };
        host.remove_listener(listeners.show);
        host.remove_listener(listeners.hide);
        host.remove_listener(listeners.focus_in);
        self.timers.clear();
        self.animation = None;
        kdebug!("listeners removed");
    }

    /// Applies an options patch; later fields override earlier ones.
    pub fn set_options(&mut self, options: &KeyboardOptions) {
        self.controller.set_options(options);
    }

    /// Feeds one host notification to the controller and executes what it decides.
    ///
    /// Events arriving while no listeners are registered are ignored.
    pub fn dispatch(&mut self, host: &mut H, event: KeyboardEvent<H::Node>, now_ms: u64) {
        if self.listeners.is_none() {
            ktrace!(?event, "dispatch: not listening");
            return;
        }
        let commands = self.controller.handle(&*host, event);
        self.execute(host, commands, now_ms);
    }

    /// Advances the session: runs due timers, then steps the scroll animation.
    ///
    /// Returns `true` while there is still pending work.
    pub fn tick(&mut self, host: &mut H, now_ms: u64) -> bool {
        while let Some(task) = self.timers.pop_due(now_ms) {
            let commands = self.controller.run_task(&*host, task);
            self.execute(host, commands, now_ms);
        }

        if let Some(animation) = self.animation {
            if !self.controller.is_current(&animation.then) {
                kdebug!("dropping stale scroll animation");
                self.animation = None;
                return self.is_busy();
            }
            host.set_scroll_top(animation.container, animation.tween.sample(now_ms));
            if animation.tween.is_done(now_ms) {
                self.animation = None;
                self.timers.schedule(
                    now_ms.saturating_add(animation.then_delay_ms),
                    animation.then,
                );
            }
        }

        self.is_busy()
    }

    fn execute(&mut self, host: &mut H, commands: Vec<Command<H::Node>>, now_ms: u64) {
        for command in commands {
            match command {
                Command::SetTransform {
                    container,
                    offset,
                    transition,
                } => host.set_transform(container, Some(offset), &transition),
                Command::ClearTransform {
                    container,
                    transition,
                } => host.set_transform(container, None, &transition),
                Command::Schedule { delay_ms, task } => {
                    self.timers.schedule(now_ms.saturating_add(delay_ms), task);
                }
                Command::AnimateScroll {
                    container,
                    from,
                    to,
                    duration_ms,
                    then,
                    then_delay_ms,
                } => {
                    if self.animation.is_some() {
                        kdebug!("replacing running scroll animation");
                    }
                    self.animation = Some(ScrollAnimation {
                        container,
                        tween: Tween::new(from, to, now_ms, duration_ms, self.easing),
                        then,
                        then_delay_ms,
                    });
                }
                Command::Focus(node) => host.focus(node),
                Command::SetSelection { node, selection } => {
                    host.set_selection_range(node, selection);
                }
                Command::Blur(node) => host.blur(node),
            }
        }
    }
}
