use alloc::vec::Vec;
use core::fmt;

use crate::effect::Effector;
use crate::{
    AdjustmentState, Command, Config, Dom, Geometry, KeyboardOptions, Phase, Platform,
    PlatformProfile, Shift, Strategy, Task, find_scroll_container, is_keyboard_focusable,
};

/// Inbound notifications from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyboardEvent<N> {
    /// The keyboard is about to appear (or change size).
    WillShow { height: f64 },
    WillHide,
    DidHide,
    /// An element received focus anywhere in the document.
    FocusIn(N),
    /// The webview changed size, e.g. on rotation.
    Resize,
}

/// Keeps the focused input above the on-screen keyboard.
///
/// This type does not hold any UI objects. The host feeds it [`KeyboardEvent`]s and executes the
/// [`Command`]s it returns; delayed work comes back through [`Controller::run_task`].
///
/// State:
/// - keyboard height (`0` when hidden)
/// - the element last adjusted for, and its scroll container
/// - the total correction outstanding on that container
/// - a generation counter that invalidates deferred tasks from earlier adjustments
pub struct Controller<N> {
    config: Config,
    effector: Effector,
    keyboard_height: f64,
    target: Option<N>,
    container: Option<N>,
    offset: f64,
    generation: u64,
}

impl<N: Copy + Eq + fmt::Debug> Controller<N> {
    pub fn new(platform: Platform, strategy: Strategy) -> Self {
        kdebug!(%platform, ?strategy, "Controller::new");
        Self {
            config: Config::default(),
            effector: Effector {
                strategy,
                profile: PlatformProfile::for_platform(platform),
            },
            keyboard_height: 0.0,
            target: None,
            container: None,
            offset: 0.0,
            generation: 0,
        }
    }

    pub fn with_options(mut self, options: &KeyboardOptions) -> Self {
        self.set_options(options);
        self
    }

    /// Applies an options patch. Takes effect from the next adjustment on.
    pub fn set_options(&mut self, options: &KeyboardOptions) {
        self.config.apply(options);
        ktrace!(margin = self.config.margin, "Controller::set_options");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.effector.profile.platform
    }

    pub fn strategy(&self) -> Strategy {
        self.effector.strategy
    }

    pub fn profile(&self) -> &'static PlatformProfile {
        self.effector.profile
    }

    pub fn keyboard_height(&self) -> f64 {
        self.keyboard_height
    }

    pub fn is_keyboard_visible(&self) -> bool {
        self.keyboard_height > 0.0
    }

    pub fn phase(&self) -> Phase {
        if self.is_keyboard_visible() {
            Phase::KeyboardVisible
        } else {
            Phase::Idle
        }
    }

    /// The element the current adjustment was made for.
    pub fn target(&self) -> Option<N> {
        self.target
    }

    pub fn container(&self) -> Option<N> {
        self.container
    }

    /// The total correction currently outstanding on [`Controller::container`].
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> AdjustmentState {
        AdjustmentState {
            phase: self.phase(),
            keyboard_height: self.keyboard_height,
            offset: self.offset,
            generation: self.generation,
        }
    }

    /// Whether `task` still belongs to the current adjustment.
    pub fn is_current(&self, task: &Task<N>) -> bool {
        let element = match task {
            Task::Measure { element, .. } | Task::Refocus { element, .. } => *element,
        };
        task.generation() == self.generation && self.target == Some(element)
    }

    /// Processes one event and returns the side effects to carry out, in order.
    pub fn handle<D: Dom<Node = N>>(&mut self, dom: &D, event: KeyboardEvent<N>) -> Vec<Command<N>> {
        let mut out = Vec::new();
        match event {
            KeyboardEvent::WillShow { height } => self.show(dom, height, &mut out),
            KeyboardEvent::WillHide => {
                if self.strategy() == Strategy::Transform {
                    self.hide(&mut out);
                }
            }
            KeyboardEvent::DidHide => {
                if self.strategy() == Strategy::Scroll {
                    self.hide(&mut out);
                }
            }
            KeyboardEvent::FocusIn(node) => self.focus_in(dom, node, &mut out),
            KeyboardEvent::Resize => {
                if self.is_keyboard_visible() {
                    self.adjust(dom, self.target, &mut out);
                }
            }
        }
        out
    }

    /// Runs deferred work scheduled by an earlier [`Command::Schedule`] or
    /// [`Command::AnimateScroll`]. Stale tasks are dropped.
    pub fn run_task<D: Dom<Node = N>>(&mut self, dom: &D, task: Task<N>) -> Vec<Command<N>> {
        let mut out = Vec::new();
        if !self.is_current(&task) {
            kdebug!(
                task_generation = task.generation(),
                generation = self.generation,
                "Controller::run_task: dropping stale task"
            );
            return out;
        }

        match task {
            Task::Measure {
                generation,
                element,
                container,
            } => {
                if !self.is_keyboard_visible() {
                    return out;
                }
                let Some(shift) = self.measure(dom, element, container) else {
                    return out;
                };
                let then = Task::Refocus {
                    generation,
                    element,
                    selection: dom.selection_range(element),
                };
                let scroll_top = dom.scroll_top(container);
                let covered = self
                    .effector
                    .animate_scroll(&mut out, container, scroll_top, shift, then);
                self.offset += covered;
                kdebug!(
                    ?element,
                    delta = shift.delta,
                    covered,
                    offset = self.offset,
                    "scroll adjustment"
                );
            }
            Task::Refocus {
                element, selection, ..
            } => {
                if dom.active_element() != Some(element) {
                    return out;
                }
                out.push(Command::Focus(element));
                if let Some(selection) = selection {
                    out.push(Command::SetSelection {
                        node: element,
                        selection,
                    });
                }
            }
        }
        out
    }

    fn show<D: Dom<Node = N>>(&mut self, dom: &D, height: f64, out: &mut Vec<Command<N>>) {
        let focused = dom
            .active_element()
            .filter(|&node| is_keyboard_focusable(dom, node));
        let height_changed = height != self.keyboard_height;
        self.keyboard_height = height;

        if focused == self.target && !height_changed {
            ktrace!(height, "keyboard show: nothing changed");
            return;
        }
        kdebug!(height, ?focused, "keyboard show");
        self.adjust(dom, focused, out);
    }

    fn focus_in<D: Dom<Node = N>>(&mut self, dom: &D, node: N, out: &mut Vec<Command<N>>) {
        // Before the keyboard is up there is nothing to measure against; the next show handles it.
        if !self.is_keyboard_visible() || !is_keyboard_focusable(dom, node) {
            return;
        }
        if self.target == Some(node) {
            return;
        }
        kdebug!(?node, "focus in");
        self.adjust(dom, Some(node), out);
    }

    fn hide(&mut self, out: &mut Vec<Command<N>>) {
        let target = self.target.take();
        let container = self.container.take();
        let offset = core::mem::replace(&mut self.offset, 0.0);
        self.keyboard_height = 0.0;
        self.generation = self.generation.wrapping_add(1);
        kdebug!(?target, offset, "keyboard hide");

        match self.effector.strategy {
            Strategy::Transform => {
                if let Some(container) = container.filter(|_| offset != 0.0) {
                    self.effector.restore(out, &self.config, container);
                }
            }
            Strategy::Scroll => {
                // Some webviews keep the input focused after the keyboard is dismissed.
                if let Some(target) = target {
                    out.push(Command::Blur(target));
                }
            }
        }
    }

    /// One pass of locate, solve, effect for `element`.
    fn adjust<D: Dom<Node = N>>(&mut self, dom: &D, element: Option<N>, out: &mut Vec<Command<N>>) {
        let Some(element) = element else {
            return;
        };
        let Some(container) = find_scroll_container(dom, element) else {
            kdebug!(?element, "no scroll container, skipping");
            return;
        };

        if let Some(previous) = self.container.filter(|&c| c != container) {
            if self.offset != 0.0 {
                self.effector.restore(out, &self.config, previous);
            }
            self.offset = 0.0;
        }
        self.container = Some(container);
        self.target = Some(element);
        self.generation = self.generation.wrapping_add(1);

        match self.effector.strategy {
            Strategy::Transform => {
                if let Some(shift) = self.measure(dom, element, container) {
                    self.offset = shift.offset;
                    kdebug!(?element, delta = shift.delta, offset = self.offset, "transform adjustment");
                    self.effector
                        .apply_transform(out, &self.config, container, shift);
                }
            }
            Strategy::Scroll => {
                out.push(Command::Schedule {
                    delay_ms: self.effector.profile.settle_delay_ms,
                    task: Task::Measure {
                        generation: self.generation,
                        element,
                        container,
                    },
                });
            }
        }
    }

    fn measure<D: Dom<Node = N>>(&self, dom: &D, element: N, container: N) -> Option<Shift> {
        let displayed = dom.bounding_rect(element);
        let container_rect = dom.bounding_rect(container);
        Geometry {
            element: displayed.shifted(-self.offset),
            container_top: self
                .effector
                .natural_container_top(container_rect.top, self.offset),
            keyboard_top: dom.viewport_height() - self.keyboard_height,
            margin: self.config.margin,
            prior_offset: self.offset,
        }
        .solve()
    }
}

impl<N: fmt::Debug> fmt::Debug for Controller<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("strategy", &self.effector.strategy)
            .field("platform", &self.effector.profile.platform)
            .field("keyboard_height", &self.keyboard_height)
            .field("target", &self.target)
            .field("container", &self.container)
            .field("offset", &self.offset)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
