use alloc::string::String;
use alloc::vec::Vec;

use crate::{Config, Direction, PlatformProfile, Selection, Shift, Strategy};

/// Deferred work, handed back to the controller through [`crate::Controller::run_task`].
///
/// Each task remembers the generation it was scheduled under. Once a newer adjustment starts
/// (or the keyboard hides) the task is stale and the controller ignores it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Task<N> {
    /// Read geometry and start the scroll animation.
    Measure {
        generation: u64,
        element: N,
        container: N,
    },
    /// Give focus and the caret back to the element after the animation.
    Refocus {
        generation: u64,
        element: N,
        selection: Option<Selection>,
    },
}

impl<N> Task<N> {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Measure { generation, .. } | Self::Refocus { generation, .. } => *generation,
        }
    }
}

/// A side effect the host has to carry out.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<N> {
    /// Translate `container` vertically by `offset` pixels.
    SetTransform {
        container: N,
        offset: f64,
        transition: String,
    },
    /// Remove the transform property from `container` entirely.
    ClearTransform { container: N, transition: String },
    /// Run `task` after `delay_ms`.
    Schedule { delay_ms: u64, task: Task<N> },
    /// Animate `container`'s scroll top, then run `then` after `then_delay_ms`.
    AnimateScroll {
        container: N,
        from: f64,
        to: f64,
        duration_ms: u64,
        then: Task<N>,
        then_delay_ms: u64,
    },
    Focus(N),
    SetSelection { node: N, selection: Selection },
    Blur(N),
}

/// Turns offsets into commands for one strategy.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Effector {
    pub(crate) strategy: Strategy,
    pub(crate) profile: &'static PlatformProfile,
}

impl Effector {
    /// The container's visible top in natural coordinates.
    ///
    /// A transform moves the container itself; a native scroll only moves its content.
    pub(crate) fn natural_container_top(&self, displayed_top: f64, offset: f64) -> f64 {
        match self.strategy {
            Strategy::Transform => displayed_top - offset,
            Strategy::Scroll => displayed_top,
        }
    }

    pub(crate) fn apply_transform<N>(
        &self,
        out: &mut Vec<Command<N>>,
        config: &Config,
        container: N,
        shift: Shift,
    ) {
        debug_assert_eq!(self.strategy, Strategy::Transform);
        out.push(Command::SetTransform {
            container,
            offset: shift.offset,
            transition: config
                .transition(self.profile.platform, Direction::Show)
                .into(),
        });
    }

    /// Plans the animated scroll for `shift`. Returns the offset actually covered, which is
    /// smaller than `shift.delta` when the scroll top would go negative.
    pub(crate) fn animate_scroll<N>(
        &self,
        out: &mut Vec<Command<N>>,
        container: N,
        scroll_top: f64,
        shift: Shift,
        then: Task<N>,
    ) -> f64 {
        debug_assert_eq!(self.strategy, Strategy::Scroll);
        let to = (scroll_top - shift.delta).max(0.0);
        let covered = scroll_top - to;
        out.push(Command::AnimateScroll {
            container,
            from: scroll_top,
            to,
            duration_ms: self.profile.scroll.duration_ms(covered),
            then,
            then_delay_ms: self.profile.refocus_delay_ms,
        });
        covered
    }

    /// Reverses an outstanding adjustment on `container`.
    ///
    /// Only a transform is undone; scrolled content is left where it is.
    pub(crate) fn restore<N>(&self, out: &mut Vec<Command<N>>, config: &Config, container: N) {
        if self.strategy == Strategy::Transform {
            out.push(Command::ClearTransform {
                container,
                transition: config
                    .transition(self.profile.platform, Direction::Hide)
                    .into(),
            });
        }
    }
}
