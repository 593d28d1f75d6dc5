use crate::Bounds;

/// Offsets closer than this are treated as equal.
const EPSILON: f64 = 1e-6;

/// Inputs to the offset computation.
///
/// All positions are natural, i.e. where things would be on screen with no correction applied.
/// `prior_offset` is the correction currently outstanding on the container. An element that is
/// clear without any correction keeps `prior_offset` only if it is also clear under it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub element: Bounds,
    /// Top of the container's visible region.
    pub container_top: f64,
    /// `viewport_height - keyboard_height`.
    pub keyboard_top: f64,
    pub margin: f64,
    pub prior_offset: f64,
}

/// Which edge decided the correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    /// The bottom edge is lifted clear of the keyboard.
    Bottom,
    /// The top edge is kept inside the container's visible region.
    Top,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    /// The change relative to `prior_offset`.
    pub delta: f64,
    /// The new total outstanding correction (`prior_offset + delta`).
    pub offset: f64,
    pub constraint: Constraint,
}

impl Geometry {
    /// Computes the correction needed to keep the element visible above the keyboard.
    ///
    /// Returns `None` when nothing has to change, either because the element is already clear
    /// or because the outstanding correction is already the right one.
    pub fn solve(&self) -> Option<Shift> {
        if !self.is_finite() {
            kwarn!(geometry = ?self, "Geometry::solve: non-finite input");
            return None;
        }

        let element = self.element;
        let bottom_diff = self.keyboard_top - (element.bottom + self.margin);
        let proposed_top = element.top + bottom_diff.min(0.0);
        let top_diff = if proposed_top < self.container_top {
            self.container_top + self.margin - element.top
        } else {
            0.0
        };

        let (target, constraint) = if top_diff > 0.0 {
            (top_diff, Constraint::Top)
        } else if bottom_diff < 0.0 {
            (bottom_diff, Constraint::Bottom)
        } else if element.top + self.prior_offset < self.container_top {
            // Clear on its own, but the outstanding correction has pushed it above the container.
            (self.container_top + self.margin - element.top, Constraint::Top)
        } else if element.bottom + self.prior_offset + self.margin > self.keyboard_top {
            (bottom_diff, Constraint::Bottom)
        } else {
            return None;
        };

        let delta = target - self.prior_offset;
        if delta > -EPSILON && delta < EPSILON {
            return None;
        }
        ktrace!(bottom_diff, top_diff, target, delta, "Geometry::solve");
        Some(Shift {
            delta,
            offset: target,
            constraint,
        })
    }

    fn is_finite(&self) -> bool {
        self.element.top.is_finite()
            && self.element.bottom.is_finite()
            && self.container_top.is_finite()
            && self.keyboard_top.is_finite()
            && self.margin.is_finite()
            && self.prior_offset.is_finite()
    }
}

/// Returns the new outstanding offset, or `prior_offset` unchanged when no correction is needed.
pub fn solve(
    element: Bounds,
    container_top: f64,
    keyboard_top: f64,
    margin: f64,
    prior_offset: f64,
) -> f64 {
    Geometry {
        element,
        container_top,
        keyboard_top,
        margin,
        prior_offset,
    }
    .solve()
    .map_or(prior_offset, |shift| shift.offset)
}
