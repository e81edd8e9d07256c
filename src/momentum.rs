/// Default deceleration, in px/ms².
pub const DECELERATION: f64 = 0.0006;

/// A deceleration-based destination and how long it takes to get there.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Momentum {
    /// Target position, rounded to the nearest integer.
    pub destination: f64,
    /// Milliseconds. Not rounded.
    pub duration: f64,
}

impl Momentum {
    /// A plan that goes nowhere; callers treat zero duration as "already
    /// settled".
    pub fn rest(position: f64) -> Self {
        Self {
            destination: position,
            duration: 0.0,
        }
    }
}

/// Projects a momentum destination for one axis from the displacement of a
/// just-released drag.
///
/// `current` is the position at release, `start` the position at the drag's
/// last velocity checkpoint and `elapsed_ms` the time since that checkpoint
/// (must be nonzero — the gesture machine only evaluates momentum for real
/// timestamp deltas). `lower_bound` is the axis limit (≤ 0); a destination
/// that would exit `[lower_bound, 0]` is re-targeted to a softened boundary
/// position scaled by `boundary_slack` (the viewport size on that axis when
/// bounce is enabled, 0 otherwise) and the duration is recomputed for the
/// shorter distance at the same speed.
pub fn momentum(
    current: f64,
    start: f64,
    elapsed_ms: f64,
    lower_bound: f64,
    boundary_slack: f64,
    deceleration: f64,
) -> Momentum {
    let distance = current - start;
    let speed = distance.abs() / elapsed_ms;

    let mut destination =
        current + (speed * speed) / (2.0 * deceleration) * if distance < 0.0 { -1.0 } else { 1.0 };
    let mut duration = speed / deceleration;

    if destination < lower_bound {
        destination = if boundary_slack != 0.0 {
            lower_bound - (boundary_slack / 2.5) * (speed / 8.0)
        } else {
            lower_bound
        };
        duration = (destination - current).abs() / speed;
    } else if destination > 0.0 {
        destination = if boundary_slack != 0.0 {
            (boundary_slack / 2.5) * (speed / 8.0)
        } else {
            0.0
        };
        duration = (current.abs() + destination) / speed;
    }

    strace!(
        current,
        start,
        elapsed_ms,
        destination,
        duration,
        "momentum"
    );

    Momentum {
        destination: destination.round(),
        duration,
    }
}
