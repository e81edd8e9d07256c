use crate::{GestureSample, InputKind};

/// Stray micro-movements arriving this long after the previous gesture ended
/// are ignored until they add up to real motion.
pub(crate) const DEBOUNCE_WINDOW_MS: u64 = 300;
/// Accumulated distance (per axis) below which post-gesture samples stay
/// debounced.
pub(crate) const DEBOUNCE_DISTANCE_PX: f64 = 10.0;
/// The velocity estimate at release only looks at motion inside this window;
/// a longer drag re-bases its checkpoint.
pub(crate) const CHECKPOINT_WINDOW_MS: u64 = 300;
/// Momentum only kicks in when the (checkpointed) drag took less than this.
pub(crate) const MOMENTUM_MAX_MS: u64 = 300;
/// Flick: released faster than this...
pub(crate) const FLICK_MAX_MS: u64 = 200;
/// ...having moved less than this on both axes.
pub(crate) const FLICK_MAX_PX: f64 = 100.0;

/// Which way a gesture is allowed to move once early motion picked an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionLock {
    /// Not enough movement yet to decide.
    Undecided,
    Horizontal,
    Vertical,
    /// Near-tie (or free-scroll mode): both axes move together.
    Free,
}

/// One active pointer interaction, created on a qualifying start sample and
/// destroyed when the gesture ends.
#[derive(Clone, Debug)]
pub(crate) struct GestureState {
    /// Channel that started the gesture; samples from other channels are
    /// ignored until this one ends.
    pub kind: InputKind,
    /// Last sample's page coordinates.
    pub point_x: f64,
    pub point_y: f64,
    /// Accumulated raw distance since the gesture started.
    pub dist_x: f64,
    pub dist_y: f64,
    /// Position at the current velocity checkpoint.
    pub start_x: f64,
    pub start_y: f64,
    /// Time of the current velocity checkpoint.
    pub start_time: u64,
    pub lock: DirectionLock,
    /// Whether any real movement happened; a gesture that never moves is a
    /// tap/click, not a scroll.
    pub moved: bool,
}

impl GestureState {
    pub fn new(kind: InputKind, sample: GestureSample, x: f64, y: f64) -> Self {
        Self {
            kind,
            point_x: sample.page_x,
            point_y: sample.page_y,
            dist_x: 0.0,
            dist_y: 0.0,
            start_x: x,
            start_y: y,
            start_time: sample.timestamp,
            lock: DirectionLock::Undecided,
            moved: false,
        }
    }
}

/// Decides the direction lock from accumulated absolute distances. The axis
/// that leads by more than `threshold` wins; a near-tie leaves the gesture
/// free.
pub(crate) fn decide_lock(abs_dist_x: f64, abs_dist_y: f64, threshold: f64) -> DirectionLock {
    if abs_dist_x > abs_dist_y + threshold {
        DirectionLock::Horizontal
    } else if abs_dist_y >= abs_dist_x + threshold {
        DirectionLock::Vertical
    } else {
        DirectionLock::Free
    }
}

/// Applies a drag delta to one axis, damping it when the tentative position
/// leaves `[limit, 0]`: a third of the delta with bounce enabled, a hard
/// clamp to the nearest bound otherwise.
pub(crate) fn apply_resistance(position: f64, delta: f64, limit: f64, bounce: bool) -> f64 {
    let tentative = position + delta;
    if tentative > 0.0 || tentative < limit {
        if bounce {
            position + delta / 3.0
        } else if tentative > 0.0 {
            0.0
        } else {
            limit
        }
    } else {
        tentative
    }
}

/// Direction sign of a raw (pre-damping) delta.
pub(crate) fn direction_sign(delta: f64) -> i8 {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}
