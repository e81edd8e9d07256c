use crate::Easing;

/// An explicit-stepping animation: sampled on every `tick` until done, then
/// snapped to the exact destination.
///
/// Both axes interpolate with the same eased progress value, so diagonal
/// moves stay on a straight line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    pub start_ms: u64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(
        from: (f64, f64),
        to: (f64, f64),
        start_ms: u64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        Self {
            from_x: from.0,
            from_y: from.1,
            to_x: to.0,
            to_y: to.1,
            start_ms,
            duration_ms: duration_ms.max(1.0),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) as f64 >= self.duration_ms
    }

    /// Interpolated position at `now_ms`. Callers snap to `(to_x, to_y)`
    /// once `is_done` reports true, never to the sampled value.
    pub fn sample(&self, now_ms: u64) -> (f64, f64) {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        let t = (elapsed / self.duration_ms).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        (
            self.from_x + (self.to_x - self.from_x) * eased,
            self.from_y + (self.to_y - self.from_y) * eased,
        )
    }
}

/// A delegated animation: the rendering layer runs the transition natively
/// and reports back with the request's `id` when it finishes.
///
/// The engine keeps enough information here to compute the interpolated
/// position if the transition is interrupted mid-flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Correlation id; completion events carrying any other id are ignored.
    pub id: u64,
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    pub start_ms: u64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    /// Declarative curve for the rendering layer.
    pub fn curve_descriptor(&self) -> &'static str {
        self.easing.curve_descriptor()
    }

    /// Best estimate of where the native transition currently is.
    pub fn sample(&self, now_ms: u64) -> (f64, f64) {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        let t = (elapsed / self.duration_ms.max(1.0)).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        (
            self.from_x + (self.to_x - self.from_x) * eased,
            self.from_y + (self.to_y - self.from_y) * eased,
        )
    }
}

/// What (if anything) is currently animating the position.
///
/// Exactly one animation exists at a time; cancelling is a synchronous
/// transition back to `Idle`, so a `tick` issued right after observes no
/// further motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum AnimationState {
    #[default]
    Idle,
    Stepping(Tween),
    Transitioning {
        transition: Transition,
        /// Whether the rendering sink has picked the request up yet.
        dispatched: bool,
    },
}

impl AnimationState {
    pub fn is_animating(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
