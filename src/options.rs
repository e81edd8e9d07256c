use std::sync::Arc;

use crate::momentum::DECELERATION;
use crate::{Axis, Easing, Geometry, PointerTarget};

/// Predicate deciding that a pointer target should keep its platform default
/// behavior (no suppression). Any matching predicate wins.
pub type ExceptionPredicate = Arc<dyn Fn(&PointerTarget) -> bool + Send + Sync>;

/// Where the scroller reads viewport/content geometry from.
#[derive(Clone)]
pub enum GeometrySource {
    /// Fixed geometry, replaced by calling `set_geometry`.
    Value(Geometry),
    /// Re-measured on every `refresh()` (the adapter is responsible for
    /// forcing layout settlement before the provider runs).
    Provider(Arc<dyn Fn() -> Geometry + Send + Sync>),
}

impl GeometrySource {
    pub(crate) fn resolve(&self) -> Geometry {
        match self {
            Self::Value(g) => *g,
            Self::Provider(f) => f(),
        }
    }
}

impl core::fmt::Debug for GeometrySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(g) => f.debug_tuple("Value").field(g).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// The default exception table entry: interactive form controls keep their
/// platform default behavior.
pub fn form_control_exception() -> ExceptionPredicate {
    Arc::new(|target: &PointerTarget| {
        matches!(
            target.tag_name.as_str(),
            "INPUT" | "TEXTAREA" | "BUTTON" | "SELECT"
        )
    })
}

/// Configuration for [`crate::Scroller`].
///
/// Cheap to clone: closures are stored in `Arc`s. Passthrough-related fields
/// are normalized once when the scroller is built (`event_passthrough` on an
/// axis disables scrolling on it, zeroes the lock threshold and turns off
/// free-scroll and default-action suppression).
pub struct ScrollerOptions {
    pub geometry: GeometrySource,

    /// Initial position applied on construction.
    pub start_x: f64,
    pub start_y: f64,

    pub scroll_x: bool,
    pub scroll_y: bool,
    /// Disables direction locking; both axes always move together.
    pub free_scroll: bool,
    /// Pixels one axis must lead by before the gesture locks onto it.
    pub direction_lock_threshold: f64,
    /// Hand raw events on this axis back to the environment instead of
    /// capturing them; a gesture locking onto it is abandoned.
    pub event_passthrough: Option<Axis>,

    pub momentum: bool,
    /// px/ms² used by the momentum solver.
    pub deceleration: f64,

    /// Allow dragging/flinging past the limits with damped resistance,
    /// recovered by an animated bounce.
    pub bounce: bool,
    /// Bounce recovery duration, ms.
    pub bounce_time: f64,
    pub bounce_easing: Easing,

    /// Publish a synthetic `Tap` for gestures that never moved.
    pub tap: bool,
    /// Publish a synthetic `Click` for gestures that never moved.
    pub click: bool,

    /// Ask the glue layer to suppress platform defaults for captured events.
    pub prevent_default: bool,
    /// Targets matching any predicate keep their default behavior.
    pub prevent_default_exceptions: Vec<ExceptionPredicate>,

    /// Use the delegated-transition strategy where the easing curve has a
    /// descriptor; otherwise (and always for bounce/elastic) step explicitly
    /// from `tick`.
    pub delegated_transitions: bool,

    /// Debounce window for collapsing resize events into one `refresh()`.
    pub resize_polling_ms: u64,
}

impl ScrollerOptions {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: GeometrySource::Value(geometry),
            start_x: 0.0,
            start_y: 0.0,
            scroll_x: false,
            scroll_y: true,
            free_scroll: false,
            direction_lock_threshold: 5.0,
            event_passthrough: None,
            momentum: true,
            deceleration: DECELERATION,
            bounce: true,
            bounce_time: 600.0,
            bounce_easing: Easing::Circular,
            tap: false,
            click: false,
            prevent_default: true,
            prevent_default_exceptions: vec![form_control_exception()],
            delegated_transitions: false,
            resize_polling_ms: 60,
        }
    }

    pub fn with_geometry_provider(
        mut self,
        provider: impl Fn() -> Geometry + Send + Sync + 'static,
    ) -> Self {
        self.geometry = GeometrySource::Provider(Arc::new(provider));
        self
    }

    pub fn with_start(mut self, x: f64, y: f64) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    pub fn with_scroll_x(mut self, scroll_x: bool) -> Self {
        self.scroll_x = scroll_x;
        self
    }

    pub fn with_scroll_y(mut self, scroll_y: bool) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_free_scroll(mut self, free_scroll: bool) -> Self {
        self.free_scroll = free_scroll;
        self
    }

    pub fn with_direction_lock_threshold(mut self, threshold: f64) -> Self {
        self.direction_lock_threshold = threshold;
        self
    }

    pub fn with_event_passthrough(mut self, axis: Option<Axis>) -> Self {
        self.event_passthrough = axis;
        self
    }

    pub fn with_momentum(mut self, momentum: bool) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_deceleration(mut self, deceleration: f64) -> Self {
        self.deceleration = deceleration;
        self
    }

    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_bounce_time(mut self, bounce_time: f64) -> Self {
        self.bounce_time = bounce_time;
        self
    }

    pub fn with_bounce_easing(mut self, easing: Easing) -> Self {
        self.bounce_easing = easing;
        self
    }

    pub fn with_tap(mut self, tap: bool) -> Self {
        self.tap = tap;
        self
    }

    pub fn with_click(mut self, click: bool) -> Self {
        self.click = click;
        self
    }

    pub fn with_prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = prevent_default;
        self
    }

    pub fn with_prevent_default_exceptions(
        mut self,
        exceptions: Vec<ExceptionPredicate>,
    ) -> Self {
        self.prevent_default_exceptions = exceptions;
        self
    }

    pub fn with_delegated_transitions(mut self, delegated: bool) -> Self {
        self.delegated_transitions = delegated;
        self
    }

    pub fn with_resize_polling_ms(mut self, ms: u64) -> Self {
        self.resize_polling_ms = ms;
        self
    }

    /// Applies the passthrough coupling rules.
    pub(crate) fn normalize(&mut self) {
        match self.event_passthrough {
            Some(Axis::Vertical) => {
                self.scroll_y = false;
            }
            Some(Axis::Horizontal) => {
                self.scroll_x = false;
            }
            None => {}
        }
        if self.event_passthrough.is_some() {
            self.prevent_default = false;
            self.free_scroll = false;
            self.direction_lock_threshold = 0.0;
        }
    }

    pub(crate) fn is_exception(&self, target: &PointerTarget) -> bool {
        self.prevent_default_exceptions.iter().any(|p| p(target))
    }
}

impl Clone for ScrollerOptions {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry.clone(),
            start_x: self.start_x,
            start_y: self.start_y,
            scroll_x: self.scroll_x,
            scroll_y: self.scroll_y,
            free_scroll: self.free_scroll,
            direction_lock_threshold: self.direction_lock_threshold,
            event_passthrough: self.event_passthrough,
            momentum: self.momentum,
            deceleration: self.deceleration,
            bounce: self.bounce,
            bounce_time: self.bounce_time,
            bounce_easing: self.bounce_easing,
            tap: self.tap,
            click: self.click,
            prevent_default: self.prevent_default,
            prevent_default_exceptions: self.prevent_default_exceptions.clone(),
            delegated_transitions: self.delegated_transitions,
            resize_polling_ms: self.resize_polling_ms,
        }
    }
}

impl core::fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("geometry", &self.geometry)
            .field("start_x", &self.start_x)
            .field("start_y", &self.start_y)
            .field("scroll_x", &self.scroll_x)
            .field("scroll_y", &self.scroll_y)
            .field("free_scroll", &self.free_scroll)
            .field("direction_lock_threshold", &self.direction_lock_threshold)
            .field("event_passthrough", &self.event_passthrough)
            .field("momentum", &self.momentum)
            .field("deceleration", &self.deceleration)
            .field("bounce", &self.bounce)
            .field("bounce_time", &self.bounce_time)
            .field("bounce_easing", &self.bounce_easing)
            .field("tap", &self.tap)
            .field("click", &self.click)
            .field("prevent_default", &self.prevent_default)
            .field("delegated_transitions", &self.delegated_transitions)
            .field("resize_polling_ms", &self.resize_polling_ms)
            .finish_non_exhaustive()
    }
}
