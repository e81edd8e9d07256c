use crate::Easing;

/// Width/height of a rectangle, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measured geometry of the viewport and the scrollable content.
///
/// The engine never reads layout itself; adapters measure both rectangles
/// (after layout has settled) and hand them in via [`crate::GeometrySource`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub viewport: Size,
    pub content: Size,
}

impl Geometry {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self { viewport, content }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The input channel a pointer sample originated from.
///
/// A gesture is bound to the channel that started it; samples arriving on a
/// different channel while tracking are ignored outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    Touch,
    Mouse,
    Pointer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// One timestamped pointer reading in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureSample {
    pub page_x: f64,
    pub page_y: f64,
    /// Milliseconds on the adapter's monotonic clock.
    pub timestamp: u64,
}

impl GestureSample {
    pub fn new(page_x: f64, page_y: f64, timestamp: u64) -> Self {
        Self {
            page_x,
            page_y,
            timestamp,
        }
    }
}

/// A description of the element a pointer event hit.
///
/// Used for two things: deciding whether default-action suppression should be
/// skipped (exception predicates in the options) and whether a synthetic
/// click may be dispatched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerTarget {
    /// Upper-cased element name, e.g. `"DIV"`, `"INPUT"`. Empty when the
    /// adapter has nothing meaningful to report.
    pub tag_name: String,
}

impl PointerTarget {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}

/// Normalized input delivered to [`crate::Scroller::handle_event`].
///
/// Adapters translate platform events (touch/mouse/pointer name variations)
/// into this tagged union; the engine never inspects raw event names.
#[derive(Clone, Debug)]
pub enum InputEvent {
    PointerDown {
        kind: InputKind,
        button: PointerButton,
        sample: GestureSample,
        target: PointerTarget,
    },
    PointerMove {
        kind: InputKind,
        sample: GestureSample,
    },
    PointerUp {
        kind: InputKind,
        sample: GestureSample,
        target: PointerTarget,
    },
    PointerCancel {
        kind: InputKind,
        sample: GestureSample,
    },
    /// Viewport/orientation change. Collapsed into a single debounced
    /// `refresh()` executed from `tick`.
    Resize { now_ms: u64 },
    /// Completion report for a delegated transition previously handed out by
    /// [`crate::Scroller::take_transition`]. Stale ids are ignored.
    TransitionEnd { id: u64, now_ms: u64 },
}

/// What the glue layer should do with the platform event it just forwarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default handling of this event.
    pub prevent_default: bool,
}

impl EventResponse {
    pub(crate) fn prevent(prevent_default: bool) -> Self {
        Self { prevent_default }
    }
}

/// Notification names published through the scroller's event channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent {
    BeforeScrollStart,
    ScrollStart,
    ScrollCancel,
    ScrollEnd,
    Flick,
    Tap,
    Click,
    Refresh,
    Destroy,
}

/// How an animated move after a gesture (or a programmatic scroll) should run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionPlan {
    pub dest_x: f64,
    pub dest_y: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}
