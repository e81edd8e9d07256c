//! A headless kinetic scrolling engine inspired by iScroll.
//!
//! This crate focuses on the core gesture-to-motion pipeline needed for
//! touch-style scrolling: gesture lifecycle tracking with direction locking
//! and boundary resistance, momentum/deceleration projection, easing-driven
//! animation stepping, and elastic bounce recovery at the limits.
//!
//! It is UI-agnostic. A GUI/DOM layer is expected to provide:
//! - viewport and content geometry (post-layout)
//! - normalized pointer samples with timestamps ([`InputEvent`])
//! - a per-frame `tick(now_ms)` call, and the application of positions (or
//!   delegated [`Transition`]s) to the visible surface
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod animate;
mod easing;
mod emitter;
mod gesture;
mod momentum;
mod options;
mod scroller;
mod types;


pub use animate::{Transition, Tween};
pub use easing::Easing;
pub use emitter::{EventEmitter, Listener};
pub use gesture::DirectionLock;
pub use momentum::{DECELERATION, Momentum, momentum};
pub use options::{ExceptionPredicate, GeometrySource, ScrollerOptions, form_control_exception};
pub use scroller::Scroller;
pub use types::{
    Axis, EventResponse, GestureSample, Geometry, InputEvent, InputKind, MotionPlan,
    PointerButton, PointerTarget, ScrollEvent, Size,
};
