use std::sync::Arc;

use crate::animate::AnimationState;
use crate::emitter::{EventEmitter, Listener};
use crate::gesture::{
    CHECKPOINT_WINDOW_MS, DEBOUNCE_DISTANCE_PX, DEBOUNCE_WINDOW_MS, FLICK_MAX_MS, FLICK_MAX_PX,
    GestureState, MOMENTUM_MAX_MS, apply_resistance, decide_lock, direction_sign,
};
use crate::momentum::{Momentum, momentum};
use crate::{
    Axis, DirectionLock, Easing, EventResponse, GestureSample, Geometry, GeometrySource,
    InputEvent, InputKind, MotionPlan, PointerButton, PointerTarget, ScrollEvent, ScrollerOptions,
    Size, Transition, Tween,
};

/// A headless scroll surface: translates pointer gestures over a content
/// rectangle larger than its viewport into smooth positions, with momentum
/// continuation and elastic bounce recovery at the limits.
///
/// The scroller owns no UI objects and no clock. Adapters drive it by:
/// - forwarding normalized [`InputEvent`]s through [`Self::handle_event`]
/// - calling [`Self::tick`] on every frame (stepping animations, debounced
///   refresh)
/// - reading [`Self::position`] to paint, or picking up delegated
///   [`Transition`]s via [`Self::take_transition`]
///
/// Positions are ≤ 0 (content origin relative to the viewport's top-left);
/// `max_scroll_x`/`max_scroll_y` are the ≤ 0 limits. During a drag the
/// position may transiently exceed the limits when bounce is enabled.
pub struct Scroller {
    options: ScrollerOptions,

    x: f64,
    y: f64,
    max_scroll_x: f64,
    max_scroll_y: f64,
    has_horizontal: bool,
    has_vertical: bool,
    viewport: Size,
    content: Size,

    enabled: bool,
    destroyed: bool,

    gesture: Option<GestureState>,
    direction_x: i8,
    direction_y: i8,
    /// When the last gesture ended; feeds the post-gesture debounce.
    end_time_ms: u64,
    last_tap: Option<GestureSample>,

    animation: AnimationState,
    next_transition_id: u64,
    pending_refresh_at: Option<u64>,

    emitter: EventEmitter,
}

impl Scroller {
    pub fn new(mut options: ScrollerOptions) -> Self {
        options.normalize();
        let (start_x, start_y) = (options.start_x, options.start_y);
        sdebug!(
            scroll_x = options.scroll_x,
            scroll_y = options.scroll_y,
            bounce = options.bounce,
            momentum = options.momentum,
            "Scroller::new"
        );
        let mut s = Self {
            options,
            x: 0.0,
            y: 0.0,
            max_scroll_x: 0.0,
            max_scroll_y: 0.0,
            has_horizontal: false,
            has_vertical: false,
            viewport: Size::default(),
            content: Size::default(),
            enabled: true,
            destroyed: false,
            gesture: None,
            direction_x: 0,
            direction_y: 0,
            end_time_ms: 0,
            last_tap: None,
            animation: AnimationState::Idle,
            next_transition_id: 0,
            pending_refresh_at: None,
            emitter: EventEmitter::new(),
        };
        s.refresh();
        s.scroll_to(start_x, start_y, 0, 0.0, None);
        s
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn max_scroll_x(&self) -> f64 {
        self.max_scroll_x
    }

    pub fn max_scroll_y(&self) -> f64 {
        self.max_scroll_y
    }

    pub fn has_horizontal_scroll(&self) -> bool {
        self.has_horizontal
    }

    pub fn has_vertical_scroll(&self) -> bool {
        self.has_vertical
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content(&self) -> Size {
        self.content
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }

    /// Direction sign of the last applied drag delta, per axis: -1, 0 or +1.
    pub fn direction(&self) -> (i8, i8) {
        (self.direction_x, self.direction_y)
    }

    /// The release sample of the last tap/click gesture, for handlers of
    /// [`ScrollEvent::Tap`]/[`ScrollEvent::Click`].
    pub fn last_tap(&self) -> Option<GestureSample> {
        self.last_tap
    }

    /// Gates gesture starts. An in-progress animation keeps running.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Subscribes `f` to `event` and returns the handle needed for
    /// [`Self::off`]. Duplicate subscriptions are kept.
    pub fn on(
        &mut self,
        event: ScrollEvent,
        f: impl Fn(&Scroller) + Send + Sync + 'static,
    ) -> Listener {
        let listener: Listener = Arc::new(f);
        self.emitter.on(event, Arc::clone(&listener));
        listener
    }

    /// Subscribes an existing listener handle (e.g. one shared across
    /// several events).
    pub fn on_listener(&mut self, event: ScrollEvent, listener: Listener) {
        self.emitter.on(event, listener);
    }

    /// Removes one subscription matching `listener` by identity.
    pub fn off(&mut self, event: ScrollEvent, listener: &Listener) {
        self.emitter.off(event, listener);
    }

    fn publish(&self, event: ScrollEvent) {
        self.emitter.publish(self, event);
    }

    /// Single dispatch point for normalized input; the match stays
    /// exhaustive as variants are added.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        if self.destroyed {
            return EventResponse::default();
        }
        match event {
            InputEvent::PointerDown {
                kind,
                button,
                sample,
                target,
            } => self.on_start(kind, button, sample, &target),
            InputEvent::PointerMove { kind, sample } => self.on_move(kind, sample),
            InputEvent::PointerUp {
                kind,
                sample,
                target,
            } => self.on_end(kind, sample, &target),
            InputEvent::PointerCancel { kind, sample } => {
                self.on_end(kind, sample, &PointerTarget::default())
            }
            InputEvent::Resize { now_ms } => {
                self.pending_refresh_at = Some(now_ms + self.options.resize_polling_ms);
                EventResponse::default()
            }
            InputEvent::TransitionEnd { id, now_ms } => self.on_transition_end(id, now_ms),
        }
    }

    fn on_start(
        &mut self,
        kind: InputKind,
        button: PointerButton,
        sample: GestureSample,
        target: &PointerTarget,
    ) -> EventResponse {
        if kind != InputKind::Touch && button != PointerButton::Primary {
            return EventResponse::default();
        }
        if !self.enabled || self.gesture.is_some() {
            strace!(?kind, "start ignored");
            return EventResponse::default();
        }

        let prevent = self.options.prevent_default && !self.options.is_exception(target);

        // A new gesture freezes any in-flight animation at its current
        // interpolated position and reports that scroll as ended.
        if self.animation.is_animating() {
            let (cx, cy) = self.animated_position(sample.timestamp);
            self.animation = AnimationState::Idle;
            self.translate(cx.round(), cy.round());
            self.publish(ScrollEvent::ScrollEnd);
        }

        self.direction_x = 0;
        self.direction_y = 0;
        self.gesture = Some(GestureState::new(kind, sample, self.x, self.y));
        strace!(x = self.x, y = self.y, "gesture start");

        self.publish(ScrollEvent::BeforeScrollStart);
        EventResponse::prevent(prevent)
    }

    fn on_move(&mut self, kind: InputKind, sample: GestureSample) -> EventResponse {
        if !self.enabled {
            return EventResponse::default();
        }
        let Some(mut g) = self.gesture.take() else {
            return EventResponse::default();
        };
        if g.kind != kind {
            self.gesture = Some(g);
            return EventResponse::default();
        }

        let mut prevent = self.options.prevent_default;

        let mut delta_x = sample.page_x - g.point_x;
        let mut delta_y = sample.page_y - g.point_y;
        let timestamp = sample.timestamp;

        g.point_x = sample.page_x;
        g.point_y = sample.page_y;
        g.dist_x += delta_x;
        g.dist_y += delta_y;

        let abs_dist_x = g.dist_x.abs();
        let abs_dist_y = g.dist_y.abs();

        // Stray micro-movements right after a previous gesture don't scroll.
        if timestamp.saturating_sub(self.end_time_ms) > DEBOUNCE_WINDOW_MS
            && abs_dist_x < DEBOUNCE_DISTANCE_PX
            && abs_dist_y < DEBOUNCE_DISTANCE_PX
        {
            self.gesture = Some(g);
            return EventResponse::prevent(prevent);
        }

        if g.lock == DirectionLock::Undecided {
            g.lock = if self.options.free_scroll {
                DirectionLock::Free
            } else {
                decide_lock(abs_dist_x, abs_dist_y, self.options.direction_lock_threshold)
            };
            strace!(lock = ?g.lock, "direction lock");
        }

        match g.lock {
            DirectionLock::Horizontal => {
                if self.options.event_passthrough == Some(Axis::Vertical) {
                    prevent = true;
                } else if self.options.event_passthrough == Some(Axis::Horizontal) {
                    // The environment owns this axis; hand the gesture back.
                    return EventResponse::default();
                }
                delta_y = 0.0;
            }
            DirectionLock::Vertical => {
                if self.options.event_passthrough == Some(Axis::Horizontal) {
                    prevent = true;
                } else if self.options.event_passthrough == Some(Axis::Vertical) {
                    return EventResponse::default();
                }
                delta_x = 0.0;
            }
            DirectionLock::Free | DirectionLock::Undecided => {}
        }

        if !self.has_horizontal {
            delta_x = 0.0;
        }
        if !self.has_vertical {
            delta_y = 0.0;
        }

        let new_x = apply_resistance(self.x, delta_x, self.max_scroll_x, self.options.bounce);
        let new_y = apply_resistance(self.y, delta_y, self.max_scroll_y, self.options.bounce);

        self.direction_x = direction_sign(delta_x);
        self.direction_y = direction_sign(delta_y);

        if !g.moved {
            self.publish(ScrollEvent::ScrollStart);
        }
        g.moved = true;

        self.translate(new_x, new_y);

        // Window the velocity estimate to recent motion only.
        if timestamp.saturating_sub(g.start_time) > CHECKPOINT_WINDOW_MS {
            g.start_time = timestamp;
            g.start_x = self.x;
            g.start_y = self.y;
        }

        self.gesture = Some(g);
        EventResponse::prevent(prevent)
    }

    fn on_end(
        &mut self,
        kind: InputKind,
        sample: GestureSample,
        target: &PointerTarget,
    ) -> EventResponse {
        if !self.enabled {
            return EventResponse::default();
        }
        let Some(g) = self.gesture.take() else {
            return EventResponse::default();
        };
        if g.kind != kind {
            self.gesture = Some(g);
            return EventResponse::default();
        }

        let prevent = self.options.prevent_default && !self.options.is_exception(target);
        let now = sample.timestamp;
        let elapsed = now.saturating_sub(g.start_time);

        let new_x = self.x.round();
        let new_y = self.y.round();
        let distance_x = (new_x - g.start_x).abs();
        let distance_y = (new_y - g.start_y).abs();

        self.animation = AnimationState::Idle;
        self.end_time_ms = now;

        // Released out of bounds: settle back, nothing else to decide.
        if self.reset_position(self.options.bounce_time, now) {
            return EventResponse::prevent(prevent);
        }

        // Snap to integers so sub-pixel drift never persists at rest.
        self.scroll_to(new_x, new_y, now, 0.0, None);

        if !g.moved {
            self.last_tap = Some(sample);
            if self.options.tap {
                self.publish(ScrollEvent::Tap);
            }
            if self.options.click && !is_form_control(target) {
                self.publish(ScrollEvent::Click);
            }
            self.publish(ScrollEvent::ScrollCancel);
            return EventResponse::prevent(prevent);
        }

        if self.emitter.has_listeners(ScrollEvent::Flick)
            && elapsed < FLICK_MAX_MS
            && distance_x < FLICK_MAX_PX
            && distance_y < FLICK_MAX_PX
        {
            self.publish(ScrollEvent::Flick);
            return EventResponse::prevent(prevent);
        }

        let plan = self.plan_release_motion(&g, elapsed, new_x, new_y);

        if plan.dest_x != self.x || plan.dest_y != self.y {
            self.scroll_to(
                plan.dest_x,
                plan.dest_y,
                now,
                plan.duration_ms,
                Some(plan.easing),
            );
            return EventResponse::prevent(prevent);
        }

        self.publish(ScrollEvent::ScrollEnd);
        EventResponse::prevent(prevent)
    }

    /// Decides what motion (if any) continues after release: momentum per
    /// axis when the drag was quick, otherwise the rounded rest position.
    fn plan_release_motion(
        &self,
        g: &GestureState,
        elapsed_ms: u64,
        new_x: f64,
        new_y: f64,
    ) -> MotionPlan {
        let mut plan = MotionPlan {
            dest_x: new_x,
            dest_y: new_y,
            duration_ms: 0.0,
            easing: Easing::Circular,
        };

        if self.options.momentum && elapsed_ms > 0 && elapsed_ms < MOMENTUM_MAX_MS {
            let slack_x = if self.options.bounce {
                self.viewport.width
            } else {
                0.0
            };
            let slack_y = if self.options.bounce {
                self.viewport.height
            } else {
                0.0
            };

            let momentum_x = if self.has_horizontal {
                momentum(
                    self.x,
                    g.start_x,
                    elapsed_ms as f64,
                    self.max_scroll_x,
                    slack_x,
                    self.options.deceleration,
                )
            } else {
                Momentum::rest(new_x)
            };
            let momentum_y = if self.has_vertical {
                momentum(
                    self.y,
                    g.start_y,
                    elapsed_ms as f64,
                    self.max_scroll_y,
                    slack_y,
                    self.options.deceleration,
                )
            } else {
                Momentum::rest(new_y)
            };

            plan.dest_x = momentum_x.destination;
            plan.dest_y = momentum_y.destination;
            plan.duration_ms = momentum_x.duration.max(momentum_y.duration);
        }

        // An out-of-bounds destination decelerates on a quadratic so the
        // hand-off into the bounce recovery has no visible kink.
        if plan.dest_x > 0.0
            || plan.dest_x < self.max_scroll_x
            || plan.dest_y > 0.0
            || plan.dest_y < self.max_scroll_y
        {
            plan.easing = Easing::Quadratic;
        }

        plan
    }

    fn on_transition_end(&mut self, id: u64, now_ms: u64) -> EventResponse {
        match self.animation {
            AnimationState::Transitioning { transition, .. } if transition.id == id => {
                self.animation = AnimationState::Idle;
                if !self.reset_position(self.options.bounce_time, now_ms) {
                    self.publish(ScrollEvent::ScrollEnd);
                }
            }
            _ => {
                // Spurious or stale completion; nothing is (or this request
                // is no longer) transitioning.
                swarn!(id, "ignoring unmatched transition end");
            }
        }
        EventResponse::default()
    }

    /// Advances stepping animations and any debounced refresh. Returns the
    /// new position when a stepping animation moved it.
    pub fn tick(&mut self, now_ms: u64) -> Option<(f64, f64)> {
        if self.destroyed {
            return None;
        }

        if let Some(at) = self.pending_refresh_at {
            if now_ms >= at {
                self.pending_refresh_at = None;
                self.refresh();
            }
        }

        match self.animation {
            AnimationState::Stepping(tween) => {
                if tween.is_done(now_ms) {
                    self.animation = AnimationState::Idle;
                    // Exact arrival, not the last interpolated value.
                    self.translate(tween.to_x, tween.to_y);
                    if !self.reset_position(self.options.bounce_time, now_ms) {
                        self.publish(ScrollEvent::ScrollEnd);
                    }
                } else {
                    let (x, y) = tween.sample(now_ms);
                    self.translate(x, y);
                }
                Some((self.x, self.y))
            }
            _ => None,
        }
    }

    /// Hands out the pending delegated transition, once per request. The
    /// sink reports completion via [`InputEvent::TransitionEnd`] with the
    /// request's id.
    pub fn take_transition(&mut self) -> Option<Transition> {
        if let AnimationState::Transitioning {
            transition,
            dispatched,
        } = &mut self.animation
        {
            if !*dispatched {
                *dispatched = true;
                return Some(*transition);
            }
        }
        None
    }

    /// Scrolls to `(x, y)`. A zero `duration_ms` applies the position
    /// immediately; otherwise the move animates with `easing` (circular when
    /// omitted). Targets are not clamped — out-of-bounds targets are how
    /// bounce overshoot is expressed.
    pub fn scroll_to(
        &mut self,
        x: f64,
        y: f64,
        now_ms: u64,
        duration_ms: f64,
        easing: Option<Easing>,
    ) {
        if self.destroyed {
            return;
        }
        let easing = easing.unwrap_or_default();

        // Retargeting mid-animation starts from the current interpolated
        // position, not the old origin or destination.
        if self.animation.is_animating() {
            let (cx, cy) = self.animated_position(now_ms);
            self.animation = AnimationState::Idle;
            self.x = cx;
            self.y = cy;
        }

        if duration_ms <= 0.0 {
            self.translate(x, y);
            return;
        }

        let delegated =
            self.options.delegated_transitions && !easing.curve_descriptor().is_empty();
        if delegated {
            self.next_transition_id += 1;
            let transition = Transition {
                id: self.next_transition_id,
                from_x: self.x,
                from_y: self.y,
                to_x: x,
                to_y: y,
                start_ms: now_ms,
                duration_ms,
                easing,
            };
            self.animation = AnimationState::Transitioning {
                transition,
                dispatched: false,
            };
            // The rendering layer animates; the logical position lands on
            // the destination right away.
            self.translate(x, y);
        } else {
            self.animation = AnimationState::Stepping(Tween::new(
                (self.x, self.y),
                (x, y),
                now_ms,
                duration_ms,
                easing,
            ));
        }
    }

    /// Relative form of [`Self::scroll_to`].
    pub fn scroll_by(
        &mut self,
        dx: f64,
        dy: f64,
        now_ms: u64,
        duration_ms: f64,
        easing: Option<Easing>,
    ) {
        let (x, y) = (self.x + dx, self.y + dy);
        self.scroll_to(x, y, now_ms, duration_ms, easing);
    }

    /// Moves the position back inside `[max_scroll, 0]` if it strayed out,
    /// animating over `time_ms` with the bounce easing. Returns whether a
    /// correction was needed — more motion is coming when it was, so callers
    /// suppress their own "scroll ended" in that case.
    pub fn reset_position(&mut self, time_ms: f64, now_ms: u64) -> bool {
        let mut x = self.x;
        let mut y = self.y;

        if !self.has_horizontal || x > 0.0 {
            x = 0.0;
        } else if x < self.max_scroll_x {
            x = self.max_scroll_x;
        }

        if !self.has_vertical || y > 0.0 {
            y = 0.0;
        } else if y < self.max_scroll_y {
            y = self.max_scroll_y;
        }

        if x == self.x && y == self.y {
            return false;
        }

        strace!(x, y, time_ms, "boundary recovery");
        self.scroll_to(x, y, now_ms, time_ms, Some(self.options.bounce_easing));
        true
    }

    /// Re-reads geometry, recomputes the limits and scrollability per axis,
    /// resets transient direction/time bookkeeping, and snaps the position
    /// back in bounds if the new limits left it outside.
    pub fn refresh(&mut self) {
        if self.destroyed {
            return;
        }
        let g = self.options.geometry.resolve();
        self.apply_geometry(g);
    }

    /// Replaces the geometry source with a fixed value and applies it.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        if self.destroyed {
            return;
        }
        self.options.geometry = GeometrySource::Value(geometry);
        self.apply_geometry(geometry);
    }

    fn apply_geometry(&mut self, g: Geometry) {
        self.viewport = g.viewport;
        self.content = g.content;

        self.max_scroll_x = self.viewport.width - self.content.width;
        self.max_scroll_y = self.viewport.height - self.content.height;

        self.has_horizontal = self.options.scroll_x && self.max_scroll_x < 0.0;
        self.has_vertical = self.options.scroll_y && self.max_scroll_y < 0.0;

        // A non-scrollable axis has no travel: limit 0, content treated as
        // exactly viewport-sized.
        if !self.has_horizontal {
            self.max_scroll_x = 0.0;
            self.content.width = self.viewport.width;
        }
        if !self.has_vertical {
            self.max_scroll_y = 0.0;
            self.content.height = self.viewport.height;
        }

        self.end_time_ms = 0;
        self.direction_x = 0;
        self.direction_y = 0;

        sdebug!(
            max_x = self.max_scroll_x,
            max_y = self.max_scroll_y,
            has_h = self.has_horizontal,
            has_v = self.has_vertical,
            "refresh"
        );

        self.publish(ScrollEvent::Refresh);
        self.reset_position(0.0, 0);
    }

    /// Cancels pending deferred work and renders the instance inert.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.pending_refresh_at = None;
        self.gesture = None;
        self.animation = AnimationState::Idle;
        self.destroyed = true;
        self.publish(ScrollEvent::Destroy);
    }

    /// Where the active animation currently has the surface, for freezing on
    /// interruption.
    fn animated_position(&self, now_ms: u64) -> (f64, f64) {
        match self.animation {
            AnimationState::Stepping(tween) => tween.sample(now_ms),
            AnimationState::Transitioning { transition, .. } => transition.sample(now_ms),
            AnimationState::Idle => (self.x, self.y),
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl core::fmt::Debug for Scroller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scroller")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("max_scroll_x", &self.max_scroll_x)
            .field("max_scroll_y", &self.max_scroll_y)
            .field("has_horizontal", &self.has_horizontal)
            .field("has_vertical", &self.has_vertical)
            .field("enabled", &self.enabled)
            .field("destroyed", &self.destroyed)
            .field("tracking", &self.gesture.is_some())
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

fn is_form_control(target: &PointerTarget) -> bool {
    matches!(target.tag_name.as_str(), "SELECT" | "INPUT" | "TEXTAREA")
}
