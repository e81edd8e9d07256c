use std::sync::Arc;

use crate::{ScrollEvent, Scroller};

/// A subscribed callback. Listeners receive a shared reference to the
/// scroller, so they observe consistent state but mutate nothing; adapters
/// that need to scroll from a handler queue the request and apply it after
/// `handle_event`/`tick` returns.
pub type Listener = Arc<dyn Fn(&Scroller) + Send + Sync>;

/// Named-listener registry for gesture/lifecycle notifications.
///
/// Listeners fire in subscription order. Duplicate subscriptions are kept
/// (and fire once per subscription); publishing with no subscribers is a
/// no-op. Removal matches by `Arc` identity.
#[derive(Clone, Default)]
pub struct EventEmitter {
    listeners: Vec<(ScrollEvent, Listener)>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, event: ScrollEvent, listener: Listener) {
        self.listeners.push((event, listener));
    }

    pub fn off(&mut self, event: ScrollEvent, listener: &Listener) {
        if let Some(pos) = self
            .listeners
            .iter()
            .position(|(ev, l)| *ev == event && Arc::ptr_eq(l, listener))
        {
            self.listeners.remove(pos);
        }
    }

    pub fn has_listeners(&self, event: ScrollEvent) -> bool {
        self.listeners.iter().any(|(ev, _)| *ev == event)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn publish(&self, scroller: &Scroller, event: ScrollEvent) {
        strace!(?event, "publish");
        for (ev, listener) in &self.listeners {
            if *ev == event {
                listener(scroller);
            }
        }
    }
}

impl core::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
