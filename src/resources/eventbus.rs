//! Event bus resource.
//!
//! Maps event names to ordered lists of subscriber callbacks. Publication
//! is synchronous and runs subscribers in subscription order; publishing an
//! event nobody listens to is a no-op. The bus does not catch subscriber
//! panics: a panicking callback unwinds through the current tick, skipping
//! the remainder of that tick's dispatch, and the engine resumes from the
//! last committed object state on the next tick.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::events::EnginePayload;

/// Boxed subscriber callback. `Send + Sync` so the bus can live in ECS
/// resource storage; capture shared state with `Arc<Mutex<_>>` when a
/// subscriber needs to write somewhere.
pub type Subscriber = Box<dyn FnMut(&EnginePayload) + Send + Sync>;

/// Name-keyed synchronous publish/subscribe bus.
#[derive(Default, Resource)]
pub struct EventBus {
    subscribers: FxHashMap<String, Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback to the ordered list for `event`. Multiple
    /// subscriptions to the same event are all retained.
    pub fn subscribe(
        &mut self,
        event: impl Into<String>,
        callback: impl FnMut(&EnginePayload) + Send + Sync + 'static,
    ) {
        self.subscribers
            .entry(event.into())
            .or_default()
            .push(Box::new(callback));
    }

    /// Invoke every subscriber for `event` in subscription order.
    pub fn publish(&mut self, event: &str, payload: &EnginePayload) {
        if let Some(callbacks) = self.subscribers.get_mut(event) {
            for callback in callbacks.iter_mut() {
                callback(payload);
            }
        }
    }

    /// Number of subscribers currently registered for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.get(event).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::snapshot::ObjectSnapshot;
    use crate::math::Vec2;
    use std::sync::{Arc, Mutex};

    fn dummy_payload() -> EnginePayload {
        EnginePayload::Object(ObjectSnapshot {
            id: "obj".into(),
            position: Vec2::ZERO,
            size: Vec2::new(1.0, 1.0),
            velocity: Vec2::ZERO,
            is_static: false,
            tag: None,
        })
    }

    #[test]
    fn test_subscribers_run_in_subscription_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();

        let c1 = Arc::clone(&calls);
        bus.subscribe("ping", move |_| c1.lock().unwrap().push("f1"));
        let c2 = Arc::clone(&calls);
        bus.subscribe("ping", move |_| c2.lock().unwrap().push("f2"));

        bus.publish("ping", &dummy_payload());
        bus.publish("ping", &dummy_payload());

        assert_eq!(*calls.lock().unwrap(), vec!["f1", "f2", "f1", "f2"]);
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let mut bus = EventBus::new();
        bus.publish("nobody-listens", &dummy_payload());
        assert_eq!(bus.subscriber_count("nobody-listens"), 0);
    }

    #[test]
    fn test_events_are_isolated_by_name() {
        let count = Arc::new(Mutex::new(0usize));
        let mut bus = EventBus::new();

        let c = Arc::clone(&count);
        bus.subscribe("a", move |_| *c.lock().unwrap() += 1);

        bus.publish("b", &dummy_payload());
        assert_eq!(*count.lock().unwrap(), 0);
        bus.publish("a", &dummy_payload());
        assert_eq!(*count.lock().unwrap(), 1);
    }
}
