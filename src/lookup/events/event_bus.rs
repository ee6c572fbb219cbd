//! # Event Bus
//!
//! Observer-style distribution of state events to any number of
//! subscribers.

use super::state_events::StateEvent;

/// Type alias for state event handlers to reduce complexity
pub type StateEventHandler = Box<dyn Fn(&StateEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a state event
    fn publish(&mut self, event: StateEvent);

    /// Subscribe to state events
    fn subscribe(&mut self, handler: StateEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    handlers: Vec<StateEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish(&mut self, event: StateEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }

    fn subscribe(&mut self, handler: StateEventHandler) {
        self.handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::models::QueryStatus;
    use std::sync::{Arc, Mutex};

    #[test]
    fn event_bus_should_deliver_events() {
        let mut bus = SimpleEventBus::new();
        let received_events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = received_events.clone();

        bus.subscribe(Box::new(move |event| {
            events_clone.lock().unwrap().push(event.clone());
        }));

        let event = StateEvent::StatusChanged {
            old: QueryStatus::Idle,
            new: QueryStatus::Loading,
        };
        bus.publish(event.clone());

        let received = received_events.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], event);
    }

    #[test]
    fn event_bus_should_handle_multiple_subscribers() {
        let mut bus = SimpleEventBus::new();
        let counter_1 = Arc::new(Mutex::new(0));
        let counter_2 = Arc::new(Mutex::new(0));
        let c1 = counter_1.clone();
        let c2 = counter_2.clone();

        bus.subscribe(Box::new(move |_| *c1.lock().unwrap() += 1));
        bus.subscribe(Box::new(move |_| *c2.lock().unwrap() += 1));

        bus.publish(StateEvent::ResultsReplaced { count: 2 });
        bus.publish(StateEvent::InputChanged {
            input: "1".to_string(),
        });

        assert_eq!(*counter_1.lock().unwrap(), 2);
        assert_eq!(*counter_2.lock().unwrap(), 2);
    }
}
