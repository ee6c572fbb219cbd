//! # Events Module
//!
//! State change notifications flowing from the lookup controller to views.

pub mod event_bus;
pub mod state_events;

pub use event_bus::{EventBus, SimpleEventBus, StateEventHandler};
pub use state_events::StateEvent;
