//! # State Events
//!
//! Emitted by the lookup controller whenever its state changes. Views
//! re-render when any are pending.

use crate::lookup::models::QueryStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Sanitized input text changed
    InputChanged { input: String },

    /// Fetch status moved to a different state
    StatusChanged { old: QueryStatus, new: QueryStatus },

    /// Result list was replaced (possibly with an empty one)
    ResultsReplaced { count: usize },

    /// Error message was set or cleared
    ErrorMessageChanged { message: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_events_should_compare_by_payload() {
        let a = StateEvent::StatusChanged {
            old: QueryStatus::Idle,
            new: QueryStatus::Loading,
        };
        let b = StateEvent::StatusChanged {
            old: QueryStatus::Idle,
            new: QueryStatus::Loading,
        };
        assert_eq!(a, b);
        assert_ne!(a, StateEvent::ResultsReplaced { count: 0 });
    }
}
