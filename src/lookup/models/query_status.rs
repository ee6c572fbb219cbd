//! Fetch status and the state snapshot handed to views.

use super::postal_location::PostalLocation;
use std::fmt;

/// Status of the current lookup. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryStatus::Idle => "idle",
            QueryStatus::Loading => "loading",
            QueryStatus::Success => "success",
            QueryStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// Everything a view needs to draw the screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupState {
    pub input: String,
    pub status: QueryStatus,
    pub results: Vec<PostalLocation>,
    pub error_message: Option<String>,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input holds a full pincode
    pub fn is_input_complete(&self) -> bool {
        self.input.len() == crate::lookup::input::PINCODE_LENGTH
    }
}
