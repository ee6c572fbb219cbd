//! # Controllers Module
//!
//! The lookup state machine and the application loop that drives it.

pub mod app_controller;
pub mod lookup_controller;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use lookup_controller::{
    classify, LookupCompletion, LookupController, LookupOutcome, CONNECTIVITY_ERROR_MESSAGE,
    INVALID_PINCODE_MESSAGE,
};
