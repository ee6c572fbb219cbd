//! # Lookup Module
//!
//! Everything behind the pincode screen, split the MVVM way:
//!
//! - **models**: upstream records and the state snapshot
//! - **services**: the postal directory client
//! - **controllers**: the lookup state machine and the app loop
//! - **views**: terminal and plain-text rendering
//! - **events / commands / io**: the plumbing between them

pub mod batch;
pub mod commands;
pub mod controllers;
pub mod events;
pub mod input;
pub mod io;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
pub mod testing;

// Re-export main types for convenience
pub use batch::{run_batch, run_once, OutputFormat};
pub use controllers::{AppController, LookupController, LookupOutcome};
pub use events::{EventBus, SimpleEventBus, StateEvent};
pub use models::{LookupResponse, LookupState, PostalLocation, QueryStatus};
pub use services::{HttpPincodeDirectory, LookupError, PincodeDirectory};
