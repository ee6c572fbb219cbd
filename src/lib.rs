//! # PinPoint - Terminal Pincode Lookup
//!
//! Type a 6-digit Indian pincode and browse the matching post offices.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  StateEvents  ┌──────────────────┐   lookup   ┌──────────────────┐
//! │    View     │◄──────────────│ LookupController │───────────▶│ PincodeDirectory │
//! │             │               │                  │◄───────────│                  │
//! │ - Terminal  │               │ - input / status │ completion │ - HTTP GET       │
//! │ - Cards     │               │ - request ids    │  (mpsc)    │ - JSON envelopes │
//! └─────────────┘               └──────────────────┘            └──────────────────┘
//!        ▲                               ▲
//!        │ render                        │ InputCommands
//!        └────────── AppController ──────┘
//!                    - event loop
//! ```

pub mod cmd_args;
pub mod config;
pub mod lookup;

// Re-export main types for easy access
pub use lookup::*;
