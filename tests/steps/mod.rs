//! Step definitions for Cucumber tests
//!
//! - `directory` - scripting the mock postal directory
//! - `lookup` - typing, clearing and checking the lookup state

pub mod directory;
pub mod lookup;
