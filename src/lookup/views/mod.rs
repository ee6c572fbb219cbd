//! # View Layer
//!
//! Pure functions of [`LookupState`](crate::lookup::models::LookupState):
//! a full-screen terminal renderer and plain-text card formatting.

pub mod cards;
pub mod terminal_renderer;

pub use cards::{body_lines, format_card, format_outcome, summary_line, StyledLine};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
