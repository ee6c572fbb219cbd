//! Screen body layout shared by the terminal and plain-text renderers.
//!
//! Each state turns into a list of [`StyledLine`]s; the terminal renderer
//! paints them with colors, plain output just prints the text.

use crate::lookup::models::{BranchKind, LookupState, PostalLocation, QueryStatus};
use crossterm::style::Color;

/// Number of placeholder cards shown while loading
pub const SKELETON_CARDS: usize = 3;

const IDLE_TITLE: &str = "Start Your Search";
const IDLE_HINT: &str =
    "Enter a 6-digit Indian Pincode to discover post office details, divisions, and more.";
const ERROR_TITLE: &str = "Something Went Wrong";
const ERROR_FALLBACK: &str =
    "An error occurred while fetching data. Please check your internet connection.";

/// Line of text with an optional foreground color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
}

impl StyledLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

pub fn branch_color(kind: BranchKind) -> Color {
    match kind {
        BranchKind::Head => Color::Magenta,
        BranchKind::Sub => Color::Cyan,
        BranchKind::Branch | BranchKind::Other => Color::Blue,
    }
}

/// "Showing N locations found for CODE"
pub fn summary_line(state: &LookupState) -> String {
    format!(
        "Showing {} locations found for {}",
        state.results.len(),
        state.input
    )
}

/// Card lines for one post office
pub fn format_card(location: &PostalLocation) -> Vec<StyledLine> {
    let delivery_color = if location.is_delivery() {
        Color::Green
    } else {
        Color::Red
    };

    vec![
        StyledLine::plain(location.name.clone()).bold(),
        StyledLine::colored(
            format!("  [{}]", location.branch_type.to_uppercase()),
            branch_color(location.branch_kind()),
        ),
        StyledLine::plain(format!("  {}, {}", location.district, location.state)),
        StyledLine::colored(format!("  ● {}", location.delivery_status), delivery_color),
        StyledLine::colored(
            format!(
                "  Division: {}   Region: {}",
                location.division, location.region
            ),
            Color::Grey,
        ),
        StyledLine::colored(
            format!(
                "  Block: {}   Circle: {}",
                location.block_or_na(),
                location.circle
            ),
            Color::Grey,
        ),
    ]
}

fn skeleton_card() -> Vec<StyledLine> {
    [24, 16, 30, 12]
        .into_iter()
        .map(|width| StyledLine::colored("░".repeat(width), Color::DarkGrey))
        .collect()
}

/// Body lines for whatever state is current
pub fn body_lines(state: &LookupState) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    match state.status {
        QueryStatus::Idle => {
            lines.push(StyledLine::plain(IDLE_TITLE).bold());
            lines.push(StyledLine::colored(IDLE_HINT, Color::Grey));
        }
        QueryStatus::Loading => {
            lines.push(StyledLine::colored(
                format!("Looking up {}...", state.input),
                Color::Blue,
            ));
            for _ in 0..SKELETON_CARDS {
                lines.push(StyledLine::blank());
                lines.extend(skeleton_card());
            }
        }
        QueryStatus::Error => {
            lines.push(StyledLine::colored(ERROR_TITLE, Color::Red).bold());
            let message = state.error_message.as_deref().unwrap_or(ERROR_FALLBACK);
            lines.push(StyledLine::colored(message, Color::Grey));
        }
        QueryStatus::Success => {
            lines.push(StyledLine::colored(summary_line(state), Color::Blue));
            for location in &state.results {
                lines.push(StyledLine::blank());
                lines.extend(format_card(location));
            }
        }
    }
    lines
}

/// Plain text for a settled lookup, as printed by one-shot and batch runs
pub fn format_outcome(state: &LookupState) -> Vec<String> {
    if state.status != QueryStatus::Success {
        let message = state.error_message.as_deref().unwrap_or(ERROR_FALLBACK);
        return vec![format!("{}: {}", state.input, message)];
    }

    let mut lines = vec![summary_line(state)];
    for location in &state.results {
        lines.push(String::new());
        lines.extend(format_card(location).into_iter().map(|line| line.text));
    }
    lines
}
