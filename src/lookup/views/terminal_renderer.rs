//! # Terminal Renderer
//!
//! Full-screen view of a [`LookupState`]. Redraws the whole screen on
//! every call; the screen is small enough that partial updates buy nothing.

use super::cards::{body_lines, StyledLine};
use crate::lookup::io::RenderStream;
use crate::lookup::models::{LookupState, QueryStatus};
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

const TITLE: &str = " PinPoint India";
const TAGLINE: &str = " Discover India, One Pincode at a Time.";
const INPUT_PREFIX: &str = " Pincode ▸ ";
const INPUT_PLACEHOLDER: &str = "Enter 6-digit Pincode...";
const FOOTER: &str = " Esc clear · ↑/↓ scroll · Ctrl+C quit   Data: Department of Posts, India";

const INPUT_ROW: u16 = 3;
/// First row of the scrollable body
const BODY_TOP: u16 = 5;
/// Rows below the body reserved for the footer
const FOOTER_ROWS: u16 = 1;

/// Trait for rendering the lookup screen
pub trait ViewRenderer {
    /// Prepare the terminal (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Draw everything for `state`, skipping `scroll` body rows
    fn render_full(&mut self, state: &LookupState, scroll: usize) -> Result<()>;

    /// Put the terminal cursor at the end of the input field
    fn focus_input(&mut self, state: &LookupState) -> Result<()>;

    /// Largest useful scroll offset for `state` at the current size
    fn max_scroll(&self, state: &LookupState) -> usize;

    fn update_size(&mut self, width: u16, height: u16);

    fn terminal_size(&self) -> (u16, u16);

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()>;
}

pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    width: u16,
    height: u16,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let (width, height) = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            width,
            height,
        })
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn body_height(&self) -> usize {
        self.height.saturating_sub(BODY_TOP + FOOTER_ROWS) as usize
    }

    fn clip(&self, text: &str) -> String {
        text.chars().take(self.width as usize).collect()
    }

    fn draw_line(&mut self, row: u16, line: &StyledLine) -> Result<()> {
        let text = self.clip(&line.text);
        self.render_stream.move_cursor(0, row)?;
        if let Some(color) = line.color {
            queue!(self.render_stream, SetForegroundColor(color))?;
        }
        if line.bold {
            queue!(self.render_stream, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.render_stream,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_input(&mut self, state: &LookupState) -> Result<()> {
        self.render_stream.move_cursor(0, INPUT_ROW)?;
        let marker_color = if state.is_input_complete() {
            Color::Blue
        } else {
            Color::DarkGrey
        };
        queue!(
            self.render_stream,
            SetForegroundColor(marker_color),
            Print(INPUT_PREFIX),
            ResetColor
        )?;
        if state.input.is_empty() {
            queue!(
                self.render_stream,
                SetForegroundColor(Color::DarkGrey),
                Print(INPUT_PLACEHOLDER),
                ResetColor
            )?;
        } else {
            queue!(
                self.render_stream,
                SetAttribute(Attribute::Bold),
                Print(&state.input),
                SetAttribute(Attribute::Reset)
            )?;
        }
        if state.status == QueryStatus::Loading {
            queue!(
                self.render_stream,
                SetForegroundColor(Color::Blue),
                Print("  ⟳"),
                ResetColor
            )?;
        }
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.clear_screen()?;
        Ok(())
    }

    fn render_full(&mut self, state: &LookupState, scroll: usize) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        self.draw_line(0, &StyledLine::colored(TITLE, Color::Blue).bold())?;
        self.draw_line(1, &StyledLine::colored(TAGLINE, Color::Grey))?;
        self.draw_input(state)?;

        let body = body_lines(state);
        let start = scroll.min(body.len());
        let remaining = body.len() - start;
        let room = self.body_height();
        // Last body row turns into a "more" marker when the rest does not fit
        let visible = if remaining > room {
            room.saturating_sub(1)
        } else {
            remaining
        };
        for (offset, line) in body.iter().skip(start).take(visible).enumerate() {
            let mut indented = line.clone();
            indented.text = format!(" {}", indented.text);
            self.draw_line(BODY_TOP + offset as u16, &indented)?;
        }

        let hidden = remaining - visible;
        if hidden > 0 && room > 0 {
            let more = StyledLine::colored(format!(" … {hidden} more line(s)"), Color::DarkGrey);
            self.draw_line(BODY_TOP + visible as u16, &more)?;
        }

        if self.height > 0 {
            self.draw_line(self.height - 1, &StyledLine::colored(FOOTER, Color::DarkGrey))?;
        }

        self.focus_input(state)
    }

    fn focus_input(&mut self, state: &LookupState) -> Result<()> {
        let column = INPUT_PREFIX.chars().count() + state.input.chars().count();
        self.render_stream
            .move_cursor(column.min(u16::MAX as usize) as u16, INPUT_ROW)?;
        self.render_stream.show_cursor()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn max_scroll(&self, state: &LookupState) -> usize {
        body_lines(state).len().saturating_sub(self.body_height())
    }

    fn update_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        Ok(())
    }
}
