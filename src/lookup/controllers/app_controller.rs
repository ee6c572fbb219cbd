//! # Application Controller
//!
//! Runs the interactive screen: reads terminal events, turns them into
//! input commands for the lookup controller, drains finished lookups, and
//! redraws whenever the state moved.

use crate::lookup::commands::{map_event, InputCommand};
use crate::lookup::controllers::lookup_controller::LookupController;
use crate::lookup::events::StateEvent;
use crate::lookup::io::{EventStream, RenderStream};
use crate::lookup::models::LookupState;
use crate::lookup::services::{HttpPincodeDirectory, PincodeDirectory};
use crate::lookup::views::{TerminalRenderer, ViewRenderer};
use crate::config::LookupProfile;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

/// How long one loop iteration waits for terminal input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct AppController<ES: EventStream, RS: RenderStream, D: PincodeDirectory> {
    lookup: LookupController<D>,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
    scroll: usize,
    needs_render: bool,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS, HttpPincodeDirectory> {
    /// Create the controller against the directory described by `profile`
    pub fn with_io_streams(
        profile: &LookupProfile,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let directory = HttpPincodeDirectory::new(profile)?;
        Self::with_directory(directory, event_stream, render_stream)
    }
}

impl<ES: EventStream, RS: RenderStream, D: PincodeDirectory> AppController<ES, RS, D> {
    /// Create the controller with an explicit directory (dependency injection)
    pub fn with_directory(directory: D, event_stream: ES, render_stream: RS) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        Ok(Self {
            lookup: LookupController::new(directory),
            view_renderer,
            event_stream,
            scroll: 0,
            needs_render: false,
            should_quit: false,
        })
    }

    /// Run the main application loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        let result = self.event_loop().await;
        // Restore the terminal even when the loop failed
        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.view_renderer.render_full(self.lookup.state(), self.scroll)?;

        while !self.should_quit {
            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            }
            self.tick()?;
            // Terminal polling blocks; give spawned lookups a turn
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Resize(width, height) = event {
            tracing::debug!("Terminal resized to {width}x{height}");
            self.view_renderer.update_size(width, height);
            self.scroll = self.scroll.min(self.view_renderer.max_scroll(self.lookup.state()));
            self.needs_render = true;
            return Ok(());
        }

        if let Some(command) = map_event(&event) {
            tracing::debug!("Input command: {:?}", command);
            self.apply_command(command)?;
        }
        Ok(())
    }

    fn apply_command(&mut self, command: InputCommand) -> Result<()> {
        match command {
            InputCommand::Append(ch) => self.extend_input(&ch.to_string()),
            InputCommand::Paste(text) => self.extend_input(&text),
            InputCommand::Backspace => {
                let mut input = self.lookup.input().to_string();
                if input.pop().is_some() {
                    self.lookup.set_input(&input);
                }
            }
            InputCommand::Clear => {
                self.lookup.clear();
                self.view_renderer.focus_input(self.lookup.state())?;
            }
            InputCommand::Scroll(delta) => {
                let max = self.view_renderer.max_scroll(self.lookup.state());
                let scroll = self.scroll.saturating_add_signed(delta).min(max);
                if scroll != self.scroll {
                    self.scroll = scroll;
                    self.needs_render = true;
                }
            }
            InputCommand::Quit => {
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// The field holds six digits at most; typing into a full field does nothing
    fn extend_input(&mut self, text: &str) {
        if self.lookup.state().is_input_complete() {
            return;
        }
        let raw = format!("{}{}", self.lookup.input(), text);
        self.lookup.set_input(&raw);
    }

    /// Drain finished lookups and redraw if anything changed
    pub fn tick(&mut self) -> Result<()> {
        self.lookup.poll_completions();
        let events = self.lookup.collect_pending_events();

        if events
            .iter()
            .any(|e| matches!(e, StateEvent::ResultsReplaced { .. }))
        {
            self.scroll = 0;
        }

        if !events.is_empty() || self.needs_render {
            self.view_renderer.render_full(self.lookup.state(), self.scroll)?;
            self.needs_render = false;
        }
        Ok(())
    }

    /// Wait for every outstanding lookup, then redraw (for testing)
    pub async fn settle(&mut self) -> Result<()> {
        self.lookup.wait_until_settled().await;
        self.tick()
    }

    pub fn state(&self) -> &LookupState {
        self.lookup.state()
    }

    pub fn lookup(&self) -> &LookupController<D> {
        &self.lookup
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Check if the application should quit (for testing)
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
