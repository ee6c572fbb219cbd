//! # Lookup Controller
//!
//! Owns the pincode input and the fetch status, decides when to hit the
//! directory, and interprets what comes back.
//!
//! ```text
//!   idle ──complete input──▶ loading ──success envelope──▶ success
//!                               │
//!                               └──failure / invalid──▶ error
//!   error | success ──complete input──▶ loading
//!   any ──clear / empty input──▶ idle
//! ```
//!
//! Lookups run as spawned tasks and report back over a channel. Each one is
//! tagged with a request id; only the completion for the most recently
//! issued id is applied, and clearing the input retires the current id, so
//! a slow response can never overwrite newer state.

use crate::lookup::events::{EventBus, StateEvent};
use crate::lookup::input::{is_complete, sanitize_pincode};
use crate::lookup::models::{
    LookupResponse, LookupState, PostalLocation, QueryStatus, SUCCESS_STATUS,
};
use crate::lookup::services::{LookupError, PincodeDirectory};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shown for any transport failure; the underlying error is only logged
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Failed to connect to the postal service. Please try again later.";

/// Shown when the directory rejects a code without explaining why
pub const INVALID_PINCODE_MESSAGE: &str = "Invalid Pincode. No records found.";

const COMPLETION_CHANNEL_CAPACITY: usize = 16;

/// A finished lookup, as delivered back to the controller
#[derive(Debug)]
pub struct LookupCompletion {
    pub request_id: u64,
    pub code: String,
    pub result: Result<Vec<LookupResponse>, LookupError>,
}

/// How a lookup result maps onto the status machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Directory returned at least one post office
    Found(Vec<PostalLocation>),
    /// Directory answered but had nothing usable; carries the user message
    Rejected(String),
    /// Directory could not be reached
    Unreachable,
}

/// Interpret a lookup result. Only the first envelope is considered.
pub fn classify(result: Result<Vec<LookupResponse>, LookupError>) -> LookupOutcome {
    let envelopes = match result {
        Ok(envelopes) => envelopes,
        Err(_) => return LookupOutcome::Unreachable,
    };

    match envelopes.into_iter().next() {
        Some(LookupResponse {
            status,
            message,
            post_office,
        }) => match post_office {
            Some(locations) if status == SUCCESS_STATUS && !locations.is_empty() => {
                LookupOutcome::Found(locations)
            }
            _ => LookupOutcome::Rejected(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| INVALID_PINCODE_MESSAGE.to_string()),
            ),
        },
        None => LookupOutcome::Rejected(INVALID_PINCODE_MESSAGE.to_string()),
    }
}

/// State machine wrapping the pincode directory
pub struct LookupController<D: PincodeDirectory> {
    directory: Arc<D>,
    state: LookupState,
    next_request_id: u64,
    /// Id whose completion will be applied; `None` when nothing counts
    active_request: Option<u64>,
    /// Spawned lookups whose completion has not been received yet
    outstanding: usize,
    completion_sender: mpsc::Sender<LookupCompletion>,
    completion_receiver: mpsc::Receiver<LookupCompletion>,
    pending_events: Vec<StateEvent>,
    event_bus: Option<Box<dyn EventBus>>,
}

impl<D: PincodeDirectory> LookupController<D> {
    pub fn new(directory: D) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_CHANNEL_CAPACITY);
        Self {
            directory: Arc::new(directory),
            state: LookupState::new(),
            next_request_id: 0,
            active_request: None,
            outstanding: 0,
            completion_sender,
            completion_receiver,
            pending_events: Vec::new(),
            event_bus: None,
        }
    }

    /// Attach an observer bus; every state event is published to it
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    pub fn status(&self) -> QueryStatus {
        self.state.status
    }

    pub fn results(&self) -> &[PostalLocation] {
        &self.state.results
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message.as_deref()
    }

    /// Whether any spawned lookup has yet to report back
    pub fn has_outstanding(&self) -> bool {
        self.outstanding > 0
    }

    /// Take the state events emitted since the last call
    pub fn collect_pending_events(&mut self) -> Vec<StateEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Replace the input with `raw`, sanitized to at most six digits.
    ///
    /// A complete code starts a lookup and an empty one resets to idle.
    /// Partial input leaves status and results alone. Returns whether a
    /// lookup was issued.
    pub fn set_input(&mut self, raw: &str) -> bool {
        let code = sanitize_pincode(raw);
        self.set_input_text(code.clone());

        if is_complete(&code) {
            self.fetch(&code)
        } else {
            if code.is_empty() {
                self.reset_query();
            }
            false
        }
    }

    /// Start a lookup for `code`. Does nothing unless `code` is complete.
    pub fn fetch(&mut self, code: &str) -> bool {
        if !is_complete(code) {
            tracing::debug!("Ignoring fetch for incomplete code '{code}'");
            return false;
        }

        self.set_status(QueryStatus::Loading);
        self.set_error_message(None);
        self.set_results(Vec::new());

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.active_request = Some(request_id);
        self.outstanding += 1;
        tracing::debug!("Issuing lookup #{request_id} for {code}");

        let directory = Arc::clone(&self.directory);
        let sender = self.completion_sender.clone();
        let code = code.to_string();
        tokio::spawn(async move {
            let result = directory.lookup(&code).await;
            let completion = LookupCompletion {
                request_id,
                code,
                result,
            };
            // Receiver lives as long as the controller; a failed send means
            // it is gone and nobody cares about the answer
            let _ = sender.send(completion).await;
        });

        true
    }

    /// Reset input, results and status to idle in one step
    pub fn clear(&mut self) {
        self.set_input_text(String::new());
        self.reset_query();
    }

    /// Apply every completion that has already arrived, without waiting.
    /// Returns how many changed the state.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_receiver.try_recv() {
            if self.apply_completion(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns `None` when no lookup is outstanding, otherwise whether the
    /// completion was current (`true`) or stale and discarded (`false`).
    pub async fn wait_for_completion(&mut self) -> Option<bool> {
        if self.outstanding == 0 {
            return None;
        }
        let completion = self.completion_receiver.recv().await?;
        Some(self.apply_completion(completion))
    }

    /// Wait until every spawned lookup has reported back
    pub async fn wait_until_settled(&mut self) {
        while self.wait_for_completion().await.is_some() {}
    }

    fn apply_completion(&mut self, completion: LookupCompletion) -> bool {
        self.outstanding = self.outstanding.saturating_sub(1);

        let LookupCompletion {
            request_id,
            code,
            result,
        } = completion;

        if let Err(e) = &result {
            tracing::error!("Lookup #{request_id} for {code} failed: {e}");
        }

        if self.active_request != Some(request_id) {
            tracing::debug!("Discarding stale lookup #{request_id} for {code}");
            return false;
        }
        self.active_request = None;

        match classify(result) {
            LookupOutcome::Found(locations) => {
                tracing::info!("Found {} post office(s) for {code}", locations.len());
                self.set_results(locations);
                self.set_status(QueryStatus::Success);
            }
            LookupOutcome::Rejected(message) => {
                tracing::info!("Lookup for {code} rejected: {message}");
                self.set_results(Vec::new());
                self.set_error_message(Some(message));
                self.set_status(QueryStatus::Error);
            }
            LookupOutcome::Unreachable => {
                self.set_results(Vec::new());
                self.set_error_message(Some(CONNECTIVITY_ERROR_MESSAGE.to_string()));
                self.set_status(QueryStatus::Error);
            }
        }
        true
    }

    fn reset_query(&mut self) {
        if let Some(request_id) = self.active_request.take() {
            tracing::debug!("Retiring in-flight lookup #{request_id}");
        }
        self.set_results(Vec::new());
        self.set_error_message(None);
        self.set_status(QueryStatus::Idle);
    }

    fn set_input_text(&mut self, input: String) {
        if self.state.input != input {
            self.state.input = input.clone();
            self.emit(StateEvent::InputChanged { input });
        }
    }

    fn set_status(&mut self, status: QueryStatus) {
        let old = self.state.status;
        if old != status {
            self.state.status = status;
            self.emit(StateEvent::StatusChanged { old, new: status });
        }
    }

    fn set_results(&mut self, results: Vec<PostalLocation>) {
        if self.state.results != results {
            let count = results.len();
            self.state.results = results;
            self.emit(StateEvent::ResultsReplaced { count });
        }
    }

    fn set_error_message(&mut self, message: Option<String>) {
        if self.state.error_message != message {
            self.state.error_message = message.clone();
            self.emit(StateEvent::ErrorMessageChanged { message });
        }
    }

    fn emit(&mut self, event: StateEvent) {
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish(event.clone());
        }
        self.pending_events.push(event);
    }
}
