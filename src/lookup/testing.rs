//! Test doubles shared by the unit tests.

use crate::lookup::models::{LookupResponse, PostalLocation};
use crate::lookup::services::{LookupError, PincodeDirectory};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted answer of [`MockPincodeDirectory`]
#[derive(Debug, Clone)]
pub enum MockReply {
    Envelopes(Vec<LookupResponse>),
    /// Fails the way an unreachable directory would
    Unreachable,
}

/// In-memory directory that records every lookup it receives
#[derive(Debug, Default)]
pub struct MockPincodeDirectory {
    replies: HashMap<String, (MockReply, Duration)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPincodeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, code: &str, reply: MockReply) -> Self {
        self.with_delayed_reply(code, reply, Duration::ZERO)
    }

    pub fn with_delayed_reply(mut self, code: &str, reply: MockReply, delay: Duration) -> Self {
        self.replies.insert(code.to_string(), (reply, delay));
        self
    }

    /// Codes looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PincodeDirectory for MockPincodeDirectory {
    async fn lookup(&self, code: &str) -> Result<Vec<LookupResponse>, LookupError> {
        self.calls.lock().unwrap().push(code.to_string());

        let (reply, delay) = self.replies.get(code).cloned().unwrap_or_else(|| {
            (
                MockReply::Envelopes(vec![LookupResponse::error("No records found")]),
                Duration::ZERO,
            )
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            MockReply::Envelopes(envelopes) => Ok(envelopes),
            MockReply::Unreachable => Err(LookupError::Status(502)),
        }
    }
}

/// A plausible Delhi post office with the given name
pub fn sample_location(name: &str) -> PostalLocation {
    PostalLocation {
        name: name.to_string(),
        description: None,
        branch_type: "Sub Post Office".to_string(),
        delivery_status: "Delivery".to_string(),
        circle: "Delhi".to_string(),
        district: "Central Delhi".to_string(),
        division: "New Delhi Central".to_string(),
        region: "Delhi".to_string(),
        block: "New Delhi".to_string(),
        state: "Delhi".to_string(),
        country: "India".to_string(),
        pincode: "110001".to_string(),
    }
}
