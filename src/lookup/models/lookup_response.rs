//! Response envelope of the postal directory API.
//!
//! The directory promises an array holding exactly one envelope, and an
//! envelope that carries either a non-empty `PostOffice` list or a `Message`
//! explaining why not. Neither promise is relied upon here.

use super::postal_location::{null_as_empty, PostalLocation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value the directory uses for a successful lookup
pub const SUCCESS_STATUS: &str = "Success";

/// One envelope from the directory response array
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LookupResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    pub message: Option<String>,
    pub post_office: Option<Vec<PostalLocation>>,
}

impl LookupResponse {
    /// Envelope reporting a successful lookup
    pub fn success(locations: Vec<PostalLocation>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            message: Some(format!("Number of pincode(s) found:{}", locations.len())),
            post_office: Some(locations),
        }
    }

    /// Envelope reporting a rejected lookup
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            message: Some(message.into()),
            post_office: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Decode a parsed JSON body into envelopes.
    ///
    /// A body that is not an array yields no envelopes. Array items that do
    /// not have the envelope shape yield a default envelope with an empty
    /// status.
    pub fn decode_all(body: Value) -> Vec<Self> {
        match body {
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value(item).unwrap_or_else(|e| {
                        tracing::warn!("Malformed lookup envelope: {e}");
                        Self::default()
                    })
                })
                .collect(),
            other => {
                tracing::warn!("Lookup body is not an array: {other}");
                Vec::new()
            }
        }
    }
}
