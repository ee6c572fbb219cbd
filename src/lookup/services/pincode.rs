//! # Pincode Directory Service
//!
//! Issues lookups against the postal directory and decodes its envelopes.

use crate::config::LookupProfile;
use crate::lookup::models::LookupResponse;
use anyhow::Result;
use std::future::Future;
use thiserror::Error;

/// Why a lookup never produced envelopes
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection, TLS or protocol failure
    #[error("failed to fetch: {0}")]
    Transport(#[from] reqwest::Error),
    /// Directory answered with a non-success HTTP status
    #[error("failed to fetch: HTTP {0}")]
    Status(u16),
    /// Directory answered with something that is not JSON
    #[error("failed to fetch: response is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of pincode envelopes
///
/// The controller spawns lookups onto the runtime, so implementations must
/// be shareable across tasks.
pub trait PincodeDirectory: Send + Sync + 'static {
    /// Look up a 6-digit code. The caller guarantees the code is complete.
    fn lookup(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Vec<LookupResponse>, LookupError>> + Send;
}

/// Directory backed by the public postal pincode REST API
#[derive(Debug, Clone)]
pub struct HttpPincodeDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPincodeDirectory {
    /// Create a directory client from a profile
    pub fn new(profile: &LookupProfile) -> Result<Self> {
        tracing::debug!("Creating HttpPincodeDirectory for {}", profile.base_url);

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &profile.user_agent {
            builder = builder.user_agent(user_agent.clone());
        } else {
            builder = builder.user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: profile.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the lookup endpoint for `code`
    pub fn lookup_url(&self, code: &str) -> String {
        format!("{}/pincode/{}", self.base_url, code)
    }
}

impl PincodeDirectory for HttpPincodeDirectory {
    async fn lookup(&self, code: &str) -> Result<Vec<LookupResponse>, LookupError> {
        let url = self.lookup_url(code);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Directory answered {} for {}", status.as_u16(), code);
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let envelopes = LookupResponse::decode_all(value);
        tracing::info!("Lookup for {} returned {} envelope(s)", code, envelopes.len());
        Ok(envelopes)
    }
}
