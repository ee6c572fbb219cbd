//! Configuration constants and profile loading for pinpoint
//!
//! Profiles live in an INI file, one section per profile name:
//!
//! ```ini
//! [default]
//! base_url = https://api.postalpincode.in
//! user_agent = pinpoint/0.1
//! log_file = ~/.pinpoint/pinpoint.log
//! ```
//!
//! A missing file or section falls back to [`LookupProfile::default`].

use anyhow::{Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};

/// Default profile file path for pinpoint
pub const DEFAULT_PROFILE_PATH: &str = "~/.pinpoint/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "PINPOINT_PROFILE_PATH";

/// Environment variable holding the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "PINPOINT_LOG_LEVEL";

/// Public postal directory endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.postalpincode.in";

/// Where interactive sessions write their log
pub const DEFAULT_LOG_FILE: &str = "~/.pinpoint/pinpoint.log";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Settings for talking to the directory service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupProfile {
    pub base_url: String,
    pub user_agent: Option<String>,
    pub log_file: String,
}

impl Default for LookupProfile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl LookupProfile {
    /// Profile pointing at a different directory host (used by tests and mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn log_file_path(&self) -> PathBuf {
        expand_path(&self.log_file)
    }
}

/// Reads named profiles from an INI file
pub struct IniProfileStore {
    path: PathBuf,
}

impl IniProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_path(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a profile by section name.
    ///
    /// Returns `Ok(None)` when the file or the section does not exist, and
    /// an error when the file exists but cannot be parsed.
    pub fn get_profile(&self, name: &str) -> Result<Option<LookupProfile>> {
        if !self.path.exists() {
            tracing::debug!("Profile file {:?} does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("Failed to read profile file {:?}", self.path))?;

        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let defaults = LookupProfile::default();
        let base_url = section
            .get("base_url")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);
        let user_agent = section
            .get("user_agent")
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .map(str::to_string);
        let log_file = section
            .get("log_file")
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.log_file);

        Ok(Some(LookupProfile {
            base_url,
            user_agent,
            log_file,
        }))
    }
}

/// Load a profile by name, falling back to defaults when it is not configured
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<LookupProfile> {
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let store = IniProfileStore::new(profile_path);
    match store.get_profile(profile_name)? {
        Some(profile) => {
            tracing::debug!("Profile loaded successfully, base url: {}", profile.base_url);
            Ok(profile)
        }
        None => {
            tracing::debug!("Profile '{}' not found, using defaults", profile_name);
            Ok(LookupProfile::default())
        }
    }
}
