//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

/// Overrides the gcloud binary that is executed.
pub const GCLOUD_BIN_ENV: &str = "GCP_ONBOARD_GCLOUD";

/// Log filter directive, e.g. `debug` or `gcp_onboard=trace`.
pub const LOG_FILTER_ENV: &str = "GCP_ONBOARD_LOG";

const DEFAULT_GCLOUD_BIN: &str = "gcloud";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardConfig {
    pub gcloud_binary: PathBuf,
    pub log_filter: Option<String>,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self { gcloud_binary: PathBuf::from(DEFAULT_GCLOUD_BIN), log_filter: None }
    }
}

impl OnboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            gcloud_binary: non_blank(GCLOUD_BIN_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.gcloud_binary),
            log_filter: non_blank(LOG_FILTER_ENV),
        }
    }
}
