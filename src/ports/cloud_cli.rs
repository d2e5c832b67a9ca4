use std::time::Duration;

use thiserror::Error;

/// Timeout for ordinary gcloud calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for listing and API enablement calls.
pub const LONG_TIMEOUT: Duration = Duration::from_secs(120);

/// Why a gcloud invocation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliFailure {
    /// Binary missing from PATH.
    #[error("gcloud CLI not found. Please run this in Google Cloud Shell.")]
    NotInstalled,

    #[error("Command timed out")]
    TimedOut,

    /// Process ran and exited non-zero.
    #[error("{message}")]
    Exited { code: Option<i32>, message: String },

    /// Spawn or wait failed for another reason.
    #[error("{0}")]
    Io(String),
}

impl CliFailure {
    /// Build the failure for a non-zero exit, preferring stderr, then stdout.
    pub fn exited(code: Option<i32>, stdout: &str, stderr: &str) -> Self {
        let message = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .unwrap_or("Unknown error")
            .to_string();
        CliFailure::Exited { code, message }
    }
}

/// Executes the cloud CLI. Success yields trimmed stdout.
pub trait CloudCliPort {
    fn run(&self, args: &[String], timeout: Duration) -> Result<String, CliFailure>;
}

impl<T: CloudCliPort + ?Sized> CloudCliPort for &T {
    fn run(&self, args: &[String], timeout: Duration) -> Result<String, CliFailure> {
        (**self).run(args, timeout)
    }
}

/// Non-empty trimmed lines of command output.
pub fn output_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}
