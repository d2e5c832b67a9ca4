use std::sync::Mutex;
use std::time::Duration;

use crate::ports::{CliFailure, CloudCliPort};

/// Scripted gcloud that records every call.
///
/// A rule matches when each of its needles equals one of the call's
/// arguments; the first matching rule wins. Unmatched calls succeed with
/// empty output.
pub struct FakeCloudCli {
    pub calls: Mutex<Vec<Vec<String>>>,
    pub timeouts: Mutex<Vec<Duration>>,
    rules: Mutex<Vec<(Vec<String>, Result<String, CliFailure>)>>,
}

impl Default for FakeCloudCli {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeCloudCli {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
            rules: Mutex::new(Vec::new()),
        }
    }

    /// A fake with an active account already logged in.
    pub fn authenticated() -> Self {
        Self::new().respond(&["auth", "list"], "auditor-admin@example.com")
    }

    pub fn respond(self, needles: &[&str], stdout: &str) -> Self {
        self.push_rule(needles, Ok(stdout.to_string()))
    }

    pub fn fail(self, needles: &[&str], message: &str) -> Self {
        self.push_rule(
            needles,
            Err(CliFailure::Exited { code: Some(1), message: message.to_string() }),
        )
    }

    pub fn fail_with(self, needles: &[&str], failure: CliFailure) -> Self {
        self.push_rule(needles, Err(failure))
    }

    fn push_rule(self, needles: &[&str], result: Result<String, CliFailure>) -> Self {
        let needles = needles.iter().map(|n| n.to_string()).collect();
        self.rules.lock().unwrap().push((needles, result));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls containing every needle.
    pub fn count(&self, needles: &[&str]) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| needles.iter().all(|n| call.iter().any(|arg| arg == n)))
            .count()
    }
}

impl CloudCliPort for FakeCloudCli {
    fn run(&self, args: &[String], timeout: Duration) -> Result<String, CliFailure> {
        self.calls.lock().unwrap().push(args.to_vec());
        self.timeouts.lock().unwrap().push(timeout);
        self.rules
            .lock()
            .unwrap()
            .iter()
            .find(|(needles, _)| needles.iter().all(|n| args.contains(n)))
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| Ok(String::new()))
    }
}
