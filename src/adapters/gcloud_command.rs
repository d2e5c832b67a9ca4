use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::ports::{CliFailure, CloudCliPort};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the real `gcloud` binary as a subprocess.
#[derive(Debug, Clone)]
pub struct GcloudCommandAdapter {
    binary: PathBuf,
}

impl GcloudCommandAdapter {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self { binary: binary.into() }
    }

    fn spawn(&self, args: &[String]) -> Result<Child, CliFailure> {
        Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CliFailure::NotInstalled,
                _ => CliFailure::Io(e.to_string()),
            })
    }
}

impl Default for GcloudCommandAdapter {
    fn default() -> Self {
        Self::new("gcloud")
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

impl CloudCliPort for GcloudCommandAdapter {
    fn run(&self, args: &[String], timeout: Duration) -> Result<String, CliFailure> {
        debug!(binary = %self.binary.display(), args = %args.join(" "), ?timeout, "running gcloud");

        let mut child = self.spawn(args)?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    debug!(args = %args.join(" "), "gcloud timed out");
                    return Err(CliFailure::TimedOut);
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return Err(CliFailure::Io(e.to_string()));
                }
            }
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if status.success() {
            return Ok(stdout.trim().to_string());
        }
        match status.code() {
            Some(code) => Err(CliFailure::exited(Some(code), &stdout, &stderr)),
            None if stderr.trim().is_empty() => Err(CliFailure::Io(status.to_string())),
            None => Err(CliFailure::exited(None, &stdout, &stderr)),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn script(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("gcloud");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn success_returns_trimmed_stdout() {
        let dir = TempDir::new().unwrap();
        let adapter = GcloudCommandAdapter::new(script(&dir, "echo \"  $1 $2  \""));
        let out = adapter.run(&args(&["auth", "list"]), Duration::from_secs(5)).unwrap();
        assert_eq!(out, "auth list");
    }

    #[test]
    fn nonzero_exit_reports_stderr() {
        let dir = TempDir::new().unwrap();
        let adapter =
            GcloudCommandAdapter::new(script(&dir, "echo partial\necho 'PERMISSION_DENIED' >&2\nexit 2"));
        let err = adapter.run(&[], Duration::from_secs(5)).unwrap_err();
        assert_eq!(err, CliFailure::Exited { code: Some(2), message: "PERMISSION_DENIED".into() });
    }

    #[test]
    fn nonzero_exit_without_stderr_falls_back_to_stdout() {
        let dir = TempDir::new().unwrap();
        let adapter = GcloudCommandAdapter::new(script(&dir, "echo only-stdout\nexit 1"));
        let err = adapter.run(&[], Duration::from_secs(5)).unwrap_err();
        assert_eq!(err.to_string(), "only-stdout");
    }

    #[test]
    fn missing_binary_points_to_cloud_shell() {
        let dir = TempDir::new().unwrap();
        let adapter = GcloudCommandAdapter::new(dir.path().join("does-not-exist"));
        let err = adapter.run(&[], Duration::from_secs(5)).unwrap_err();
        assert_eq!(err, CliFailure::NotInstalled);
        assert!(err.to_string().contains("Google Cloud Shell"));
    }

    #[test]
    fn slow_command_times_out() {
        let dir = TempDir::new().unwrap();
        let adapter = GcloudCommandAdapter::new(script(&dir, "exec sleep 5"));
        let started = Instant::now();
        let err = adapter.run(&[], Duration::from_millis(300)).unwrap_err();
        assert_eq!(err, CliFailure::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
