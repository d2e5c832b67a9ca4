use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Active account reported by `gcloud auth list` unless disabled.
pub const ACTIVE_ACCOUNT: &str = "onboarding-admin@example.com";

/// Shell-script stand-in for `gcloud` that logs each invocation.
///
/// Rules are `case` patterns matched against the joined argument string;
/// the first match wins and anything unmatched exits 0 silently.
pub struct FakeGcloud {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
    arms: Vec<String>,
    authenticated: bool,
}

impl FakeGcloud {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake gcloud");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("gcloud.log");

        let fake = Self { root, bin_dir, log_file, arms: Vec::new(), authenticated: true };
        fake.write_script();
        fake
    }

    /// Print each of `lines` when the arguments match `pattern`.
    pub fn respond(mut self, pattern: &str, lines: &[&str]) -> Self {
        let quoted: Vec<String> = lines.iter().map(|line| format!("'{line}'")).collect();
        self.arms.push(format!(
            "    *\"{pattern}\"*)\n        printf '%s\\n' {}\n        ;;",
            quoted.join(" ")
        ));
        self.write_script();
        self
    }

    /// Exit 1 with `message` on stderr when the arguments match `pattern`.
    pub fn fail(mut self, pattern: &str, message: &str) -> Self {
        self.arms.push(format!(
            "    *\"{pattern}\"*)\n        echo '{message}' >&2\n        exit 1\n        ;;"
        ));
        self.write_script();
        self
    }

    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self.write_script();
        self
    }

    pub fn script_path(&self) -> PathBuf {
        self.bin_dir.join("gcloud")
    }

    fn write_script(&self) {
        let mut arms = self.arms.join("\n");
        if self.authenticated {
            arms.push_str(&format!(
                "\n    \"auth list\"*)\n        echo '{ACTIVE_ACCOUNT}'\n        ;;"
            ));
        }
        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{}"

ARGS="$*"

case "$ARGS" in
{}
esac

exit 0
"#,
            self.log_file.to_string_lossy(),
            arms
        );

        let path = self.script_path();
        fs::write(&path, script_content).expect("Failed to write gcloud script");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Logged invocations containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.get_log().lines().filter(|line| line.contains(needle)).count()
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }
}
