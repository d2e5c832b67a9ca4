//! Shared testing utilities for gcp-onboard CLI tests.

#![allow(dead_code)]

mod fake_gcloud;

pub use fake_gcloud::{ACTIVE_ACCOUNT, FakeGcloud};

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;

/// Isolated environment: a fake `gcloud` first on `PATH`.
pub struct TestContext {
    pub gcloud: FakeGcloud,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_gcloud(FakeGcloud::new())
    }

    pub fn with_gcloud(gcloud: FakeGcloud) -> Self {
        Self { gcloud }
    }

    fn search_path(&self) -> OsString {
        let mut paths = vec![self.gcloud.bin_dir().to_path_buf()];
        if let Some(existing) = env::var_os("PATH") {
            paths.extend(env::split_paths(&existing));
        }
        env::join_paths(paths).expect("Failed to join PATH")
    }

    /// Build a command for invoking the compiled `gcp-onboard` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gcp-onboard").expect("Failed to locate gcp-onboard binary");
        cmd.env("PATH", self.search_path())
            .env_remove("GCP_ONBOARD_GCLOUD")
            .env_remove("GCP_ONBOARD_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}
