//! Shared helpers for qa-ingest integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write csv");
    path
}
