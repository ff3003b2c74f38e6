//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::Path;

/// Writes `(relative path, content)` pairs under `root`, creating parents
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }
}

/// Fixed run timestamp so document output is reproducible
pub fn run_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}
