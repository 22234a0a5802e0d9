//! Build script for qb-ingest
//!
//! Exposes build identification to the binary as compile-time env vars:
//! `QB_GIT_HASH`, `QB_BUILD_TIMESTAMP`, `QB_BUILD_PROFILE`.

use std::process::Command;

/// Short commit hash, or "unknown" outside a git checkout
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // RFC 3339 with local offset, e.g. 2025-10-26T14:30:45-05:00
    let build_timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=QB_GIT_HASH={}", git_hash());
    println!("cargo:rustc-env=QB_BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rustc-env=QB_BUILD_PROFILE={}", profile);
}
