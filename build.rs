//! Stamps the binary with a release version and commit id.
//!
//! `PORTAL_VERSION` overrides the crate version. `PORTAL_GIT_SHA` overrides
//! the commit; CI builds use the short form of `GITHUB_SHA`, local builds ask
//! git, and anything else reports "unknown".

use std::env;
use std::process::Command;

const WATCHED_VARS: &[&str] = &["PORTAL_VERSION", "PORTAL_GIT_SHA", "GITHUB_SHA"];

fn main() {
    let version = env::var("PORTAL_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let git_sha = env::var("PORTAL_GIT_SHA")
        .ok()
        .or_else(ci_commit)
        .or_else(local_commit)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=PORTAL_VERSION={version}");
    println!("cargo:rustc-env=PORTAL_GIT_SHA={git_sha}");
    for var in WATCHED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
}

fn ci_commit() -> Option<String> {
    let sha = env::var("GITHUB_SHA").ok()?;
    Some(sha.chars().take(7).collect())
}

fn local_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
