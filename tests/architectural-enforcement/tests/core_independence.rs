//! Integration Test: Core Independence
//!
//! **Policy**: `pisay-core` knows nothing about terminals or argument
//! parsing. Hosts bring their own UI through the `UiSurface` trait.

use std::fs;

use architectural_enforcement::{dependency_names, workspace_root};

const HOST_ONLY: &[&str] = &["crossterm", "ratatui", "clap", "tracing-subscriber", "anyhow"];

#[test]
fn test_core_has_no_host_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("pisay/core/Cargo.toml"))
        .expect("core manifest");
    let deps = dependency_names(&manifest);
    assert!(deps.iter().any(|d| d == "tokio"), "parsed {deps:?}");

    let leaked: Vec<_> = deps
        .iter()
        .filter(|d| HOST_ONLY.contains(&d.as_str()))
        .collect();
    assert!(leaked.is_empty(), "core depends on host crates: {leaked:?}");
}

#[test]
fn test_cli_depends_on_core() {
    let manifest = fs::read_to_string(workspace_root().join("pisay/cli/Cargo.toml"))
        .expect("cli manifest");
    assert!(dependency_names(&manifest).iter().any(|d| d == "pisay-core"));
}
