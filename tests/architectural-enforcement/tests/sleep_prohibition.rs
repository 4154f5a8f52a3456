//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code never blocks a thread with `std::thread::sleep`.
//! Timed waits exist only as scripted `Wait` steps, executed by the sequence
//! engine with `tokio::time::sleep`.

use architectural_enforcement::{find_sleep_violations, load_sources, production_dirs};

/// Files allowed to await a timer
const WAIT_ALLOWED: &[&str] = &["pisay/core/src/sequence.rs"];

#[test]
fn test_no_sleep_in_production_code() {
    let files: Vec<_> = production_dirs()
        .iter()
        .flat_map(|dir| load_sources(dir))
        .collect();
    assert!(!files.is_empty(), "no sources found under {:?}", production_dirs());

    let violations = find_sleep_violations(&files, WAIT_ALLOWED);
    if !violations.is_empty() {
        eprintln!("\n❌ Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Timed waits are `SequenceStep::Wait` steps, run by the sequence engine.");
        panic!("Found {} sleep violation(s)", violations.len());
    }
}

#[test]
fn test_sequence_engine_still_waits_with_tokio() {
    let root = architectural_enforcement::workspace_root();
    let files = load_sources(&root.join("pisay/core/src"));
    let engine = files
        .iter()
        .find(|f| f.is("pisay/core/src/sequence.rs"))
        .expect("sequence engine source");
    assert!(
        engine
            .lines
            .iter()
            .any(|l| l.contains("tokio::time::sleep(")),
        "the Wait step should suspend on the tokio timer"
    );
}
