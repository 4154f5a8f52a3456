//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Async code never blocks the runtime. Processes are spawned with
//! `tokio::process` behind the `ProcessRunner` trait. File and network I/O
//! from `std` is allowed only in plain functions (config loading before any
//! command runs).

use architectural_enforcement::{find_blocking_io_violations, load_sources, production_dirs};

#[test]
fn test_no_blocking_io_in_production_code() {
    let files: Vec<_> = production_dirs()
        .iter()
        .flat_map(|dir| load_sources(dir))
        .collect();
    assert!(!files.is_empty(), "no sources found under {:?}", production_dirs());

    let violations = find_blocking_io_violations(&files);
    if !violations.is_empty() {
        eprintln!("\n❌ Blocking I/O found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ REQUIRED:");
        eprintln!("  - ProcessRunner::exec (tokio::process) for external programs");
        eprintln!("  - std::fs only outside async fns");
        panic!("Found {} blocking I/O violation(s)", violations.len());
    }
}
