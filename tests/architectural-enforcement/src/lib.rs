//! Architectural Enforcement
//!
//! Source scanners behind the workspace's architecture tests:
//! - No blocking sleeps. Timed waits belong to the sequence engine only.
//! - No blocking process, file or network I/O inside async functions.
//! - The core crate stays free of terminal libraries.
//!
//! Only production code is scanned: everything from a file's first
//! `#[cfg(test)]` onwards is ignored, as are comments.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, resolved from this crate's manifest
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// Production source directories of the workspace crates
pub fn production_dirs() -> Vec<PathBuf> {
    let root = workspace_root();
    vec![root.join("pisay/core/src"), root.join("pisay/cli/src")]
}

/// A Rust source file with its test module stripped
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path on disk
    pub path: PathBuf,
    /// Lines before the first `#[cfg(test)]`
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Build from file contents
    pub fn from_source(path: impl Into<PathBuf>, content: &str) -> Self {
        let lines = content
            .lines()
            .take_while(|line| !line.trim_start().starts_with("#[cfg(test)]"))
            .map(str::to_string)
            .collect();
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Whether the path ends with `suffix` (`/`-separated)
    pub fn is(&self, suffix: &str) -> bool {
        self.path.ends_with(suffix)
    }
}

/// Every `.rs` file under `dir`, test modules stripped
pub fn load_sources(dir: &Path) -> Vec<SourceFile> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            Some(SourceFile::from_source(e.path(), &content))
        })
        .collect()
}

/// A rule broken at a specific line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File containing the violation
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// Offending line, trimmed
    pub text: String,
    /// What was broken
    pub rule: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} - {}: {}",
            self.path.display(),
            self.line,
            self.rule,
            self.text
        )
    }
}

/// The part of a line before any `//` comment
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Kind of function a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FnKind {
    /// `async fn`
    Async,
    /// Plain `fn`
    Sync,
}

/// Classify a line as a function declaration
fn declared_fn(line: &str) -> Option<FnKind> {
    let mut rest = code_part(line).trim_start();
    for prefix in ["pub(crate) ", "pub(super) ", "pub "] {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
            break;
        }
    }
    let mut is_async = false;
    loop {
        if let Some(stripped) = rest.strip_prefix("async ") {
            is_async = true;
            rest = stripped;
        } else if let Some(stripped) = rest
            .strip_prefix("const ")
            .or_else(|| rest.strip_prefix("unsafe "))
        {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.starts_with("fn ").then_some(if is_async {
        FnKind::Async
    } else {
        FnKind::Sync
    })
}

/// The function enclosing line `idx`, found by scanning upwards
pub fn enclosing_fn(lines: &[String], idx: usize) -> Option<FnKind> {
    lines[..=idx].iter().rev().find_map(|line| declared_fn(line))
}

/// Sleeps outside the files allowed to wait
///
/// `std::thread::sleep` is never allowed. `tokio::time::sleep` is allowed in
/// files ending with one of `wait_allowed`.
pub fn find_sleep_violations(files: &[SourceFile], wait_allowed: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for file in files {
        for (idx, line) in file.lines.iter().enumerate() {
            let code = code_part(line);
            if !(code.contains("::sleep(") || code.contains(".sleep(")) {
                continue;
            }

            let rule = if code.contains("thread::sleep") {
                "blocking sleep"
            } else if code.contains("tokio::time::sleep")
                && wait_allowed.iter().any(|allowed| file.is(allowed))
            {
                continue;
            } else {
                "sleep outside the sequence engine"
            };

            violations.push(Violation {
                path: file.path.clone(),
                line: idx + 1,
                text: line.trim().to_string(),
                rule,
            });
        }
    }
    violations
}

const BLOCKING_IN_ASYNC: &[(&str, &str)] = &[
    ("std::fs::", "blocking file I/O in async fn"),
    ("std::net::", "blocking network I/O in async fn"),
    ("std::thread::sleep", "blocking sleep in async fn"),
];

/// Blocking I/O that would stall the runtime
///
/// `std::process::Command` is flagged anywhere: processes go through the
/// tokio-backed runner. File and network I/O is flagged in async functions.
pub fn find_blocking_io_violations(files: &[SourceFile]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for file in files {
        for (idx, line) in file.lines.iter().enumerate() {
            let code = code_part(line);
            let mut push = |rule| {
                violations.push(Violation {
                    path: file.path.clone(),
                    line: idx + 1,
                    text: line.trim().to_string(),
                    rule,
                });
            };

            if code.contains("std::process::Command") {
                push("blocking process spawn");
                continue;
            }

            if enclosing_fn(&file.lines, idx) != Some(FnKind::Async) {
                continue;
            }
            if let Some(&(_, rule)) = BLOCKING_IN_ASYNC
                .iter()
                .find(|(needle, _)| code.contains(needle))
            {
                push(rule);
            }
        }
    }
    violations
}

/// Names of the entries in the `[dependencies]` table of a manifest
pub fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_deps = false;
    let mut names = Vec::new();
    for line in manifest.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_deps = line == "[dependencies]";
            continue;
        }
        if !in_deps || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, src: &str) -> SourceFile {
        SourceFile::from_source(path, src)
    }

    #[test]
    fn test_test_module_is_stripped() {
        let f = file(
            "a.rs",
            "fn a() {}\n#[cfg(test)]\nmod tests {\n    fn b() { std::thread::sleep(d); }\n}\n",
        );
        assert_eq!(f.lines, vec!["fn a() {}".to_string()]);
    }

    #[test]
    fn test_declared_fn() {
        assert_eq!(declared_fn("    pub async fn run(&self) {"), Some(FnKind::Async));
        assert_eq!(declared_fn("pub(crate) fn lines() {"), Some(FnKind::Sync));
        assert_eq!(declared_fn("    async unsafe fn x() {"), Some(FnKind::Async));
        assert_eq!(declared_fn("    let f = fn_ptr;"), None);
        assert_eq!(declared_fn("// async fn commented()"), None);
    }

    #[test]
    fn test_enclosing_fn() {
        let lines: Vec<String> = [
            "async fn bad() {",
            "    let s = std::fs::read_to_string(p);",
            "}",
            "fn fine() {",
            "    let s = std::fs::read_to_string(p);",
            "}",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        assert_eq!(enclosing_fn(&lines, 1), Some(FnKind::Async));
        assert_eq!(enclosing_fn(&lines, 4), Some(FnKind::Sync));
    }

    #[test]
    fn test_sleep_detection() {
        let files = [
            file("src/sequence.rs", "async fn wait() {\n    tokio::time::sleep(d).await;\n}\n"),
            file("src/other.rs", "async fn poll() {\n    tokio::time::sleep(d).await;\n}\n"),
            file("src/sync.rs", "fn nap() {\n    std::thread::sleep(d);\n}\n"),
            file("src/doc.rs", "// tokio::time::sleep(d) in a comment\n"),
        ];
        let violations = find_sleep_violations(&files, &["src/sequence.rs"]);
        let rules: Vec<_> = violations.iter().map(|v| (v.line, v.rule)).collect();
        assert_eq!(
            rules,
            vec![
                (2, "sleep outside the sequence engine"),
                (2, "blocking sleep"),
            ]
        );
    }

    #[test]
    fn test_blocking_io_detection() {
        let files = [file(
            "src/io.rs",
            "fn load() {\n    std::fs::read_to_string(p);\n}\n\
             async fn bad() {\n    std::fs::read_to_string(p);\n}\n\
             fn spawn() {\n    std::process::Command::new(\"ls\");\n}\n",
        )];
        let violations = find_blocking_io_violations(&files);
        let lines: Vec<_> = violations.iter().map(|v| (v.line, v.rule)).collect();
        assert_eq!(
            lines,
            vec![
                (5, "blocking file I/O in async fn"),
                (8, "blocking process spawn"),
            ]
        );
    }

    #[test]
    fn test_dependency_names() {
        let manifest = "[package]\nname = \"x\"\n\n[dependencies]\n# Async\ntokio = { version = \"1\" }\nserde = \"1.0\"\n\n[dev-dependencies]\ntempfile = \"3\"\n";
        assert_eq!(dependency_names(manifest), vec!["tokio", "serde"]);
    }
}
