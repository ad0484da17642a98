//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's `src/` tree for antipatterns. Each has a
//! budget of zero: browser code logs and carries on, it never panics or
//! throws a result away unseen.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    let hits = hits_for(&files, pattern);
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(hits.is_empty(), "`{pattern}` is not allowed ({why}):\n{listing}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "panics");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "panics");
}

#[test]
fn no_panic_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern, "panics");
    }
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "discards a result unseen");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "drops the error without logging it");
}

// =============================================================
// Structure
// =============================================================

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code instead");
}
