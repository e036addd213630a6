//! Hygiene: source-level budgets for the floorplan workspace.
//!
//! Scans production sources of both crates (`floorplan/src` and the Leptos
//! `client/src`) for patterns that crash the viewer, drop errors, or hide
//! panics in parsing code. Budgets only move down: to add an occurrence,
//! remove another first.
//!
//! The client keeps a small `let _ =` / `.ok()` allowance for DOM calls
//! (`focus`, pointer capture, class toggles) whose failures are harmless.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    /// Lines that are code, not `//` comments or doc comments.
    fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines().filter(|line| !line.trim_start().starts_with("//"))
    }
}

/// Per-crate ceilings for each pattern.
struct Budgets {
    unwrap: usize,
    expect: usize,
    panics: usize,
    silent_discard: usize,
    dot_ok: usize,
    allow_dead_code: usize,
    println: usize,
    numeric_casts: usize,
}

const FLOORPLAN: Budgets = Budgets {
    unwrap: 0,
    expect: 0,
    panics: 0,
    silent_discard: 0,
    dot_ok: 0,
    allow_dead_code: 0,
    println: 0,
    // Canvas backing-store size (2) and approximate glyph width (1).
    numeric_casts: 3,
};

const CLIENT: Budgets = Budgets {
    unwrap: 0,
    expect: 0,
    panics: 0,
    silent_discard: 15,
    dot_ok: 4,
    allow_dead_code: 0,
    println: 0,
    // Zoom percentage label.
    numeric_casts: 1,
};

/// Files that walk untrusted document text; direct indexing there panics on
/// malformed input.
const PARSER_FILES: [&str; 2] = ["src/svg.rs", "src/label.rs"];

const PANIC_MACROS: [&str; 4] = ["panic!(", "unreachable!(", "todo!(", "unimplemented!("];

const CAST_TARGETS: [&str; 11] =
    [" as f64", " as f32", " as i64", " as i32", " as i16", " as u64", " as u32", " as u16", " as u8", " as usize", " as isize"];

/// Production `.rs` files under `dir`, excluding `*_test.rs` siblings.
fn source_files(dir: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(dir), &mut files);
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

fn floorplan_sources() -> Vec<SourceFile> {
    source_files("src")
}

fn client_sources() -> Vec<SourceFile> {
    source_files("../client/src")
}

/// Per-file hit counts for lines where `matches` holds.
fn count_lines(files: &[SourceFile], matches: impl Fn(&str) -> usize) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count: usize = file.code_lines().map(&matches).sum();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn count_any(files: &[SourceFile], patterns: &[&str]) -> Vec<(String, usize)> {
    count_lines(files, |line| usize::from(patterns.iter().any(|p| line.contains(p))))
}

/// Index expressions like `items[i]` or `chars[..n]`. Full-range `[..]`
/// slice patterns never panic and are not counted.
fn index_expressions(line: &str) -> usize {
    let bytes = line.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| {
            if b != b'[' || i == 0 {
                return false;
            }
            let prev = bytes[i - 1];
            let indexes = prev.is_ascii_alphanumeric() || matches!(prev, b'_' | b')' | b']');
            indexes && !line[i..].starts_with("[..]")
        })
        .count()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_budget(label: &str, hits: &[(String, usize)], max: usize) {
    let count = total(hits);
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(hits));
}

fn check_crate(name: &str, files: &[SourceFile], budgets: &Budgets) {
    assert_budget(&format!("{name}: .unwrap()"), &count_any(files, &[".unwrap()"]), budgets.unwrap);
    assert_budget(&format!("{name}: .expect()"), &count_any(files, &[".expect("]), budgets.expect);
    assert_budget(&format!("{name}: panicking macros"), &count_any(files, &PANIC_MACROS), budgets.panics);
    assert_budget(&format!("{name}: let _ ="), &count_any(files, &["let _ ="]), budgets.silent_discard);
    assert_budget(&format!("{name}: .ok()"), &count_any(files, &[".ok()"]), budgets.dot_ok);
    assert_budget(
        &format!("{name}: #[allow(dead_code)]"),
        &count_any(files, &["#[allow(dead_code)]"]),
        budgets.allow_dead_code,
    );
    assert_budget(&format!("{name}: println!"), &count_any(files, &["println!("]), budgets.println);
    assert_budget(&format!("{name}: numeric as-casts"), &count_any(files, &CAST_TARGETS), budgets.numeric_casts);
}

#[test]
fn floorplan_budgets() {
    let files = floorplan_sources();
    assert!(!files.is_empty(), "no floorplan sources found");
    check_crate("floorplan", &files, &FLOORPLAN);
}

#[test]
fn client_budgets() {
    let files = client_sources();
    if files.is_empty() {
        return;
    }
    check_crate("client", &files, &CLIENT);
}

#[test]
fn parsers_do_not_index_directly() {
    let files: Vec<SourceFile> = floorplan_sources()
        .into_iter()
        .filter(|file| PARSER_FILES.iter().any(|p| file.path.replace('\\', "/").ends_with(p)))
        .collect();
    assert_eq!(files.len(), PARSER_FILES.len(), "parser files moved; update PARSER_FILES");
    let hits = count_lines(&files, index_expressions);
    assert_budget("direct indexing in parsers", &hits, 0);
}

#[test]
fn index_scanner_flags_indexing_only() {
    assert_eq!(index_expressions("let x = first[0];"), 1);
    assert_eq!(index_expressions("chars[..end].iter()"), 1);
    assert_eq!(index_expressions("match parse(raw)[..] {"), 0);
    assert_eq!(index_expressions("fn f(tag: &[u8]) -> Vec<[f64; 2]> { vec![1] }"), 0);
    assert_eq!(index_expressions("#[must_use]"), 0);
}
