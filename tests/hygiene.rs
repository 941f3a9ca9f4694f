//! Hygiene: source-level budgets for `src/`.
//!
//! Production code runs inside animation-frame and DOM callbacks, where a
//! panic kills the game loop for the rest of the page's life. These scans
//! keep panicking calls, silently dropped errors, and console output that
//! bypasses the `log` facade out of the tree. Each budget is zero; a new
//! exception has to replace an old one.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, hint: "propagate with `?` or handle the None/Err" },
    Budget { pattern: ".expect(", max: 0, hint: "propagate with `?` or handle the None/Err" },
    Budget { pattern: "panic!(", max: 0, hint: "return a GameError" },
    Budget { pattern: "unreachable!(", max: 0, hint: "make the match exhaustive instead" },
    Budget { pattern: "todo!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, hint: "log or propagate the result" },
    Budget { pattern: ".ok()", max: 0, hint: "map the error into GameError" },
];

const STYLE: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the unused code" },
    Budget { pattern: "println!(", max: 0, hint: "use the log macros" },
    Budget { pattern: "web_sys::console::", max: 0, hint: "use the log macros" },
];

/// Production `.rs` files under `src/`, excluding `*_test.rs` siblings.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let n = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (n > 0).then(|| format!("  {path}: {n}"))
            })
            .collect();
        let count: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(budget.pattern)).count())
            .sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` found {count}, max {} ({}):\n{}",
                budget.pattern,
                budget.max,
                budget.hint,
                hits.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn scan_sees_the_source_tree() {
    let files = source_files();
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")), "no lib.rs under src/");
    assert!(files.iter().all(|(path, _)| !path.ends_with("_test.rs")));
}

#[test]
fn no_panicking_calls() {
    check(PANICS);
}

#[test]
fn no_silently_dropped_errors() {
    check(SILENT_LOSS);
}

#[test]
fn style_budgets() {
    check(STYLE);
}
