//! Batch checker: parse every V file under a root and report syntax errors.
//!
//! Files are parsed in parallel; output keeps walk order. Per-file lines go to
//! stderr and the banner plus summary to stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use vsyntax::{ErrorNode, Point};
use walkdir::WalkDir;

use crate::colors::Colors;

const RULE: &str = "==============================================";

pub struct CheckArgs {
    pub root: PathBuf,
    pub hide_ranges: bool,
    pub json: bool,
    pub include_tests: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("cannot walk project: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Summary written by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub dir: String,
    pub total_files: usize,
    pub total_passed: usize,
    pub total_fail: usize,
}

/// Result of checking one file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path relative to the project root.
    pub path: String,
    pub errors: Vec<ErrorNode>,
    /// Set when the file could not be read or parsing gave up.
    pub failure: Option<String>,
}

impl FileOutcome {
    pub fn passed(&self) -> bool {
        self.errors.is_empty() && self.failure.is_none()
    }
}

/// Everything a check run prints, plus the report.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: Report,
    pub details: String,
    pub summary: String,
}

pub fn run(args: CheckArgs) {
    let outcome = check(&args).and_then(|outcome| {
        if args.json {
            let dir = std::env::current_dir().map_err(|source| CheckError::Io {
                path: PathBuf::from("."),
                source,
            })?;
            write_report(&outcome.report, &dir)?;
        }
        Ok(outcome)
    });

    match outcome {
        Ok(outcome) => {
            eprint!("{}", outcome.details);
            print!("{}", outcome.summary);
            if outcome.report.total_fail > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn check(args: &CheckArgs) -> Result<CheckOutcome, CheckError> {
    let colors = Colors::new(args.color);
    let files = collect_files(&args.root, args.include_tests)?;
    tracing::debug!(root = %args.root.display(), files = files.len(), "collected files");

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| check_file(&args.root, path))
        .collect();

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    let report = Report {
        dir: args.root.display().to_string(),
        total_files: outcomes.len(),
        total_passed: outcomes.len() - failed,
        total_fail: failed,
    };

    let details = if args.hide_ranges {
        render_pass_fail(&outcomes, colors)
    } else {
        render_ranges(&outcomes, colors)
    };

    let mut summary = String::new();
    let _ = writeln!(summary, "{}{RULE}{}", colors.dim, colors.reset);
    let _ = writeln!(summary, "V project: {}", report.dir);
    let _ = writeln!(summary, "{}{RULE}{}", colors.dim, colors.reset);
    let _ = writeln!(summary);
    let _ = writeln!(summary, "Summary:");
    if failed == 0 {
        let _ = writeln!(summary, "All {} files were parsed successfully", report.total_files);
    } else {
        let _ = writeln!(summary, "{failed} files were not parsed properly");
    }

    Ok(CheckOutcome {
        report,
        details,
        summary,
    })
}

/// `.v` files under `root` in walk order, skipping tests unless asked.
pub fn collect_files(root: &Path, include_tests: bool) -> Result<Vec<PathBuf>, CheckError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "v") {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if !include_tests && is_skipped(relative) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

/// Test files, bare-metal variants, JS backend sources, and anything under `tests/` or `js/`.
fn is_skipped(relative: &Path) -> bool {
    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if stem.ends_with("_test") || stem.ends_with("_bare") || stem.ends_with(".js") {
        return true;
    }
    relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .any(|c| matches!(c.as_os_str().to_str(), Some("tests" | "js")))
}

pub fn check_file(root: &Path, path: &Path) -> FileOutcome {
    let shown = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(file = %shown, error = %e, "cannot read file");
            return FileOutcome {
                path: shown,
                errors: Vec::new(),
                failure: Some(format!("cannot read file: {e}")),
            };
        }
    };

    match vsyntax::parse(&source) {
        Ok((parse, _)) => {
            let errors = parse.errors();
            tracing::debug!(file = %shown, errors = errors.len(), "parsed file");
            FileOutcome {
                path: shown,
                errors,
                failure: None,
            }
        }
        Err(e) => {
            tracing::warn!(file = %shown, error = %e, "parser gave up");
            FileOutcome {
                path: shown,
                errors: Vec::new(),
                failure: Some(e.to_string()),
            }
        }
    }
}

fn render_pass_fail(outcomes: &[FileOutcome], colors: Colors) -> String {
    let width = outcomes.iter().map(|o| o.path.len()).max().unwrap_or(0);
    let mut out = String::new();
    for outcome in outcomes {
        let marker = if outcome.passed() {
            format!("{}[Pass ]{}", colors.green, colors.reset)
        } else {
            format!("{}[Error]{}", colors.red, colors.reset)
        };
        let _ = write!(out, "{marker} file: {:<width$} | ", outcome.path);
        match &outcome.failure {
            Some(reason) => {
                let _ = writeln!(out, "{reason}");
            }
            None => {
                let _ = writeln!(out, "errors: {}", outcome.errors.len());
            }
        }
    }
    out
}

fn render_ranges(outcomes: &[FileOutcome], colors: Colors) -> String {
    let mut out = String::new();
    for outcome in outcomes.iter().filter(|o| !o.passed()) {
        let marker = format!("{}[Error]{}", colors.red, colors.reset);
        if let Some(reason) = &outcome.failure {
            let _ = writeln!(out, "{marker} file: {} | {reason}", outcome.path);
        }
        for error in &outcome.errors {
            let _ = writeln!(
                out,
                "{marker} file: {}{} - {}",
                outcome.path,
                position(error.start),
                position(error.end)
            );
        }
        let _ = writeln!(out);
    }
    out
}

/// One-based `:row:col`.
fn position(point: Point) -> String {
    format!(":{}:{}", point.row + 1, point.column + 1)
}

/// Writes `report.json` into `dir` and returns its path.
pub fn write_report(report: &Report, dir: &Path) -> Result<PathBuf, CheckError> {
    let path = dir.join("report.json");
    let json = serde_json::to_string(report)?;
    fs::write(&path, json).map_err(|source| CheckError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
