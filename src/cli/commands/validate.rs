//! `validate` command
//!
//! Loads every file on a blocking task, then reports results in argument
//! order. Human diagnostics go to stderr; JSON output and `--print-config`
//! go to stdout.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{ColorChoice, OutputFormat, ValidateArgs};
use crate::config::{ConfigLimits, ConfigLoader, LoadResult, LoaderOptions};
use crate::error::{ConfigError, Severity, ValidationIssue, ValidatorError};
use crate::observability::logging::use_ansi;
use crate::observability::metrics::{init_metrics, record_load_failure, record_report};

/// Origin label for standard input.
const STDIN_ORIGIN: &str = "<stdin>";

/// Outcome of one file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// No errors (warnings allowed unless strict).
    Valid,
    /// Validation found errors, or warnings under `--strict`.
    Invalid,
    /// The document could not be read or parsed.
    Failed,
}

/// Per-file entry of the report.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub status: FileStatus,
    pub issues: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// Totals across all files.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub valid: usize,
    pub invalid: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Full JSON report.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

/// Validate configuration files.
///
/// # Errors
///
/// Returns the first load failure if any file could not be read or parsed,
/// otherwise `ConfigError::ValidationFailed` if any file is invalid.
pub async fn run(
    args: &ValidateArgs,
    quiet: bool,
    color: ColorChoice,
) -> Result<(), ValidatorError> {
    let metrics = args.metrics_file.as_ref().map(|_| init_metrics()).transpose()?;

    let mut limits = ConfigLimits::default();
    if let Some(max) = args.max_size {
        limits.max_config_size = max;
    }
    let loader = ConfigLoader::new(LoaderOptions { limits });

    let handles: Vec<_> = args
        .files
        .iter()
        .cloned()
        .map(|path| {
            let loader = loader.clone();
            tokio::task::spawn_blocking(move || {
                let started = Instant::now();
                let result = load_one(&loader, &path);
                (path, result, started.elapsed())
            })
        })
        .collect();

    let mut files = Vec::with_capacity(handles.len());
    let mut failures = Vec::new();
    let mut rejected = Vec::new();

    for handle in handles {
        let (path, result, elapsed) = handle
            .await
            .map_err(|e| ValidatorError::Io(std::io::Error::other(e.to_string())))?;
        let report = match result {
            Ok(loaded) => {
                record_report(&loaded.report, elapsed);
                file_report(loaded, args, &mut rejected)
            }
            Err(err) => {
                record_load_failure(err.exit_code());
                tracing::debug!(file = %path.display(), error = %err, "load failed");
                let report = FileReport {
                    file: origin_of(&path),
                    status: FileStatus::Failed,
                    issues: Vec::new(),
                    error: Some(err.to_string()),
                    config: None,
                };
                failures.push(err);
                report
            }
        };
        log_elapsed(&report.file, elapsed);
        files.push(report);
    }

    let summary = summarize(&files);
    let run = RunReport { files, summary };

    match args.format {
        OutputFormat::Human => print_human(&run, quiet, use_ansi(color)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&run)?),
    }

    if let (Some(handle), Some(path)) = (metrics, &args.metrics_file) {
        std::fs::write(path, handle.render())?;
        tracing::info!(file = %path.display(), "metrics written");
    }

    if let Some(err) = failures.into_iter().next() {
        return Err(err.into());
    }
    if !rejected.is_empty() {
        let path = rejected
            .iter()
            .map(|(origin, _)| origin.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let errors = rejected.into_iter().flat_map(|(_, issues)| issues).collect();
        return Err(ConfigError::ValidationFailed { path, errors }.into());
    }
    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Loads a file, or standard input for `-`.
fn load_one(loader: &ConfigLoader, path: &Path) -> Result<LoadResult, ConfigError> {
    if path != Path::new("-") {
        return loader.load(path);
    }

    // One byte past the limit is enough to detect oversized input
    let limit = loader.options().limits.max_config_size;
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|_| ConfigError::MissingFile {
            path: PathBuf::from("-"),
        })?;

    let size = bytes.len() as u64;
    if size > limit {
        return Err(ConfigError::TooLarge {
            path: PathBuf::from("-"),
            size,
            limit,
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| ConfigError::ParseError {
        path: STDIN_ORIGIN.to_string(),
        message: "file is not valid UTF-8".to_string(),
    })?;
    loader.load_from_str(&text, STDIN_ORIGIN)
}

fn origin_of(path: &Path) -> String {
    if path == Path::new("-") {
        STDIN_ORIGIN.to_string()
    } else {
        path.display().to_string()
    }
}

/// Builds the per-file entry and notes files that fail the run.
fn file_report(
    loaded: LoadResult,
    args: &ValidateArgs,
    rejected: &mut Vec<(String, Vec<ValidationIssue>)>,
) -> FileReport {
    let LoadResult { origin, report } = loaded;
    let failing: Vec<ValidationIssue> = report
        .issues
        .iter()
        .filter(|i| args.strict || i.severity == Severity::Error)
        .cloned()
        .collect();

    let status = if failing.is_empty() {
        FileStatus::Valid
    } else {
        rejected.push((origin.clone(), failing));
        FileStatus::Invalid
    };

    let config = if args.print_config {
        report.config.as_ref().map(crate::config::ValidatedConfig::to_value)
    } else {
        None
    };

    FileReport {
        file: origin,
        status,
        issues: report.issues,
        error: None,
        config,
    }
}

fn summarize(files: &[FileReport]) -> Summary {
    let mut summary = Summary {
        files: files.len(),
        ..Summary::default()
    };
    for file in files {
        match file.status {
            FileStatus::Valid => summary.valid += 1,
            FileStatus::Invalid => summary.invalid += 1,
            FileStatus::Failed => summary.failed += 1,
        }
        for issue in &file.issues {
            match issue.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
        }
    }
    summary
}

fn print_human(run: &RunReport, quiet: bool, ansi: bool) {
    for file in &run.files {
        for issue in &file.issues {
            eprintln!("{}: {}", file.file, paint_issue(issue, ansi));
        }
        if let Some(error) = &file.error {
            eprintln!("{}: {}: {error}", file.file, paint("error", RED, ansi));
        }
        if let Some(config) = &file.config {
            match serde_json::to_string_pretty(config) {
                Ok(text) => println!("{text}"),
                Err(e) => tracing::warn!(file = %file.file, "cannot render config: {e}"),
            }
        }
    }

    if !quiet {
        let s = &run.summary;
        eprintln!(
            "checked {} file(s): {} valid, {} invalid, {} failed ({} error(s), {} warning(s))",
            s.files, s.valid, s.invalid, s.failed, s.errors, s.warnings
        );
    }
}

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

fn paint(text: &str, code: &str, ansi: bool) -> String {
    if ansi {
        format!("{code}{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn paint_issue(issue: &ValidationIssue, ansi: bool) -> String {
    let rendered = issue.to_string();
    if !ansi {
        return rendered;
    }
    let (label, code) = match issue.severity {
        Severity::Error => ("error", RED),
        Severity::Warning => ("warning", YELLOW),
    };
    rendered.strip_prefix(label).map_or_else(
        || rendered.clone(),
        |rest| format!("{}{rest}", paint(label, code, true)),
    )
}

fn log_elapsed(file: &str, elapsed: Duration) {
    tracing::debug!(file, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "file processed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;

    fn args(strict: bool, print_config: bool) -> ValidateArgs {
        ValidateArgs {
            files: vec![],
            format: OutputFormat::Json,
            strict,
            print_config,
            max_size: None,
            metrics_file: None,
        }
    }

    fn loaded(text: &str) -> LoadResult {
        ConfigLoader::with_defaults()
            .load_from_str(text, "inline.json")
            .unwrap()
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let mut rejected = Vec::new();
        let report = file_report(loaded(r#"{"bogus": 1}"#), &args(false, false), &mut rejected);
        assert!(matches!(report.status, FileStatus::Valid));
        assert!(rejected.is_empty());

        let report = file_report(loaded(r#"{"bogus": 1}"#), &args(true, false), &mut rejected);
        assert!(matches!(report.status, FileStatus::Invalid));
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].1[0].kind, IssueKind::UnknownKey);
    }

    #[test]
    fn errors_reject_file() {
        let mut rejected = Vec::new();
        let report = file_report(
            loaded(r#"{"compilerOptions": {"strict": "true"}}"#),
            &args(false, true),
            &mut rejected,
        );
        assert!(matches!(report.status, FileStatus::Invalid));
        assert_eq!(rejected[0].0, "inline.json");
        assert_eq!(
            report.config,
            Some(serde_json::json!({"compilerOptions": {"moduleDetection": "auto"}}))
        );
    }

    #[test]
    fn summary_counts() {
        let mut rejected = Vec::new();
        let files = vec![
            file_report(loaded("{}"), &args(false, false), &mut rejected),
            file_report(
                loaded(r#"{"files": [1], "x": 1}"#),
                &args(false, false),
                &mut rejected,
            ),
        ];
        let summary = summarize(&files);
        assert_eq!(
            summary,
            Summary {
                files: 2,
                valid: 1,
                invalid: 1,
                failed: 0,
                errors: 1,
                warnings: 1,
            }
        );
    }

    #[test]
    fn paint_issue_keeps_text_without_ansi() {
        let issue = ValidationIssue::new(IssueKind::WrongType, "files", "expected array");
        assert_eq!(paint_issue(&issue, false), issue.to_string());
        assert!(paint_issue(&issue, true).starts_with(RED));
    }

    #[test]
    fn stdin_origin_label() {
        assert_eq!(origin_of(Path::new("-")), "<stdin>");
        assert_eq!(origin_of(Path::new("a/tsconfig.json")), "a/tsconfig.json");
    }
}
