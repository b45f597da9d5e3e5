//! Error types for `tsconfig-validator`
//!
//! Two distinct families live here. `ValidationIssue` is a diagnostic about
//! the document being checked and is never returned as an `Err`; the
//! `thiserror` enums cover everything that stops the tool itself (unreadable
//! files, unparsable text, a broken schema table).

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `tsconfig-validator` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (unparsable document, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `tsconfig-validator` operations.
///
/// Aggregates the domain errors and maps each onto an exit code.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Document loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Schema table construction error
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(err) => err.exit_code(),
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Schema(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Document acquisition and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document text could not be parsed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Origin of the document (file path or a label such as `<stdin>`)
        path: String,
        /// Error message from the parser
        message: String,
    },

    /// Document failed validation
    #[error("validation failed for {path}: {} error(s)", errors.len())]
    ValidationFailed {
        /// Origin of the document
        path: String,
        /// Error-severity issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced file not found or unreadable
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// File exceeds the configured size limit
    #[error("{path} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge {
        /// Path to the oversized file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// A validated tree could not be converted into the typed record
    #[error("typed conversion failed: {message}")]
    Typed {
        /// Underlying deserializer message
        message: String,
    },
}

impl ConfigError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingFile { .. } => ExitCode::IO_ERROR,
            _ => ExitCode::CONFIG_ERROR,
        }
    }
}

// ============================================================================
// Schema Errors
// ============================================================================

/// Structural problems in a `SchemaTable`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two options in one group share a name
    #[error("duplicate option '{option}' in group {group}")]
    DuplicateOption {
        /// Group containing the duplicate
        group: String,
        /// Duplicated option name
        option: String,
    },

    /// An option refers to a group that is not registered
    #[error("option '{option}' in group {group} refers to unregistered group {target}")]
    UnknownGroup {
        /// Group containing the option
        group: String,
        /// Option name
        option: String,
        /// Missing group
        target: String,
    },

    /// Groups refer to each other in a loop
    #[error("group nesting cycle: {}", cycle.join(" -> "))]
    Cycle {
        /// Groups forming the cycle, first repeated at the end
        cycle: Vec<String>,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// Key has no matching option in its group
    UnknownKey,
    /// Value's JSON kind does not match the declared kind
    WrongType,
    /// String is not a member of the closed literal set
    InvalidEnumValue,
    /// Nested object (or list element) is structurally unusable
    MalformedNestedObject,
}

impl IssueKind {
    /// Kebab-case name used in rendered diagnostics and metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownKey => "unknown-key",
            Self::WrongType => "wrong-type",
            Self::InvalidEnumValue => "invalid-enum-value",
            Self::MalformedNestedObject => "malformed-nested-object",
        }
    }

    /// Severity implied by the kind.
    ///
    /// Unknown keys are tolerated for forward compatibility; every other
    /// kind drops the affected field or subtree.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::UnknownKey => Severity::Warning,
            Self::WrongType | Self::InvalidEnumValue | Self::MalformedNestedObject => {
                Severity::Error
            }
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation issue found while checking a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path to the problematic field (e.g., `references[2].path`).
    /// Empty for the document root.
    pub path: String,
    /// Issue category
    pub kind: IssueKind,
    /// Severity level of the issue
    pub severity: Severity,
    /// Description of the validation issue
    pub message: String,
    /// Likely intended key or literal, when one is close enough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates an issue whose severity follows from `kind`.
    pub fn new(kind: IssueKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            severity: kind.severity(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }

    /// Path as shown to users (`<root>` for the document itself).
    #[must_use]
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity,
            self.kind,
            self.message,
            self.display_path()
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The affected field or subtree was dropped from the output
    Error,
    /// Informational; the output is unaffected
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `tsconfig-validator` operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: ValidatorError = ConfigError::ParseError {
            path: "tsconfig.json".to_string(),
            message: "unexpected token".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_missing_file_exit_code() {
        let err: ValidatorError = ConfigError::MissingFile {
            path: PathBuf::from("/nope/tsconfig.json"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: ValidatorError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_schema_error_exit_code() {
        let err: ValidatorError = SchemaError::Cycle {
            cycle: vec!["a".into(), "b".into(), "a".into()],
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::ERROR);
        assert!(err.to_string().contains("a -> b -> a"));
    }

    #[test]
    fn test_severity_follows_kind() {
        assert_eq!(IssueKind::UnknownKey.severity(), Severity::Warning);
        assert_eq!(IssueKind::WrongType.severity(), Severity::Error);
        assert_eq!(IssueKind::InvalidEnumValue.severity(), Severity::Error);
        assert_eq!(IssueKind::MalformedNestedObject.severity(), Severity::Error);
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue::new(
            IssueKind::WrongType,
            "compilerOptions.strict",
            "expected boolean, found string",
        );
        assert_eq!(
            issue.to_string(),
            "error[wrong-type]: expected boolean, found string at compilerOptions.strict"
        );
    }

    #[test]
    fn test_validation_issue_warning_display_with_suggestion() {
        let issue = ValidationIssue::new(
            IssueKind::UnknownKey,
            "compilerOptions.stirct",
            "unknown option 'stirct'",
        )
        .with_suggestion(Some("strict".to_string()));
        assert_eq!(
            issue.to_string(),
            "warning[unknown-key]: unknown option 'stirct' at compilerOptions.stirct (did you mean 'strict'?)"
        );
    }

    #[test]
    fn test_root_path_display() {
        let issue = ValidationIssue::new(
            IssueKind::MalformedNestedObject,
            "",
            "document root must be an object",
        );
        assert_eq!(issue.display_path(), "<root>");
    }

    #[test]
    fn test_issue_serializes_kebab_case() {
        let issue = ValidationIssue::new(IssueKind::InvalidEnumValue, "x", "bad");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "invalid-enum-value");
        assert_eq!(json["severity"], "error");
        assert!(json.get("suggestion").is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::TooLarge {
            path: PathBuf::from("big.json"),
            size: 20,
            limit: 10,
        };
        assert!(err.to_string().contains("big.json"));
        assert!(err.to_string().contains("10 byte limit"));
    }
}
