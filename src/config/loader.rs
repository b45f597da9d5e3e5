//! Document loader
//!
//! This module implements the loading pipeline:
//! 1. Size check against [`ConfigLimits`]
//! 2. UTF-8 BOM removal
//! 3. JSON-with-comments parsing
//! 4. Empty document rejection
//! 5. Validation against the built-in schema table
//!
//! `extends` chains are reported as written and never followed.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};

use crate::config::validation::{ValidationReport, validate};
use crate::error::ConfigError;
use crate::schema::SchemaTable;

// ============================================================================
// Public API
// ============================================================================

/// Options for the document loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Limits for document size.
    pub limits: ConfigLimits,
}

/// Limits on input documents to prevent resource exhaustion.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum document size in bytes.
    pub max_config_size: u64,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("TSCONFIG_VALIDATOR_MAX_CONFIG_SIZE", 10 * 1024 * 1024),
        }
    }
}

/// Result of loading one document.
#[derive(Debug)]
pub struct LoadResult {
    /// Where the document came from (file path or a label such as `<stdin>`).
    pub origin: String,

    /// Validation outcome.
    pub report: ValidationReport,
}

/// Document loader.
///
/// Stateless apart from its options; one loader may serve many files.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Returns the loader's options.
    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is larger than `max_config_size`
    /// - The text is not valid JSON-with-comments, or is empty
    ///
    /// Validation issues are never errors; they are in the returned report.
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let limit = self.options.limits.max_config_size;
        if metadata.len() > limit {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let raw_content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: "file is not valid UTF-8".to_string(),
                }
            } else {
                ConfigError::MissingFile {
                    path: path.to_path_buf(),
                }
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = raw_content.len(), "loading configuration");
        self.load_from_str(&raw_content, &path.display().to_string())
    }

    /// Parses and validates configuration text.
    ///
    /// `origin` labels the document in errors and results.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the text is not valid
    /// JSON-with-comments or holds no value at all.
    pub fn load_from_str(&self, text: &str, origin: &str) -> Result<LoadResult, ConfigError> {
        let raw = parse_document(text, origin)?;
        let report = validate(&raw, SchemaTable::tsconfig());

        tracing::debug!(
            origin,
            issues = report.issues.len(),
            errors = report.errors().count(),
            "configuration validated"
        );

        Ok(LoadResult {
            origin: origin.to_string(),
            report,
        })
    }
}

/// Parses JSON-with-comments text into a raw document.
///
/// Accepts `//` and `/* */` comments and trailing commas. Non-finite
/// numbers (`NaN`, `Infinity`) have no JSON form and are rejected.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` on malformed or empty input.
pub fn parse_document(text: &str, origin: &str) -> Result<Value, ConfigError> {
    // Handle UTF-8 BOM
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    if is_blank(text) {
        return Err(ConfigError::ParseError {
            path: origin.to_string(),
            message: "configuration document is empty".to_string(),
        });
    }

    json5::from_str::<Document>(text)
        .map(|doc| doc.0)
        .map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
}

/// Raw document value that refuses numbers JSON cannot represent.
struct Document(Value);

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor).map(Document)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Number(value.into()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Value, E> {
        Ok(Value::Number(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| E::custom(format!("non-finite number {value} is not allowed")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Document(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some((key, Document(value))) = access.next_entry::<String, Document>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// True when the text holds nothing but whitespace and comments.
fn is_blank(text: &str) -> bool {
    let mut rest = text.trim_start();
    loop {
        if rest.is_empty() {
            return true;
        }
        if let Some(after) = rest.strip_prefix("//") {
            rest = after.find('\n').map_or("", |i| &after[i + 1..]).trim_start();
        } else if let Some(after) = rest.strip_prefix("/*") {
            match after.find("*/") {
                Some(i) => rest = after[i + 2..].trim_start(),
                // Unterminated comment; leave it to the parser
                None => return false,
            }
        } else {
            return false;
        }
    }
}

/// Parses an environment variable with a default value.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
