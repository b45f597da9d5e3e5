//! Schema-driven configuration validation
//!
//! The validator walks a raw JSON document alongside a [`SchemaTable`] and
//! produces a best-effort [`ValidatedConfig`] plus every issue it found.
//!
//! Validation collects ALL issues (doesn't stop at first) so a single pass
//! reports every problem in a file. Values are never coerced across kinds:
//! the string `"true"` is not a boolean.

use serde_json::{Map, Value};

use crate::config::validated::{FieldSource, ValidatedConfig, ValidatedObject, ValidatedValue};
use crate::error::{IssueKind, Severity, ValidationIssue};
use crate::schema::{
    DefaultValue, GroupId, OptionSpec, SchemaTable, ValueKind, join_key, quote_list, suggest_from,
};

// ============================================================================
// Public API
// ============================================================================

/// Result of validating one document.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// The validated configuration; `None` only when the document root is
    /// not an object.
    pub config: Option<ValidatedConfig>,

    /// Every issue found, in traversal order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns `true` if any error-severity issue was found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns `true` if no issues of any severity were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Error-severity issues.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Warning-severity issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Issues of one kind.
    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }
}

/// Validates `raw` against `schema`.
///
/// Pure: no I/O, no shared state. Safe to call concurrently.
#[must_use]
pub fn validate(raw: &Value, schema: &SchemaTable) -> ValidationReport {
    Validator::new(schema).validate(raw)
}

/// Configuration validator.
///
/// Holds the issue list for one pass; reusable across documents.
#[derive(Debug)]
pub struct Validator<'s> {
    schema: &'s SchemaTable,
    issues: Vec<ValidationIssue>,
}

impl<'s> Validator<'s> {
    /// Creates a validator for `schema`.
    #[must_use]
    pub const fn new(schema: &'s SchemaTable) -> Self {
        Self {
            schema,
            issues: Vec::new(),
        }
    }

    /// Validates a document and returns the result.
    pub fn validate(&mut self, raw: &Value) -> ValidationReport {
        self.issues.clear();

        let config = match raw {
            Value::Object(map) => {
                let root = self.validate_object(self.schema.root(), map, "");
                Some(ValidatedConfig::new(root))
            }
            other => {
                self.add(
                    IssueKind::MalformedNestedObject,
                    "",
                    format!(
                        "configuration document must be an object, found {}",
                        json_kind(other)
                    ),
                );
                None
            }
        };

        let issues = std::mem::take(&mut self.issues);
        tracing::debug!(
            issues = issues.len(),
            produced = config.is_some(),
            "validation finished"
        );
        ValidationReport { config, issues }
    }

    // ========================================================================
    // Objects
    // ========================================================================

    /// Validates one object against a group.
    fn validate_object(
        &mut self,
        group_id: GroupId,
        map: &Map<String, Value>,
        path: &str,
    ) -> ValidatedObject {
        let schema = self.schema;
        let mut out = ValidatedObject::new(group_id);
        let Some(group) = schema.group(group_id) else {
            // Unreachable for checked tables
            return out;
        };

        for option in &group.options {
            let field_path = join_key(path, option.name);
            match map.get(option.name) {
                Some(value) => {
                    if let Some(v) = self.validate_value(option.kind, value, &field_path, option.note)
                    {
                        out.insert(option.name, v, FieldSource::Provided);
                    }
                }
                None => {
                    if let Some(v) = option.default.and_then(|d| default_value(option, d)) {
                        out.insert(option.name, v, FieldSource::Default);
                    }
                }
            }
        }

        for (key, value) in map {
            if group.option(key).is_some() {
                continue;
            }
            let field_path = join_key(path, key);
            if let Some(kind) = group.additional {
                if let Some(v) = self.validate_value(kind, value, &field_path, None) {
                    out.insert(key.clone(), v, FieldSource::Provided);
                }
            } else {
                let issue = ValidationIssue::new(
                    IssueKind::UnknownKey,
                    field_path,
                    format!("unknown option '{key}' in {}", group.id),
                )
                .with_suggestion(group.suggest(key).map(str::to_string));
                self.push(issue);
            }
        }

        out
    }

    /// Validates each element of an object list; malformed elements are
    /// dropped and their siblings kept.
    fn validate_object_list(
        &mut self,
        group_id: GroupId,
        items: &[Value],
        path: &str,
    ) -> Vec<ValidatedObject> {
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let item_path = format!("{path}[{idx}]");
            let Value::Object(map) = item else {
                self.add(
                    IssueKind::MalformedNestedObject,
                    &item_path,
                    format!("expected an object ({group_id}), found {}", json_kind(item)),
                );
                continue;
            };

            let object = self.validate_object(group_id, map, &item_path);
            let missing = self.missing_required(group_id, &object);
            if missing.is_empty() {
                out.push(object);
            } else {
                self.add(
                    IssueKind::MalformedNestedObject,
                    &item_path,
                    format!("missing required field(s): {}", quote_list(&missing)),
                );
            }
        }
        out
    }

    /// Required options absent from a validated object.
    fn missing_required(&self, group_id: GroupId, object: &ValidatedObject) -> Vec<&'static str> {
        self.schema
            .group(group_id)
            .map(|group| {
                group
                    .options
                    .iter()
                    .filter(|o| o.required && !object.contains_key(o.name))
                    .map(|o| o.name)
                    .collect()
            })
            .unwrap_or_default()
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Checks one value against its kind. Returns `None` (after recording
    /// the issue) when the value must be omitted.
    fn validate_value(
        &mut self,
        kind: ValueKind,
        value: &Value,
        path: &str,
        note: Option<&'static str>,
    ) -> Option<ValidatedValue> {
        match (kind, value) {
            (ValueKind::Boolean, Value::Bool(b)) => Some(ValidatedValue::Bool(*b)),
            (ValueKind::String, Value::String(s)) => Some(ValidatedValue::String(s.clone())),
            (ValueKind::Number, Value::Number(n)) => Some(ValidatedValue::Number(n.clone())),
            (ValueKind::StringList | ValueKind::StringOrList, Value::Array(items)) => self
                .validate_string_list(items, path)
                .map(ValidatedValue::StringList),
            (ValueKind::StringOrList, Value::String(s)) => Some(ValidatedValue::String(s.clone())),
            (ValueKind::Enum(literals), Value::String(s)) => self
                .validate_literal(literals, s, path)
                .map(ValidatedValue::Enum),
            (ValueKind::EnumList(literals), Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                let mut ok = true;
                for (idx, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{idx}]");
                    match item {
                        Value::String(s) => match self.validate_literal(literals, s, &item_path) {
                            Some(literal) => out.push(literal),
                            None => ok = false,
                        },
                        other => {
                            self.wrong_type("string", other, &item_path, None);
                            ok = false;
                        }
                    }
                }
                ok.then_some(ValidatedValue::EnumList(out))
            }
            (ValueKind::Object(group), Value::Object(map)) => Some(ValidatedValue::Object(
                self.validate_object(group, map, path),
            )),
            (ValueKind::Object(group), other) => {
                self.add(
                    IssueKind::MalformedNestedObject,
                    path,
                    format!("expected an object ({group}), found {}", json_kind(other)),
                );
                None
            }
            (ValueKind::ObjectList(group), Value::Array(items)) => Some(
                ValidatedValue::ObjectList(self.validate_object_list(group, items, path)),
            ),
            (ValueKind::Any, any) => Some(ValidatedValue::Any(any.clone())),
            (kind, other) => {
                self.wrong_type(expected_json(kind), other, path, note);
                None
            }
        }
    }

    /// Every element must be a string; each offender is reported.
    fn validate_string_list(&mut self, items: &[Value], path: &str) -> Option<Vec<String>> {
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (idx, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => {
                    self.wrong_type("string", other, &format!("{path}[{idx}]"), None);
                    ok = false;
                }
            }
        }
        ok.then_some(out)
    }

    /// Case-sensitive membership check against a closed literal set.
    fn validate_literal(
        &mut self,
        literals: &'static [&'static str],
        value: &str,
        path: &str,
    ) -> Option<&'static str> {
        if let Some(literal) = literals.iter().copied().find(|l| *l == value) {
            return Some(literal);
        }
        let issue = ValidationIssue::new(
            IssueKind::InvalidEnumValue,
            path,
            format!(
                "'{value}' is not a permitted value; expected one of {}",
                quote_list(literals)
            ),
        )
        .with_suggestion(suggest_from(literals.iter().copied(), value).map(str::to_string));
        self.push(issue);
        None
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    fn wrong_type(
        &mut self,
        expected: &str,
        found: &Value,
        path: &str,
        note: Option<&'static str>,
    ) {
        let mut message = format!("expected {expected}, found {}", json_kind(found));
        if let Some(note) = note {
            message.push_str(" (");
            message.push_str(note);
            message.push(')');
        }
        self.add(IssueKind::WrongType, path, message);
    }

    fn add(&mut self, kind: IssueKind, path: &str, message: String) {
        self.push(ValidationIssue::new(kind, path, message));
    }

    fn push(&mut self, issue: ValidationIssue) {
        tracing::trace!(path = %issue.display_path(), kind = %issue.kind, "{}", issue.message);
        self.issues.push(issue);
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// The JSON type a kind requires, for type-mismatch messages.
const fn expected_json(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Boolean => "boolean",
        ValueKind::String | ValueKind::Enum(_) => "string",
        ValueKind::Number => "number",
        ValueKind::StringList | ValueKind::EnumList(_) => "array of strings",
        ValueKind::StringOrList => "string or array of strings",
        ValueKind::Object(_) => "object",
        ValueKind::ObjectList(_) => "array of objects",
        ValueKind::Any => "any value",
    }
}

/// Name of a JSON value's type.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Materializes a declared default for an option's kind.
fn default_value(option: &OptionSpec, default: DefaultValue) -> Option<ValidatedValue> {
    match (option.kind, default) {
        (ValueKind::Boolean, DefaultValue::Bool(b)) => Some(ValidatedValue::Bool(b)),
        (ValueKind::String, DefaultValue::Str(s)) => Some(ValidatedValue::String(s.to_string())),
        (ValueKind::Enum(literals), DefaultValue::Str(s)) => literals
            .iter()
            .copied()
            .find(|l| *l == s)
            .map(ValidatedValue::Enum),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(raw: &Value) -> ValidationReport {
        validate(raw, SchemaTable::tsconfig())
    }

    fn kinds(report: &ValidationReport) -> Vec<(IssueKind, &str)> {
        report
            .issues
            .iter()
            .map(|i| (i.kind, i.path.as_str()))
            .collect()
    }

    #[test]
    fn empty_document_is_clean() {
        let report = check(&json!({}));
        assert!(report.is_clean(), "{:?}", report.issues);
        let config = report.config.unwrap();
        assert!(config.root().is_empty());
    }

    #[test]
    fn string_true_is_not_a_boolean() {
        let report = check(&json!({"compilerOptions": {"strict": "true"}}));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::WrongType, "compilerOptions.strict")]
        );
        let config = report.config.unwrap();
        assert!(config.get("compilerOptions.strict").is_none());
        assert!(config.get("compilerOptions").is_some());
    }

    #[test]
    fn string_list_reports_each_bad_element_and_drops_list() {
        let report = check(&json!({"include": ["src", 1, "test", false]}));
        assert_eq!(
            kinds(&report),
            vec![
                (IssueKind::WrongType, "include[1]"),
                (IssueKind::WrongType, "include[3]")
            ]
        );
        assert!(report.config.unwrap().get("include").is_none());
    }

    #[test]
    fn extends_accepts_string_or_list() {
        let report = check(&json!({"extends": "./base.json"}));
        assert!(report.is_clean());
        assert_eq!(
            report.config.unwrap().get("extends").and_then(ValidatedValue::as_str),
            Some("./base.json")
        );

        let report = check(&json!({"extends": ["./a.json", "./b.json"]}));
        assert!(report.is_clean());

        let report = check(&json!({"extends": 3}));
        assert_eq!(kinds(&report), vec![(IssueKind::WrongType, "extends")]);
    }

    #[test]
    fn invalid_enum_names_permitted_set_and_suggests() {
        let report = check(&json!({
            "compilerOptions": {"strict": true, "target": "ES2020", "module": "CommonJss"}
        }));
        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.kind, IssueKind::InvalidEnumValue);
        assert_eq!(issue.path, "compilerOptions.module");
        assert!(issue.message.contains("'CommonJS'"));
        assert!(issue.message.contains("'NodeNext'"));
        assert_eq!(issue.suggestion.as_deref(), Some("CommonJS"));

        let config = report.config.unwrap();
        assert_eq!(
            config.get("compilerOptions.strict"),
            Some(&ValidatedValue::Bool(true))
        );
        assert_eq!(
            config.get("compilerOptions.target"),
            Some(&ValidatedValue::Enum("ES2020"))
        );
        assert!(config.get("compilerOptions.module").is_none());
    }

    #[test]
    fn enum_is_case_sensitive() {
        let report = check(&json!({"compilerOptions": {"target": "es2020"}}));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::InvalidEnumValue, "compilerOptions.target")]
        );
        assert_eq!(report.issues[0].suggestion.as_deref(), Some("ES2020"));
    }

    #[test]
    fn non_string_enum_is_wrong_type() {
        let report = check(&json!({"compilerOptions": {"jsx": 1}}));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::WrongType, "compilerOptions.jsx")]
        );
    }

    #[test]
    fn lib_elements_checked_individually() {
        let report = check(&json!({"compilerOptions": {"lib": ["DOM", "dom", 5, "ES2020"]}}));
        assert_eq!(
            kinds(&report),
            vec![
                (IssueKind::InvalidEnumValue, "compilerOptions.lib[1]"),
                (IssueKind::WrongType, "compilerOptions.lib[2]")
            ]
        );
        assert!(report.config.unwrap().get("compilerOptions.lib").is_none());

        let report = check(&json!({"compilerOptions": {"lib": ["DOM", "es2021.intl"]}}));
        assert!(report.is_clean());
        assert_eq!(
            report.config.unwrap().get("compilerOptions.lib"),
            Some(&ValidatedValue::EnumList(vec!["DOM", "es2021.intl"]))
        );
    }

    #[test]
    fn unknown_key_is_warning_with_suggestion() {
        let report = check(&json!({"compilerOptions": {"stirct": true}}));
        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.kind, IssueKind::UnknownKey);
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.path, "compilerOptions.stirct");
        assert_eq!(issue.suggestion.as_deref(), Some("strict"));
        assert!(!report.has_errors());
        assert!(report.config.is_some());
    }

    #[test]
    fn paths_accepts_arbitrary_keys_with_string_lists() {
        let report = check(&json!({
            "compilerOptions": {"paths": {"a/*": ["b/*"], "@app/*": ["src/app/*", "lib/*"]}},
            "extraneousField": 1
        }));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::UnknownKey, "extraneousField")]
        );
        let config = report.config.unwrap();
        assert_eq!(
            config.to_value()["compilerOptions"]["paths"],
            json!({"a/*": ["b/*"], "@app/*": ["src/app/*", "lib/*"]})
        );
    }

    #[test]
    fn paths_value_must_be_string_list() {
        let report = check(&json!({"compilerOptions": {"paths": {"a/*": "b/*", "c/*": ["d/*"]}}}));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::WrongType, "compilerOptions.paths.a/*")]
        );
        let config = report.config.unwrap();
        assert_eq!(
            config.to_value()["compilerOptions"]["paths"],
            json!({"c/*": ["d/*"]})
        );
    }

    #[test]
    fn references_drop_malformed_elements_keep_siblings() {
        let report = check(&json!({"references": [{"path": "a"}, {}, 3, {"path": 7}]}));
        assert_eq!(
            kinds(&report),
            vec![
                (IssueKind::MalformedNestedObject, "references[1]"),
                (IssueKind::MalformedNestedObject, "references[2]"),
                (IssueKind::WrongType, "references[3].path"),
                (IssueKind::MalformedNestedObject, "references[3]"),
            ]
        );
        let config = report.config.unwrap();
        assert_eq!(config.to_value()["references"], json!([{"path": "a"}]));
        assert_eq!(
            config.get("references[0].path").and_then(ValidatedValue::as_str),
            Some("a")
        );
    }

    #[test]
    fn references_not_an_array_is_wrong_type() {
        let report = check(&json!({"references": {"path": "a"}}));
        assert_eq!(kinds(&report), vec![(IssueKind::WrongType, "references")]);
    }

    #[test]
    fn plugins_require_name() {
        let report = check(&json!({
            "compilerOptions": {"plugins": [{"name": "ts-plugin"}, {"nmae": "x"}]}
        }));
        assert_eq!(
            kinds(&report),
            vec![
                (IssueKind::UnknownKey, "compilerOptions.plugins[1].nmae"),
                (IssueKind::MalformedNestedObject, "compilerOptions.plugins[1]"),
            ]
        );
        assert_eq!(report.issues[0].suggestion.as_deref(), Some("name"));
    }

    #[test]
    fn scalar_where_object_expected_is_malformed_subtree() {
        let report = check(&json!({"compilerOptions": 5, "include": ["src"]}));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::MalformedNestedObject, "compilerOptions")]
        );
        let config = report.config.unwrap();
        assert!(config.get("compilerOptions").is_none());
        assert!(config.get("include").is_some());
    }

    #[test]
    fn non_object_root_produces_no_config() {
        for raw in [json!([1, 2]), json!("tsconfig"), json!(null), json!(42)] {
            let report = check(&raw);
            assert!(report.config.is_none());
            assert_eq!(
                kinds(&report),
                vec![(IssueKind::MalformedNestedObject, "")]
            );
        }
    }

    #[test]
    fn defaults_fill_absent_fields_inside_present_groups() {
        let report = check(&json!({"watchOptions": {"fallbackPolling": "dynamicPriorityPolling"}}));
        assert!(report.is_clean());
        let config = report.config.unwrap();
        assert_eq!(
            config.get("watchOptions.watchFile"),
            Some(&ValidatedValue::Enum("useFsEvents"))
        );
        assert_eq!(
            config.get("watchOptions.watchDirectory"),
            Some(&ValidatedValue::Enum("useFsEvents"))
        );
        assert_eq!(
            config.defaulted_paths(),
            vec!["watchOptions.watchFile", "watchOptions.watchDirectory"]
        );
        assert!(config.get("compilerOptions").is_none());
    }

    #[test]
    fn defaulted_field_revalidates_as_provided() {
        let config = check(&json!({"compilerOptions": {}})).config.unwrap();
        let source = |c: &ValidatedConfig| {
            c.get_object("compilerOptions")
                .and_then(|o| o.field("moduleDetection"))
                .map(|f| f.source)
        };
        assert_eq!(source(&config), Some(FieldSource::Default));

        let again = check(&config.to_value()).config.unwrap();
        assert_eq!(source(&again), Some(FieldSource::Provided));
        assert!(again.defaulted_paths().is_empty());
        assert_eq!(again.to_value(), config.to_value());
        assert_ne!(again, config);
    }

    #[test]
    fn provided_value_overrides_default() {
        let report = check(&json!({"compilerOptions": {"moduleDetection": "force"}}));
        let config = report.config.unwrap();
        let field = config
            .get_object("compilerOptions")
            .and_then(|o| o.field("moduleDetection"))
            .unwrap();
        assert_eq!(field.value, ValidatedValue::Enum("force"));
        assert_eq!(field.source, FieldSource::Provided);
    }

    #[test]
    fn ts_node_passes_anything_through() {
        let raw = json!({"ts-node": {"transpileOnly": true, "compilerOptions": {"module": 7}}});
        let report = check(&raw);
        assert!(report.is_clean());
        assert_eq!(report.config.unwrap().to_value(), raw);
    }

    #[test]
    fn declared_kind_is_authoritative_and_note_is_shown() {
        let report = check(&json!({"compilerOptions": {"newLine": "lf"}}));
        assert_eq!(
            kinds(&report),
            vec![(IssueKind::WrongType, "compilerOptions.newLine")]
        );
        assert!(report.issues[0].message.contains("'crlf' or 'lf'"));

        let report = check(&json!({"compilerOptions": {"newLine": true}}));
        assert!(report.is_clean());
    }

    #[test]
    fn null_is_wrong_type() {
        let report = check(&json!({"files": null}));
        assert_eq!(kinds(&report), vec![(IssueKind::WrongType, "files")]);
        assert!(report.issues[0].message.contains("found null"));
    }

    #[test]
    fn validation_is_exhaustive() {
        let report = check(&json!({
            "files": [1],
            "compilerOptions": {"target": "ES1", "noEmit": "yes", "bogus": 1},
            "watchOptions": {"watchFile": "inotify"},
            "typeAcquisition": {"enable": 1},
            "unknownTop": true
        }));
        assert_eq!(report.issues.len(), 7, "{:#?}", report.issues);
        assert_eq!(report.errors().count(), 5);
        assert_eq!(report.warnings().count(), 2);
        assert!(report.has_errors());
        assert!(report.config.is_some());
    }

    #[test]
    fn validator_is_reusable() {
        let schema = SchemaTable::tsconfig();
        let mut validator = Validator::new(schema);
        let first = validator.validate(&json!({"bogus": 1}));
        let second = validator.validate(&json!({}));
        assert_eq!(first.issues.len(), 1);
        assert!(second.is_clean());
    }
}
