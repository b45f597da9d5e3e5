//! Validated configuration tree.
//!
//! A `ValidatedConfig` is only ever produced by the validator. Its shape
//! mirrors the schema table: one `ValidatedObject` per present group
//! instance, each holding the fields that passed validation or were filled
//! from a declared default.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::config::types::TsConfig;
use crate::error::ConfigError;
use crate::schema::GroupId;

/// Where a field's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Present in the input document.
    Provided,
    /// Filled from the option's declared default.
    Default,
}

/// A value that matched its option's declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedValue {
    Bool(bool),
    String(String),
    Number(Number),
    StringList(Vec<String>),
    /// A member of a closed literal set, borrowed from the schema.
    Enum(&'static str),
    EnumList(Vec<&'static str>),
    Object(ValidatedObject),
    ObjectList(Vec<ValidatedObject>),
    /// Free-form content, kept as given.
    Any(Value),
}

impl ValidatedValue {
    /// Re-encodes the value in raw document form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Value::Number(n.clone()),
            Self::StringList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::Enum(literal) => Value::String((*literal).to_string()),
            Self::EnumList(items) => Value::Array(
                items
                    .iter()
                    .map(|literal| Value::String((*literal).to_string()))
                    .collect(),
            ),
            Self::Object(object) => object.to_value(),
            Self::ObjectList(objects) => {
                Value::Array(objects.iter().map(ValidatedObject::to_value).collect())
            }
            Self::Any(value) => value.clone(),
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String content of `String` and `Enum` values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Enum(literal) => Some(literal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&ValidatedObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// One validated field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub value: ValidatedValue,
    pub source: FieldSource,
}

/// The validated content of one object, keyed by option name.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedObject {
    group: GroupId,
    fields: IndexMap<String, Field>,
}

impl ValidatedObject {
    pub(crate) fn new(group: GroupId) -> Self {
        Self {
            group,
            fields: IndexMap::new(),
        }
    }

    pub(crate) fn insert(
        &mut self,
        key: impl Into<String>,
        value: ValidatedValue,
        source: FieldSource,
    ) {
        self.fields.insert(key.into(), Field { value, source });
    }

    /// Schema group this object was validated against.
    #[must_use]
    pub const fn group(&self) -> GroupId {
        self.group
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ValidatedValue> {
        self.fields.get(key).map(|field| &field.value)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Fields in schema order (named options), then document order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(k, f)| (k.clone(), f.value.to_value()))
            .collect();
        Value::Object(map)
    }
}

/// A fully validated configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    root: ValidatedObject,
}

impl ValidatedConfig {
    pub(crate) const fn new(root: ValidatedObject) -> Self {
        Self { root }
    }

    #[must_use]
    pub const fn root(&self) -> &ValidatedObject {
        &self.root
    }

    /// Looks up a value by dotted path, e.g. `compilerOptions.target` or
    /// `references[0].path`.
    ///
    /// Keys that themselves contain `.` or `[` (such as `paths` patterns)
    /// are reachable through [`ValidatedObject::get`] instead.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ValidatedValue> {
        match self.walk(path)? {
            Cursor::Value(value) => Some(value),
            Cursor::Object(_) => None,
        }
    }

    /// Looks up a nested object by dotted path, including list elements
    /// such as `references[1]`.
    #[must_use]
    pub fn get_object(&self, path: &str) -> Option<&ValidatedObject> {
        match self.walk(path)? {
            Cursor::Value(value) => value.as_object(),
            Cursor::Object(object) => Some(object),
        }
    }

    fn walk(&self, path: &str) -> Option<Cursor<'_>> {
        let mut cursor = Cursor::Object(&self.root);
        for segment in path.split('.') {
            let object = match cursor {
                Cursor::Object(object) => object,
                Cursor::Value(value) => value.as_object()?,
            };
            let (key, index) = parse_segment(segment)?;
            let value = object.get(key)?;
            cursor = match index {
                None => Cursor::Value(value),
                Some(idx) => match value {
                    ValidatedValue::ObjectList(items) => Cursor::Object(items.get(idx)?),
                    _ => return None,
                },
            };
        }
        Some(cursor)
    }

    /// Paths of every field filled from a declared default.
    #[must_use]
    pub fn defaulted_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_defaults(&self.root, "", &mut out);
        out
    }

    /// Re-encodes the configuration in raw document form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        self.root.to_value()
    }

    /// Converts into the typed record.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Typed` if the tree does not fit `TsConfig`;
    /// trees produced by the built-in schema always fit.
    pub fn to_typed(&self) -> Result<TsConfig, ConfigError> {
        serde_json::from_value(self.to_value()).map_err(|e| ConfigError::Typed {
            message: e.to_string(),
        })
    }
}

impl Serialize for ValidatedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

enum Cursor<'a> {
    Object(&'a ValidatedObject),
    Value(&'a ValidatedValue),
}

/// Splits `key` or `key[index]`.
fn parse_segment(segment: &str) -> Option<(&str, Option<usize>)> {
    let Some((key, rest)) = segment.split_once('[') else {
        return Some((segment, None));
    };
    let index = rest.strip_suffix(']')?.parse().ok()?;
    Some((key, Some(index)))
}

fn collect_defaults(object: &ValidatedObject, prefix: &str, out: &mut Vec<String>) {
    for (key, field) in &object.fields {
        let path = crate::schema::join_key(prefix, key);
        match (&field.value, field.source) {
            (_, FieldSource::Default) => out.push(path),
            (ValidatedValue::Object(child), FieldSource::Provided) => {
                collect_defaults(child, &path, out);
            }
            (ValidatedValue::ObjectList(children), FieldSource::Provided) => {
                for (idx, child) in children.iter().enumerate() {
                    collect_defaults(child, &format!("{path}[{idx}]"), out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate;
    use crate::schema::{ModuleKind, SchemaTable, Target, WatchFileStrategy};
    use serde_json::json;

    fn validated(raw: &Value) -> ValidatedConfig {
        validate(raw, SchemaTable::tsconfig()).config.unwrap()
    }

    #[test]
    fn test_parse_segment() {
        assert_eq!(parse_segment("compilerOptions"), Some(("compilerOptions", None)));
        assert_eq!(parse_segment("references[2]"), Some(("references", Some(2))));
        assert_eq!(parse_segment("references[x]"), None);
        assert_eq!(parse_segment("references[1"), None);
    }

    #[test]
    fn test_get_walks_objects_and_lists() {
        let config = validated(&json!({
            "compilerOptions": {"plugins": [{"name": "a"}, {"name": "b"}]},
            "references": [{"path": "../core"}]
        }));
        assert_eq!(
            config.get("compilerOptions.plugins[1].name").and_then(ValidatedValue::as_str),
            Some("b")
        );
        assert_eq!(
            config.get("references[0].path").and_then(ValidatedValue::as_str),
            Some("../core")
        );
        assert!(config.get("references[1].path").is_none());
        assert!(config.get("references[0]").is_none());
        assert_eq!(
            config.get_object("references[0]").map(ValidatedObject::group),
            Some(GroupId::Reference)
        );
        assert!(config.get("compilerOptions.strict.deeper").is_none());
    }

    #[test]
    fn test_paths_patterns_reachable_through_object() {
        let config = validated(&json!({"compilerOptions": {"paths": {"@app/*": ["src/*"]}}}));
        let paths = config.get_object("compilerOptions.paths").unwrap();
        assert_eq!(paths.group(), GroupId::PathMapping);
        assert_eq!(
            paths.get("@app/*"),
            Some(&ValidatedValue::StringList(vec!["src/*".to_string()]))
        );
    }

    #[test]
    fn test_to_value_includes_defaults() {
        let config = validated(&json!({"watchOptions": {}}));
        assert_eq!(
            config.to_value(),
            json!({"watchOptions": {"watchFile": "useFsEvents", "watchDirectory": "useFsEvents"}})
        );
        assert_eq!(serde_json::to_value(&config).unwrap(), config.to_value());
    }

    #[test]
    fn test_to_typed() {
        let config = validated(&json!({
            "extends": "./base.json",
            "compilerOptions": {"target": "ES2020", "module": "CommonJS", "strict": true},
            "watchOptions": {}
        }));
        let typed = config.to_typed().unwrap();
        let options = typed.compiler_options.unwrap();
        assert_eq!(options.target, Some(Target::Es2020));
        assert_eq!(options.module, Some(ModuleKind::CommonJs));
        assert_eq!(options.strict, Some(true));
        assert_eq!(
            typed.watch_options.unwrap().watch_file,
            Some(WatchFileStrategy::UseFsEvents)
        );
    }

    #[test]
    fn test_fields_keep_schema_order() {
        let config = validated(&json!({"exclude": ["dist"], "files": ["a.ts"]}));
        let keys: Vec<&str> = config.root().fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["files", "exclude"]);
    }
}
