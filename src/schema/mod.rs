//! Configuration schema table
//!
//! The schema is data, not code: each recognized key is an [`OptionSpec`]
//! carrying a [`ValueKind`], and options are grouped by the object that
//! contains them. The validator walks this table generically, so adding an
//! option means adding a row to [`tsconfig`] rather than writing a check.

pub mod literals;
mod tsconfig;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::SchemaError;

pub use literals::{
    FallbackPollingStrategy, Jsx, Lib, ModuleDetection, ModuleKind, ModuleResolution, Target,
    WatchDirectoryStrategy, WatchFileStrategy,
};

// ============================================================================
// Groups
// ============================================================================

/// Identifies one containing object in the configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, clap::ValueEnum)]
pub enum GroupId {
    /// The document root.
    #[value(name = "root")]
    Root,
    /// `compilerOptions`
    #[value(name = "compilerOptions")]
    CompilerOptions,
    /// `compilerOptions.paths`: pattern to substitution list.
    #[value(name = "paths")]
    PathMapping,
    /// One element of `compilerOptions.plugins`.
    #[value(name = "plugin")]
    Plugin,
    /// One element of `references`.
    #[value(name = "reference")]
    Reference,
    /// `watchOptions`
    #[value(name = "watchOptions")]
    WatchOptions,
    /// `typeAcquisition`
    #[value(name = "typeAcquisition")]
    TypeAcquisition,
    /// `ts-node`: free-form settings for an external tool.
    #[value(name = "ts-node")]
    TsNode,
}

impl GroupId {
    /// Every group, outermost first.
    pub const ALL: [Self; 8] = [
        Self::Root,
        Self::CompilerOptions,
        Self::PathMapping,
        Self::Plugin,
        Self::Reference,
        Self::WatchOptions,
        Self::TypeAcquisition,
        Self::TsNode,
    ];

    /// Short name, matching the document key where there is one.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::CompilerOptions => "compilerOptions",
            Self::PathMapping => "paths",
            Self::Plugin => "plugin",
            Self::Reference => "reference",
            Self::WatchOptions => "watchOptions",
            Self::TypeAcquisition => "typeAcquisition",
            Self::TsNode => "ts-node",
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| format!("unknown schema group '{s}'"))
    }
}

// ============================================================================
// Value Kinds
// ============================================================================

/// The shape a recognized key's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON `true`/`false`.
    Boolean,
    /// JSON string.
    String,
    /// JSON number.
    Number,
    /// Array whose every element is a string.
    StringList,
    /// A string, or an array of strings.
    StringOrList,
    /// A string drawn from a closed, case-sensitive literal set.
    Enum(&'static [&'static str]),
    /// An array of strings, each drawn from a closed literal set.
    EnumList(&'static [&'static str]),
    /// An object validated against another group.
    Object(GroupId),
    /// An array of objects, each validated against another group.
    ObjectList(GroupId),
    /// Anything; passed through untouched.
    Any,
}

impl ValueKind {
    /// The group this kind nests into, if any.
    #[must_use]
    pub const fn nested_group(self) -> Option<GroupId> {
        match self {
            Self::Object(group) | Self::ObjectList(group) => Some(group),
            _ => None,
        }
    }

    /// Short human description used in diagnostics.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Boolean => "boolean".to_string(),
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::StringList => "list of strings".to_string(),
            Self::StringOrList => "string or list of strings".to_string(),
            Self::Enum(literals) => format!("one of {}", quote_list(literals)),
            Self::EnumList(literals) => format!("list of {}", quote_list(literals)),
            Self::Object(group) => format!("object ({group})"),
            Self::ObjectList(group) => format!("list of objects ({group})"),
            Self::Any => "any value".to_string(),
        }
    }

    /// Compact name for tables, without enumerating literal sets.
    #[must_use]
    pub fn short_name(self) -> String {
        match self {
            Self::Enum(literals) => format!("enum[{}]", literals.len()),
            Self::EnumList(literals) => format!("enum-list[{}]", literals.len()),
            _ => self.describe(),
        }
    }
}

/// Renders literals as `'a', 'b', 'c'`.
#[must_use]
pub fn quote_list(literals: &[&str]) -> String {
    literals
        .iter()
        .map(|l| format!("'{l}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Option Specs
// ============================================================================

/// Default value declared for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    /// A string; for `Enum` options it must be one of the literals.
    Str(&'static str),
}

/// One recognized configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Key name, unique within its group.
    pub name: &'static str,
    /// Required value shape.
    pub kind: ValueKind,
    /// Value assigned when the key is absent.
    pub default: Option<DefaultValue>,
    /// Whether an object of this group is unusable without the key.
    pub required: bool,
    /// Known inconsistency in the declared kind, shown alongside type errors.
    pub note: Option<&'static str>,
}

impl OptionSpec {
    #[must_use]
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            required: false,
            note: None,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

/// The options recognized inside one containing object.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    /// Options in declaration order.
    pub options: Vec<OptionSpec>,
    /// Kind applied to keys without an option (an index signature).
    /// Groups with one never report unknown keys.
    pub additional: Option<ValueKind>,
}

impl Group {
    #[must_use]
    pub fn new(id: GroupId, options: &[OptionSpec]) -> Self {
        Self {
            id,
            options: options.to_vec(),
            additional: None,
        }
    }

    /// A group whose keys are arbitrary, each value of `kind`.
    #[must_use]
    pub const fn map_of(id: GroupId, kind: ValueKind) -> Self {
        Self {
            id,
            options: Vec::new(),
            additional: Some(kind),
        }
    }

    /// Finds an option by exact name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Closest option name for typo correction.
    ///
    /// A case-insensitive exact match always wins; otherwise the closest
    /// name within Damerau-Levenshtein distance 3.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        suggest_from(self.options.iter().map(|o| o.name), input)
    }
}

/// Picks the candidate closest to `input`, if any is plausibly a typo of it.
pub(crate) fn suggest_from<'a>(
    candidates: impl IntoIterator<Item = &'a str> + Clone,
    input: &str,
) -> Option<&'a str> {
    if let Some(exact) = candidates
        .clone()
        .into_iter()
        .find(|c| c.eq_ignore_ascii_case(input))
    {
        return Some(exact);
    }
    candidates
        .into_iter()
        .map(|c| (c, strsim::damerau_levenshtein(input, c)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}

// ============================================================================
// Schema Table
// ============================================================================

static TSCONFIG: LazyLock<SchemaTable> = LazyLock::new(|| {
    let table = SchemaTable::from_groups(GroupId::Root, tsconfig::groups());
    debug_assert!(table.check().is_ok(), "built-in schema table is inconsistent");
    table
});

/// The complete set of groups, rooted at one of them.
#[derive(Debug, Clone)]
pub struct SchemaTable {
    root: GroupId,
    groups: IndexMap<GroupId, Group>,
}

impl SchemaTable {
    /// Builds a table and checks its structural invariants.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if option names repeat within a group, an
    /// option nests into an unregistered group, or nesting forms a cycle.
    pub fn new(root: GroupId, groups: Vec<Group>) -> Result<Self, SchemaError> {
        let table = Self::from_groups(root, groups);
        table.check()?;
        Ok(table)
    }

    fn from_groups(root: GroupId, groups: Vec<Group>) -> Self {
        Self {
            root,
            groups: groups.into_iter().map(|g| (g.id, g)).collect(),
        }
    }

    /// The built-in TypeScript project configuration schema.
    #[must_use]
    pub fn tsconfig() -> &'static Self {
        &TSCONFIG
    }

    #[must_use]
    pub const fn root(&self) -> GroupId {
        self.root
    }

    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Groups in registration order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Verifies name uniqueness, group references, and acyclic nesting.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check(&self) -> Result<(), SchemaError> {
        for group in self.groups.values() {
            let mut seen = HashSet::new();
            for option in &group.options {
                if !seen.insert(option.name) {
                    return Err(SchemaError::DuplicateOption {
                        group: group.id.to_string(),
                        option: option.name.to_string(),
                    });
                }
                if let Some(target) = option.kind.nested_group() {
                    if !self.groups.contains_key(&target) {
                        return Err(SchemaError::UnknownGroup {
                            group: group.id.to_string(),
                            option: option.name.to_string(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }

        let mut done = HashSet::new();
        for id in self.groups.keys() {
            let mut stack = Vec::new();
            self.visit(*id, &mut stack, &mut done)?;
        }
        Ok(())
    }

    /// Depth-first walk; `stack` holds the current nesting chain.
    fn visit(
        &self,
        id: GroupId,
        stack: &mut Vec<GroupId>,
        done: &mut HashSet<GroupId>,
    ) -> Result<(), SchemaError> {
        if done.contains(&id) {
            return Ok(());
        }
        if let Some(start) = stack.iter().position(|g| *g == id) {
            let mut cycle: Vec<String> = stack[start..].iter().map(ToString::to_string).collect();
            cycle.push(id.to_string());
            return Err(SchemaError::Cycle { cycle });
        }
        stack.push(id);
        if let Some(group) = self.groups.get(&id) {
            let nested = group
                .options
                .iter()
                .map(|o| o.kind)
                .chain(group.additional)
                .filter_map(ValueKind::nested_group);
            for child in nested {
                self.visit(child, stack, done)?;
            }
        }
        stack.pop();
        done.insert(id);
        Ok(())
    }

    /// Options carrying a note about their declared kind, as
    /// `(dotted path, note)`.
    #[must_use]
    pub fn notes(&self) -> Vec<(String, &'static str)> {
        let mut notes = Vec::new();
        self.collect_notes(self.root, "", &mut notes);
        notes
    }

    fn collect_notes(&self, id: GroupId, prefix: &str, out: &mut Vec<(String, &'static str)>) {
        let Some(group) = self.groups.get(&id) else {
            return;
        };
        for option in &group.options {
            let path = join_key(prefix, option.name);
            if let Some(note) = option.note {
                out.push((path.clone(), note));
            }
            match option.kind {
                ValueKind::Object(child) => self.collect_notes(child, &path, out),
                ValueKind::ObjectList(child) => {
                    self.collect_notes(child, &format!("{path}[]"), out);
                }
                _ => {}
            }
        }
    }
}

/// Appends `key` to a dotted path.
#[must_use]
pub fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_passes_check() {
        assert_eq!(SchemaTable::tsconfig().check(), Ok(()));
    }

    #[test]
    fn builtin_table_registers_every_group() {
        let table = SchemaTable::tsconfig();
        for id in GroupId::ALL {
            assert!(table.group(id).is_some(), "missing group {id}");
        }
        assert_eq!(table.root(), GroupId::Root);
    }

    #[test]
    fn duplicate_option_rejected() {
        let groups = vec![Group::new(
            GroupId::Root,
            &[
                OptionSpec::new("files", ValueKind::StringList),
                OptionSpec::new("files", ValueKind::String),
            ],
        )];
        let err = SchemaTable::new(GroupId::Root, groups).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateOption {
                group: "root".into(),
                option: "files".into()
            }
        );
    }

    #[test]
    fn unregistered_group_rejected() {
        let groups = vec![Group::new(
            GroupId::Root,
            &[OptionSpec::new(
                "watchOptions",
                ValueKind::Object(GroupId::WatchOptions),
            )],
        )];
        let err = SchemaTable::new(GroupId::Root, groups).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownGroup { .. }));
    }

    #[test]
    fn nesting_cycle_rejected() {
        let groups = vec![
            Group::new(
                GroupId::Root,
                &[OptionSpec::new(
                    "compilerOptions",
                    ValueKind::Object(GroupId::CompilerOptions),
                )],
            ),
            Group::new(
                GroupId::CompilerOptions,
                &[OptionSpec::new(
                    "plugins",
                    ValueKind::ObjectList(GroupId::Plugin),
                )],
            ),
            Group::new(
                GroupId::Plugin,
                &[OptionSpec::new(
                    "inner",
                    ValueKind::Object(GroupId::CompilerOptions),
                )],
            ),
        ];
        let err = SchemaTable::new(GroupId::Root, groups).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Cycle {
                cycle: vec![
                    "compilerOptions".into(),
                    "plugin".into(),
                    "compilerOptions".into()
                ]
            }
        );
    }

    #[test]
    fn cycle_through_additional_kind_rejected() {
        let groups = vec![
            Group::new(
                GroupId::Root,
                &[OptionSpec::new("ts-node", ValueKind::Object(GroupId::TsNode))],
            ),
            Group::map_of(GroupId::TsNode, ValueKind::Object(GroupId::Root)),
        ];
        assert!(matches!(
            SchemaTable::new(GroupId::Root, groups),
            Err(SchemaError::Cycle { .. })
        ));
    }

    #[test]
    fn suggest_prefers_case_insensitive_match() {
        let group = SchemaTable::tsconfig()
            .group(GroupId::CompilerOptions)
            .unwrap();
        assert_eq!(group.suggest("STRICT"), Some("strict"));
        assert_eq!(group.suggest("stirct"), Some("strict"));
        assert_eq!(group.suggest("somethingCompletelyDifferent"), None);
    }

    #[test]
    fn group_id_parses_from_document_key() {
        assert_eq!(
            "compilerOptions".parse::<GroupId>(),
            Ok(GroupId::CompilerOptions)
        );
        assert_eq!("ts-node".parse::<GroupId>(), Ok(GroupId::TsNode));
        assert!("compileroptions".parse::<GroupId>().is_err());
    }

    #[test]
    fn notes_are_reported_with_paths() {
        let notes = SchemaTable::tsconfig().notes();
        assert!(
            notes.iter().any(|(path, _)| path == "compilerOptions.newLine"),
            "{notes:?}"
        );
    }

    #[test]
    fn describe_enum_lists_literals() {
        let kind = ValueKind::Enum(Jsx::LITERALS);
        assert!(kind.describe().contains("'react-jsx'"));
        assert_eq!(kind.short_name(), "enum[5]");
    }
}
