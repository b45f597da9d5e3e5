//! `schema` command
//!
//! Prints the built-in schema table, one group at a time.

use serde::Serialize;

use crate::cli::args::{OutputFormat, SchemaArgs};
use crate::error::ValidatorError;
use crate::schema::{DefaultValue, Group, OptionSpec, SchemaTable, ValueKind};

/// Serializable view of one group.
#[derive(Debug, Serialize)]
struct GroupView<'a> {
    group: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional: Option<String>,
    options: Vec<OptionView<'a>>,
}

/// Serializable view of one option.
#[derive(Debug, Serialize)]
struct OptionView<'a> {
    name: &'static str,
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    literals: Option<&'a [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<serde_json::Value>,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

impl<'a> From<&'a OptionSpec> for OptionView<'a> {
    fn from(option: &'a OptionSpec) -> Self {
        let literals = match option.kind {
            ValueKind::Enum(literals) | ValueKind::EnumList(literals) => Some(literals),
            _ => None,
        };
        Self {
            name: option.name,
            kind: option.kind.short_name(),
            literals,
            default: option.default.map(default_json),
            required: option.required,
            note: option.note,
        }
    }
}

impl<'a> From<&'a Group> for GroupView<'a> {
    fn from(group: &'a Group) -> Self {
        Self {
            group: group.id.as_str(),
            additional: group.additional.map(ValueKind::describe),
            options: group.options.iter().map(OptionView::from).collect(),
        }
    }
}

/// Print the schema table.
///
/// # Errors
///
/// Returns `ValidatorError::Json` if JSON rendering fails.
pub fn run(args: &SchemaArgs) -> Result<(), ValidatorError> {
    let table = SchemaTable::tsconfig();
    let groups: Vec<GroupView<'_>> = table
        .groups()
        .filter(|g| args.group.is_none_or(|wanted| g.id == wanted))
        .map(GroupView::from)
        .collect();

    match args.format {
        OutputFormat::Human => print!("{}", render_human(&groups)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
    }
    Ok(())
}

fn default_json(default: DefaultValue) -> serde_json::Value {
    match default {
        DefaultValue::Bool(b) => serde_json::Value::Bool(b),
        DefaultValue::Str(s) => serde_json::Value::String(s.to_string()),
    }
}

fn render_human(groups: &[GroupView<'_>]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[{}]", group.group);
        if let Some(additional) = &group.additional {
            let _ = writeln!(out, "  <any key>  {additional}");
        }
        let width = group.options.iter().map(|o| o.name.len()).max().unwrap_or(0);
        for option in &group.options {
            let _ = write!(out, "  {:width$}  {}", option.name, option.kind);
            if option.required {
                out.push_str("  required");
            }
            if let Some(default) = &option.default {
                let _ = write!(out, "  default={default}");
            }
            out.push('\n');
            if let Some(literals) = option.literals {
                let _ = writeln!(out, "  {:width$}    {}", "", crate::schema::quote_list(literals));
            }
            if let Some(note) = option.note {
                let _ = writeln!(out, "  {:width$}    note: {note}", "");
            }
        }
    }
    out
}
