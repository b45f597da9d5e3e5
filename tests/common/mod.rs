//! Shared integration-test harness for running the `tsconfig-validator`
//! binary against fixture files.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Helpers for invoking the compiled binary.
pub struct ValidatorProcess;

impl ValidatorProcess {
    /// Returns the path to a fixture file in `tests/fixtures/`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Runs the binary with `args` and returns its output.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_tsconfig-validator"))
            .args(args)
            .env_remove("TSCONFIG_VALIDATOR_STRICT")
            .env_remove("TSCONFIG_VALIDATOR_LOG_LEVEL")
            .env_remove("TSCONFIG_VALIDATOR_LOG_FORMAT")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run tsconfig-validator")
    }

    /// Runs the binary with `args`, writing `input` to its stdin.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_stdin(args: &[&str], input: impl AsRef<[u8]>) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_tsconfig-validator"))
            .args(args)
            .env_remove("TSCONFIG_VALIDATOR_STRICT")
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn tsconfig-validator");
        child
            .stdin
            .take()
            .expect("stdin not captured")
            .write_all(input.as_ref())
            .expect("failed to write stdin");
        child.wait_with_output().expect("failed to wait for child")
    }

    /// Convenience accessor for the fixture path as `&str` arguments.
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name).to_string_lossy().into_owned()
    }
}

/// Builds a document that sets every option of every group to a
/// representative valid value.
pub fn sample_document() -> serde_json::Value {
    use tsconfig_validator::schema::{GroupId, SchemaTable};
    sample_object(SchemaTable::tsconfig(), GroupId::Root)
}

fn sample_object(
    table: &tsconfig_validator::schema::SchemaTable,
    id: tsconfig_validator::schema::GroupId,
) -> serde_json::Value {
    let group = table.group(id).expect("registered group");
    let mut map = serde_json::Map::new();
    for option in &group.options {
        map.insert(option.name.to_string(), sample_value(table, option.kind));
    }
    if let Some(kind) = group.additional {
        map.insert("sample/*".to_string(), sample_value(table, kind));
    }
    serde_json::Value::Object(map)
}

fn sample_value(
    table: &tsconfig_validator::schema::SchemaTable,
    kind: tsconfig_validator::schema::ValueKind,
) -> serde_json::Value {
    use serde_json::json;
    use tsconfig_validator::schema::ValueKind;

    match kind {
        ValueKind::Boolean => json!(true),
        ValueKind::String => json!("value"),
        ValueKind::Number => json!(2),
        ValueKind::StringList => json!(["a", "b"]),
        ValueKind::StringOrList => json!(["./base.json"]),
        ValueKind::Enum(literals) => json!(literals[literals.len() - 1]),
        ValueKind::EnumList(literals) => json!([literals[0], literals[literals.len() - 1]]),
        ValueKind::Object(group) => sample_object(table, group),
        ValueKind::ObjectList(group) => json!([sample_object(table, group)]),
        ValueKind::Any => json!({"anything": [1, "two", null]}),
    }
}
