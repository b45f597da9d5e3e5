//! Typed configuration record.
//!
//! `TsConfig` is the strongly typed view of a validated document. It is
//! produced by [`ValidatedConfig::to_typed`](crate::config::ValidatedConfig::to_typed)
//! and round-trips through `serde` with the document's own key spelling.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::schema::{
    FallbackPollingStrategy, Jsx, Lib, ModuleDetection, ModuleKind, ModuleResolution, Target,
    WatchDirectoryStrategy, WatchFileStrategy,
};

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root of a TypeScript project configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    /// Explicit list of source files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Base configuration(s) this document extends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Extends>,

    /// Glob patterns of files to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Glob patterns of files to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Referenced sub-projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<ProjectReference>>,

    /// Watch mode settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<WatchOptions>,

    /// Compiler settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<CompilerOptions>,

    /// Automatic type acquisition for JavaScript projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_acquisition: Option<TypeAcquisition>,

    /// Free-form settings for the `ts-node` runner, passed through untouched
    #[serde(
        default,
        rename = "ts-node",
        skip_serializing_if = "Option::is_none"
    )]
    pub ts_node: Option<Map<String, Value>>,
}

/// `extends`: one base configuration or several, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extends {
    One(String),
    Many(Vec<String>),
}

impl Extends {
    /// Base configuration paths in application order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::One(path) => vec![path.as_str()],
            Self::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

/// One element of `references`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReference {
    /// Path to the referenced project directory or configuration file
    pub path: String,
}

/// One element of `compilerOptions.plugins`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Plugin package name
    pub name: String,
}

// ============================================================================
// Compiler Options
// ============================================================================

/// `compilerOptions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    // Type checking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_unreachable_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_unused_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_optional_property_types: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_fallthrough_cases_in_switch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_implicit_any: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_implicit_override: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_implicit_returns: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_implicit_this: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_property_access_from_index_signature: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unchecked_indexed_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unused_locals: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unused_parameters: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_bind_call_apply: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_function_types: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_null_checks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_property_initialization: Option<bool>,
    /// Declared as a string, although the compiler treats it as a flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_unknown_in_catch_variables: Option<String>,

    // Modules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_arbitrary_extensions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_importing_ts_extensions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_umd_global_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_conditions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_resolution: Option<ModuleResolution>,
    /// Declared as a flag, although the compiler expects a suffix list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_suffixes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_resolve: Option<bool>,
    /// Module specifier pattern to substitution list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<IndexMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_json_module: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_package_json_exports: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_package_json_imports: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dirs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_roots: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    // Emit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_map: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downlevel_iteration: Option<bool>,
    #[serde(default, rename = "emitBOM", skip_serializing_if = "Option::is_none")]
    pub emit_bom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emit_declaration_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_helpers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports_not_used_as_values: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_source_map: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_sources: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_root: Option<String>,
    /// Declared as a flag, although the compiler expects `crlf` or `lf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_emit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_emit_helpers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_emit_on_error: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_const_enums: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_value_imports: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_comments: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_internal: Option<bool>,

    // JavaScript support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_js: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_js: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_node_module_js_depth: Option<Number>,

    // Editor support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_size_limit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginEntry>>,

    // Interop constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_synthetic_default_imports: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es_module_interop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_consistent_casing_in_file_names: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated_modules: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_symlinks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbatim_module_syntax: Option<bool>,

    // Backwards compatibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyof_strings_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_implicit_use_strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_strict_generic_checks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_excess_property_errors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppress_implicit_any_index_errors: Option<bool>,

    // Language and environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emit_decorator_metadata: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_decorators: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx: Option<Jsx>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_factory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_fragment_factory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_import_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<Vec<Lib>>,
    /// Defaults to `auto` once `compilerOptions` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_detection: Option<ModuleDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_lib: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_define_for_class_fields: Option<bool>,

    // Compiler diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain_files: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_diagnostics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_cpu_profile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_emitted_files: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_files: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_resolution: Option<bool>,

    // Projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_referenced_project_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_solution_searching: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_source_of_project_reference_redirect: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_build_info_file: Option<bool>,

    // Output formatting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_error_truncation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_watch_output: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,

    // Completeness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_default_lib_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_lib_check: Option<bool>,

    // Watch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_changes_only_affect_direct_dependencies: Option<bool>,
}

// ============================================================================
// Watch Options
// ============================================================================

/// `watchOptions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    /// How individual files are watched (defaults to `useFsEvents`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_file: Option<WatchFileStrategy>,

    /// How directory trees are watched (defaults to `useFsEvents`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_directory: Option<WatchDirectoryStrategy>,

    /// Polling strategy when native events are unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_polling: Option<FallbackPollingStrategy>,

    /// Disable deferred watching on directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronous_watch_directory: Option<bool>,

    /// Directories excluded from watching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_directories: Option<Vec<String>>,

    /// Files excluded from watching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_files: Option<Vec<String>>,
}

// ============================================================================
// Type Acquisition
// ============================================================================

/// `typeAcquisition`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAcquisition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_filename_based_type_acquisition: Option<bool>,
}

// ============================================================================
// Tests
// ============================================================================
