//! Configuration documents
//!
//! Loads TypeScript project configuration text, validates it against the
//! schema table, and exposes the result as a validated tree or a typed
//! record.

pub mod loader;
pub mod types;
pub mod validated;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoaderOptions, parse_document};
pub use types::{
    CompilerOptions, Extends, PluginEntry, ProjectReference, TsConfig, TypeAcquisition,
    WatchOptions,
};
pub use validated::{Field, FieldSource, ValidatedConfig, ValidatedObject, ValidatedValue};
pub use validation::{ValidationReport, Validator, validate};
