//! `tsconfig-validator` - Schema-driven validation of TypeScript project
//! configuration
//!
//! The schema is a declarative table of options ([`schema::SchemaTable`]);
//! [`config::validate`] walks a parsed document against it and returns a
//! [`config::ValidationReport`] holding every issue plus a best-effort
//! [`config::ValidatedConfig`].

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod schema;
