//! Command-line interface
//!
//! Argument definitions and command handlers for the `tsconfig-validator`
//! binary.

pub mod args;
pub mod commands;
