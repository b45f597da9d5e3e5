//! Version information display
//!
//! Prints version metadata in human or JSON format.

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::schema::SchemaTable;

/// Print version information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let groups = SchemaTable::tsconfig().groups().count();

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} ({groups} schema groups)");
        }
        OutputFormat::Json => {
            println!(r#"{{"name":"{name}","version":"{version}","schema_groups":{groups}}}"#);
        }
    }
}
