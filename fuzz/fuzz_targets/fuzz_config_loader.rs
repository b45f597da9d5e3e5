#![no_main]

use libfuzzer_sys::fuzz_target;
use tsconfig_validator::config::ConfigLoader;
use tsconfig_validator::schema::SchemaTable;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string, ignoring invalid UTF-8
    if let Ok(text) = std::str::from_utf8(data) {
        let loader = ConfigLoader::with_defaults();

        // Errors are expected; panics are not
        if let Ok(result) = loader.load_from_str(text, "<fuzz>") {
            if let Some(config) = result.report.config {
                // A validated tree must validate cleanly again
                let again = tsconfig_validator::config::validate(
                    &config.to_value(),
                    SchemaTable::tsconfig(),
                );
                assert!(!again.has_errors());
                let _ = serde_json::to_string(&config);
            }
        }
    }
});
