//! Observability module
//!
//! Logging and metrics infrastructure for `tsconfig-validator`.

pub mod logging;
pub mod metrics;

pub use logging::{LogFormat, init_logging};
pub use metrics::{describe_metrics, init_metrics};
