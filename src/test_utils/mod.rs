//! Test utilities for Slotty.
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration tests under `tests/`.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{HostEnvironment, SlottyOptions, ValidationMode};
use crate::templating::SlotRenderer;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=slotty=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A renderer over in-memory templates with the given mode and environment.
///
/// # Panics
///
/// If a template fails to parse.
#[must_use]
pub fn renderer(
    mode: ValidationMode,
    environment: HostEnvironment,
    templates: &[(&str, &str)],
) -> SlotRenderer {
    SlotRenderer::from_raw_templates(
        SlottyOptions::with_validation_mode(mode),
        environment,
        templates,
    )
    .unwrap_or_else(|e| panic!("test templates failed to parse: {e}"))
}
