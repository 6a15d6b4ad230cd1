//! Logging utilities for choropleth rendering.
//!
//! Structured `tracing` events so that render timings and input sizes can
//! be searched and aggregated. The renderer never logs its own errors;
//! callers decide whether to use [`log_error`].

use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over `log_level` when set. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

/// Generate a unique render ID
pub fn generate_render_id() -> String {
    Uuid::new_v4().to_string()
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log the summary of a finished render
pub fn log_render_stats(
    render_id: &str,
    attribute: &str,
    colormap: &str,
    region_count: usize,
    ring_count: usize,
    range: (f64, f64),
    start_time: Instant,
) {
    info!(
        operation = "render",
        render_id = render_id,
        attribute = attribute,
        colormap = colormap,
        region_count = region_count,
        ring_count = ring_count,
        min = range.0,
        max = range.1,
        duration_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        "Choropleth rendered"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::ChoroplethError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}
