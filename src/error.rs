//! Error types for choropleth rendering.
//!
//! Every fallible operation in the crate returns [`ChoroplethError`]. Errors
//! are surfaced to the caller as-is; nothing in the renderer retries.

use thiserror::Error;

/// The main error type for choropleth operations.
#[derive(Error, Debug)]
pub enum ChoroplethError {
    /// The requested color ramp is not registered
    #[error("Unknown colormap: {name}")]
    UnknownRamp { name: String },

    /// A region geometry is neither a polygon nor a multi-polygon
    #[error("Unsupported geometry type {kind} encountered")]
    UnsupportedGeometry { kind: String },

    /// Every region carries the same value and the policy forbids a midpoint fallback
    #[error("Degenerate value range: every region has value {value}")]
    DegenerateRange { value: f64 },

    /// No regions were left to render
    #[error("No regions to render")]
    EmptyInput,

    /// A region value is NaN or infinite
    #[error("Region {index} has a non-finite value: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// A feature has no geometry or no numeric value for the column
    #[error("Feature {index} has no numeric value for column '{column}'")]
    MissingAttribute { index: usize, column: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Image generation errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// GeoJSON parsing or geometry conversion errors
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Errors while writing a text document such as SVG
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Convenience type alias for Results with ChoroplethError
pub type Result<T> = std::result::Result<T, ChoroplethError>;
