//! Error types for the lumina core.

use thiserror::Error;

/// Errors produced by sketch construction and rendering.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Width or height was zero when creating a surface, or the pixel count
    /// would overflow `usize`. Fatal at startup: nothing can be drawn
    /// without a target surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two surfaces had incompatible dimensions for a blit.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A snapshot or other file operation failed.
    #[error("i/o error: {0}")]
    Io(String),
}
