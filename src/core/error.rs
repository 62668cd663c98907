use thiserror::Error;

/// Rejected construction-time parameters.
///
/// Nothing in the per-frame path returns errors; these only surface while a
/// [`crate::core::BackdropConfig`] is built or overridden from the host page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("particle count {count} exceeds the maximum of {max}")]
    TooManyParticles { count: usize, max: usize },
    #[error("particle palette is empty")]
    EmptyPalette,
    #[error("smooth factor {0} outside (0, 1]")]
    SmoothFactorOutOfRange(f32),
    #[error("{name} must be a finite, non-negative number (got {value})")]
    NegativeOrNonFinite { name: &'static str, value: f32 },
    #[error("reveal thresholds {0:?} must be finite and non-decreasing")]
    InvalidThresholds([f32; 4]),
    #[error("could not parse {key}={value:?}")]
    Unparsable { key: &'static str, value: String },
}
