use thiserror::Error;

/// Errors returned when a byte window cannot satisfy a read.
///
/// # Examples
/// ```
/// use hexlens_core::WindowError;
///
/// let err = WindowError::TooShort { needed: 4, actual: 2 };
/// assert!(err.to_string().contains("window too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}

/// Errors returned when building a reduced-precision float decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MiniFloatError {
    #[error(
        "invalid minifloat widths: exponent {exponent_width}, significand {significand_width} (both >= 1, sum <= 15)"
    )]
    InvalidWidths {
        exponent_width: u32,
        significand_width: u32,
    },
}
