use std::fmt;

use thiserror::Error;

/// Which side of the expected `[r, g, b]` length an array fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMismatch {
    TooFew,
    TooMany,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthMismatch::TooFew => f.write_str("too few"),
            LengthMismatch::TooMany => f.write_str("too many"),
        }
    }
}

/// Failures raised while normalizing color parameters or searching for contrast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Input was not a string, array, record or color value.
    #[error("invalid parameter of type: {got}")]
    InvalidParameterType { got: String },

    /// Channel array did not hold exactly three values.
    #[error("array has {kind} parameters ({len}), expected 3: [r, g, b]")]
    InvalidArrayLength { len: usize, kind: LengthMismatch },

    /// Record is missing one or more of `r`, `g`, `b`.
    #[error("invalid parameter: record is missing {}", .missing.join(", "))]
    InvalidRecordShape { missing: Vec<&'static str> },

    /// String could not be parsed as a CSS color.
    #[error("unparseable color {input:?}: {reason}")]
    UnparseableColor { input: String, reason: String },

    /// Search step outside `(0, 1]`.
    #[error("invalid search step {step}: expected a value in (0, 1]")]
    InvalidStep { step: f64 },

    /// The pull search reached a fixed point before satisfying the ratio.
    #[error(
        "contrast ratio {min_ratio} could not be reached (best {best_ratio:.3} after {steps} steps, stuck at {last_hex})"
    )]
    ContrastUnreachable {
        min_ratio: f64,
        best_ratio: f64,
        steps: usize,
        last_hex: String,
    },
}

pub type Result<T> = std::result::Result<T, ColorError>;

impl From<ColorError> for napi::Error {
    fn from(err: ColorError) -> Self {
        let status = match err {
            ColorError::ContrastUnreachable { .. } => napi::Status::GenericFailure,
            _ => napi::Status::InvalidArg,
        };
        napi::Error::new(status, err.to_string())
    }
}
