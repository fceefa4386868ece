//! Error types for slider line parsing.

use thiserror::Error;

/// Errors that can occur while parsing a serialized slider line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The line does not start with the `slider: ` prefix.
    #[error("missing `slider: ` prefix")]
    MissingPrefix,

    /// The line has no ` [...] ` separator between position and curve data.
    #[error("missing ` [...] ` separator")]
    MissingSeparator,

    /// A field that the line format requires is absent.
    #[error("missing {name} field")]
    MissingField {
        /// Name of the absent field.
        name: &'static str,
    },

    /// A coordinate or length field did not parse as a number.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    /// The curve kind letter is not one of `L`, `P`, `C`, `B`.
    #[error("unknown curve kind `{0}`")]
    UnknownCurveKind(String),
}
