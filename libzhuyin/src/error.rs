//! Errors raised by pinyin → zhuyin conversion.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// No table unit is a prefix of `residual`, the unconsumed tail of `input`.
    #[error("unrecognized pinyin syllable '{input}': cannot match '{residual}'")]
    UnrecognizedSyllable { input: String, residual: String },
}

impl ConversionError {
    pub fn unrecognized<I: Into<String>, R: Into<String>>(input: I, residual: R) -> Self {
        ConversionError::UnrecognizedSyllable {
            input: input.into(),
            residual: residual.into(),
        }
    }

    /// The syllable the caller passed in.
    pub fn input(&self) -> &str {
        match self {
            ConversionError::UnrecognizedSyllable { input, .. } => input,
        }
    }

    /// The part of the input that could not be matched.
    pub fn residual(&self) -> &str {
        match self {
            ConversionError::UnrecognizedSyllable { residual, .. } => residual,
        }
    }
}
