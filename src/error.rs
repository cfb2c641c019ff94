//! Error type shared by the library and the `blo` binary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BloError {
    /// A caller-supplied option is out of range. Raised before any drawing.
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("palette index out of range: {0}")]
    InvalidPaletteIndex(u8),

    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
}

impl BloError {
    pub(crate) fn invalid_option(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption { name, reason: reason.into() }
    }
}
