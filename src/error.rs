//! Errors produced while upgrading kerning groups

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Both kerning sides were given the same group prefix, so first-side
    /// and second-side groups could not be told apart afterwards.
    #[error("kerning group prefixes must differ, both are {prefix:?}")]
    IdenticalPrefixes { prefix: String },

    /// A glyph or group name is not acceptable to norad.
    #[error("invalid glyph or group name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
}
