//! Error types for catalog lookups and option handling.

use thiserror::Error;

use crate::style::{OptionSpec, StyleDefinition};

/// Errors reported by the catalog, the option store and conversions.
///
/// All variants are recoverable; unmapped characters are never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown style: {0}")]
    StyleNotFound(String),

    #[error("Option '{key}' of style '{style}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        style: String,
        key: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Style '{style}' has no option '{key}'")]
    UnknownOption { style: String, key: String },
}

impl Error {
    pub(crate) fn out_of_range(style: &StyleDefinition, spec: &OptionSpec, value: i32) -> Self {
        Self::OutOfRange {
            style: style.id().to_string(),
            key: spec.key.to_string(),
            value,
            min: spec.min,
            max: spec.max,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = Error::OutOfRange {
            style: "zalgo".into(),
            key: "intensity".into(),
            value: 11,
            min: 1,
            max: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("zalgo"));
        assert!(msg.contains("between 1 and 10"));
        assert!(msg.contains("got 11"));
    }

    #[test]
    fn style_not_found_display() {
        assert_eq!(
            Error::StyleNotFound("nope".into()).to_string(),
            "Unknown style: nope"
        );
    }
}
