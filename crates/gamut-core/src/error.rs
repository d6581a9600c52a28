//! Error types for gamut-rs operations.
//!
//! Every failure the engine can report falls into one of two classes:
//!
//! - **Configuration errors** - unsupported reference model or diagram tags,
//!   invalid colourspace descriptors, segment / sample counts out of range,
//!   empty face masks or preset lists.
//! - **Geometry errors** - the triangulation could not be built from the
//!   given input (degenerate or collinear points).
//!
//! Non-finite values produced mid-pipeline are *not* errors: they are zeroed
//! by the transform stages so visuals stay anchored at the origin.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Error, Result};
//!
//! fn check_segments(segments: u32) -> Result<()> {
//!     if segments < 1 {
//!         return Err(Error::configuration(format!(
//!             "segments must be >= 1, got {segments}"
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_segments(0).unwrap_err().is_configuration_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by geometry generation, colour transforms and triangulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A reference model or chromaticity diagram tag is not supported.
    ///
    /// Never silently mapped to a default; the message lists the
    /// supported set.
    #[error("unsupported {kind} '{tag}', expected one of: {supported}")]
    UnsupportedModel {
        /// What kind of tag was parsed ("reference model", "chromaticity diagram")
        kind: &'static str,
        /// The tag that was given
        tag: String,
        /// Comma separated list of supported tags
        supported: String,
    },

    /// Invalid parameters or descriptors supplied by the caller.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Triangulation failed on degenerate input.
    #[error("geometry error: {0}")]
    Geometry(String),
}

impl Error {
    /// Creates an [`Error::UnsupportedModel`] error.
    pub fn unsupported_model<'a>(
        kind: &'static str,
        tag: impl Into<String>,
        supported: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnsupportedModel {
            kind,
            tag: tag.into(),
            supported: supported.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Creates an [`Error::Configuration`] error.
    #[inline]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates an [`Error::Geometry`] error.
    #[inline]
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Returns `true` for configuration-class errors, including unsupported tags.
    #[inline]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::UnsupportedModel { .. })
    }

    /// Returns `true` if triangulation failed.
    #[inline]
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_model_lists_supported_set() {
        let err = Error::unsupported_model("reference model", "CIE Foo", ["CIE XYZ", "CIE xyY"]);
        let msg = err.to_string();
        assert!(msg.contains("CIE Foo"));
        assert!(msg.contains("CIE XYZ, CIE xyY"));
        assert!(err.is_configuration_error());
        assert!(!err.is_geometry_error());
    }

    #[test]
    fn test_configuration() {
        let err = Error::configuration("segments must be >= 1");
        assert!(err.to_string().starts_with("configuration error"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_geometry() {
        let err = Error::geometry("collinear input");
        assert!(err.is_geometry_error());
        assert!(err.to_string().contains("collinear"));
    }
}
