//! Error types for supplementary view factories.

/// Result type alias for supplementary view operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around supplementary view factories.
///
/// A factory's own `configure` never fails; these errors come from the
/// type-erased host boundary and from loading style configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host handed an erased factory a view of the wrong concrete type.
    #[error("view type mismatch for '{identifier}': expected {expected}")]
    ViewTypeMismatch {
        expected: &'static str,
        identifier: &'static str,
    },

    /// A style configuration could not be parsed.
    #[error("Invalid style configuration: {0}")]
    Style(#[from] toml::de::Error),
}

impl Error {
    /// Create a view type mismatch error.
    pub fn view_type_mismatch(expected: &'static str, identifier: &'static str) -> Self {
        Self::ViewTypeMismatch {
            expected,
            identifier,
        }
    }

    /// Returns true if this error is a view type mismatch.
    pub fn is_view_type_mismatch(&self) -> bool {
        matches!(self, Self::ViewTypeMismatch { .. })
    }
}
