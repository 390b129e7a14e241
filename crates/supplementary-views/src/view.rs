//! Reusable view types and their identifiers.
//!
//! Hosts keep pools of view instances keyed by a [`ViewIdentifier`]. Every
//! concrete view type that a factory configures declares its identifier
//! through [`ReusableView`].

use std::fmt;

/// A view type that a host can pool and recycle.
///
/// # Example
///
/// ```
/// use supplementary_views::{ReusableView, ViewIdentifier};
///
/// #[derive(Default)]
/// struct BadgeView {
///     count: usize,
/// }
///
/// impl ReusableView for BadgeView {
///     const REUSE_IDENTIFIER: &'static str = "BadgeView";
/// }
///
/// assert_eq!(BadgeView::view_identifier(), ViewIdentifier::new("BadgeView"));
/// ```
pub trait ReusableView {
    /// The stable identifier the host's reuse pool uses for this type.
    const REUSE_IDENTIFIER: &'static str;

    /// Returns [`REUSE_IDENTIFIER`](Self::REUSE_IDENTIFIER) as a
    /// [`ViewIdentifier`].
    fn view_identifier() -> ViewIdentifier {
        ViewIdentifier::new(Self::REUSE_IDENTIFIER)
    }
}

/// The reuse identifier of a concrete view type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewIdentifier(&'static str);

impl ViewIdentifier {
    /// Creates an identifier from a static string.
    #[inline]
    pub const fn new(identifier: &'static str) -> Self {
        Self(identifier)
    }

    /// Returns the identifier string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ViewIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for ViewIdentifier {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for ViewIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl ReusableView for Plain {
        const REUSE_IDENTIFIER: &'static str = "Plain";
    }

    #[test]
    fn test_view_identifier() {
        let id = Plain::view_identifier();
        assert_eq!(id, "Plain");
        assert_eq!(id.as_str(), "Plain");
        assert_eq!(id.to_string(), "Plain");
    }
}
