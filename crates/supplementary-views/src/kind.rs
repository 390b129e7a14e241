//! Supplementary view kinds.

use std::borrow::Cow;
use std::fmt;

/// A host-defined tag distinguishing categories of supplementary views,
/// such as headers and footers.
///
/// Kinds are supplied by the host and passed through to data
/// configurators unchanged. Any string is a valid kind; [`HEADER`] and
/// [`FOOTER`] are provided for the common cases.
///
/// [`HEADER`]: SupplementaryKind::HEADER
/// [`FOOTER`]: SupplementaryKind::FOOTER
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplementaryKind(Cow<'static, str>);

impl SupplementaryKind {
    /// Section header.
    pub const HEADER: SupplementaryKind = SupplementaryKind(Cow::Borrowed("header"));

    /// Section footer.
    pub const FOOTER: SupplementaryKind = SupplementaryKind(Cow::Borrowed("footer"));

    /// Creates a kind from any string.
    pub fn new(kind: impl Into<Cow<'static, str>>) -> Self {
        Self(kind.into())
    }

    /// Returns the kind as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the header kind.
    #[inline]
    pub fn is_header(&self) -> bool {
        *self == Self::HEADER
    }

    /// Returns `true` for the footer kind.
    #[inline]
    pub fn is_footer(&self) -> bool {
        *self == Self::FOOTER
    }
}

impl fmt::Display for SupplementaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SupplementaryKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SupplementaryKind {
    fn from(kind: &'static str) -> Self {
        Self(Cow::Borrowed(kind))
    }
}

impl From<String> for SupplementaryKind {
    fn from(kind: String) -> Self {
        Self(Cow::Owned(kind))
    }
}
