//! Index paths for addressing positions in a sectioned grid.
//!
//! Factories never interpret an `IndexPath`; they only pass it through to
//! the data configurator. The host decides what section and item mean.

use std::cmp::Ordering;
use std::fmt;

/// A position within a sectioned grid or list: a section plus an item
/// index within that section.
///
/// Supplementary views are usually addressed by section alone; use
/// [`IndexPath::for_section`] for those, which sets the item to `0`.
///
/// # Example
///
/// ```
/// use supplementary_views::IndexPath;
///
/// let header = IndexPath::for_section(2);
/// assert_eq!(header.section(), 2);
/// assert_eq!(header.item(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexPath {
    section: usize,
    item: usize,
}

impl IndexPath {
    /// Creates an index path for `item` within `section`.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Creates the index path a host uses for a section's supplementary
    /// views.
    #[inline]
    pub const fn for_section(section: usize) -> Self {
        Self { section, item: 0 }
    }

    /// Returns the section.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the item index within the section.
    #[inline]
    pub const fn item(&self) -> usize {
        self.item
    }

    /// Returns an index path in the same section at a different item.
    #[inline]
    pub const fn with_item(&self, item: usize) -> Self {
        Self {
            section: self.section,
            item,
        }
    }
}

impl fmt::Debug for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexPath({}, {})", self.section, self.item)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

impl PartialOrd for IndexPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexPath {
    fn cmp(&self, other: &Self) -> Ordering {
        // Section first, then item
        match self.section.cmp(&other.section) {
            Ordering::Equal => self.item.cmp(&other.item),
            other => other,
        }
    }
}
