//! Page size for collection requests.

use std::fmt;

/// Number of items requested with `$top`, clamped to `1..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Smallest accepted page size.
    pub const MIN: u32 = 1;
    /// Largest accepted page size.
    pub const MAX: u32 = 50;
    /// Page size used when the caller gives none.
    pub const DEFAULT: u32 = 10;

    /// Creates a page size, clamping out-of-range values.
    #[must_use]
    pub const fn new(requested: u32) -> Self {
        if requested < Self::MIN {
            Self(Self::MIN)
        } else if requested > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(requested)
        }
    }

    /// Returns the clamped size.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<Option<u32>> for PageSize {
    fn from(value: Option<u32>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
