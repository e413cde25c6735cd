/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Locale conventions for numeric rendering.

use serde::{Deserialize, Serialize};

/// Decimal-point and grouping conventions for rendered numbers.
///
/// Renderers substitute the decimal separator into formatted numeric text.
/// The grouping separator is carried for completeness; no wire format in
/// this crate family emits grouped digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    decimal_separator: char,
    grouping_separator: char,
}

impl Locale {
    /// Invariant conventions: `.` decimal separator, `,` grouping.
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        grouping_separator: ',',
    };

    /// German conventions: `,` decimal separator, `.` grouping.
    pub const GERMAN: Self = Self {
        decimal_separator: ',',
        grouping_separator: '.',
    };

    /// Creates a locale from explicit separators.
    #[must_use]
    pub const fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }

    /// Returns the decimal separator.
    #[inline]
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the grouping separator.
    #[inline]
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_separators() {
        assert_eq!(Locale::INVARIANT.decimal_separator(), '.');
        assert_eq!(Locale::INVARIANT.grouping_separator(), ',');
    }

    #[test]
    fn test_german_swaps_separators() {
        assert_eq!(Locale::GERMAN.decimal_separator(), ',');
        assert_eq!(Locale::GERMAN.grouping_separator(), '.');
    }

    #[test]
    fn test_default_is_invariant() {
        assert_eq!(Locale::default(), Locale::INVARIANT);
    }
}
