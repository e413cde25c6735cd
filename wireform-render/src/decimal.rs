/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Decimal formatting with explicit rounding control.
//!
//! This module provides:
//! - [`RoundingMode`]: Truncate / RoundUp / RoundDown policies
//! - [`DecimalFormatter`]: Renders a [`Decimal`] with a fixed number of
//!   decimal places under one of those policies
//!
//! The modes are directional, not nearest-value: `RoundUp` is a ceiling
//! (toward positive infinity) and `RoundDown` a floor (toward negative
//! infinity), so both are asymmetric around zero. `-33.938` at zero places
//! rounds up to `-33` and down to `-34`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use wireform_core::{FormatError, Locale, Result};

/// Maximum supported decimal places.
pub const MAX_DECIMAL_PLACES: u32 = 3;

/// Policy for discarding digits beyond the retained precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Drop digits beyond the retained precision, toward zero.
    Truncate,
    /// Round toward positive infinity (ceiling).
    RoundUp,
    /// Round toward negative infinity (floor).
    RoundDown,
}

impl RoundingMode {
    /// Maps the mode onto the decimal rounding strategy.
    const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Truncate => RoundingStrategy::ToZero,
            Self::RoundUp => RoundingStrategy::ToPositiveInfinity,
            Self::RoundDown => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Formats decimal values with a fixed precision and rounding mode.
///
/// The output always shows exactly the configured number of digits after
/// the separator (zero-padded); zero places omits the separator entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFormatter {
    decimal_places: u32,
    mode: RoundingMode,
}

impl DecimalFormatter {
    /// Creates a new formatter.
    ///
    /// # Arguments
    /// * `decimal_places` - Digits to retain after the separator (0..=3)
    /// * `mode` - The rounding policy
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDecimalPlaces` if `decimal_places`
    /// exceeds [`MAX_DECIMAL_PLACES`].
    pub fn new(decimal_places: u32, mode: RoundingMode) -> Result<Self> {
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(FormatError::InvalidDecimalPlaces {
                places: decimal_places,
            });
        }
        Ok(Self {
            decimal_places,
            mode,
        })
    }

    /// Returns the configured decimal places.
    #[inline]
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Returns the configured rounding mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Formats a value under the configured precision and mode.
    ///
    /// Deterministic and side-effect free. The locale supplies the decimal
    /// separator.
    #[must_use]
    pub fn format(&self, value: Decimal, locale: &Locale) -> String {
        let text = self.apply_rounding(value).to_string();
        localize(text, locale)
    }

    fn apply_rounding(&self, value: Decimal) -> Decimal {
        // The representable extremes pass through unscaled; rescaling them
        // could overflow.
        if value == Decimal::MAX || value == Decimal::MIN {
            return value;
        }

        let mut rounded = value.round_dp_with_strategy(self.decimal_places, self.mode.strategy());
        if rounded.is_zero() {
            // Floor/truncate of a small negative keeps the sign flag;
            // a zero result must render "0", not "-0".
            rounded.set_sign_positive(true);
        }
        rounded.rescale(self.decimal_places);
        rounded
    }
}

impl Default for DecimalFormatter {
    /// Whole-number truncation, the wire default for dimension fields.
    fn default() -> Self {
        Self {
            decimal_places: 0,
            mode: RoundingMode::Truncate,
        }
    }
}

/// Substitutes the locale's decimal separator into rendered numeric text.
pub(crate) fn localize(text: String, locale: &Locale) -> String {
    if locale.decimal_separator() == '.' {
        text
    } else {
        text.replace('.', locale.decimal_separator().encode_utf8(&mut [0u8; 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fmt(places: u32, mode: RoundingMode, value: &str) -> String {
        DecimalFormatter::new(places, mode)
            .unwrap()
            .format(dec(value), &Locale::INVARIANT)
    }

    #[test]
    fn test_truncate_each_precision() {
        assert_eq!(fmt(0, RoundingMode::Truncate, "33.9334"), "33");
        assert_eq!(fmt(1, RoundingMode::Truncate, "33.9334"), "33.9");
        assert_eq!(fmt(2, RoundingMode::Truncate, "33.9334"), "33.93");
        assert_eq!(fmt(3, RoundingMode::Truncate, "33.9334"), "33.933");
    }

    #[test]
    fn test_round_up_each_precision() {
        assert_eq!(fmt(0, RoundingMode::RoundUp, "33.9334"), "34");
        assert_eq!(fmt(1, RoundingMode::RoundUp, "33.9334"), "34.0");
        assert_eq!(fmt(2, RoundingMode::RoundUp, "33.9334"), "33.94");
        assert_eq!(fmt(3, RoundingMode::RoundUp, "33.9334"), "33.934");
    }

    #[test]
    fn test_round_down_each_precision() {
        assert_eq!(fmt(0, RoundingMode::RoundDown, "33.9334"), "33");
        assert_eq!(fmt(1, RoundingMode::RoundDown, "33.9334"), "33.9");
        assert_eq!(fmt(2, RoundingMode::RoundDown, "33.9334"), "33.93");
        assert_eq!(fmt(3, RoundingMode::RoundDown, "33.9334"), "33.933");
    }

    #[test]
    fn test_round_up_and_down_at_zero_places() {
        assert_eq!(fmt(0, RoundingMode::RoundUp, "33.933"), "34");
        assert_eq!(fmt(0, RoundingMode::RoundDown, "33.933"), "33");
    }

    #[test]
    fn test_truncate_keeps_magnitude_below_input() {
        assert_eq!(fmt(0, RoundingMode::Truncate, "33.999"), "33");
        assert_eq!(fmt(2, RoundingMode::Truncate, "33.999"), "33.99");
    }

    #[test]
    fn test_negative_near_zero() {
        assert_eq!(fmt(0, RoundingMode::Truncate, "-0.3"), "0");
        assert_eq!(fmt(0, RoundingMode::RoundUp, "-0.3"), "0");
        assert_eq!(fmt(0, RoundingMode::RoundDown, "-0.3"), "-1");
    }

    #[test]
    fn test_negative_truncate() {
        assert_eq!(fmt(0, RoundingMode::Truncate, "-33.938"), "-33");
        assert_eq!(fmt(1, RoundingMode::Truncate, "-33.938"), "-33.9");
        assert_eq!(fmt(2, RoundingMode::Truncate, "-33.938"), "-33.93");
    }

    #[test]
    fn test_negative_round_up_moves_toward_zero() {
        assert_eq!(fmt(0, RoundingMode::RoundUp, "-33.938"), "-33");
        assert_eq!(fmt(1, RoundingMode::RoundUp, "-33.938"), "-33.9");
        assert_eq!(fmt(2, RoundingMode::RoundUp, "-33.938"), "-33.93");
    }

    #[test]
    fn test_negative_round_down_moves_away_from_zero() {
        assert_eq!(fmt(0, RoundingMode::RoundDown, "-33.938"), "-34");
        assert_eq!(fmt(1, RoundingMode::RoundDown, "-33.938"), "-34.0");
        assert_eq!(fmt(2, RoundingMode::RoundDown, "-33.938"), "-33.94");
    }

    #[test]
    fn test_zero_pads_to_precision() {
        assert_eq!(fmt(0, RoundingMode::Truncate, "0"), "0");
        assert_eq!(fmt(1, RoundingMode::Truncate, "0"), "0.0");
        assert_eq!(fmt(2, RoundingMode::Truncate, "0"), "0.00");
        assert_eq!(fmt(3, RoundingMode::Truncate, "0"), "0.000");
    }

    #[test]
    fn test_invalid_decimal_places_rejected() {
        assert!(matches!(
            DecimalFormatter::new(4, RoundingMode::Truncate),
            Err(FormatError::InvalidDecimalPlaces { places: 4 })
        ));
    }

    #[test]
    fn test_german_locale_separator() {
        let formatter = DecimalFormatter::new(2, RoundingMode::Truncate).unwrap();
        assert_eq!(formatter.format(dec("123.45"), &Locale::GERMAN), "123,45");
    }

    #[test]
    fn test_extremes_pass_through_unscaled() {
        let formatter = DecimalFormatter::new(0, RoundingMode::Truncate).unwrap();
        assert_eq!(
            formatter.format(Decimal::MAX, &Locale::INVARIANT),
            Decimal::MAX.to_string()
        );
        assert_eq!(
            formatter.format(Decimal::MIN, &Locale::INVARIANT),
            Decimal::MIN.to_string()
        );
    }

    #[test]
    fn test_accessors() {
        let formatter = DecimalFormatter::new(2, RoundingMode::Truncate).unwrap();
        assert_eq!(formatter.decimal_places(), 2);
        assert_eq!(formatter.mode(), RoundingMode::Truncate);
    }
}
