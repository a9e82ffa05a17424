//! Fixed-point price representation.
//!
//! Prices cross the public API as [`Decimal`] and are stored internally as a
//! signed integer scaled by `10^12`. Integer keys give the ordered view exact,
//! drift-free comparisons.

use crate::error::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional decimal digits kept by [`FixedPrice`].
pub const PRICE_DECIMALS: u32 = 12;

/// Largest raw magnitude a [`FixedPrice`] may hold (`2^96 - 1`, the widest
/// mantissa a [`Decimal`] can carry).
const MAX_RAW: u128 = (1u128 << 96) - 1;

/// A price scaled by `10^12` and stored as an integer.
///
/// Every value fits a [`Decimal`] mantissa, so converting back is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct FixedPrice(i128);

impl FixedPrice {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Converts a decimal price into fixed point.
    ///
    /// Digits beyond the twelfth fractional place are truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::PriceOutOfRange` if the scaled value does not fit.
    pub fn from_decimal(price: Decimal) -> Result<Self> {
        let truncated = price.round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::ToZero);
        let factor = 10i128.pow(PRICE_DECIMALS - truncated.scale());
        let raw = truncated
            .mantissa()
            .checked_mul(factor)
            .filter(|raw| raw.unsigned_abs() <= MAX_RAW)
            .ok_or_else(|| Error::price_out_of_range(price))?;
        Ok(Self(raw))
    }

    /// Builds a fixed-point price from raw scaled units.
    ///
    /// Any `i64` is within range, so this cannot fail.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw as i128)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Converts back into a decimal price, normalized.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        // Within MAX_RAW by construction.
        Decimal::from_i128_with_scale(self.0, PRICE_DECIMALS).normalize()
    }
}

impl TryFrom<Decimal> for FixedPrice {
    type Error = Error;

    fn try_from(price: Decimal) -> Result<Self> {
        Self::from_decimal(price)
    }
}

impl From<FixedPrice> for Decimal {
    fn from(price: FixedPrice) -> Self {
        price.to_decimal()
    }
}

impl fmt::Display for FixedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_decimal(), f)
    }
}
