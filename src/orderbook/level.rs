//! Aggregated price levels and their text rendering.

use super::price::FixedPrice;
use crate::utils::column;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total live size resting at one price on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// The price of this level.
    pub price: FixedPrice,
    /// Sum of the sizes of every live order at this price.
    pub size: Decimal,
    /// Number of live orders at this price.
    pub order_count: usize,
}

impl PriceLevel {
    /// Creates a level holding a single order.
    #[must_use]
    pub const fn new(price: FixedPrice, size: Decimal) -> Self {
        Self {
            price,
            size,
            order_count: 1,
        }
    }

    /// Adds another order's size to this level.
    pub fn add(&mut self, size: Decimal) {
        self.size += size;
        self.order_count += 1;
    }

    /// Returns the price as a decimal.
    #[must_use]
    pub fn decimal_price(&self) -> Decimal {
        self.price.to_decimal()
    }

    /// Returns the notional value (price * size) at this level.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.decimal_price() * self.size
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.price, self.size)
    }
}

const PRICE_WIDTH: usize = 16;
const SIZE_WIDTH: usize = 12;

/// Renders levels one per line in the order given, as `price  size`.
///
/// Pass levels straight from a query to get them best-to-worst.
#[must_use]
pub fn render_levels(levels: &[PriceLevel]) -> String {
    levels
        .iter()
        .map(|level| {
            format!(
                "{}{}\n",
                column(level.price, PRICE_WIDTH),
                column(level.size, SIZE_WIDTH)
            )
        })
        .collect()
}
