//! Book sides and the price ordering policy attached to each side.

use super::price::FixedPrice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Sell orders, best price is the lowest.
    Ask,
    /// Buy orders, best price is the highest.
    Bid,
}

impl Side {
    /// Returns the ordering policy the side's store is built with.
    #[must_use]
    pub const fn direction(self) -> PriceDirection {
        match self {
            Self::Ask => PriceDirection::Ascending,
            Self::Bid => PriceDirection::Descending,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ask => f.write_str("ask"),
            Self::Bid => f.write_str("bid"),
        }
    }
}

/// Direction in which a side store orders live prices.
///
/// This is the only behavioral difference between the two sides of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceDirection {
    /// Lowest price first.
    Ascending,
    /// Highest price first.
    Descending,
}

impl PriceDirection {
    /// Maps a price to its sort rank: ascending rank order is best-first.
    #[must_use]
    pub const fn rank(self, price: FixedPrice) -> i128 {
        match self {
            Self::Ascending => price.raw(),
            // Raw prices are bounded well inside i128, so negation is exact.
            Self::Descending => -price.raw(),
        }
    }

    /// Returns true if `a` is a better price than `b` under this direction.
    #[must_use]
    pub const fn is_better(self, a: FixedPrice, b: FixedPrice) -> bool {
        self.rank(a) < self.rank(b)
    }
}
