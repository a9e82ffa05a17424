//! Error types for the depth-by-order book.
//!
//! All fallible operations in this crate return [`Result<T>`], an alias over
//! the crate-wide [`Error`] enum.

use crate::orderbook::Side;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced by the depth-by-order book.
#[derive(Debug, Error)]
pub enum Error {
    /// An update tried to bring a deleted order back to life.
    ///
    /// This is a protocol-integrity fault: the record is left untouched and
    /// the caller decides whether to abort, skip the record or alert.
    #[error("deleted order resurrected: {id} on {side} side")]
    DeletedOrderResurrected {
        /// Side of the book the order lives on.
        side: Side,
        /// Identifier of the order.
        id: String,
    },

    /// A decimal price does not fit the fixed-point representation.
    #[error("price out of fixed-point range: {price}")]
    PriceOutOfRange {
        /// The rejected price.
        price: Decimal,
    },

    /// A configuration or snapshot document could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a [`Error::DeletedOrderResurrected`] error.
    #[must_use]
    pub fn deleted_order_resurrected(side: Side, id: impl Into<String>) -> Self {
        Self::DeletedOrderResurrected {
            side,
            id: id.into(),
        }
    }

    /// Creates a [`Error::PriceOutOfRange`] error.
    #[must_use]
    pub const fn price_out_of_range(price: Decimal) -> Self {
        Self::PriceOutOfRange { price }
    }

    /// Returns true if this error signals an inconsistent update stream.
    #[must_use]
    pub const fn is_consistency_fault(&self) -> bool {
        matches!(self, Self::DeletedOrderResurrected { .. })
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
