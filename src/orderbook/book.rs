//! Depth-by-order book module.
//!
//! This module provides the [`DepthBook`], the public entry point that routes
//! per-order updates to the ask or bid [`SideStore`].

use super::level::{PriceLevel, render_levels};
use super::price::FixedPrice;
use super::record::{OrderRecord, OrderUpdate};
use super::side::Side;
use super::store::{SideStats, SideStore, UpsertOutcome};
use crate::config::BookConfig;
use crate::error::Result;
use crate::utils::column;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Depth-by-order book for a single instrument.
///
/// ## Architecture
///
/// ```text
/// DepthBook (per instrument)
///   ├── SideStore (ask, ascending price)
///   └── SideStore (bid, descending price)
/// ```
///
/// Prices enter as [`Decimal`] and are stored as [`FixedPrice`].
#[derive(Debug, Clone)]
pub struct DepthBook {
    /// Book configuration.
    config: BookConfig,
    /// Sell side.
    asks: SideStore,
    /// Buy side.
    bids: SideStore,
}

impl Default for DepthBook {
    fn default() -> Self {
        Self::with_config(BookConfig::default())
    }
}

impl DepthBook {
    /// Creates an empty book for the given symbol with default settings.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::with_config(BookConfig::new(symbol))
    }

    /// Creates an empty book from a configuration.
    #[must_use]
    pub fn with_config(config: BookConfig) -> Self {
        debug!(
            symbol = %config.symbol,
            expected_orders = config.expected_orders,
            "depth book created"
        );
        Self {
            asks: SideStore::with_capacity(Side::Ask, config.expected_orders),
            bids: SideStore::with_capacity(Side::Bid, config.expected_orders),
            config,
        }
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Returns the store for a side.
    #[must_use]
    pub const fn side(&self, side: Side) -> &SideStore {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideStore {
        match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        }
    }

    /// Returns the ask store.
    #[must_use]
    pub const fn asks(&self) -> &SideStore {
        &self.asks
    }

    /// Returns the bid store.
    #[must_use]
    pub const fn bids(&self) -> &SideStore {
        &self.bids
    }

    /// Applies an update for one order on one side.
    ///
    /// # Arguments
    ///
    /// * `side` - The side the order rests on
    /// * `price` - The order price; digits past the twelfth decimal are truncated
    /// * `update` - Id, size, timestamp, priority, freshness and kind
    ///
    /// # Errors
    ///
    /// Returns `Error::PriceOutOfRange` if the price cannot be stored in fixed
    /// point, or `Error::DeletedOrderResurrected` if the update tries to
    /// revive a deleted order. The book is unchanged in both cases.
    pub fn add_or_update(
        &mut self,
        side: Side,
        price: Decimal,
        update: OrderUpdate,
    ) -> Result<UpsertOutcome> {
        let price = FixedPrice::from_decimal(price)?;
        self.side_mut(side).upsert(price, update)
    }

    /// Returns up to `limit` aggregated price levels for a side, best first.
    #[must_use]
    pub fn top_price_levels(&self, side: Side, limit: usize) -> Vec<PriceLevel> {
        self.side(side).top_price_levels(limit)
    }

    /// Returns up to `limit` records for a side in ordered-view order.
    pub fn enumerate(&self, side: Side, limit: usize) -> impl Iterator<Item = &OrderRecord> + '_ {
        self.side(side).enumerate(limit)
    }

    /// Returns the best bid level.
    #[must_use]
    pub fn best_bid(&self) -> Option<PriceLevel> {
        self.bids.best_level()
    }

    /// Returns the best ask level.
    #[must_use]
    pub fn best_ask(&self) -> Option<PriceLevel> {
        self.asks.best_level()
    }

    /// Returns best ask minus best bid, if both sides have live orders.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        let bid = self.best_bid()?;
        let ask = self.best_ask()?;
        Some(ask.decimal_price() - bid.decimal_price())
    }

    /// Returns the top `depth` levels of both sides.
    #[must_use]
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            symbol: self.config.symbol.clone(),
            bids: self.bids.top_price_levels(depth),
            asks: self.asks.top_price_levels(depth),
        }
    }

    /// Returns a snapshot using the configured default depth.
    #[must_use]
    pub fn snapshot_default(&self) -> BookSnapshot {
        self.snapshot(self.config.default_depth)
    }

    /// Renders the top levels of a side best-to-worst, one per line.
    #[must_use]
    pub fn render_top_levels(&self, side: Side, limit: usize) -> String {
        render_levels(&self.top_price_levels(side, limit))
    }

    /// Renders up to `limit` orders of a side tagged `NC` or `D`.
    #[must_use]
    pub fn render_orders(&self, side: Side, limit: usize) -> String {
        self.enumerate(side, limit)
            .map(|record| {
                format!(
                    "{:<3}{}{}{}\n",
                    record.kind().tag(),
                    column(record.price(), 16),
                    column(record.size(), 12),
                    column(record.id(), 10)
                )
            })
            .collect()
    }

    /// Renders a price ladder: asks above bids, both highest price first.
    #[must_use]
    pub fn render_ladder(&self, depth: usize) -> String {
        let mut asks = self.asks.top_price_levels(depth);
        asks.reverse();
        let mut out = render_levels(&asks);
        out.push_str(&"-".repeat(28));
        out.push('\n');
        out.push_str(&render_levels(&self.bids.top_price_levels(depth)));
        out
    }

    /// Returns statistics about this book.
    #[must_use]
    pub fn stats(&self) -> BookStats {
        BookStats {
            symbol: self.config.symbol.clone(),
            asks: self.asks.stats(),
            bids: self.bids.stats(),
        }
    }
}

/// Aggregated view of both sides of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Instrument symbol.
    pub symbol: String,
    /// Bid levels, highest price first.
    pub bids: Vec<PriceLevel>,
    /// Ask levels, lowest price first.
    pub asks: Vec<PriceLevel>,
}

impl BookSnapshot {
    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Statistics about a depth book.
#[derive(Debug, Clone)]
pub struct BookStats {
    /// Instrument symbol.
    pub symbol: String,
    /// Ask side statistics.
    pub asks: SideStats,
    /// Bid side statistics.
    pub bids: SideStats,
}

impl fmt::Display for BookStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}; {}]", self.symbol, self.asks, self.bids)
    }
}
