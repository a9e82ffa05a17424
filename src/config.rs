//! Book configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default number of price levels returned by depth queries.
pub const DEFAULT_DEPTH: usize = 10;

/// Configuration for a [`DepthBook`](crate::orderbook::DepthBook).
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Instrument symbol, used for log context and snapshots.
    pub symbol: String,
    /// Number of price levels returned by default depth queries.
    pub default_depth: usize,
    /// Expected distinct orders per side, used to pre-size the indexes.
    pub expected_orders: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            default_depth: DEFAULT_DEPTH,
            expected_orders: 0,
        }
    }
}

impl BookConfig {
    /// Creates a configuration for the given symbol with default settings.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Sets the default query depth.
    #[must_use]
    pub fn with_default_depth(mut self, depth: usize) -> Self {
        self.default_depth = depth;
        self
    }

    /// Sets the expected number of distinct orders per side.
    #[must_use]
    pub fn with_expected_orders(mut self, orders: usize) -> Self {
        self.expected_orders = orders;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the document is not valid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
