//! Depth-by-order book module.
//!
//! ## Hierarchy
//!
//! ```text
//! DepthBook (one instrument)
//!   ├── SideStore (ask)
//!   │     └── OrderRecord (one per order id, never removed)
//!   └── SideStore (bid)
//!         └── OrderRecord
//! ```
//!
//! ## Components
//!
//! - [`DepthBook`]: Entry point; converts decimal prices and routes by side
//! - [`SideStore`]: Identity and ordered views over one side's records
//! - [`OrderRecord`]: Current known state of one order
//! - [`OrderUpdate`]: An incoming update, minus its price
//! - [`PriceLevel`]: Aggregated size at one price
//! - [`FixedPrice`]: Price scaled by `10^12`
//!
//! ## Example
//!
//! ```rust
//! use dbo_orderbook::orderbook::{DepthBook, OrderUpdate, Side};
//! use rust_decimal_macros::dec;
//!
//! let mut book = DepthBook::new("ESZ5");
//! book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("1FF3", dec!(77)))?;
//! book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("1FF3", dec!(77)).deleted())?;
//!
//! // A late image for the same order cannot bring it back.
//! book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("1FF3", dec!(77)).image())?;
//! assert!(book.top_price_levels(Side::Ask, 10).is_empty());
//! # Ok::<(), dbo_orderbook::Error>(())
//! ```

mod book;
mod level;
mod price;
mod record;
mod side;
mod store;

// Re-export all public types
pub use book::{BookSnapshot, BookStats, DepthBook};
pub use level::{PriceLevel, render_levels};
pub use price::{FixedPrice, PRICE_DECIMALS};
pub use record::{OrderRecord, OrderTimestamp, OrderUpdate, UpdateKind};
pub use side::{PriceDirection, Side};
pub use store::{SideStats, SideStore, UpsertOutcome};
