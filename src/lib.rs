//! # DBO OrderBook - Depth-by-Order Limit Order Book
//!
//! A Rust library that maintains a live depth-by-order view of one
//! instrument's limit order book from per-order update events, and serves
//! aggregated top-N price levels on demand.
//!
//! ## Key Features
//!
//! - **Real-Time Precedence**: Once a real-time (fresh) update has been
//!   applied to an order, a late image update for the same id is dropped.
//!
//! - **Delete Tombstones**: Deleted orders are kept, so an out-of-order image
//!   cannot resurrect them. A non-delete update for a deleted order is
//!   reported as [`Error::DeletedOrderResurrected`].
//!
//! - **Dual Index per Side**: A hash index by order id for dispatch and an
//!   ordered index by `(kind, price)` for queries, kept in lock-step.
//!
//! - **Exact Prices**: Prices are [`rust_decimal::Decimal`] at the API and a
//!   fixed-point integer scaled by `10^12` inside.
//!
//! - **Result-Based Error Handling**: All fallible operations return
//!   `Result<T, Error>`.
//!
//! ## Architecture
//!
//! ```text
//! DepthBook (per instrument)
//!   ├── SideStore (ask: live first, price ascending, then tombstones)
//!   └── SideStore (bid: live first, price descending, then tombstones)
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`orderbook`] | Book, side stores, records, price levels |
//! | [`config`] | Book configuration |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Utility functions (timestamp conversion) |
//!
//! ## Example Usage
//!
//! ```rust
//! use dbo_orderbook::orderbook::{DepthBook, OrderUpdate, Side};
//! use rust_decimal_macros::dec;
//!
//! let mut book = DepthBook::new("ESZ5");
//!
//! book.add_or_update(Side::Ask, dec!(12000.00), OrderUpdate::new("A2B2", dec!(10)))?;
//! book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("X5FY", dec!(22)))?;
//! book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("X5FY", dec!(52)))?;
//! book.add_or_update(Side::Bid, dec!(11999.75), OrderUpdate::new("2XGZ", dec!(10)))?;
//!
//! let asks = book.top_price_levels(Side::Ask, 10);
//! assert_eq!(asks.len(), 2);
//! assert_eq!(asks[1].size, dec!(52));
//! assert_eq!(book.spread(), Some(dec!(0.25)));
//! # Ok::<(), dbo_orderbook::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! A book is single-writer: mutation takes `&mut self` and nothing inside
//! locks or spawns. Callers with several producers serialize writes or keep
//! one book per producer.
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber to see them.
//! Stale discards log at `debug`, rejected resurrections at `warn`.

pub mod config;
pub mod error;
pub mod orderbook;
pub mod utils;

pub use config::BookConfig;
pub use error::{Error, Result};
