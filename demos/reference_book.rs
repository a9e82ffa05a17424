//! Reference Book Example
//!
//! This example feeds a small futures book and shows the queries a consumer
//! would run against it:
//! - Applying real-time and image updates
//! - A late image losing against a real-time delete
//! - Aggregated top levels, the per-order view and a price ladder
//! - A JSON snapshot for visualization
//!
//! Run with: `cargo run --example reference_book`

use dbo_orderbook::orderbook::{DepthBook, OrderUpdate, Side};
use dbo_orderbook::{BookConfig, Result};
use rust_decimal_macros::dec;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("=== Depth-by-Order Book ===");
    let mut book = DepthBook::with_config(BookConfig::new("ESZ5").with_default_depth(10));

    info!("--- Asks ---");
    book.add_or_update(Side::Ask, dec!(12000.00), OrderUpdate::new("A2B2", dec!(10.0)))?;
    book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("1FF3", dec!(77.0)))?;
    book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("1FF3", dec!(77.0)).deleted())?;
    book.add_or_update(Side::Ask, dec!(12001.00), OrderUpdate::new("1XFY", dec!(11.0)))?;
    book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("X5FY", dec!(22.0)))?;
    book.add_or_update(Side::Ask, dec!(12000.25), OrderUpdate::new("X5FY", dec!(52.0)))?;

    info!("--- Bids ---");
    book.add_or_update(Side::Bid, dec!(11999.75), OrderUpdate::new("2XGZ", dec!(10.0)))?;
    book.add_or_update(Side::Bid, dec!(11999.50), OrderUpdate::new("23GH", dec!(50.0)))?;
    book.add_or_update(Side::Bid, dec!(11998.00), OrderUpdate::new("AC12", dec!(20.0)))?;

    info!("--- Late image for a deleted order ---");
    let outcome = book.add_or_update(
        Side::Ask,
        dec!(12000.25),
        OrderUpdate::new("1FF3", dec!(77.0)).image(),
    )?;
    info!("Outcome: {:?}", outcome);

    info!("--- Real-time resurrection attempt ---");
    let revive = OrderUpdate::new("1FF3", dec!(5));
    if let Err(err) = book.add_or_update(Side::Ask, dec!(12000.25), revive) {
        warn!("Rejected: {}", err);
    }

    info!("--- Top ask levels ---\n{}", book.render_top_levels(Side::Ask, 10));
    info!("--- Top bid levels ---\n{}", book.render_top_levels(Side::Bid, 10));
    info!("--- Ask orders ---\n{}", book.render_orders(Side::Ask, 100));
    info!("--- Bid orders ---\n{}", book.render_orders(Side::Bid, 100));
    info!("--- Ladder (2 levels) ---\n{}", book.render_ladder(2));

    info!("Spread: {:?}", book.spread());
    info!("Snapshot: {}", book.snapshot_default().to_json()?);
    info!("Stats: {}", book.stats());

    Ok(())
}
