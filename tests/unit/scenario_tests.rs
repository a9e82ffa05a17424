//! Reference dataset: a small futures book with one deleted ask and one
//! modified ask.

use dbo_orderbook::orderbook::{DepthBook, FixedPrice, OrderUpdate, Side, UpdateKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference_book() -> DepthBook {
    let mut book = DepthBook::new("REF");
    let asks = [
        (dec!(12000.00), dec!(10.0), "A2B2", UpdateKind::NewOrChanged),
        (dec!(12000.25), dec!(77.0), "1FF3", UpdateKind::NewOrChanged),
        (dec!(12000.25), dec!(77.0), "1FF3", UpdateKind::Deleted),
        (dec!(12001.00), dec!(11.0), "1XFY", UpdateKind::NewOrChanged),
        (dec!(12000.25), dec!(22.0), "X5FY", UpdateKind::NewOrChanged),
        (dec!(12000.25), dec!(52.0), "X5FY", UpdateKind::NewOrChanged),
    ];
    for (price, size, id, kind) in asks {
        book.add_or_update(Side::Ask, price, OrderUpdate::new(id, size).with_kind(kind))
            .unwrap();
    }

    let bids = [
        (dec!(11999.75), dec!(10.0), "2XGZ"),
        (dec!(11999.50), dec!(50.0), "23GH"),
        (dec!(11998.00), dec!(20.0), "AC12"),
    ];
    for (price, size, id) in bids {
        book.add_or_update(Side::Bid, price, OrderUpdate::new(id, size))
            .unwrap();
    }
    book
}

fn levels(book: &DepthBook, side: Side) -> Vec<(Decimal, Decimal)> {
    book.top_price_levels(side, 10)
        .into_iter()
        .map(|level| (level.decimal_price(), level.size))
        .collect()
}

#[test]
fn test_reference_asks() {
    let book = reference_book();
    assert_eq!(
        levels(&book, Side::Ask),
        vec![
            (dec!(12000.00), dec!(10.0)),
            (dec!(12000.25), dec!(52.0)),
            (dec!(12001.00), dec!(11.0)),
        ]
    );
}

#[test]
fn test_reference_bids_best_first() {
    let book = reference_book();
    assert_eq!(
        levels(&book, Side::Bid),
        vec![
            (dec!(11999.75), dec!(10.0)),
            (dec!(11999.50), dec!(50.0)),
            (dec!(11998.00), dec!(20.0)),
        ]
    );
    let rendered = book.render_top_levels(Side::Bid, 10);
    let first = rendered.lines().next().unwrap();
    assert_eq!(first.split_whitespace().next(), Some("11999.75"));
}

#[test]
fn test_reference_enumeration() {
    let book = reference_book();
    let asks: Vec<(&str, UpdateKind)> = book
        .enumerate(Side::Ask, 100)
        .map(|record| (record.id(), record.kind()))
        .collect();

    assert_eq!(
        asks,
        vec![
            ("A2B2", UpdateKind::NewOrChanged),
            ("X5FY", UpdateKind::NewOrChanged),
            ("1XFY", UpdateKind::NewOrChanged),
            ("1FF3", UpdateKind::Deleted),
        ]
    );
    assert_eq!(book.asks().len(), 4);
    assert_eq!(book.bids().len(), 3);
}

#[test]
fn test_reference_top_two() {
    let book = reference_book();
    let asks = book.top_price_levels(Side::Ask, 2);
    assert_eq!(asks.len(), 2);
    assert_eq!(asks[1].price, FixedPrice::from_decimal(dec!(12000.25)).unwrap());

    let bids = book.top_price_levels(Side::Bid, 2);
    assert_eq!(bids.len(), 2);
    assert_eq!(bids[1].decimal_price(), dec!(11999.50));
}

#[test]
fn test_reference_snapshot_json() {
    let book = reference_book();
    let json = book.snapshot(1).to_json().unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"symbol":"REF","#,
            r#""bids":[{"price":"11999.75","size":"10.0","order_count":1}],"#,
            r#""asks":[{"price":"12000","size":"10.0","order_count":1}]}"#,
        )
    );
}
