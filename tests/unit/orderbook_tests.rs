//! Integration tests for the orderbook module.

use dbo_orderbook::orderbook::{
    DepthBook, OrderRecord, OrderTimestamp, OrderUpdate, Side, SideStore, UpdateKind,
    UpsertOutcome,
};
use dbo_orderbook::{BookConfig, Error};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{HashMap, HashSet};

/// Small deterministic generator so the mixed-stream tests are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// Feeds a pseudo-random mix of fresh/image and live/delete updates.
fn random_book(seed: u64, updates: usize) -> (DepthBook, HashSet<(Side, String)>) {
    let mut rng = Lcg(seed);
    let mut book = DepthBook::with_config(BookConfig::new("MIX").with_expected_orders(64));
    let mut seen = HashSet::new();

    for _ in 0..updates {
        let side = if rng.next(2) == 0 { Side::Ask } else { Side::Bid };
        let id = format!("o{}", rng.next(40));
        let price = Decimal::new(10_000 + rng.next(12) as i64 * 25, 2);
        let size = Decimal::from(1 + rng.next(9));
        let mut update = OrderUpdate::new(id.clone(), size).with_fresh(rng.next(3) != 0);
        if rng.next(4) == 0 {
            update = update.deleted();
        }

        match book.add_or_update(side, price, update) {
            Ok(_) => {}
            Err(Error::DeletedOrderResurrected { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
        seen.insert((side, id));
    }
    (book, seen)
}

#[test]
fn test_one_record_per_distinct_id() {
    let (book, seen) = random_book(7, 2_000);
    let asks = seen.iter().filter(|(side, _)| *side == Side::Ask).count();
    let bids = seen.len() - asks;

    assert_eq!(book.asks().len(), asks);
    assert_eq!(book.bids().len(), bids);

    let enumerated: HashSet<&str> = book
        .enumerate(Side::Ask, usize::MAX)
        .map(OrderRecord::id)
        .collect();
    assert_eq!(enumerated.len(), asks);
}

#[test]
fn test_live_records_precede_deleted_records() {
    for seed in 1..20 {
        let (book, _) = random_book(seed, 500);
        for side in [Side::Ask, Side::Bid] {
            let kinds: Vec<UpdateKind> = book
                .enumerate(side, usize::MAX)
                .map(OrderRecord::kind)
                .collect();
            let first_deleted = kinds
                .iter()
                .position(|kind| *kind == UpdateKind::Deleted)
                .unwrap_or(kinds.len());
            assert!(kinds[first_deleted..].iter().all(|kind| *kind == UpdateKind::Deleted));
        }
    }
}

#[test]
fn test_levels_match_live_records() {
    for seed in 1..20 {
        let (book, _) = random_book(seed, 500);
        for side in [Side::Ask, Side::Bid] {
            let mut expected: HashMap<Decimal, Decimal> = HashMap::new();
            for record in book.enumerate(side, usize::MAX).filter(|r| !r.is_deleted()) {
                *expected.entry(record.price().to_decimal()).or_default() += record.size();
            }

            let levels = book.top_price_levels(side, usize::MAX);
            assert_eq!(levels.len(), expected.len());
            for level in &levels {
                assert_eq!(expected.get(&level.decimal_price()), Some(&level.size));
            }
            let prices: Vec<Decimal> = levels.iter().map(|l| l.decimal_price()).collect();
            let mut sorted = prices.clone();
            sorted.sort();
            if side == Side::Bid {
                sorted.reverse();
            }
            assert_eq!(prices, sorted);
        }
    }
}

#[test]
fn test_top_n_is_bounded_prefix() {
    let (book, _) = random_book(42, 1_000);
    let full = book.top_price_levels(Side::Ask, usize::MAX);
    for limit in 0..=full.len() + 2 {
        let top = book.top_price_levels(Side::Ask, limit);
        assert!(top.len() <= limit);
        assert_eq!(top.as_slice(), &full[..top.len()]);
    }
}

#[test]
fn test_fresh_record_ignores_every_later_image() {
    let mut store = SideStore::new(Side::Ask);
    let price = dbo_orderbook::orderbook::FixedPrice::from_decimal(dec!(50.5)).unwrap();
    store.upsert(price, OrderUpdate::new("F1", dec!(3))).unwrap();

    let kinds = [UpdateKind::NewOrChanged, UpdateKind::Deleted];
    for (i, kind) in kinds.into_iter().cycle().take(6).enumerate() {
        let image = OrderUpdate::new("F1", Decimal::from(i + 10))
            .image()
            .with_kind(kind);
        assert_eq!(store.upsert(price, image).unwrap(), UpsertOutcome::Discarded);
    }

    let record = store.get("F1").unwrap();
    assert_eq!(record.size(), dec!(3));
    assert_eq!(record.kind(), UpdateKind::NewOrChanged);
    assert!(record.is_fresh());
}

#[test]
fn test_realtime_delete_beats_late_image() {
    let mut book = DepthBook::new("ESZ5");
    book.add_or_update(Side::Bid, dec!(100), OrderUpdate::new("R1", dec!(4)).image())
        .unwrap();
    book.add_or_update(Side::Bid, dec!(100), OrderUpdate::new("R1", dec!(4)).deleted())
        .unwrap();

    let late = book
        .add_or_update(Side::Bid, dec!(100), OrderUpdate::new("R1", dec!(4)).image())
        .unwrap();
    assert_eq!(late, UpsertOutcome::Discarded);
    assert!(book.top_price_levels(Side::Bid, 10).is_empty());
    assert_eq!(book.stats().bids.discarded_updates, 1);
}

#[test]
fn test_deleted_record_unchanged_after_fault() {
    let mut book = DepthBook::new("ESZ5");
    let ts = OrderTimestamp::new(1_700_000_000, 3, 500);
    book.add_or_update(
        Side::Ask,
        dec!(101),
        OrderUpdate::new("D1", dec!(2)).deleted().with_timestamp(ts).with_priority(9),
    )
    .unwrap();

    let err = book
        .add_or_update(Side::Ask, dec!(105), OrderUpdate::new("D1", dec!(8)))
        .unwrap_err();
    assert!(err.is_consistency_fault());
    assert_eq!(err.to_string(), "deleted order resurrected: D1 on ask side");

    let record = book.asks().get("D1").unwrap();
    assert_eq!(record.price().to_decimal(), dec!(101));
    assert_eq!(record.size(), dec!(2));
    assert_eq!(record.priority(), 9);
    assert_eq!(*record.timestamp(), ts);
}

#[test]
fn test_priority_and_timestamp_do_not_affect_ordering() {
    let mut book = DepthBook::new("ESZ5");
    book.add_or_update(Side::Ask, dec!(10), OrderUpdate::new("late", dec!(1)).with_priority(1))
        .unwrap();
    book.add_or_update(
        Side::Ask,
        dec!(10),
        OrderUpdate::new("early", dec!(1))
            .with_priority(0)
            .with_timestamp(OrderTimestamp::new(1, 0, 0)),
    )
    .unwrap();

    let levels = book.top_price_levels(Side::Ask, 10);
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].size, dec!(2));
    assert_eq!(levels[0].order_count, 2);
}

#[test]
fn test_config_driven_book() {
    let config = BookConfig::from_json(r#"{"symbol":"CLZ5","default_depth":2}"#).unwrap();
    let mut book = DepthBook::with_config(config);
    for (i, price) in [dec!(70.01), dec!(70.02), dec!(70.03)].into_iter().enumerate() {
        book.add_or_update(Side::Ask, price, OrderUpdate::new(format!("a{i}"), dec!(1)))
            .unwrap();
    }

    let snapshot = book.snapshot_default();
    assert_eq!(snapshot.symbol, "CLZ5");
    assert_eq!(snapshot.asks.len(), 2);
    assert_eq!(snapshot.asks[0].decimal_price(), dec!(70.01));
}
