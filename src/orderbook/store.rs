//! Side store module.
//!
//! This module provides the [`SideStore`], which holds every order ever seen
//! on one side of one instrument's book.
//!
//! ## Layout
//!
//! ```text
//! SideStore (one side: ask or bid)
//!   ├── records:  Vec<OrderRecord>               (arena, slot = stable handle)
//!   ├── by_id:    HashMap<String, slot>          (identity view)
//!   └── ordered:  BTreeSet<(kind, rank, slot)>   (ordered view)
//! ```
//!
//! Records are never removed. Deletes leave a tombstone so an image update
//! arriving after a real-time delete cannot bring the order back, and the
//! ordered view keeps every live order ahead of every tombstone.

use super::level::PriceLevel;
use super::price::FixedPrice;
use super::record::{OrderRecord, OrderUpdate, UpdateKind};
use super::side::{PriceDirection, Side};
use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, trace, warn};

/// Result of applying an update to a [`SideStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpsertOutcome {
    /// The id was new and a record was created.
    Inserted,
    /// An existing record was overwritten.
    Updated,
    /// A stale image update lost against a fresh record and was dropped.
    Discarded,
}

/// Position of a record in the ordered view.
///
/// Field order defines the sort: kind first, then the direction-adjusted
/// price, then the slot so equal prices keep first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct OrderKey {
    kind: UpdateKind,
    rank: i128,
    slot: usize,
}

impl OrderKey {
    const fn new(
        direction: PriceDirection,
        kind: UpdateKind,
        price: FixedPrice,
        slot: usize,
    ) -> Self {
        Self {
            kind,
            rank: direction.rank(price),
            slot,
        }
    }
}

/// All orders for one side of one instrument.
///
/// Keeps an identity view for dispatching updates and an ordered view for
/// queries, mutated in lock-step by [`SideStore::upsert`].
#[derive(Debug, Clone)]
pub struct SideStore {
    /// The side this store holds.
    side: Side,
    /// Price ordering policy.
    direction: PriceDirection,
    /// Every record ever seen, addressed by slot.
    records: Vec<OrderRecord>,
    /// Order id to slot.
    by_id: HashMap<String, usize>,
    /// Records ordered by kind, then price.
    ordered: BTreeSet<OrderKey>,
    /// Number of records currently marked deleted.
    deleted: usize,
    /// Number of stale updates dropped so far.
    discarded: u64,
}

impl SideStore {
    /// Creates an empty store for the given side.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    /// Creates an empty store pre-sized for `capacity` distinct orders.
    #[must_use]
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            direction: side.direction(),
            records: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
            ordered: BTreeSet::new(),
            deleted: 0,
            discarded: 0,
        }
    }

    /// Returns the side this store holds.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the price ordering policy.
    #[must_use]
    pub const fn direction(&self) -> PriceDirection {
        self.direction
    }

    /// Applies an update for one order.
    ///
    /// A first-seen id is inserted as is. For a known id, a stale update
    /// against a fresh record is dropped without error; otherwise every
    /// mutable field is overwritten and the record is re-positioned in the
    /// ordered view if its key changed.
    ///
    /// # Arguments
    ///
    /// * `price` - The order price, already in fixed point
    /// * `update` - The remaining fields of the update
    ///
    /// # Errors
    ///
    /// Returns `Error::DeletedOrderResurrected` if the record is deleted and
    /// the update is not a delete. The record is left unchanged.
    pub fn upsert(&mut self, price: FixedPrice, update: OrderUpdate) -> Result<UpsertOutcome> {
        let Some(&slot) = self.by_id.get(update.id()) else {
            return Ok(self.insert(price, update));
        };

        let record = &self.records[slot];
        if record.is_fresh() && !update.is_fresh() {
            self.discarded += 1;
            debug!(side = %self.side, id = update.id(), "stale update discarded");
            return Ok(UpsertOutcome::Discarded);
        }
        if record.is_deleted() && update.kind() != UpdateKind::Deleted {
            warn!(side = %self.side, id = update.id(), "update for deleted order rejected");
            return Err(Error::deleted_order_resurrected(self.side, update.id()));
        }

        let (old_kind, old_price) = record.sort_key();
        let old_key = OrderKey::new(self.direction, old_kind, old_price, slot);
        let new_key = OrderKey::new(self.direction, update.kind(), price, slot);
        if old_key != new_key {
            self.ordered.remove(&old_key);
            self.ordered.insert(new_key);
            if new_key.kind == UpdateKind::Deleted && old_key.kind != UpdateKind::Deleted {
                self.deleted += 1;
            }
        }
        trace!(side = %self.side, id = update.id(), %price, kind = ?update.kind(), "order updated");
        self.records[slot].apply(price, update);
        Ok(UpsertOutcome::Updated)
    }

    fn insert(&mut self, price: FixedPrice, update: OrderUpdate) -> UpsertOutcome {
        let slot = self.records.len();
        let key = OrderKey::new(self.direction, update.kind(), price, slot);
        trace!(side = %self.side, id = update.id(), %price, "order inserted");
        if key.kind == UpdateKind::Deleted {
            self.deleted += 1;
        }
        self.by_id.insert(update.id().to_owned(), slot);
        self.records.push(OrderRecord::new(price, update));
        self.ordered.insert(key);
        UpsertOutcome::Inserted
    }

    /// Returns up to `limit` records in ordered-view order.
    ///
    /// Live orders come first, best price first, followed by deleted
    /// tombstones. The iterator is lazy; call again to restart.
    pub fn enumerate(&self, limit: usize) -> impl Iterator<Item = &OrderRecord> + '_ {
        self.ordered
            .iter()
            .take(limit)
            .map(move |key| &self.records[key.slot])
    }

    /// Aggregates live orders into at most `limit` price levels, best first.
    ///
    /// The scan stops at the first deleted record, so tombstones never
    /// contribute to a level.
    #[must_use]
    pub fn top_price_levels(&self, limit: usize) -> Vec<PriceLevel> {
        let mut levels = Vec::with_capacity(limit.min(self.live_count()));
        let mut current: Option<PriceLevel> = None;

        for record in self.enumerate(usize::MAX) {
            if levels.len() >= limit || record.is_deleted() {
                break;
            }
            if let Some(level) = current.as_mut().filter(|level| level.price == record.price()) {
                level.add(record.size());
                continue;
            }
            levels.extend(current.replace(PriceLevel::new(record.price(), record.size())));
        }

        if levels.len() < limit {
            levels.extend(current);
        }
        levels
    }

    /// Returns the best live price level, if any.
    #[must_use]
    pub fn best_level(&self) -> Option<PriceLevel> {
        self.top_price_levels(1).into_iter().next()
    }

    /// Returns the record for an order id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&OrderRecord> {
        self.by_id.get(id).map(|&slot| &self.records[slot])
    }

    /// Returns true if the id has ever been seen on this side.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns the number of distinct orders seen, deleted ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no order has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of orders not marked deleted.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.records.len() - self.deleted
    }

    /// Returns the number of deleted tombstones.
    #[must_use]
    pub const fn deleted_count(&self) -> usize {
        self.deleted
    }

    /// Returns the total live size across all levels.
    #[must_use]
    pub fn live_volume(&self) -> Decimal {
        self.enumerate(usize::MAX)
            .take_while(|record| !record.is_deleted())
            .map(OrderRecord::size)
            .sum()
    }

    /// Returns statistics about this side.
    #[must_use]
    pub fn stats(&self) -> SideStats {
        SideStats {
            side: self.side,
            orders: self.len(),
            live_orders: self.live_count(),
            deleted_orders: self.deleted,
            discarded_updates: self.discarded,
        }
    }
}

/// Statistics about a side store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideStats {
    /// The side.
    pub side: Side,
    /// Distinct orders seen.
    pub orders: usize,
    /// Orders not deleted.
    pub live_orders: usize,
    /// Deleted tombstones.
    pub deleted_orders: usize,
    /// Stale updates dropped.
    pub discarded_updates: u64,
}

impl fmt::Display for SideStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} orders ({} live, {} deleted), {} stale updates discarded",
            self.side, self.orders, self.live_orders, self.deleted_orders, self.discarded_updates
        )
    }
}
