//! Order records and the updates that mutate them.

use super::price::FixedPrice;
use crate::utils::datetime_from_parts;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of the last update applied to an order.
///
/// The declaration order is significant: live orders sort before deleted ones
/// in every side store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
pub enum UpdateKind {
    /// The order was added or modified.
    #[default]
    NewOrChanged,
    /// The order was removed from the book. Terminal.
    Deleted,
}

impl UpdateKind {
    /// Short tag used when rendering orders.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NewOrChanged => "NC",
            Self::Deleted => "D",
        }
    }
}

/// Exchange timestamp attached to an update.
///
/// The components are opaque to the book and handed back to the caller
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrderTimestamp {
    /// Seconds since the Unix epoch.
    pub secs: i64,
    /// Sub-second offset as delivered by the feed.
    pub subsec_offset: i32,
    /// Microseconds within the second.
    pub micros: i32,
}

impl OrderTimestamp {
    /// Creates a timestamp from its three components.
    #[must_use]
    pub const fn new(secs: i64, subsec_offset: i32, micros: i32) -> Self {
        Self {
            secs,
            subsec_offset,
            micros,
        }
    }

    /// Interprets `secs` and `micros` as a UTC instant, if they form one.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        datetime_from_parts(self.secs, self.micros)
    }
}

/// An incoming update for a single order, minus its price.
///
/// The price travels separately because the book and its side stores see it
/// in different representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdate {
    id: String,
    size: Decimal,
    timestamp: OrderTimestamp,
    priority: u64,
    fresh: bool,
    kind: UpdateKind,
}

impl OrderUpdate {
    /// Creates a fresh `NewOrChanged` update for the given order.
    #[must_use]
    pub fn new(id: impl Into<String>, size: Decimal) -> Self {
        Self {
            id: id.into(),
            size,
            timestamp: OrderTimestamp::default(),
            priority: 0,
            fresh: true,
            kind: UpdateKind::NewOrChanged,
        }
    }

    /// Sets whether the update came from the real-time channel.
    #[must_use]
    pub fn with_fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    /// Marks the update as coming from an image refresh.
    #[must_use]
    pub fn image(self) -> Self {
        self.with_fresh(false)
    }

    /// Sets the update kind.
    #[must_use]
    pub fn with_kind(mut self, kind: UpdateKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the update as a delete.
    #[must_use]
    pub fn deleted(self) -> Self {
        self.with_kind(UpdateKind::Deleted)
    }

    /// Sets the feed priority hint.
    #[must_use]
    pub fn with_priority(mut self, priority: u64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the exchange timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: OrderTimestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns the order id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the remaining size.
    #[must_use]
    pub const fn size(&self) -> Decimal {
        self.size
    }

    /// Returns true if the update came from the real-time channel.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Returns the update kind.
    #[must_use]
    pub const fn kind(&self) -> UpdateKind {
        self.kind
    }
}

/// Current known state of one order.
///
/// Records are only ever mutated by their owning side store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    id: String,
    price: FixedPrice,
    size: Decimal,
    timestamp: OrderTimestamp,
    priority: u64,
    fresh: bool,
    kind: UpdateKind,
}

impl OrderRecord {
    pub(crate) fn new(price: FixedPrice, update: OrderUpdate) -> Self {
        Self {
            id: update.id,
            price,
            size: update.size,
            timestamp: update.timestamp,
            priority: update.priority,
            fresh: update.fresh,
            kind: update.kind,
        }
    }

    /// Overwrites every mutable field. The id never changes.
    pub(crate) fn apply(&mut self, price: FixedPrice, update: OrderUpdate) {
        self.price = price;
        self.size = update.size;
        self.timestamp = update.timestamp;
        self.priority = update.priority;
        self.fresh = update.fresh;
        self.kind = update.kind;
    }

    /// Returns the order id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the fixed-point price.
    #[must_use]
    pub const fn price(&self) -> FixedPrice {
        self.price
    }

    /// Returns the remaining size.
    #[must_use]
    pub const fn size(&self) -> Decimal {
        self.size
    }

    /// Returns the exchange timestamp of the last applied update.
    #[must_use]
    pub const fn timestamp(&self) -> &OrderTimestamp {
        &self.timestamp
    }

    /// Returns the feed priority hint.
    #[must_use]
    pub const fn priority(&self) -> u64 {
        self.priority
    }

    /// Returns true if the last applied update came from the real-time channel.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Returns the kind of the last applied update.
    #[must_use]
    pub const fn kind(&self) -> UpdateKind {
        self.kind
    }

    /// Returns true if the order has been deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.kind, UpdateKind::Deleted)
    }

    /// Returns the `(kind, price)` key the ordered view sorts on.
    #[must_use]
    pub const fn sort_key(&self) -> (UpdateKind, FixedPrice) {
        (self.kind, self.price)
    }
}
