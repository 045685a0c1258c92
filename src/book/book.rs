//! The limit order book.
//!
//! ## Architecture
//!
//! Three indices cooperate, all owned by one [`OrderBook`]:
//!
//! - **Slab**: pre-allocatable node storage; keys are stable handles
//! - **BTreeMap**: one per side, price to [`PriceLevel`], ordered so the
//!   best price is always the first entry
//! - **FxHashMap**: order id to slab key, for O(1) cancel and amend
//!
//! ## Price Ordering
//!
//! - **Bids**: keyed by `Reverse(price)`, so iteration runs high to low
//! - **Asks**: keyed by `price`, so iteration runs low to high
//!
//! ## Contract
//!
//! Single writer, synchronous, no interior locking. Every operation leaves
//! the three indices mutually consistent: an id is in the index iff its
//! node sits in exactly one level queue on the correct side, and every
//! level's cached quantity equals the sum over its queue.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};
use slab::Slab;

use crate::book::{OrderNode, PriceLevel};
use crate::types::{Order, Side};

/// One aggregated row of a depth snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthEntry {
    /// Price in ticks
    pub price: u64,
    /// Sum of resting quantity at this price
    pub total_quantity: u64,
}

/// FIFO iterator over the orders resting at one price level.
///
/// Yielded oldest first, i.e. in time priority.
pub struct LevelOrders<'a> {
    orders: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for LevelOrders<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = self.orders.get(key).expect("Invalid slab key");
        self.cursor = node.next;
        Some(&node.order)
    }
}

/// A price-time priority limit order book for a single instrument.
///
/// The book stores resting orders only; it never crosses bids against
/// asks. If the two sides overlap, snapshots will show it.
///
/// ## Example
///
/// ```
/// use tickbook::{Order, OrderBook, Side};
///
/// let mut book = OrderBook::with_capacity(10_000);
///
/// book.add_order(Order::new(1, Side::Buy, 10_000_000_000, 10, 0));
/// book.add_order(Order::new(2, Side::Sell, 10_100_000_000, 25, 1));
///
/// assert_eq!(book.best_bid(), Some(10_000_000_000));
/// assert_eq!(book.best_ask(), Some(10_100_000_000));
/// assert_eq!(book.order_count(), 2);
/// ```
#[derive(Debug)]
pub struct OrderBook {
    /// Node storage; slab keys are the stable order handles
    orders: Slab<OrderNode>,

    /// Bid levels, best (highest) price first
    bids: BTreeMap<Reverse<u64>, PriceLevel>,

    /// Ask levels, best (lowest) price first
    asks: BTreeMap<u64, PriceLevel>,

    /// Order id to slab key
    order_index: FxHashMap<u64, usize>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            orders: Slab::new(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_index: FxHashMap::default(),
        }
    }

    /// Create an order book with pre-allocated node storage.
    ///
    /// Pre-allocation keeps slab growth and index rehashing off the hot
    /// path for books whose peak population is known up front.
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_index: FxHashMap::with_capacity_and_hasher(order_capacity, Default::default()),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Pre-allocated node slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Number of live orders in the book
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_index.len()
    }

    /// Check if the book holds no orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_index.is_empty()
    }

    /// Number of bid price levels
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Number of ask price levels
    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    /// Check if an order id is live
    #[inline]
    pub fn contains_order(&self, order_id: u64) -> bool {
        self.order_index.contains_key(&order_id)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a resting order to the book.
    ///
    /// A duplicate id is a silent no-op: the book is idempotent against
    /// retransmits and the resting original wins. Non-zero id and positive
    /// quantity are caller preconditions.
    ///
    /// On return the order is the newest at its price on its side.
    pub fn add_order(&mut self, order: Order) {
        debug_assert!(order.id != 0, "order id zero is reserved");
        debug_assert!(order.quantity > 0, "resting quantity must be positive");

        if self.order_index.contains_key(&order.id) {
            return;
        }

        let id = order.id;
        let side = order.side();
        let price = order.price;

        let key = self.orders.insert(OrderNode::new(order));
        self.order_index.insert(id, key);
        self.link(side, price, key);
    }

    /// Cancel a resting order.
    ///
    /// # Returns
    ///
    /// `true` if an order with this id existed and was removed.
    pub fn cancel_order(&mut self, order_id: u64) -> bool {
        let Some(&key) = self.order_index.get(&order_id) else {
            return false;
        };

        let (side, price) = {
            let node = &self.orders[key];
            (node.order.side(), node.price())
        };

        self.unlink(side, price, key);

        // Index entry goes before the slot is released so no observer can
        // resolve the id to a dead handle.
        self.order_index.remove(&order_id);
        self.orders.remove(key);

        true
    }

    /// Amend a resting order's price and/or quantity.
    ///
    /// A quantity-only amend rewrites the node in place and keeps its
    /// queue position: time priority is preserved. A price amend unlinks
    /// the node and re-appends it at the tail of the new level: time
    /// priority is forfeited, as on a real exchange. The side cannot be
    /// amended; that takes a cancel plus a fresh add.
    ///
    /// # Returns
    ///
    /// `true` if an order with this id existed and the amend applied.
    /// A zero `new_quantity` is rejected with `false`; cancellation must
    /// be explicit.
    pub fn amend_order(&mut self, order_id: u64, new_price: u64, new_quantity: u64) -> bool {
        if new_quantity == 0 {
            return false;
        }

        let Some(&key) = self.order_index.get(&order_id) else {
            return false;
        };

        let (side, price, quantity) = {
            let node = &self.orders[key];
            (node.order.side(), node.price(), node.quantity())
        };

        if price == new_price {
            if quantity == new_quantity {
                return true;
            }

            match side {
                Side::Buy => {
                    let level = self
                        .bids
                        .get_mut(&Reverse(price))
                        .expect("level missing for live order");
                    level.set_quantity(key, new_quantity, &mut self.orders);
                }
                Side::Sell => {
                    let level = self
                        .asks
                        .get_mut(&price)
                        .expect("level missing for live order");
                    level.set_quantity(key, new_quantity, &mut self.orders);
                }
            }
            return true;
        }

        // Price change: leave the old queue, join the new one at the tail.
        self.unlink(side, price, key);
        {
            let node = &mut self.orders[key];
            node.order.price = new_price;
            node.order.quantity = new_quantity;
        }
        self.link(side, new_price, key);

        true
    }

    /// Remove every order from the book
    pub fn clear(&mut self) {
        self.orders.clear();
        self.bids.clear();
        self.asks.clear();
        self.order_index.clear();
    }

    // ========================================================================
    // Top of Book
    // ========================================================================

    /// Best (highest) bid price, if any bids rest
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.keys().next().map(|r| r.0)
    }

    /// Best (lowest) ask price, if any asks rest
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.keys().next().copied()
    }

    /// Spread in ticks, `None` unless both sides rest without crossing
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Fill the caller's vectors with a depth snapshot.
    ///
    /// Both vectors are cleared on entry. On return they hold at most
    /// `depth` entries per side: bids highest price first, asks lowest
    /// price first, each entry carrying the level's aggregate quantity.
    /// Reusing the vectors across calls keeps snapshots allocation-free
    /// once they reach steady-state capacity.
    pub fn snapshot_into(
        &self,
        depth: usize,
        bids_out: &mut Vec<DepthEntry>,
        asks_out: &mut Vec<DepthEntry>,
    ) {
        bids_out.clear();
        asks_out.clear();
        bids_out.reserve(depth.min(self.bids.len()));
        asks_out.reserve(depth.min(self.asks.len()));

        for (&Reverse(price), level) in self.bids.iter().take(depth) {
            bids_out.push(DepthEntry {
                price,
                total_quantity: level.total_quantity,
            });
        }

        for (&price, level) in self.asks.iter().take(depth) {
            asks_out.push(DepthEntry {
                price,
                total_quantity: level.total_quantity,
            });
        }
    }

    /// Allocating convenience wrapper around [`snapshot_into`].
    ///
    /// [`snapshot_into`]: OrderBook::snapshot_into
    pub fn snapshot(&self, depth: usize) -> (Vec<DepthEntry>, Vec<DepthEntry>) {
        let mut bids = Vec::new();
        let mut asks = Vec::new();
        self.snapshot_into(depth, &mut bids, &mut asks);
        (bids, asks)
    }

    /// Iterate the orders resting at one price on one side, oldest first.
    ///
    /// Yields nothing if no level exists at that price.
    pub fn orders_at(&self, side: Side, price: u64) -> LevelOrders<'_> {
        let head = match side {
            Side::Buy => self.bids.get(&Reverse(price)).and_then(|l| l.head),
            Side::Sell => self.asks.get(&price).and_then(|l| l.head),
        };
        LevelOrders {
            orders: &self.orders,
            cursor: head,
        }
    }

    // ========================================================================
    // State Digest
    // ========================================================================

    /// Deterministic SHA-256 digest of the book contents.
    ///
    /// Orders are SSZ-encoded and hashed in canonical traversal order:
    /// bids best-first then asks best-first, oldest-first within a level.
    /// Two books holding the same resting orders in the same queue order
    /// produce the same root regardless of how they got there, which makes
    /// the root a cheap cross-run determinism check.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        for level in self.bids.values() {
            self.hash_level(level, &mut hasher);
        }
        for level in self.asks.values() {
            self.hash_level(level, &mut hasher);
        }

        let digest = hasher.finalize();
        let mut root = [0u8; 32];
        root.copy_from_slice(&digest);
        root
    }

    /// Render the state root as lowercase hex
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }

    fn hash_level(&self, level: &PriceLevel, hasher: &mut Sha256) {
        let mut cursor = level.head;
        while let Some(key) = cursor {
            let node = &self.orders[key];
            let bytes =
                ssz_rs::serialize(&node.order).expect("fixed-size order encoding cannot fail");
            hasher.update(&bytes);
            cursor = node.next;
        }
    }

    // ========================================================================
    // Internal Link Surgery
    // ========================================================================

    /// Append the node at the tail of its level, creating the level if this
    /// is the first order at that price.
    fn link(&mut self, side: Side, price: u64, key: usize) {
        match side {
            Side::Buy => {
                let level = self
                    .bids
                    .entry(Reverse(price))
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(key, &mut self.orders);
            }
            Side::Sell => {
                let level = self
                    .asks
                    .entry(price)
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(key, &mut self.orders);
            }
        }
    }

    /// Unlink the node from its level and erase the level if it drained.
    fn unlink(&mut self, side: Side, price: u64, key: usize) {
        match side {
            Side::Buy => {
                if let Some(level) = self.bids.get_mut(&Reverse(price)) {
                    level.remove(key, &mut self.orders);
                    if level.is_empty() {
                        self.bids.remove(&Reverse(price));
                    }
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.remove(key, &mut self.orders);
                    if level.is_empty() {
                        self.asks.remove(&price);
                    }
                }
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Prices from the reference scenarios, in ticks (10^8 scale)
    const PX_99_0: u64 = 9_900_000_000;
    const PX_99_5: u64 = 9_950_000_000;
    const PX_100: u64 = 10_000_000_000;
    const PX_101: u64 = 10_100_000_000;
    const PX_101_5: u64 = 10_150_000_000;

    fn buy(id: u64, price: u64, quantity: u64) -> Order {
        Order::new(id, Side::Buy, price, quantity, id)
    }

    fn sell(id: u64, price: u64, quantity: u64) -> Order {
        Order::new(id, Side::Sell, price, quantity, id)
    }

    fn entry(price: u64, total_quantity: u64) -> DepthEntry {
        DepthEntry {
            price,
            total_quantity,
        }
    }

    #[test]
    fn test_empty_book() {
        let book = OrderBook::new();

        assert!(book.is_empty());
        assert_eq!(book.order_count(), 0);
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.spread(), None);

        let (bids, asks) = book.snapshot(5);
        assert!(bids.is_empty());
        assert!(asks.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let book = OrderBook::with_capacity(10_000);
        assert!(book.capacity() >= 10_000);
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_and_top_of_book() {
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(sell(2, PX_101, 25));

        assert_eq!(book.best_bid(), Some(PX_100));
        assert_eq!(book.best_ask(), Some(PX_101));
        assert_eq!(book.spread(), Some(PX_101 - PX_100));
        assert_eq!(book.order_count(), 2);
        assert!(book.contains_order(1));
        assert!(book.contains_order(2));
    }

    #[test]
    fn test_duplicate_add_is_silent_noop() {
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        // Retransmit with different fields; the resting original wins
        book.add_order(buy(1, PX_99_5, 99));

        assert_eq!(book.order_count(), 1);
        assert_eq!(book.best_bid(), Some(PX_100));
        let (bids, _) = book.snapshot(2);
        assert_eq!(bids, vec![entry(PX_100, 10)]);
    }

    #[test]
    fn test_aggregation_across_fifo() {
        // Scenario 1: three buys at one price aggregate into one level
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_100, 30));

        let (bids, asks) = book.snapshot(1);
        assert_eq!(bids, vec![entry(PX_100, 60)]);
        assert!(asks.is_empty());
        assert_eq!(book.bid_levels(), 1);
    }

    #[test]
    fn test_cancel_middle_of_fifo() {
        // Scenario 2: cancel from the middle, then cancel again
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_100, 30));

        assert!(book.cancel_order(2));
        let (bids, _) = book.snapshot(1);
        assert_eq!(bids, vec![entry(PX_100, 40)]);

        assert!(!book.cancel_order(2));
        assert_eq!(book.order_count(), 2);

        let ids: Vec<u64> = book.orders_at(Side::Buy, PX_100).map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_multi_level_snapshot() {
        // Scenario 3: two bid levels, two ask levels
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_99_5, 15));
        book.add_order(sell(4, PX_101, 25));
        book.add_order(sell(5, PX_101_5, 30));

        let (bids, asks) = book.snapshot(2);
        assert_eq!(bids, vec![entry(PX_100, 30), entry(PX_99_5, 15)]);
        assert_eq!(asks, vec![entry(PX_101, 25), entry(PX_101_5, 30)]);
        assert_eq!(book.order_count(), 5);
    }

    #[test]
    fn test_snapshot_depth_truncation() {
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_99_5, 15));
        book.add_order(buy(3, PX_99_0, 20));

        let (bids, asks) = book.snapshot(2);
        assert_eq!(bids.len(), 2);
        assert_eq!(bids[0].price, PX_100);
        assert_eq!(bids[1].price, PX_99_5);
        assert!(asks.is_empty());
    }

    #[test]
    fn test_snapshot_into_clears_outputs() {
        let mut book = OrderBook::new();
        book.add_order(sell(1, PX_101, 5));

        let mut bids = vec![entry(1, 1); 4];
        let mut asks = vec![entry(2, 2); 4];
        book.snapshot_into(3, &mut bids, &mut asks);

        assert!(bids.is_empty());
        assert_eq!(asks, vec![entry(PX_101, 5)]);
    }

    #[test]
    fn test_quantity_amend_preserves_time_priority() {
        // Scenario 4, plus the FIFO-position check behind it
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_99_5, 15));
        book.add_order(sell(4, PX_101, 25));
        book.add_order(sell(5, PX_101_5, 30));

        assert!(book.amend_order(1, PX_100, 50));

        let (bids, _) = book.snapshot(1);
        assert_eq!(bids, vec![entry(PX_100, 70)]);

        // Order 1 is still first in the queue at 100.0
        let ids: Vec<u64> = book.orders_at(Side::Buy, PX_100).map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);

        assert!(book.cancel_order(1));
        assert!(book.cancel_order(2));
        let (bids, _) = book.snapshot(1);
        assert_eq!(bids, vec![entry(PX_99_5, 15)]);
    }

    #[test]
    fn test_price_amend_moves_level_and_forfeits_priority() {
        // Scenario 5: order 1 leaves 100.0 and joins a fresh 99.0 level
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_99_5, 15));
        book.add_order(sell(4, PX_101, 25));
        book.add_order(sell(5, PX_101_5, 30));

        assert!(book.amend_order(1, PX_99_0, 50));

        let (bids, _) = book.snapshot(3);
        assert_eq!(
            bids,
            vec![
                entry(PX_100, 20),
                entry(PX_99_5, 15),
                entry(PX_99_0, 50),
            ]
        );
        assert_eq!(book.order_count(), 5);
    }

    #[test]
    fn test_price_amend_joins_existing_level_at_tail() {
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_99_5, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_99_5, 30));

        // Order 2 moves to 99.5 and must queue behind 1 and 3
        assert!(book.amend_order(2, PX_99_5, 20));

        let ids: Vec<u64> = book.orders_at(Side::Buy, PX_99_5).map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        // The drained 100.0 level is gone
        assert_eq!(book.bid_levels(), 1);
        assert_eq!(book.best_bid(), Some(PX_99_5));
    }

    #[test]
    fn test_amend_missing_and_cancel_missing() {
        // Scenario 6
        let mut book = OrderBook::new();

        assert!(!book.amend_order(42, PX_100, 1));
        assert!(!book.cancel_order(42));
    }

    #[test]
    fn test_amend_noop_same_price_and_quantity() {
        let mut book = OrderBook::new();
        book.add_order(buy(1, PX_100, 10));

        assert!(book.amend_order(1, PX_100, 10));

        let (bids, _) = book.snapshot(1);
        assert_eq!(bids, vec![entry(PX_100, 10)]);
        let ids: Vec<u64> = book.orders_at(Side::Buy, PX_100).map(|o| o.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_amend_zero_quantity_rejected() {
        let mut book = OrderBook::new();
        book.add_order(buy(1, PX_100, 10));

        assert!(!book.amend_order(1, PX_100, 0));
        assert!(!book.amend_order(1, PX_99_5, 0));

        // Book untouched
        let (bids, _) = book.snapshot(1);
        assert_eq!(bids, vec![entry(PX_100, 10)]);
        assert_eq!(book.order_count(), 1);
    }

    #[test]
    fn test_amend_sell_side() {
        let mut book = OrderBook::new();

        book.add_order(sell(1, PX_101, 25));
        book.add_order(sell(2, PX_101, 35));

        assert!(book.amend_order(1, PX_101, 40));
        let (_, asks) = book.snapshot(1);
        assert_eq!(asks, vec![entry(PX_101, 75)]);

        assert!(book.amend_order(1, PX_101_5, 40));
        let (_, asks) = book.snapshot(2);
        assert_eq!(asks, vec![entry(PX_101, 35), entry(PX_101_5, 40)]);
        assert_eq!(book.best_ask(), Some(PX_101));
    }

    #[test]
    fn test_cancel_erases_empty_level() {
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_99_5, 15));
        assert_eq!(book.bid_levels(), 2);

        assert!(book.cancel_order(1));

        assert_eq!(book.bid_levels(), 1);
        assert_eq!(book.best_bid(), Some(PX_99_5));
    }

    #[test]
    fn test_cancel_and_readd_same_id() {
        // A cancelled id may be reused by the caller
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        assert!(book.cancel_order(1));
        assert!(!book.contains_order(1));

        book.add_order(sell(1, PX_101, 5));
        assert!(book.contains_order(1));
        assert_eq!(book.best_ask(), Some(PX_101));
        assert_eq!(book.best_bid(), None);
    }

    #[test]
    fn test_index_consistency_after_mixed_ops() {
        // P1/P3: the id index, the level queues and the counts agree
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(buy(2, PX_100, 20));
        book.add_order(buy(3, PX_99_5, 15));
        book.add_order(sell(4, PX_101, 25));
        book.cancel_order(2);
        book.amend_order(3, PX_100, 15);

        let bid_orders: usize = book.orders_at(Side::Buy, PX_100).count();
        let ask_orders: usize = book.orders_at(Side::Sell, PX_101).count();
        assert_eq!(book.order_count(), bid_orders + ask_orders);

        for order in book.orders_at(Side::Buy, PX_100) {
            assert_eq!(order.price, PX_100);
            assert_eq!(order.side(), Side::Buy);
        }
    }

    #[test]
    fn test_clear() {
        let mut book = OrderBook::new();

        book.add_order(buy(1, PX_100, 10));
        book.add_order(sell(2, PX_101, 25));

        book.clear();

        assert!(book.is_empty());
        assert_eq!(book.bid_levels(), 0);
        assert_eq!(book.ask_levels(), 0);
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_state_root_add_cancel_roundtrip() {
        // Adding then cancelling an order restores the digest
        let mut book = OrderBook::new();
        book.add_order(buy(1, PX_100, 10));
        book.add_order(sell(2, PX_101, 25));

        let before = book.state_root();

        book.add_order(buy(3, PX_99_5, 15));
        assert_ne!(book.state_root(), before);

        book.cancel_order(3);
        assert_eq!(book.state_root(), before);
    }

    #[test]
    fn test_state_root_matches_across_books() {
        // Same resting orders in the same queue order, different histories
        let mut a = OrderBook::new();
        a.add_order(buy(1, PX_100, 10));
        a.add_order(buy(2, PX_100, 20));
        a.add_order(sell(3, PX_101, 30));

        let mut b = OrderBook::with_capacity(64);
        b.add_order(sell(3, PX_101, 30));
        b.add_order(buy(9, PX_99_5, 1));
        b.add_order(buy(1, PX_100, 10));
        b.add_order(buy(2, PX_100, 20));
        b.cancel_order(9);

        assert_eq!(a.state_root(), b.state_root());
        assert_eq!(a.state_root_hex(), b.state_root_hex());
    }

    #[test]
    fn test_state_root_sensitive_to_queue_order() {
        let mut a = OrderBook::new();
        a.add_order(buy(1, PX_100, 10));
        a.add_order(buy(2, PX_100, 10));

        let mut b = OrderBook::new();
        b.add_order(buy(2, PX_100, 10));
        b.add_order(buy(1, PX_100, 10));

        assert_ne!(a.state_root(), b.state_root());
    }
}
