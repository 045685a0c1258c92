//! Price level: the FIFO queue of orders resting at one price.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Any order can be unlinked in O(1) via its slab key
//! - `total_quantity` caches the sum over the queue so depth snapshots
//!   never walk the orders

use slab::Slab;

use crate::book::OrderNode;

/// All orders resting at a single price on a single side.
///
/// The order data lives in the slab; this struct only holds the queue
/// metadata. Invariant: `total_quantity` equals the exact sum of the
/// quantities of the queued nodes.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level, in ticks
    pub price: u64,

    /// Cached sum of resting quantity at this level
    pub total_quantity: u64,

    /// Head of the queue (oldest order, slab key)
    pub head: Option<usize>,

    /// Tail of the queue (newest order, slab key)
    pub tail: Option<usize>,

    /// Number of orders at this level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: u64) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    /// Check if the level holds no orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Append an order at the tail of the queue.
    ///
    /// Arrival order is queue order; the newest order always waits behind
    /// everything already resting at this price.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the slab.
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = slab.get_mut(key).expect("Invalid slab key");
        let quantity = node.quantity();

        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = slab.get_mut(tail_key).expect("Invalid tail key");
            tail_node.next = Some(key);
        } else {
            // Empty queue, the new node is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity = self.total_quantity.saturating_add(quantity);
    }

    /// Unlink an order from anywhere in the queue.
    ///
    /// # Returns
    ///
    /// The quantity that was resting on the removed order.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the slab.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> u64 {
        let node = slab.get(key).expect("Invalid slab key");
        let quantity = node.quantity();
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            let prev_node = slab.get_mut(prev).expect("Invalid prev key");
            prev_node.next = next_key;
        } else {
            // Removing the head
            self.head = next_key;
        }

        if let Some(next) = next_key {
            let next_node = slab.get_mut(next).expect("Invalid next key");
            next_node.prev = prev_key;
        } else {
            // Removing the tail
            self.tail = prev_key;
        }

        let node = slab.get_mut(key).expect("Invalid slab key");
        node.prev = None;
        node.next = None;

        debug_assert!(self.total_quantity >= quantity);
        self.order_count -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(quantity);

        quantity
    }

    /// Rewrite an order's quantity in place.
    ///
    /// The node keeps its position in the queue, so time priority is
    /// untouched; only the cached sum moves by the delta.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the slab.
    pub fn set_quantity(&mut self, key: usize, new_quantity: u64, slab: &mut Slab<OrderNode>) {
        let node = slab.get_mut(key).expect("Invalid slab key");
        let old_quantity = node.quantity();
        node.order.quantity = new_quantity;

        debug_assert!(self.total_quantity >= old_quantity);
        self.total_quantity = self
            .total_quantity
            .saturating_sub(old_quantity)
            .saturating_add(new_quantity);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
