//! # tickbook
//!
//! A low-latency limit order book for a single instrument.
//!
//! ## Architecture
//!
//! The book keeps resting orders in three cooperating indices:
//! - **Slab node pool**: stable handles, O(1) acquire/release, no heap
//!   traffic per order on the hot path
//! - **Ordered side indices**: `BTreeMap` per side, best price first
//! - **Order id index**: `FxHashMap` for O(1) cancel and amend lookup
//!
//! ## Design Principles
//!
//! 1. **Single writer**: every operation is synchronous and lock-free by
//!    contract; ordering equals call order
//! 2. **No floating point**: prices are integer ticks scaled by 10^8
//! 3. **Price-time priority**: FIFO within a level; a quantity-only amend
//!    keeps queue position, a price amend forfeits it
//! 4. **Deterministic state**: the SSZ-based state root digests the book
//!    independently of mutation history
//!
//! ## Example
//!
//! ```
//! use tickbook::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::with_capacity(10_000);
//!
//! book.add_order(Order::new(1, Side::Buy, 10_000_000_000, 10, 0));
//! book.add_order(Order::new(2, Side::Buy, 10_000_000_000, 20, 1));
//! book.add_order(Order::new(3, Side::Sell, 10_100_000_000, 25, 2));
//!
//! let (bids, asks) = book.snapshot(5);
//! assert_eq!(bids[0].total_quantity, 30);
//! assert_eq!(asks[0].price, 10_100_000_000);
//!
//! assert!(book.cancel_order(2));
//! assert_eq!(book.order_count(), 2);
//! ```

/// Core data types: Order, Side, tick conversion
pub mod types;

/// The order book: node pool, price levels, façade
pub mod book;

pub use book::{DepthEntry, LevelOrders, OrderBook, OrderNode, PriceLevel};
pub use types::{Order, Side};
