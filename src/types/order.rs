//! Order types for the tickbook limit order book.
//!
//! ## SSZ Serialization
//!
//! The order record derives `SimpleSerialize` from ssz_rs so that any two
//! books holding the same resting orders encode to identical bytes. The
//! book's state digest is built on this property.
//!
//! ## Fixed-Point Representation
//!
//! Prices are integer ticks scaled by 10^8 (see [`crate::types::price`]).
//! Quantities are plain unsigned units. No floating point enters the book.

use ssz_rs::prelude::*;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Represented as u8 on the wire:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid), resting on the descending side of the book
    #[default]
    Buy,
    /// Sell order (ask), resting on the ascending side of the book
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// ## Fields
///
/// Prices use fixed-point ticks (scaled by 10^8); quantities are plain
/// unsigned units. The timestamp is stored for observability only, it never
/// participates in ordering; queue position within a price level is decided
/// by arrival.
///
/// ## SSZ Layout
///
/// Fixed-size container, 33 bytes: id (8) + side_raw (1) + price (8) +
/// quantity (8) + timestamp_ns (8).
///
/// ## Example
///
/// ```
/// use tickbook::types::{Order, Side};
///
/// // Buy 10 units at 100.00
/// let order = Order::new(
///     1,                  // id (caller-assigned, unique per book)
///     Side::Buy,
///     10_000_000_000,     // price: 100.00000000 in ticks
///     10,                 // quantity
///     1703577600000,      // timestamp_ns
/// );
/// assert_eq!(order.side(), Side::Buy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Caller-assigned order identifier, unique per book while the order
    /// is live. Zero is reserved.
    pub id: u64,

    /// Order side as u8 (0=Buy, 1=Sell), stored raw for SSZ compatibility
    pub side_raw: u8,

    /// Price in fixed-point ticks (scaled by 10^8)
    pub price: u64,

    /// Resting quantity, strictly positive while the order is live
    pub quantity: u64,

    /// Caller-supplied timestamp in nanoseconds; stored, not interpreted
    pub timestamp_ns: u64,
}

impl Order {
    /// Create a new limit order
    ///
    /// # Arguments
    ///
    /// * `id` - Caller-assigned unique identifier (non-zero)
    /// * `side` - Buy or Sell
    /// * `price` - Price in ticks (scaled by 10^8)
    /// * `quantity` - Quantity, strictly positive
    /// * `timestamp_ns` - Caller clock reading in nanoseconds
    pub fn new(id: u64, side: Side, price: u64, quantity: u64, timestamp_ns: u64) -> Self {
        Self {
            id,
            side_raw: side.to_u8(),
            price,
            quantity,
            timestamp_ns,
        }
    }

    /// Get the order side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).unwrap_or(Side::Buy)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
