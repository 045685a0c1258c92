//! Core data types for tickbook
//!
//! - [`Order`]: a resting limit order
//! - [`Side`]: Buy or Sell
//! - [`price`]: fixed-point tick conversion helpers
//!
//! Prices are `u64` ticks scaled by 10^8; the order record is
//! SSZ-serializable for deterministic encoding.

mod order;
pub mod price;

pub use order::{Order, Side};
