//! tickbook - Demo Binary
//!
//! Walks the book through the standard add / cancel / amend scenarios and
//! prints the resulting depth after each step.

use tickbook::types::price;
use tickbook::{Order, OrderBook, Side};

fn px(s: &str) -> u64 {
    price::to_ticks(s).expect("literal price")
}

fn print_depth(book: &OrderBook, depth: usize) {
    let (bids, asks) = book.snapshot(depth);

    println!("  {:>12} | {:>12}", "Price", "Quantity");
    println!("  {}", "-".repeat(28));

    // Asks highest first so the best prices meet in the middle
    for level in asks.iter().rev() {
        println!(
            "  {:>12} | {:>12}  (ask)",
            price::from_ticks_trimmed(level.price),
            level.total_quantity
        );
    }
    for level in &bids {
        println!(
            "  {:>12} | {:>12}  (bid)",
            price::from_ticks_trimmed(level.price),
            level.total_quantity
        );
    }
    println!();
}

fn main() {
    println!("===========================================");
    println!("  tickbook - limit order book demo");
    println!("===========================================");
    println!();

    let mut book = OrderBook::with_capacity(1024);
    let mut ts: u64 = 0;
    let mut clock = || {
        ts += 1;
        ts
    };

    println!("Adding five resting orders...");
    book.add_order(Order::new(1, Side::Buy, px("100.00"), 10, clock()));
    book.add_order(Order::new(2, Side::Buy, px("100.00"), 20, clock()));
    book.add_order(Order::new(3, Side::Buy, px("99.50"), 15, clock()));
    book.add_order(Order::new(4, Side::Sell, px("101.00"), 25, clock()));
    book.add_order(Order::new(5, Side::Sell, px("101.50"), 30, clock()));

    println!("Book ({} orders):", book.order_count());
    print_depth(&book, 5);

    println!("Cancelling order 2...");
    let cancelled = book.cancel_order(2);
    println!("  cancelled: {}", cancelled);
    print_depth(&book, 5);

    println!("Amending order 1 quantity to 50 (price unchanged, keeps queue position)...");
    book.amend_order(1, px("100.00"), 50);
    print_depth(&book, 5);

    println!("Amending order 1 price to 99.00 (moves level, forfeits priority)...");
    book.amend_order(1, px("99.00"), 50);
    print_depth(&book, 5);

    match (book.best_bid(), book.best_ask()) {
        (Some(bid), Some(ask)) => {
            println!(
                "Top of book: {} bid / {} ask",
                price::from_ticks_trimmed(bid),
                price::from_ticks_trimmed(ask)
            );
        }
        _ => println!("One side of the book is empty"),
    }

    println!("Live orders: {}", book.order_count());
    println!("State root:  {}", book.state_root_hex());
}
