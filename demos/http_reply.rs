//! HTTP reply pattern
//!
//! Mapping outcomes to a status code and a JSON body that any HTTP framework
//! can send.
//!
//! Run with: `cargo run --example http_reply --features full`

use outcome_rail::respond::StatusPolicy;
use outcome_rail::{ensure, Outcome};

#[derive(Debug, serde::Serialize)]
struct Order {
    id: u64,
    quantity: u32,
}

fn place_order(id: u64, quantity: u32) -> Outcome<Order> {
    ensure!(quantity > 0, "order rejected", "quantity must be positive");
    ensure!(quantity <= 100, "order rejected", format!("quantity {quantity} exceeds 100"));

    let mut outcome = Outcome::success_with(Order { id, quantity });
    if quantity > 50 {
        outcome.add_warnings(["large order, shipping may be delayed"]);
    }
    outcome
}

fn main() -> Result<(), serde_json::Error> {
    let created = StatusPolicy::default().with_success(201);

    for (id, quantity) in [(1, 3), (2, 75), (3, 0), (4, 500)] {
        let outcome = place_order(id, quantity);
        let reply = created.reply(&outcome);
        println!("{} {}", reply.status, reply.to_json()?);
    }

    Ok(())
}
