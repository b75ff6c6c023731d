//! Basic usage example for keel-validator

use keel_validator::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // A chain of leaves: each one runs on the output of the previous one.
    let quantity = required().and(parse_number()).and(integer()).and(min(1.0));

    for input in [Value::from("3"), Value::from("0"), Value::from("x"), Value::Null] {
        match quantity.validate(input.clone()) {
            Ok(output) => println!("✓ {input} -> {output}"),
            Err(e) => println!("✗ {input}: {e}"),
        }
    }

    // Aggregators report every failure at once.
    let cart = items(keys([("sku", required().and(string())), ("qty", quantity)]));
    let input = Value::from(vec![
        Value::object([("sku", "a-1"), ("qty", "2")]),
        Value::object([("qty", "0")]),
    ]);

    match cart.validate(input) {
        Ok(output) => println!("✓ cart: {output}"),
        Err(Error::Invalid(error)) => {
            println!("✗ {} failure(s):", error.flatten().len());
            for (path, leaf) in error.flatten() {
                println!("  {path}: {} (got {})", leaf.message(), leaf.value());
            }
        }
        Err(defect) => eprintln!("validator bug: {defect}"),
    }
}
