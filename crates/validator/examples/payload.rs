//! Validating a JSON API payload and rendering the failures as JSON.

use keel_validator::keys;
use keel_validator::prelude::*;
use serde_json::json;

fn main() {
    let signup = keys! {
        "email" => required().and(string()).and(trim()).and(lowercase()).and(not_empty()),
        "age" => required().and(integer()).and(in_range(13.0, 130.0)),
        "joined" => parse_date(),
        "tags" => items(string().and(max_length(12)));
        missing ["joined", "tags"]
    };

    let accepted = json!({
        "email": "  Ada@Example.COM ",
        "age": 36,
        "joined": "2024-03-01T09:00:00+01:00"
    });
    match signup.validate(Value::from(accepted)) {
        Ok(output) => println!("accepted: {}", output.to_json()),
        Err(e) => println!("unexpected: {e}"),
    }

    let rejected = json!({
        "email": 42,
        "age": 7,
        "tags": ["rust", "a-very-long-tag-name", null]
    });
    match signup.validate(Value::from(rejected)) {
        Ok(output) => println!("unexpected: {output}"),
        Err(Error::Invalid(error)) => {
            let body = json!({ "error": error.to_json_value() });
            match serde_json::to_string_pretty(&body) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("rendering failed: {e}"),
            }
        }
        Err(defect) => eprintln!("validator bug: {defect}"),
    }
}
