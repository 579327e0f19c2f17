//! Converting a record into a canonical map.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_canonical::{to_canonical_map, try_to_canonical_map};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    #[serde(rename = "id")]
    user_id: u32,
    name: String,
    roles: Vec<String>,
    #[serde(skip)]
    #[allow(dead_code)]
    password_hash: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        user_id: 42,
        name: "Alice Johnson".to_string(),
        roles: vec!["admin".to_string(), "dev".to_string()],
        password_hash: "not-for-logs".to_string(),
    };

    let map = to_canonical_map(&user);
    println!("Canonical map:\n{}\n", serde_json::to_string_pretty(&map)?);
    assert!(map.get("password_hash").is_none());

    // Scalars have no map form: the infallible call returns an empty map,
    // the fallible one says why.
    println!("to_canonical_map(&7) = {:?}", to_canonical_map(&7));
    if let Err(err) = try_to_canonical_map(&7) {
        println!("try_to_canonical_map(&7) failed: {}", err);
    }

    Ok(())
}
