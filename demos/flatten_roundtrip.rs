//! Flattening a nested value to dot-joined keys and restoring it.
//!
//! Run with: cargo run --example flatten_roundtrip

use serde::Serialize;
use serde_canonical::{flatten, to_canonical_map, unflatten, FlatMap};
use std::error::Error;

#[derive(Serialize)]
struct Toy {
    prefix: String,
    code: String,
}

#[derive(Serialize)]
struct Pet {
    kind: String,
    favorite_toy: Toy,
}

#[derive(Serialize)]
struct Person {
    name: String,
    age: u32,
    pets: Vec<Pet>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let person = Person {
        name: "John".to_string(),
        age: 28,
        pets: vec![Pet {
            kind: "dog".to_string(),
            favorite_toy: Toy {
                prefix: "alt".to_string(),
                code: "BD8340F".to_string(),
            },
        }],
    };

    let tree = to_canonical_map(&person);
    let flat = flatten(&tree);
    for (path, value) in flat.iter() {
        println!("{:<28} = {}", path, value);
    }

    // A flat record survives any JSON store and comes back as the same tree.
    let stored = serde_json::to_string(&flat)?;
    let loaded: FlatMap = serde_json::from_str(&stored)?;
    assert_eq!(unflatten(&loaded), tree);
    println!("\n✓ Round-trip successful");

    Ok(())
}
