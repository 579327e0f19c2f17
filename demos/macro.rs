//! Building canonical trees with the canonical! macro.
//!
//! Run with: cargo run --example macro

use serde_canonical::{canonical, flatten};

fn main() {
    let tree = canonical!({
        "service": "billing",
        "limits": { "rps": 200, "burst": 50 },
        "regions": ["eu-west", "us-east"]
    });

    println!("Tree: {}", tree);

    if let Some(map) = tree.as_map() {
        for (path, value) in flatten(map).iter() {
            println!("  {} = {}", path, value);
        }
    }
}
