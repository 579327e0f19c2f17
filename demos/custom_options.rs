//! Customizing separators and depth limits with MapOptions.
//!
//! Run with: cargo run --example custom_options

use serde_canonical::{
    canonical, flatten, flatten_with_options, to_canonical_map_with_options,
    unflatten_with_options, MapOptions,
};

fn main() {
    let tree = canonical!({
        "example.com": { "port": 443, "tls": true },
        "localhost": { "port": 8080, "tls": false }
    })
    .into_map()
    .unwrap_or_default();

    // Hostnames contain dots, so the default separator would split them.
    println!("Default separator:");
    for (path, value) in flatten(&tree).iter() {
        println!("  {} = {}", path, value);
    }

    let options = MapOptions::new().with_separator("/");
    let flat = flatten_with_options(&tree, &options);
    println!("\nSlash separator:");
    for (path, value) in flat.iter() {
        println!("  {} = {}", path, value);
    }
    assert_eq!(unflatten_with_options(&flat, &options), tree);

    // Depth limits turn runaway nesting into an empty result.
    let deep = vec![vec![vec![vec![1]]]];
    let limited = MapOptions::new().with_max_depth(2);
    println!(
        "\nDepth-limited conversion has {} entries",
        to_canonical_map_with_options(&deep, &limited).len()
    );
}
