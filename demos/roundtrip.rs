//! Decode, inspect, convert and re-encode an INI document.
//!
//! Run with: cargo run --example roundtrip

use inifile::{decode, encode, encode_with_options, IniOptions, Separator};
use std::error::Error;

const CONFIG: &str = "\
# Application settings
[server]
host = localhost   ; bind address
port = 8080
workers=4

[features]
metrics = True
tracing = false
ratio = 0.75
";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = decode(CONFIG)?;

    let port: u16 = doc["server"]["port"].to()?;
    let metrics: bool = doc["features"]["metrics"].to()?;
    let ratio: f64 = doc["features"]["ratio"].to()?;
    println!("port={port} metrics={metrics} ratio={ratio}\n");

    // Canonical form: sections and keys sorted, comments gone
    let canonical = encode(&doc);
    println!("Canonical:\n{canonical}");

    // Encoding is stable once canonical
    assert_eq!(encode(&decode(&canonical)?), canonical);
    println!("✓ Round-trip stable");

    let compact = IniOptions::new().with_separator(Separator::Compact);
    println!("\nCompact:\n{}", encode_with_options(&doc, &compact));

    Ok(())
}
