//! Accumulating several message chunks into one result, with explicit reset.
//!
//! Run with: cargo run --example accumulate

use textforms::Decoder;

fn main() {
    let mut decoder = Decoder::new();

    // One logical message may arrive in several chunks; the buffer
    // accumulates until it is reset.
    decoder
        .decode("BAT 87#RSSI 42")
        .decode("BAT 86")
        .decode("BAT 84#STATE charging");

    println!("First message:");
    for (key, entry) in decoder.view().iter() {
        println!("  {} = {}", key, entry);
    }

    // A new logical message starts with a reset.
    decoder.reset().decode("BAT 91#STATE full");

    println!("\nSecond message:");
    for (key, entry) in decoder.view().iter() {
        println!("  {} = {}", key, entry);
    }
}
