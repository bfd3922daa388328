//! Basic TextForms decoding.
//!
//! Run with: cargo run --example decode_message

use textforms::decode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message = "NODE relay-7#TEMP 21.5#SEQ0 3.1#SEQ1 3.14#UPTIME 86400";

    let form = decode(message);

    println!("Decoded {} keys:", form.len());
    for (key, entry) in form.iter() {
        println!("  {} = {}", key, entry);
    }

    // Decoded results serialize through serde, e.g. to JSON
    let json = serde_json::to_string_pretty(&form)?;
    println!("\nAs JSON:\n{}", json);

    Ok(())
}
